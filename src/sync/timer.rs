use std::time::{Duration, Instant};

/// Delay applied between the last edit and the deferred commit when the
/// caller does not override it.
pub const DEFAULT_COMMIT_DELAY: Duration = Duration::from_millis(300);

/// Restart-on-change deadline for deferred commits.
///
/// Arming never invokes anything; the owner polls [`CommitTimer::fire`]
/// from its tick loop, so even a zero delay only fires on a later poll.
/// Exactly one deadline is outstanding at a time: re-arming replaces it.
#[derive(Debug, Clone)]
pub(crate) struct CommitTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl CommitTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel-and-replace: the previous deadline, if any, is discarded.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per arm, on the first poll at or after the
    /// deadline. Clears the deadline when it fires.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
