use std::time::{Duration, Instant};

use super::CommitTimer;

/// Two-owner synchronization state for a single named field.
///
/// `local` is the buffer the user edits and always reflects the latest
/// keystroke. `committed` mirrors the value the owning store last
/// accepted. The two may diverge only between an edit and the commit
/// that follows it, either deferred ([`FieldCore::poll_commit`]) or
/// immediate on blur ([`FieldCore::flush`]).
#[derive(Debug, Clone)]
pub struct FieldCore {
    name: String,
    local: String,
    committed: String,
    timer: CommitTimer,
}

impl FieldCore {
    /// A missing initial value is normalized to the empty string; the
    /// buffer never starts out in an unset state.
    pub fn new(name: impl Into<String>, initial: Option<&str>, delay: Duration) -> Self {
        let seed = initial.unwrap_or_default().to_string();
        Self {
            name: name.into(),
            local: seed.clone(),
            committed: seed,
            timer: CommitTimer::new(delay),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// The store pushed a new value from outside (reset, async load).
    /// Raw overwrite: any in-flight edit is discarded and the pending
    /// commit, if one was armed, is cancelled so it cannot fire with a
    /// stale value. The store is the source of truth.
    pub fn sync_external(&mut self, value: Option<&str>) {
        let value = value.unwrap_or_default();
        self.local = value.to_string();
        self.committed = value.to_string();
        self.timer.cancel();
    }

    /// A keystroke. Updates the visible buffer synchronously and
    /// re-arms the deferred commit; the last edit inside the delay
    /// window wins.
    pub fn edit(&mut self, raw: impl Into<String>, now: Instant) {
        let raw = raw.into();
        if raw == self.local {
            return;
        }
        self.local = raw;
        self.timer.arm(now);
    }

    /// Deferred-commit path. Returns the value to hand to the store
    /// when the delay has elapsed since the last edit and the buffer
    /// actually diverges from the committed value; an edit that settled
    /// back to the committed value fires nothing.
    pub fn poll_commit(&mut self, now: Instant) -> Option<String> {
        if !self.timer.fire(now) {
            return None;
        }
        if self.local == self.committed {
            return None;
        }
        self.committed.clone_from(&self.local);
        Some(self.local.clone())
    }

    /// Blur path: commit any divergence immediately and cancel the
    /// deferred commit so it cannot fire a second time.
    pub fn flush(&mut self) -> Option<String> {
        self.timer.cancel();
        if self.local == self.committed {
            return None;
        }
        self.committed.clone_from(&self.local);
        Some(self.local.clone())
    }

    /// Cancel the deferred commit without committing anything. The
    /// buffer keeps its current contents.
    pub fn cancel_pending(&mut self) {
        self.timer.cancel();
    }

    /// A deferred commit is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// The buffer has diverged from the committed value.
    pub fn is_dirty(&self) -> bool {
        self.local != self.committed
    }

    pub fn delay(&self) -> Duration {
        self.timer.delay()
    }
}
