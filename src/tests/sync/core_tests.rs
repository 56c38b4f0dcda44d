use std::time::{Duration, Instant};

use crate::sync::FieldCore;

const DELAY: Duration = Duration::from_millis(300);

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn core_with(initial: Option<&str>) -> FieldCore {
    FieldCore::new("clientName", initial, DELAY)
}

#[test]
fn missing_initial_value_reads_as_empty() {
    let core = core_with(None);
    assert_eq!(core.local(), "");
    assert_eq!(core.committed(), "");
    assert!(!core.is_dirty());
}

#[test]
fn edit_updates_the_buffer_before_any_poll() {
    let mut core = core_with(Some("Acme"));
    let start = Instant::now();
    core.edit("Acme Inc", start);
    assert_eq!(core.local(), "Acme Inc");
    assert_eq!(core.committed(), "Acme");
    assert!(core.is_pending());
}

#[test]
fn rapid_edits_commit_once_with_the_last_value() {
    let mut core = core_with(Some("Acme"));
    let start = Instant::now();
    core.edit("Acme Inc", start);
    core.edit("Acme Inc.", start + ms(100));
    // The window restarts at the second edit.
    assert_eq!(core.poll_commit(start + ms(399)), None);
    assert_eq!(
        core.poll_commit(start + ms(400)),
        Some("Acme Inc.".to_string())
    );
    assert_eq!(core.committed(), "Acme Inc.");
    // Settled; nothing further fires.
    assert_eq!(core.poll_commit(start + ms(800)), None);
}

#[test]
fn edit_back_to_committed_fires_nothing() {
    let mut core = core_with(Some("Acme"));
    let start = Instant::now();
    core.edit("Acme!", start);
    core.edit("Acme", start + ms(50));
    assert_eq!(core.poll_commit(start + ms(400)), None);
    assert!(!core.is_pending());
    assert_eq!(core.committed(), "Acme");
}

#[test]
fn repeating_the_current_value_does_not_arm() {
    let mut core = core_with(Some("Acme"));
    core.edit("Acme", Instant::now());
    assert!(!core.is_pending());
}

#[test]
fn external_overwrite_wins_over_a_pending_edit() {
    let mut core = core_with(Some("foo"));
    let start = Instant::now();
    core.edit("foo2", start);
    core.sync_external(Some("bar"));
    assert_eq!(core.local(), "bar");
    assert_eq!(core.committed(), "bar");
    // The stale edit never fires; the buffer cannot re-diverge.
    assert_eq!(core.poll_commit(start + ms(400)), None);
    assert_eq!(core.local(), "bar");
}

#[test]
fn nullish_external_value_normalizes_to_empty() {
    let mut core = core_with(Some("Acme"));
    core.sync_external(None);
    assert_eq!(core.local(), "");
    assert_eq!(core.committed(), "");
}

#[test]
fn flush_commits_immediately_and_cancels_the_timer() {
    let mut core = core_with(Some("active"));
    let start = Instant::now();
    core.edit("inactive", start);
    // Blur at t=50, well before the 300 ms window elapses.
    assert_eq!(core.flush(), Some("inactive".to_string()));
    assert_eq!(core.committed(), "inactive");
    assert!(!core.is_pending());
    // The debounced commit must not fire a second time.
    assert_eq!(core.poll_commit(start + ms(400)), None);
}

#[test]
fn flush_without_divergence_is_a_no_op() {
    let mut core = core_with(Some("Acme"));
    assert_eq!(core.flush(), None);
}

#[test]
fn cancel_pending_keeps_the_buffer_but_drops_the_commit() {
    let mut core = core_with(Some("Acme"));
    let start = Instant::now();
    core.edit("Acme Inc", start);
    core.cancel_pending();
    assert_eq!(core.local(), "Acme Inc");
    assert!(core.is_dirty());
    assert_eq!(core.poll_commit(start + ms(400)), None);
}
