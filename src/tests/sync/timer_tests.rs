use std::time::{Duration, Instant};

use crate::sync::CommitTimer;

#[test]
fn arming_never_fires_by_itself() {
    let mut timer = CommitTimer::new(Duration::from_millis(300));
    let start = Instant::now();
    timer.arm(start);
    assert!(timer.is_armed());
    assert!(!timer.fire(start + Duration::from_millis(299)));
    assert!(timer.is_armed());
}

#[test]
fn fires_once_at_deadline_then_disarms() {
    let mut timer = CommitTimer::new(Duration::from_millis(300));
    let start = Instant::now();
    timer.arm(start);
    assert!(timer.fire(start + Duration::from_millis(300)));
    assert!(!timer.is_armed());
    assert!(!timer.fire(start + Duration::from_millis(600)));
}

#[test]
fn rearming_replaces_the_deadline() {
    let mut timer = CommitTimer::new(Duration::from_millis(300));
    let start = Instant::now();
    timer.arm(start);
    timer.arm(start + Duration::from_millis(100));
    // Old deadline has passed, new one has not.
    assert!(!timer.fire(start + Duration::from_millis(350)));
    assert!(timer.fire(start + Duration::from_millis(400)));
}

#[test]
fn cancel_discards_the_deadline() {
    let mut timer = CommitTimer::new(Duration::from_millis(300));
    let start = Instant::now();
    timer.arm(start);
    timer.cancel();
    assert!(!timer.is_armed());
    assert!(!timer.fire(start + Duration::from_secs(10)));
}

#[test]
fn zero_delay_still_waits_for_a_poll() {
    let mut timer = CommitTimer::new(Duration::ZERO);
    let start = Instant::now();
    timer.arm(start);
    // Nothing happened at arm time; the deadline is only observed by
    // the next poll.
    assert!(timer.is_armed());
    assert!(timer.fire(start));
    assert!(!timer.is_armed());
}
