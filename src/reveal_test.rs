use super::*;

#[test]
fn new_tracker_has_nothing_revealed() {
    let tracker = RevealTracker::new(3);
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.revealed_count(), 0);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn first_intersection_reveals() {
    let mut tracker = RevealTracker::new(2);
    assert!(tracker.observe(1, true));
    assert!(tracker.is_revealed(1));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn reveal_is_one_shot() {
    let mut tracker = RevealTracker::new(1);
    assert!(tracker.observe(0, true));
    assert!(!tracker.observe(0, false));
    assert!(!tracker.observe(0, true));
    assert!(tracker.is_revealed(0));
}

#[test]
fn leaving_before_entering_does_nothing() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.observe(0, false));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.observe(7, true));
    assert_eq!(tracker.revealed_count(), 0);
}

#[test]
fn empty_tracker() {
    let tracker = RevealTracker::default();
    assert!(tracker.is_empty());
    assert!(!tracker.is_revealed(0));
}
