#![allow(clippy::float_cmp)]

use super::*;

fn bounds() -> ContainerBounds {
    ContainerBounds::new(0.0, 0.0, 400.0, 300.0)
}

#[test]
fn new_tracker_is_idle_and_centered() {
    let tracker = PointerTracker::new();
    assert!(!tracker.dragging);
    assert_eq!(tracker.anchor, LogoAnchor::default());
}

#[test]
fn press_start_enables_dragging() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    assert!(tracker.dragging);
}

#[test]
fn move_without_press_is_ignored() {
    let mut tracker = PointerTracker::new();
    assert!(!tracker.pointer_move(100.0, 100.0, Some(bounds())));
    assert_eq!(tracker.anchor, LogoAnchor::default());
}

#[test]
fn move_while_dragging_updates_anchor() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    assert!(tracker.pointer_move(100.0, 75.0, Some(bounds())));
    assert_eq!(tracker.anchor.x, 25.0);
    assert_eq!(tracker.anchor.y, 25.0);
}

#[test]
fn move_without_measured_container_is_silently_ignored() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    assert!(!tracker.pointer_move(100.0, 75.0, None));
    assert_eq!(tracker.anchor, LogoAnchor::default());
}

#[test]
fn move_outside_container_clamps_instead_of_escaping() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    tracker.pointer_move(-500.0, 5000.0, Some(bounds()));
    assert_eq!(tracker.anchor.x, 10.0);
    assert_eq!(tracker.anchor.y, 90.0);
}

#[test]
fn release_outside_container_still_ends_drag() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    tracker.pointer_move(-500.0, -500.0, Some(bounds()));
    tracker.release();
    assert!(!tracker.dragging);
    // Subsequent moves are ignored again.
    assert!(!tracker.pointer_move(200.0, 150.0, Some(bounds())));
}

#[test]
fn move_to_same_position_reports_no_change() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    assert!(tracker.pointer_move(100.0, 75.0, Some(bounds())));
    assert!(!tracker.pointer_move(100.0, 75.0, Some(bounds())));
}

#[test]
fn press_during_active_drag_keeps_dragging() {
    let mut tracker = PointerTracker::new();
    tracker.press_start();
    tracker.press_start();
    assert!(tracker.dragging);
}
