use super::*;

use compositor::tracker::PointerTracker;

// --- Overlay style ---

#[test]
fn overlay_style_positions_by_anchor_percentages() {
    let style = overlay_style(LogoAnchor::new(30.0, 75.5));
    assert_eq!(style, "left: 30%; top: 75.5%; transform: translate(-50%, -50%);");
}

#[test]
fn overlay_style_default_is_centered() {
    assert_eq!(
        overlay_style(LogoAnchor::default()),
        "left: 50%; top: 50%; transform: translate(-50%, -50%);"
    );
}

#[test]
fn overlay_style_reflects_clamped_extremes() {
    assert_eq!(
        overlay_style(LogoAnchor::new(-20.0, 400.0)),
        "left: 10%; top: 90%; transform: translate(-50%, -50%);"
    );
}

#[test]
fn overlay_centering_matches_canvas_layout() {
    // Both paths must address the logo's center: the overlay centers via
    // translate(-50%, -50%), the canvas via the half-size offset in
    // logo_rect. An anchor of 25% must land the logo center at 25% of the
    // canvas on both axes.
    let anchor = LogoAnchor::new(25.0, 25.0);
    assert!(overlay_style(anchor).contains("transform: translate(-50%, -50%);"));

    let rect = compositor::anchor::logo_rect(anchor, 800.0, 600.0);
    let center_x = rect.x + rect.size / 2.0;
    let center_y = rect.y + rect.size / 2.0;
    assert!((center_x - 200.0).abs() < 1e-10);
    assert!((center_y - 150.0).abs() < 1e-10);
}

// --- Container presses ---

fn bounds() -> Option<ContainerBounds> {
    Some(ContainerBounds::new(0.0, 0.0, 400.0, 300.0))
}

#[test]
fn touch_press_on_container_grabs_logo_at_press_position() {
    let mut tracker = PointerTracker::new();
    assert!(begin_container_press(&mut tracker, "touch", 100.0, 75.0, bounds()));
    assert!(tracker.dragging);
    assert_eq!(tracker.anchor, LogoAnchor::new(25.0, 25.0));
}

#[test]
fn mouse_press_on_container_does_not_start_a_drag() {
    let mut tracker = PointerTracker::new();
    assert!(!begin_container_press(&mut tracker, "mouse", 100.0, 75.0, bounds()));
    assert!(!tracker.dragging);
    assert_eq!(tracker.anchor, LogoAnchor::default());
}

#[test]
fn touch_press_before_layout_still_starts_the_drag() {
    let mut tracker = PointerTracker::new();
    assert!(begin_container_press(&mut tracker, "touch", 100.0, 75.0, None));
    assert!(tracker.dragging);
    // The anchor holds until the first measured move.
    assert_eq!(tracker.anchor, LogoAnchor::default());
}
