//! Pointer-drag state machine for repositioning the logo anchor.
//!
//! Input-source agnostic: the host feeds it pointer-event client
//! coordinates, so mouse and touch drags behave identically. The host is
//! expected to capture the pointer on press so releases outside the
//! container still end the gesture.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use crate::anchor::{ContainerBounds, LogoAnchor};

/// Drag-position state for the logo overlay.
///
/// Only one drag gesture may be active at a time; `press_start` while a drag
/// is already active is a no-op rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    pub anchor: LogoAnchor,
    pub dragging: bool,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag gesture (pointerdown on the logo overlay).
    pub fn press_start(&mut self) {
        self.dragging = true;
    }

    /// Feed a pointer position. No-op unless a drag is active; move events
    /// arriving before the container is measured (`bounds` is `None`) are
    /// ignored silently. Returns whether the anchor changed.
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64, bounds: Option<ContainerBounds>) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(bounds) = bounds else {
            return false;
        };
        let Some(next) = LogoAnchor::from_pointer(pointer_x, pointer_y, &bounds) else {
            return false;
        };
        if next == self.anchor {
            return false;
        }
        self.anchor = next;
        true
    }

    /// End the drag gesture. With pointer capture in place this fires even
    /// when the pointer is released outside the container.
    pub fn release(&mut self) {
        self.dragging = false;
    }
}
