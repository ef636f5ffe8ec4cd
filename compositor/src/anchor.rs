//! Logo anchor model and layout math.
//!
//! The anchor is stored in percent of the photo container and addresses the
//! logo's **center**, matching the on-screen overlay element which is also
//! centered via transform. Both the overlay and the canvas path must use the
//! same convention; [`logo_rect`] is the single place that converts the
//! center percentage into a top-left draw rectangle.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::consts::{ANCHOR_DEFAULT_PCT, ANCHOR_MAX_PCT, ANCHOR_MIN_PCT, LOGO_SCALE};

/// Where the logo's center sits over the photo, in percent of the container.
///
/// Invariant: both axes are clamped to `[ANCHOR_MIN_PCT, ANCHOR_MAX_PCT]` so
/// the anchor never reaches the photo edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoAnchor {
    pub x: f64,
    pub y: f64,
}

impl Default for LogoAnchor {
    fn default() -> Self {
        Self { x: ANCHOR_DEFAULT_PCT, y: ANCHOR_DEFAULT_PCT }
    }
}

impl LogoAnchor {
    /// Build an anchor from raw percentages, clamping both axes.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(ANCHOR_MIN_PCT, ANCHOR_MAX_PCT),
            y: y.clamp(ANCHOR_MIN_PCT, ANCHOR_MAX_PCT),
        }
    }

    /// Convert a viewport-space pointer position into an anchor.
    ///
    /// Returns `None` when the container has not been measured yet (zero or
    /// negative extent); move events in that window are silently ignored.
    #[must_use]
    pub fn from_pointer(pointer_x: f64, pointer_y: f64, bounds: &ContainerBounds) -> Option<Self> {
        if bounds.is_degenerate() {
            return None;
        }
        let x = (pointer_x - bounds.left) / bounds.width * 100.0;
        let y = (pointer_y - bounds.top) / bounds.height * 100.0;
        Some(Self::new(x, y))
    }
}

/// Measured CSS-pixel rectangle of the photo container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// True when the container has no usable extent (layout not measured).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Top-left draw rectangle for the square logo on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Logo render size for a canvas of the given pixel dimensions.
#[must_use]
pub fn logo_size(canvas_width: f64, canvas_height: f64) -> f64 {
    canvas_width.min(canvas_height) * LOGO_SCALE
}

/// Draw rectangle for the logo: the anchor percentage addresses the logo's
/// center, so the top-left corner is offset by half the render size.
#[must_use]
pub fn logo_rect(anchor: LogoAnchor, canvas_width: f64, canvas_height: f64) -> LogoRect {
    let size = logo_size(canvas_width, canvas_height);
    LogoRect {
        x: anchor.x / 100.0 * canvas_width - size / 2.0,
        y: anchor.y / 100.0 * canvas_height - size / 2.0,
        size,
    }
}
