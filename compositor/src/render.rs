//! Canvas drawing: the only module that touches [`web_sys::CanvasRenderingContext2d`].
//!
//! The canvas is always sized to the background photo's natural pixel
//! dimensions, never the on-screen display size, so the exported composite
//! keeps full resolution. All fallible `Canvas2D` calls propagate errors via
//! `Result<(), JsValue>`; the pipeline handles the result.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::anchor::{self, LogoAnchor};

/// Resize the canvas to the photo's natural pixel dimensions and draw the
/// photo at the origin, filling the canvas.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or the draw call fails.
pub fn draw_background(canvas: &HtmlCanvasElement, photo: &HtmlImageElement) -> Result<(), JsValue> {
    canvas.set_width(photo.natural_width());
    canvas.set_height(photo.natural_height());

    let ctx = context_2d(canvas)?;
    ctx.draw_image_with_html_image_element(photo, 0.0, 0.0)
}

/// Draw the square logo over the already-drawn background at the anchor's
/// center-addressed position.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or the draw call fails.
pub fn draw_logo(canvas: &HtmlCanvasElement, logo: &HtmlImageElement, anchor: LogoAnchor) -> Result<(), JsValue> {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    let rect = anchor::logo_rect(anchor, width, height);

    let ctx = context_2d(canvas)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(logo, rect.x, rect.y, rect.size, rect.size)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
