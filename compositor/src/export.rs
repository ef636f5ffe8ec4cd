//! Export of the composite canvas as a PNG.
//!
//! Preferred path is the platform share sheet with the PNG attached; when
//! share is unavailable, declined by the platform, or fails for any reason
//! other than the user dismissing the sheet, export degrades to a direct
//! file download. Share support is feature-detected dynamically so the same
//! build works on browsers without the Web Share API.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FilePropertyBag, HtmlCanvasElement};

use crate::consts::{APP_NAME, FALLBACK_EXPORT_FILENAME};

/// Download filename for a composite: `"<name>-with-logo.png"`, with path
/// separators replaced and a generic fallback for blank names.
#[must_use]
pub fn composite_filename(restaurant_name: &str) -> String {
    let cleaned: String = restaurant_name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    if cleaned.is_empty() {
        FALLBACK_EXPORT_FILENAME.to_owned()
    } else {
        format!("{cleaned}-with-logo.png")
    }
}

/// Share-sheet title for a composite.
#[must_use]
pub fn share_title(restaurant_name: &str) -> String {
    format!("{restaurant_name} - {APP_NAME}")
}

/// Share-sheet descriptive text for a composite.
#[must_use]
pub fn share_text(restaurant_name: &str) -> String {
    format!("Check out {restaurant_name} on {APP_NAME}!")
}

/// Serialize the current canvas contents to PNG and share or download it.
///
/// The canvas is exported as-is; a never-composited canvas yields a blank
/// image, which is accepted behavior rather than an error.
///
/// # Errors
///
/// Returns `Err` only if the canvas refuses to serialize at all; share and
/// download failures are handled internally.
pub fn export_composite(canvas: &HtmlCanvasElement, restaurant_name: &str) -> Result<(), JsValue> {
    let name = restaurant_name.to_owned();
    let canvas_fallback = canvas.clone();
    let callback = Closure::once_into_js(move |blob: Option<Blob>| {
        let Some(blob) = blob else {
            log::warn!("canvas produced no blob; falling back to download");
            download_composite(&canvas_fallback, &name);
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            if !share_composite(&blob, &name).await {
                download_composite(&canvas_fallback, &name);
            }
        });
    });
    canvas.to_blob_with_type(callback.unchecked_ref(), "image/png")
}

/// Attempt the native share path. Returns true when the export is handled,
/// which includes the user dismissing the share sheet.
async fn share_composite(blob: &Blob, name: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let nav: &JsValue = navigator.as_ref();

    let Ok(share_value) = js_sys::Reflect::get(nav, &JsValue::from_str("share")) else {
        return false;
    };
    let Ok(share_fn) = share_value.dyn_into::<js_sys::Function>() else {
        return false;
    };

    let Ok(file) = png_file(blob, &composite_filename(name)) else {
        return false;
    };
    let files = js_sys::Array::of1(&file);
    let data = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(&share_title(name)));
    let _ = js_sys::Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(&share_text(name)));
    let _ = js_sys::Reflect::set(&data, &JsValue::from_str("files"), &files);

    // canShare guards platforms whose share sheet exists but rejects file
    // attachments; those fall through to the download path.
    if let Ok(can_share_value) = js_sys::Reflect::get(nav, &JsValue::from_str("canShare")) {
        if let Some(can_share) = can_share_value.dyn_ref::<js_sys::Function>() {
            let accepts = can_share.call1(nav, data.as_ref()).map(|v| v.is_truthy()).unwrap_or(false);
            if !accepts {
                return false;
            }
        }
    }

    let Ok(promise_value) = share_fn.call1(nav, data.as_ref()) else {
        return false;
    };
    let Ok(promise) = promise_value.dyn_into::<js_sys::Promise>() else {
        return false;
    };
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(err) if is_abort_error(&err) => true,
        Err(err) => {
            log::warn!("native share failed: {err:?}");
            false
        }
    }
}

fn png_file(blob: &Blob, filename: &str) -> Result<File, JsValue> {
    let parts = js_sys::Array::of1(blob.as_ref());
    let options = FilePropertyBag::new();
    options.set_type("image/png");
    File::new_with_blob_sequence_and_options(parts.as_ref(), filename, &options)
}

fn download_composite(canvas: &HtmlCanvasElement, name: &str) {
    let Ok(url) = canvas.to_data_url_with_type("image/png") else {
        log::error!("failed to encode composite for download");
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(link) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    link.set_download(&composite_filename(name));
    link.set_href(&url);
    link.click();
}

fn is_abort_error(err: &JsValue) -> bool {
    err.dyn_ref::<js_sys::Error>().is_some_and(|e| e.name() == "AbortError")
}
