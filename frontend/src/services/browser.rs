//! Thin wrappers over the browser APIs the page needs.

use notesynth::PlaceholderDocument;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Url,
};

use crate::types::{AppError, AppResult, ScrollBlock};

fn js_error(context: &str, e: JsValue) -> AppError {
    AppError::Browser(format!("{}: {:?}", context, e))
}

/// Blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("Could not show alert: {}", message);
        }
    }
}

/// Smoothly scroll the element with this id into view.
pub fn scroll_to(id: &str, block: ScrollBlock) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No element #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(match block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Offer a document as a file download through a temporary object URL.
pub fn save_document(document: &PlaceholderDocument) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("No window".into()))?;
    let dom = window
        .document()
        .ok_or_else(|| AppError::Browser("No document".into()))?;
    let body = dom.body().ok_or_else(|| AppError::Browser("No body".into()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&document.content));
    let options = BlobPropertyBag::new();
    options.set_type(document.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Failed to create Blob", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_error("Failed to create object URL", e))?;

    let link: HtmlAnchorElement = dom
        .create_element("a")
        .map_err(|e| js_error("Failed to create link", e))?
        .dyn_into()
        .map_err(|_| AppError::Browser("Created element is not an anchor".into()))?;
    link.set_href(&url);
    link.set_download(&document.file_name);

    body.append_child(&link)
        .map_err(|e| js_error("Failed to attach link", e))?;
    link.click();
    let _ = body.remove_child(&link);
    let _ = Url::revoke_object_url(&url);

    log::info!("💾 Downloaded {}", document.file_name);
    Ok(())
}
