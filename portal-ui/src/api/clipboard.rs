//! Clipboard Access
//!
//! Thin wrapper over `navigator.clipboard.writeText`, looked up dynamically
//! so insecure contexts (where the API is absent) fail cleanly.

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Debug)]
pub enum ClipboardError {
    /// No window or no `navigator.clipboard`
    Unavailable,
    /// The browser rejected the write
    Denied(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "Clipboard API unavailable"),
            ClipboardError::Denied(e) => write!(f, "Clipboard write denied: {}", e),
        }
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Write text to the system clipboard
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;

    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Denied(describe(&e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| ClipboardError::Denied(describe(&e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Denied(describe(&e)))
}
