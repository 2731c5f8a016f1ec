//! Thin wrappers over the browser APIs the app touches directly.

use std::fmt::Display;

use budgetbook_core::config::PreferenceStore;
use wasm_bindgen::JsCast;

/// `window.localStorage`, silently unavailable in private modes that block it.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Origin the page was served from, e.g. `http://localhost:5000`.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:5000".to_string())
}

pub fn log_error(context: &str, err: impl Display) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}

/// Blocking confirmation dialog. Treated as "no" if the dialog can't open.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Read a picked or dropped file fully into memory.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer".to_string())?;

    Ok(Uint8Array::new(&array_buffer).to_vec())
}
