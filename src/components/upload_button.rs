use budgetbook_core::assistant::{UploadKind, UploadPayload};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{log_error, read_file_bytes};

/// File picker that reads the chosen file and hands it over base64-encoded.
/// Files of the wrong kind are rejected before anything is sent.
#[component]
pub fn UploadButton(
    kind: UploadKind,
    #[prop(into)] label: String,
    on_upload: Callback<UploadPayload>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let (error, set_error) = signal::<Option<String>>(None);
    let input_id = match kind {
        UploadKind::Document => "document-upload",
        UploadKind::Audio => "audio-upload",
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");
        set_error.set(None);
        spawn_local(async move {
            let bytes = match read_file_bytes(&file).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log_error("Upload failed", &e);
                    set_error.set(Some(e));
                    return;
                }
            };
            match UploadPayload::new(kind, &file.name(), &file.type_(), &bytes) {
                Ok(payload) => on_upload.run(payload),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <span class="upload-button">
            <label for=input_id class="btn btn-secondary" class:disabled=move || disabled.get()>
                {label}
            </label>
            <input
                id=input_id
                node_ref=input_ref
                type="file"
                class="hidden-input"
                accept=kind.accept_attr()
                disabled=move || disabled.get()
                on:change=on_change
            />
            {move || error.get().map(|msg| view! { <span class="status-text status-error">{msg}</span> })}
        </span>
    }
}
