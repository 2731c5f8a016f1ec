use budgetbook_core::assistant::{
    describe_proposals, ChatContext, ChatRequest, Conversation, Speaker, UploadKind, UploadPayload,
};
use budgetbook_core::NewCost;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::log_error;
use crate::commands::{self, use_api};
use crate::components::upload_button::UploadButton;
use crate::state::use_ledger;

/// Chat with the budgeting assistant. Expenses it proposes, or reads off an
/// uploaded receipt, are only logged once confirmed.
#[component]
pub fn AssistantPage() -> impl IntoView {
    let api = use_api();
    let state = use_ledger();

    let conversation = RwSignal::new(Conversation::default());
    let (input, set_input) = signal(String::new());
    let (pending, set_pending) = signal::<Vec<NewCost>>(vec![]);
    let (is_busy, set_is_busy) = signal(false);

    let chat_api = api.clone();
    let send = move || {
        let message = input.get().trim().to_string();
        if message.is_empty() || is_busy.get_untracked() {
            return;
        }
        conversation.update(|c| c.push_user(message.clone()));
        set_input.set(String::new());
        set_is_busy.set(true);

        let request = ChatRequest {
            message,
            context: ChatContext::new(
                state.period.get_untracked(),
                state.budget.get_untracked(),
                state.costs.get_untracked(),
            ),
        };
        let api = chat_api.clone();
        spawn_local(async move {
            match api.chat(&request).await {
                Ok(reply) => {
                    let text = reply.display_text(state.currency.get_untracked());
                    conversation.update(|c| c.push_assistant(text));
                    set_pending.set(reply.proposals().to_vec());
                }
                Err(e) => {
                    log_error("Chat request failed", &e);
                    conversation.update(|c| {
                        c.push_assistant(format!("Sorry, something went wrong: {}", e))
                    });
                }
            }
            set_is_busy.set(false);
        });
    };
    let send_on_enter = send.clone();

    let confirm_api = api.clone();
    let on_confirm = move |_| {
        let costs = pending.get();
        set_pending.set(vec![]);
        let api = confirm_api.clone();
        spawn_local(async move {
            let text = match commands::import_costs(&api, state, costs).await {
                Ok(n) => format!("Done. Logged {} expense{}.", n, if n == 1 { "" } else { "s" }),
                Err(e) => format!("I couldn't log those: {}", e),
            };
            conversation.update(|c| c.push_assistant(text));
        });
    };

    let on_decline = move |_| {
        set_pending.set(vec![]);
        conversation.update(|c| c.push_assistant("Okay, I won't log those."));
    };

    let recognize_api = api.clone();
    let on_document = Callback::new(move |upload: UploadPayload| {
        conversation.update(|c| c.push_user(format!("Uploaded {}", upload.filename)));
        set_is_busy.set(true);
        let api = recognize_api.clone();
        spawn_local(async move {
            match api.recognize(&upload).await {
                Ok(found) if found.expenses.is_empty() => {
                    conversation.update(|c| {
                        c.push_assistant("I couldn't find any expenses in that file.")
                    });
                }
                Ok(found) => {
                    let text = describe_proposals(&found.expenses, state.currency.get_untracked());
                    conversation.update(|c| c.push_assistant(text));
                    set_pending.set(found.expenses);
                }
                Err(e) => {
                    log_error("Recognition failed", &e);
                    conversation.update(|c| {
                        c.push_assistant(format!("I couldn't read that file: {}", e))
                    });
                }
            }
            set_is_busy.set(false);
        });
    });

    let on_audio = Callback::new(move |upload: UploadPayload| {
        set_is_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.transcribe(&upload).await {
                Ok(transcript) => set_input.set(transcript.text),
                Err(e) => {
                    log_error("Transcription failed", &e);
                    conversation.update(|c| {
                        c.push_assistant(format!("I couldn't transcribe that: {}", e))
                    });
                }
            }
            set_is_busy.set(false);
        });
    });

    view! {
        <div class="page assistant-page">
            <div class="column-header">
                <h2>"Assistant"</h2>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |_| {
                        conversation.update(|c| c.clear());
                        set_pending.set(vec![]);
                    }
                >
                    "Clear"
                </button>
            </div>
            <p class="page-description">
                {move || format!("Talking about {}", state.period.get().label())}
            </p>

            <div class="chat-log">
                {move || {
                    conversation
                        .with(|c| c.messages().to_vec())
                        .into_iter()
                        .map(|m| {
                            let class = match m.speaker {
                                Speaker::User => "chat-message user",
                                Speaker::Assistant => "chat-message assistant",
                            };
                            view! { <div class=class>{m.text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || is_busy.get()>
                    <div class="chat-message assistant typing">"..."</div>
                </Show>
            </div>

            <Show when=move || pending.with(|p| !p.is_empty())>
                <div class="action-buttons pending-actions">
                    <button class="btn btn-primary" on:click=on_confirm.clone()>"Yes, log them"</button>
                    <button class="btn btn-secondary" on:click=on_decline>"No"</button>
                </div>
            </Show>

            <div class="chat-input">
                <input
                    type="text"
                    class="input"
                    placeholder="e.g. I spent 12.50 on lunch"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send_on_enter();
                        }
                    }
                />
                <button class="btn btn-primary" disabled=move || is_busy.get() on:click=move |_| send()>
                    "Send"
                </button>
                <UploadButton
                    kind=UploadKind::Document
                    label="Receipt"
                    on_upload=on_document
                    disabled=is_busy
                />
                <UploadButton
                    kind=UploadKind::Audio
                    label="Voice"
                    on_upload=on_audio
                    disabled=is_busy
                />
            </div>
        </div>
    }
}
