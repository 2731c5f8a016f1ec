use budgetbook_core::validation::CostDraft;
use budgetbook_core::{Cost, CostType};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, use_api};
use crate::state::use_ledger;

/// Modal for editing every field of an existing cost.
#[component]
pub fn CostEditor(cost: Cost, on_close: Callback<()>) -> impl IntoView {
    let api = use_api();
    let state = use_ledger();
    let id = cost.id;

    let (name, set_name) = signal(cost.name.clone());
    let (amount, set_amount) = signal(cost.amount.to_string());
    let (description, set_description) = signal(cost.description.clone().unwrap_or_default());
    let (cost_type, set_cost_type) = signal(cost.cost_type);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let on_save = move |_| {
        let draft = CostDraft {
            name: name.get(),
            amount: amount.get(),
            description: description.get(),
            cost_type: cost_type.get(),
        };
        let update = match draft.validate() {
            Ok(update) => update,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_is_saving.set(true);
        let api = api.clone();
        spawn_local(async move {
            match commands::update_cost(&api, state, id, update).await {
                Ok(()) => on_close.run(()),
                Err(e) => set_error.set(Some(format!("Failed to save: {}", e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
        <div class="modal cost-editor" role="dialog">
            <h3>"Edit Expense"</h3>
            <div class="form-group">
                <label>"Name"</label>
                <input
                    type="text"
                    class="input"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Amount"</label>
                <input
                    type="text"
                    inputmode="decimal"
                    class="input"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Description"</label>
                <textarea
                    class="input"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label>"Category"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Ok(t) = event_target_value(&ev).parse::<CostType>() {
                            set_cost_type.set(t);
                        }
                    }
                >
                    {CostType::ALL
                        .iter()
                        .map(|t| {
                            let t = *t;
                            view! {
                                <option value=t.as_str() prop:selected=move || cost_type.get() == t>
                                    {t.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            {move || error.get().map(|msg| view! { <p class="status-text status-error">{msg}</p> })}
            <div class="action-buttons">
                <button class="btn btn-primary" disabled=move || is_saving.get() on:click=on_save>
                    {move || if is_saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
