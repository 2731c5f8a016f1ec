use std::time::Duration;

use budgetbook_core::validation::CostDraft;
use budgetbook_core::CostType;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, use_api};
use crate::state::use_ledger;

/// How long the form shakes after a rejected submit.
const SHAKE_DURATION: Duration = Duration::from_millis(500);

#[component]
pub fn CostForm() -> impl IntoView {
    let api = use_api();
    let state = use_ledger();

    let (name, set_name) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (cost_type, set_cost_type) = signal(CostType::Fixed);
    let (error, set_error) = signal::<Option<String>>(None);
    let (shaking, set_shaking) = signal(false);
    let (is_saving, set_is_saving) = signal(false);
    let name_input = NodeRef::<Input>::new();

    let submit = move || {
        let draft = CostDraft {
            name: name.get(),
            amount: amount.get(),
            description: description.get(),
            cost_type: cost_type.get(),
        };
        let cost = match draft.validate() {
            Ok(cost) => cost,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                set_shaking.set(true);
                set_timeout(move || set_shaking.set(false), SHAKE_DURATION);
                return;
            }
        };

        set_error.set(None);
        set_is_saving.set(true);
        let api = api.clone();
        spawn_local(async move {
            match commands::add_cost(&api, state, cost).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_amount.set(String::new());
                    set_description.set(String::new());
                    if let Some(input) = name_input.get() {
                        let _ = input.focus();
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_saving.set(false);
        });
    };
    let submit_on_enter = submit.clone();

    view! {
        <section class="card add-expense" class:shake=move || shaking.get()>
            <h3>"Add Expense"</h3>
            <div class="input-row">
                <input
                    id="expense-name-input"
                    type="text"
                    class="input"
                    placeholder="Name"
                    node_ref=name_input
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    id="expense-amount-input"
                    type="text"
                    inputmode="decimal"
                    class="input"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit_on_enter();
                        }
                    }
                />
            </div>
            <input
                type="text"
                class="input"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <div class="type-choice">
                {CostType::ALL
                    .iter()
                    .map(|t| {
                        let t = *t;
                        view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="expense-type"
                                    value=t.as_str()
                                    prop:checked=move || cost_type.get() == t
                                    on:change=move |_| set_cost_type.set(t)
                                />
                                {t.label()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button
                id="add-expense-btn"
                class="btn btn-primary"
                disabled=move || is_saving.get()
                on:click=move |_| submit()
            >
                {move || if is_saving.get() { "Adding..." } else { "Add" }}
            </button>
            {move || error.get().map(|msg| view! { <p class="status-text status-error">{msg}</p> })}
        </section>
    }
}
