use std::collections::HashSet;

use budgetbook_core::{Cost, CostType, NewCost};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::log_error;
use crate::commands::{self, use_api};
use crate::state::use_ledger;

#[derive(Debug, Clone)]
enum ImportState {
    Idle,
    Loading,
    /// Candidates with the ids picked for import.
    Choosing(Vec<Cost>),
    Done(String),
}

/// Copy costs from the previous month into the selected one. Fixed costs are
/// preselected since they usually recur.
#[component]
pub fn ImportPrevious() -> impl IntoView {
    let api = use_api();
    let state = use_ledger();
    let (import_state, set_import_state) = signal(ImportState::Idle);
    let selected = RwSignal::new(HashSet::<i64>::new());

    // A different month invalidates any open preview
    Effect::new(move |_| {
        state.period.track();
        set_import_state.set(ImportState::Idle);
    });

    let load_api = api.clone();
    let on_load = move |_| {
        let period = state.period.get_untracked();
        set_import_state.set(ImportState::Loading);
        let api = load_api.clone();
        spawn_local(async move {
            match api.previous_costs(period).await {
                Ok(costs) if costs.is_empty() => {
                    set_import_state.set(ImportState::Done(format!(
                        "Nothing to copy from {}.",
                        period.previous().label()
                    )));
                }
                Ok(costs) => {
                    selected.set(
                        costs
                            .iter()
                            .filter(|c| c.cost_type == CostType::Fixed)
                            .map(|c| c.id)
                            .collect(),
                    );
                    set_import_state.set(ImportState::Choosing(costs));
                }
                Err(e) => {
                    log_error("Failed to fetch previous costs", &e);
                    set_import_state.set(ImportState::Done(format!("Failed to load: {}", e)));
                }
            }
        });
    };

    let on_import = move |_| {
        let ImportState::Choosing(costs) = import_state.get() else {
            return;
        };
        let picked: Vec<NewCost> = selected.with(|ids| {
            costs
                .iter()
                .filter(|c| ids.contains(&c.id))
                .map(NewCost::from)
                .collect()
        });
        let api = api.clone();
        spawn_local(async move {
            let message = match commands::import_costs(&api, state, picked).await {
                Ok(0) => "Nothing selected.".to_string(),
                Ok(n) => format!("Copied {} item{}.", n, if n == 1 { "" } else { "s" }),
                Err(e) => format!("Import failed: {}", e),
            };
            set_import_state.set(ImportState::Done(message));
        });
    };

    view! {
        <section class="card import-previous">
            <div class="column-header">
                <h3>"Carry Over"</h3>
                <button class="btn btn-small btn-secondary" on:click=on_load>
                    {move || format!("Copy from {}", state.period.get().previous().label())}
                </button>
            </div>
            {move || match import_state.get() {
                ImportState::Idle => ().into_any(),
                ImportState::Loading => view! { <p class="hint">"Loading..."</p> }.into_any(),
                ImportState::Done(message) => view! { <p class="status-text">{message}</p> }.into_any(),
                ImportState::Choosing(costs) => view! {
                    <ul class="import-list">
                        {costs
                            .into_iter()
                            .map(|cost| {
                                let id = cost.id;
                                view! {
                                    <li>
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.with(|s| s.contains(&id))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    selected.update(|s| {
                                                        if checked {
                                                            s.insert(id);
                                                        } else {
                                                            s.remove(&id);
                                                        }
                                                    });
                                                }
                                            />
                                            <span class="cost-name">{cost.name.clone()}</span>
                                            <span class="cost-type">{cost.cost_type.label()}</span>
                                            <span class="cost-amount">{state.format(cost.amount)}</span>
                                        </label>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <div class="action-buttons">
                        <button class="btn btn-primary" on:click=on_import.clone()>
                            {move || format!("Import {} selected", selected.with(|s| s.len()))}
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_import_state.set(ImportState::Idle)
                        >
                            "Cancel"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
