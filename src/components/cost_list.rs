use budgetbook_core::{Cost, CostType};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::confirm;
use crate::commands::{self, use_api};
use crate::state::use_ledger;

/// One category column. Items dropped here from the other column switch
/// category.
#[component]
pub fn CostList(
    cost_type: CostType,
    /// Id of the item currently being dragged, shared by both columns.
    dragged: RwSignal<Option<i64>>,
    /// Opens the editor for an item.
    on_edit: Callback<Cost>,
) -> impl IntoView {
    let api = use_api();
    let state = use_ledger();
    let (is_over, set_is_over) = signal(false);

    let clear_api = api.clone();
    let on_clear = move |_| {
        let period = state.period.get_untracked();
        let message = format!(
            "Are you sure you want to delete all {} costs for {}?",
            cost_type.as_str().to_uppercase(),
            period.label()
        );
        if !confirm(&message) {
            return;
        }
        let api = clear_api.clone();
        spawn_local(async move {
            // Failures are logged by `commands`; the list keeps its last state.
            let _ = commands::clear_costs(&api, state, cost_type).await;
        });
    };

    let drop_api = api.clone();
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        let Some(id) = dragged.get_untracked() else {
            return;
        };
        let from_other_list = state.costs.with_untracked(|costs| {
            costs
                .iter()
                .any(|c| c.id == id && c.cost_type == cost_type.other())
        });
        if from_other_list {
            let api = drop_api.clone();
            spawn_local(async move {
                // Logged by `commands` on failure
                let _ = commands::move_cost(&api, state, id, cost_type).await;
            });
        }
    };

    view! {
        <section class="card cost-column">
            <div class="column-header">
                <h3>{format!("{} Costs", cost_type.label())}</h3>
                <button class="btn btn-small btn-delete" on:click=on_clear>"Clear"</button>
            </div>
            <ul
                class="costs-list"
                class:dragover=move || is_over.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop
            >
                {move || {
                    let items = state.costs_of(cost_type);
                    if items.is_empty() {
                        view! { <li class="empty-hint">"Nothing here yet."</li> }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|cost| view! { <CostRow cost=cost dragged=dragged on_edit=on_edit /> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </ul>
            <p class="column-total">
                {move || format!("{}: {}", cost_type.label(), state.format(state.totals().get(cost_type)))}
            </p>
        </section>
    }
}

#[component]
fn CostRow(cost: Cost, dragged: RwSignal<Option<i64>>, on_edit: Callback<Cost>) -> impl IntoView {
    let api = use_api();
    let state = use_ledger();
    let id = cost.id;
    let (is_dragging, set_is_dragging) = signal(false);

    let check_api = api.clone();
    let on_check = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        let api = check_api.clone();
        spawn_local(async move {
            // Logged by `commands` on failure
            let _ = commands::set_checked(&api, state, id, checked).await;
        });
    };

    let on_delete = move |_| {
        if !confirm("Are you sure you want to delete this item?") {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            // Logged by `commands` on failure
            let _ = commands::delete_cost(&api, state, id).await;
        });
    };

    let amount = cost.amount;
    let editable = cost.clone();

    view! {
        <li
            draggable="true"
            data-id=id.to_string()
            class:dragging=move || is_dragging.get()
            class:checked=cost.is_checked
            on:dragstart=move |ev: web_sys::DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &id.to_string());
                }
                dragged.set(Some(id));
                set_is_dragging.set(true);
            }
            on:dragend=move |_| {
                dragged.set(None);
                set_is_dragging.set(false);
            }
        >
            <input type="checkbox" class="cost-check" prop:checked=cost.is_checked on:change=on_check />
            <div class="cost-details">
                <span class="cost-name">{cost.name.clone()}</span>
                {cost.description.clone().map(|d| view! { <span class="cost-description">{d}</span> })}
            </div>
            <span class="cost-amount">{move || state.format(amount)}</span>
            <button
                class="btn btn-icon edit-btn"
                aria-label="Edit item"
                on:click=move |_| on_edit.run(editable.clone())
            >
                "\u{270E}"
            </button>
            <button class="btn btn-icon delete-btn" aria-label="Delete item" on:click=on_delete>
                "\u{2715}"
            </button>
        </li>
    }
}
