use budgetbook_core::history::{self, HistoryRow};
use budgetbook_core::{ApiResult, Decimal};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::browser::log_error;
use crate::commands::use_api;
use crate::state::use_ledger;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let api = use_api();
    let state = use_ledger();
    let navigate = use_navigate();

    let (rows, set_rows) = signal::<Vec<HistoryRow>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        let loaded: ApiResult<Vec<HistoryRow>> = async {
            let budgets = api.budget_history().await?;
            let costs = api.cost_history().await?;
            Ok(history::merge(&budgets, &costs))
        }
        .await;
        match loaded {
            Ok(merged) => set_rows.set(merged),
            Err(e) => {
                log_error("Failed to load history", &e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_is_loading.set(false);
    });

    let optional = move |amount: Option<Decimal>| {
        amount.map(|a| state.format(a)).unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="page history-page">
            <h2>"History"</h2>
            <p class="page-description">"Budgets and spending for every recorded month."</p>

            <Show when=move || is_loading.get()>
                <p class="hint">"Loading history..."</p>
            </Show>
            {move || error.get().map(|msg| view! { <p class="status-text status-error">{msg}</p> })}
            <Show when=move || !is_loading.get() && error.get().is_none() && rows.with(|r| r.is_empty())>
                <p class="empty-hint">"No months recorded yet."</p>
            </Show>

            <Show when=move || rows.with(|r| !r.is_empty())>
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>"Month"</th>
                            <th>"Salary"</th>
                            <th>"Fixed"</th>
                            <th>"Variable"</th>
                            <th>"Total"</th>
                            <th>"Saved"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let navigate = navigate.clone();
                            move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let period = row.period;
                                        let navigate = navigate.clone();
                                        let saved_class = match row.savings {
                                            Some(s) if s < Decimal::ZERO => "over-budget",
                                            _ => "",
                                        };
                                        view! {
                                            <tr>
                                                <td>{period.label()}</td>
                                                <td>{optional(row.salary)}</td>
                                                <td>{state.format(row.fixed_total)}</td>
                                                <td>{state.format(row.variable_total)}</td>
                                                <td>{state.format(row.total)}</td>
                                                <td class=saved_class>{optional(row.savings)}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-small btn-secondary"
                                                        on:click=move |_| {
                                                            state.period.set(period);
                                                            navigate("/", Default::default());
                                                        }
                                                    >
                                                        "Open"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }
                        }
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
