//! Salary, savings goal and the linked fixed/variable sliders for the
//! selected month.

use budgetbook_core::ledger::BudgetStatus;
use budgetbook_core::split::{Allocation, BudgetSplit};
use budgetbook_core::validation::parse_amount;
use budgetbook_core::{Budget, CostType, Decimal};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, use_api};
use crate::state::use_ledger;

#[component]
pub fn BudgetPanel() -> impl IntoView {
    let api = use_api();
    let state = use_ledger();

    let (salary, set_salary) = signal(String::new());
    let (savings_goal, set_savings_goal) = signal(String::new());
    let split = RwSignal::new(BudgetSplit::default());
    let (status, set_status) = signal::<Option<String>>(None);

    // Reset the form whenever a different budget (or none) is loaded
    Effect::new(move |_| match state.budget.get() {
        Some(budget) => {
            set_salary.set(budget.salary.to_string());
            set_savings_goal.set(budget.savings_goal.map(|g| g.to_string()).unwrap_or_default());
            split.set(BudgetSplit::from(&budget));
        }
        None => {
            set_salary.set(String::new());
            set_savings_goal.set(String::new());
            split.set(BudgetSplit::default());
        }
    });

    // Preview against what is typed, not only what is saved
    let preview = Memo::new(move |_| {
        let salary = parse_amount(&salary.get()).ok()?;
        let budget = Budget {
            year: 0,
            month: 0,
            salary,
            savings_goal: parse_amount(&savings_goal.get()).ok(),
            fixed_percent: split.get().fixed(),
            variable_percent: split.get().variable(),
        };
        Some(BudgetStatus::new(&budget, &state.totals()))
    });

    let on_save = move |_| {
        let period = state.period.get_untracked();
        let salary = match parse_amount(&salary.get()) {
            Ok(s) => s,
            Err(e) => {
                set_status.set(Some(format!("Salary: {}", e)));
                return;
            }
        };
        let goal_text = savings_goal.get();
        let savings_goal = if goal_text.trim().is_empty() {
            None
        } else {
            match parse_amount(&goal_text) {
                Ok(goal) => Some(goal),
                Err(e) => {
                    set_status.set(Some(format!("Savings goal: {}", e)));
                    return;
                }
            }
        };
        let current = split.get();
        let budget = Budget {
            year: period.year,
            month: period.month,
            salary,
            savings_goal,
            fixed_percent: current.fixed(),
            variable_percent: current.variable(),
        };
        let api = api.clone();
        spawn_local(async move {
            match commands::save_budget(&api, state, budget).await {
                Ok(()) => set_status.set(Some("Budget saved".to_string())),
                Err(e) => set_status.set(Some(format!("Failed to save: {}", e))),
            }
        });
    };

    view! {
        <section class="card budget-panel">
            <h3>"Budget"</h3>
            <div class="input-row">
                <div class="form-group">
                    <label for="salary-input">"Monthly salary"</label>
                    <input
                        id="salary-input"
                        type="text"
                        inputmode="decimal"
                        class="input"
                        prop:value=move || salary.get()
                        on:input=move |ev| set_salary.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="savings-input">"Savings goal"</label>
                    <input
                        id="savings-input"
                        type="text"
                        inputmode="decimal"
                        class="input"
                        placeholder="Optional"
                        prop:value=move || savings_goal.get()
                        on:input=move |ev| set_savings_goal.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <SplitSlider cost_type=CostType::Fixed split=split />
            <SplitSlider cost_type=CostType::Variable split=split />
            <p class="split-remainder">
                {move || format!("Unallocated: {}%", split.get().unallocated())}
            </p>

            {move || {
                state.currency.track();
                preview.get().map(|s| view! { <BudgetSummary status=s /> })
            }}

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=on_save>"Save Budget"</button>
            </div>
            <Show when=move || status.get().is_some()>
                <span class="status-text">{move || status.get().unwrap_or_default()}</span>
            </Show>
        </section>
    }
}

#[component]
fn SplitSlider(cost_type: CostType, split: RwSignal<BudgetSplit>) -> impl IntoView {
    let id = format!("{}-slider", cost_type.as_str());

    view! {
        <div class="form-group slider-row">
            <label for=id.clone()>
                {move || format!("{} {}%", cost_type.label(), split.get().get(cost_type))}
            </label>
            <input
                id=id
                type="range"
                min="0"
                max="100"
                step="1"
                prop:value=move || split.get().get(cost_type).to_string()
                on:input=move |ev| {
                    let value = event_target_value(&ev).parse::<u8>().unwrap_or(0);
                    split.update(|s| s.set(cost_type, value));
                }
            />
        </div>
    }
}

#[component]
fn BudgetSummary(status: BudgetStatus) -> impl IntoView {
    let state = use_ledger();
    let allocation: Allocation = status.allocation;

    let line = move |cost_type: CostType| {
        let remaining = status.remaining(cost_type);
        let over = status.is_over(cost_type);
        let text = if over {
            format!("{} over", state.format(-remaining))
        } else {
            format!("{} left", state.format(remaining))
        };
        view! {
            <li class=if over { "budget-line over-budget" } else { "budget-line" }>
                <span>{format!("{} budget {}", cost_type.label(), state.format(allocation.get(cost_type)))}</span>
                <span>{text}</span>
            </li>
        }
    };

    let goal = status.meets_savings_goal().map(|met| {
        let goal = status.savings_goal.unwrap_or(Decimal::ZERO);
        view! {
            <li class=if met { "budget-line goal-met" } else { "budget-line goal-missed" }>
                {format!("Savings goal {} ({})", state.format(goal), if met { "on track" } else { "at risk" })}
            </li>
        }
    });

    view! {
        <ul class="budget-summary">
            {line(CostType::Fixed)}
            {line(CostType::Variable)}
            <li class="budget-line">
                {format!("Projected savings {}", state.format(status.projected_savings))}
            </li>
            {goal}
        </ul>
    }
}
