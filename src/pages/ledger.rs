use budgetbook_core::{Cost, CostType};
use leptos::prelude::*;

use crate::components::budget_panel::BudgetPanel;
use crate::components::cost_editor::CostEditor;
use crate::components::cost_form::CostForm;
use crate::components::cost_list::CostList;
use crate::components::import_previous::ImportPrevious;
use crate::components::totals::TotalsBar;
use crate::state::use_ledger;

#[component]
pub fn LedgerPage() -> impl IntoView {
    let state = use_ledger();
    let dragged = RwSignal::new(None::<i64>);
    let (editing, set_editing) = signal::<Option<Cost>>(None);

    let on_edit = Callback::new(move |cost: Cost| set_editing.set(Some(cost)));
    let on_close = Callback::new(move |_| set_editing.set(None));

    view! {
        <div class="page ledger-page">
            <h2>{move || state.period.get().label()}</h2>
            <CostForm />
            <div class="cost-columns">
                <CostList cost_type=CostType::Fixed dragged=dragged on_edit=on_edit />
                <CostList cost_type=CostType::Variable dragged=dragged on_edit=on_edit />
            </div>
            <TotalsBar />
            <div class="card-grid">
                <BudgetPanel />
                <ImportPrevious />
            </div>
            {move || editing.get().map(|cost| view! { <CostEditor cost=cost on_close=on_close /> })}
        </div>
    }
}
