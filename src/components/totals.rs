use leptos::prelude::*;

use crate::state::use_ledger;

#[component]
pub fn TotalsBar() -> impl IntoView {
    let state = use_ledger();
    let totals = Memo::new(move |_| state.totals());

    view! {
        <div class="totals-bar">
            <span id="total-fixed">{move || format!("Fixed: {}", state.format(totals.get().fixed))}</span>
            <span id="total-variable">
                {move || format!("Variable: {}", state.format(totals.get().variable))}
            </span>
            <span id="grand-total" class="grand-total">
                {move || format!("Grand Total: {}", state.format(totals.get().grand))}
            </span>
            <span class="paid-total">{move || format!("Paid: {}", state.format(totals.get().checked))}</span>
        </div>
    }
}
