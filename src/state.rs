use budgetbook_core::ledger::Totals;
use budgetbook_core::{Budget, Cost, CostType, Currency, MonthMarker, Period};
use leptos::prelude::*;

/// Everything the pages share about the selected month.
///
/// `costs` is replaced wholesale on every successful fetch and left alone
/// when a fetch fails.
#[derive(Clone, Copy)]
pub struct LedgerState {
    pub period: RwSignal<Period>,
    pub costs: RwSignal<Vec<Cost>>,
    pub markers: RwSignal<Vec<MonthMarker>>,
    pub budget: RwSignal<Option<Budget>>,
    pub currency: RwSignal<Currency>,
    pub min_year: i32,
}

impl LedgerState {
    pub fn new(currency: Currency, min_year: i32) -> Self {
        Self {
            period: RwSignal::new(Period::current()),
            costs: RwSignal::new(Vec::new()),
            markers: RwSignal::new(Vec::new()),
            budget: RwSignal::new(None),
            currency: RwSignal::new(currency),
            min_year,
        }
    }

    pub fn totals(&self) -> Totals {
        self.costs.with(|costs| Totals::from_costs(costs))
    }

    pub fn costs_of(&self, cost_type: CostType) -> Vec<Cost> {
        self.costs
            .with(|costs| budgetbook_core::ledger::of_type(costs, cost_type))
    }

    pub fn format(&self, amount: budgetbook_core::Decimal) -> String {
        budgetbook_core::money::format_amount(amount, self.currency.get())
    }
}

pub fn use_ledger() -> LedgerState {
    expect_context::<LedgerState>()
}
