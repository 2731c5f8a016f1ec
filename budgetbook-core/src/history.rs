//! Month-by-month overview joining budget and spending history.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{Budget, CostHistoryEntry};
use crate::period::Period;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub period: Period,
    pub salary: Option<Decimal>,
    pub savings_goal: Option<Decimal>,
    pub fixed_total: Decimal,
    pub variable_total: Decimal,
    pub total: Decimal,
    /// Salary minus spending; only known when a budget exists.
    pub savings: Option<Decimal>,
}

/// Join both history feeds by month, newest first. A month present in only
/// one feed still gets a row.
pub fn merge(budgets: &[Budget], costs: &[CostHistoryEntry]) -> Vec<HistoryRow> {
    let mut rows: BTreeMap<Period, HistoryRow> = BTreeMap::new();

    for entry in costs {
        let Some(period) = Period::new(entry.year, entry.month) else {
            continue;
        };
        let row = rows.entry(period).or_insert_with(|| empty_row(period));
        row.fixed_total += entry.fixed_total;
        row.variable_total += entry.variable_total;
    }

    for budget in budgets {
        let Some(period) = budget.period() else {
            continue;
        };
        let row = rows.entry(period).or_insert_with(|| empty_row(period));
        row.salary = Some(budget.salary);
        row.savings_goal = budget.savings_goal;
    }

    rows.into_values()
        .rev()
        .map(|mut row| {
            row.total = row.fixed_total + row.variable_total;
            row.savings = row.salary.map(|salary| salary - row.total);
            row
        })
        .collect()
}

fn empty_row(period: Period) -> HistoryRow {
    HistoryRow {
        period,
        salary: None,
        savings_goal: None,
        fixed_total: Decimal::ZERO,
        variable_total: Decimal::ZERO,
        total: Decimal::ZERO,
        savings: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_feeds() {
        assert!(merge(&[], &[]).is_empty());
    }

    #[test]
    fn test_budget_without_costs_saves_full_salary() {
        let budgets = vec![Budget {
            year: 2025,
            month: 9,
            salary: dec!(2800),
            savings_goal: None,
            fixed_percent: 50,
            variable_percent: 30,
        }];
        let rows = merge(&budgets, &[]);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.period, Period::new(2025, 9).unwrap());
        assert_eq!(row.fixed_total, Decimal::ZERO);
        assert_eq!(row.variable_total, Decimal::ZERO);
        assert_eq!(row.total, Decimal::ZERO);
        assert_eq!(row.savings, Some(dec!(2800)));
    }

    #[test]
    fn test_skips_invalid_months() {
        let costs = vec![CostHistoryEntry {
            year: 2025,
            month: 0,
            fixed_total: dec!(1),
            variable_total: dec!(1),
        }];
        assert!(merge(&[], &costs).is_empty());
    }
}
