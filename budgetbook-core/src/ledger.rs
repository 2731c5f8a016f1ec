//! Totals over the costs of the selected month.

use rust_decimal::Decimal;

use crate::models::{Budget, Cost, CostType};
use crate::split::Allocation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub fixed: Decimal,
    pub variable: Decimal,
    pub grand: Decimal,
    /// Sum of items ticked off as paid.
    pub checked: Decimal,
}

impl Totals {
    pub fn from_costs(costs: &[Cost]) -> Self {
        let mut totals = Totals::default();
        for cost in costs {
            match cost.cost_type {
                CostType::Fixed => totals.fixed += cost.amount,
                CostType::Variable => totals.variable += cost.amount,
            }
            if cost.is_checked {
                totals.checked += cost.amount;
            }
        }
        totals.grand = totals.fixed + totals.variable;
        totals
    }

    pub fn get(&self, cost_type: CostType) -> Decimal {
        match cost_type {
            CostType::Fixed => self.fixed,
            CostType::Variable => self.variable,
        }
    }
}

/// Split costs into (fixed, variable), keeping backend order.
pub fn partition(costs: &[Cost]) -> (Vec<&Cost>, Vec<&Cost>) {
    costs.iter().partition(|c| c.cost_type == CostType::Fixed)
}

pub fn of_type(costs: &[Cost], cost_type: CostType) -> Vec<Cost> {
    costs
        .iter()
        .filter(|c| c.cost_type == cost_type)
        .cloned()
        .collect()
}

/// Spending measured against the month's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub allocation: Allocation,
    /// Negative when the category is over budget.
    pub fixed_remaining: Decimal,
    pub variable_remaining: Decimal,
    pub projected_savings: Decimal,
    pub savings_goal: Option<Decimal>,
}

impl BudgetStatus {
    pub fn new(budget: &Budget, totals: &Totals) -> Self {
        let allocation = Allocation::for_budget(budget);
        Self {
            allocation,
            fixed_remaining: allocation.fixed - totals.fixed,
            variable_remaining: allocation.variable - totals.variable,
            projected_savings: budget.salary - totals.grand,
            savings_goal: budget.savings_goal,
        }
    }

    pub fn remaining(&self, cost_type: CostType) -> Decimal {
        match cost_type {
            CostType::Fixed => self.fixed_remaining,
            CostType::Variable => self.variable_remaining,
        }
    }

    pub fn is_over(&self, cost_type: CostType) -> bool {
        self.remaining(cost_type) < Decimal::ZERO
    }

    /// `None` when no goal is set.
    pub fn meets_savings_goal(&self) -> Option<bool> {
        self.savings_goal.map(|goal| self.projected_savings >= goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cost(id: i64, amount: Decimal, cost_type: CostType, is_checked: bool) -> Cost {
        Cost {
            id,
            name: format!("item {}", id),
            amount,
            description: None,
            cost_type,
            is_checked,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_empty_month_is_zero() {
        assert_eq!(Totals::from_costs(&[]), Totals::default());
    }

    #[test]
    fn test_over_budget_flags() {
        let budget = Budget {
            year: 2025,
            month: 7,
            salary: dec!(1000),
            savings_goal: Some(dec!(300)),
            fixed_percent: 50,
            variable_percent: 20,
        };
        let costs = vec![
            cost(1, dec!(400), CostType::Fixed, true),
            cost(2, dec!(250), CostType::Variable, false),
        ];
        let status = BudgetStatus::new(&budget, &Totals::from_costs(&costs));
        assert_eq!(status.fixed_remaining, dec!(100));
        assert_eq!(status.variable_remaining, dec!(-50));
        assert!(!status.is_over(CostType::Fixed));
        assert!(status.is_over(CostType::Variable));
        assert_eq!(status.projected_savings, dec!(350));
        assert_eq!(status.meets_savings_goal(), Some(true));
    }

    #[test]
    fn test_partition_keeps_order() {
        let costs = vec![
            cost(1, dec!(1), CostType::Variable, false),
            cost(2, dec!(2), CostType::Fixed, false),
            cost(3, dec!(3), CostType::Variable, false),
        ];
        let (fixed, variable) = partition(&costs);
        assert_eq!(fixed.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(variable.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
