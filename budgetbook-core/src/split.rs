//! Linked fixed/variable percentage sliders.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{Budget, CostType};

pub const MAX_PERCENT: u8 = 100;

/// Percentage of salary assigned to fixed and variable spending.
///
/// `fixed + variable <= 100` holds after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSplit")]
pub struct BudgetSplit {
    fixed: u8,
    variable: u8,
}

/// Wire shape; decoded values are normalized through [`BudgetSplit::new`].
#[derive(Deserialize)]
struct RawSplit {
    fixed: u8,
    variable: u8,
}

impl From<RawSplit> for BudgetSplit {
    fn from(raw: RawSplit) -> Self {
        BudgetSplit::new(raw.fixed, raw.variable)
    }
}

impl Default for BudgetSplit {
    fn default() -> Self {
        Self {
            fixed: 50,
            variable: 30,
        }
    }
}

impl BudgetSplit {
    /// Build a split from untrusted values. The fixed share wins when the
    /// pair overshoots.
    pub fn new(fixed: u8, variable: u8) -> Self {
        let mut split = Self {
            fixed: 0,
            variable: variable.min(MAX_PERCENT),
        };
        split.set_fixed(fixed);
        split
    }

    pub fn fixed(&self) -> u8 {
        self.fixed
    }

    pub fn variable(&self) -> u8 {
        self.variable
    }

    pub fn get(&self, cost_type: CostType) -> u8 {
        match cost_type {
            CostType::Fixed => self.fixed,
            CostType::Variable => self.variable,
        }
    }

    /// Share of salary not assigned to either category.
    pub fn unallocated(&self) -> u8 {
        MAX_PERCENT - self.fixed - self.variable
    }

    pub fn set_fixed(&mut self, value: u8) {
        self.fixed = value.min(MAX_PERCENT);
        if self.fixed + self.variable > MAX_PERCENT {
            self.variable = MAX_PERCENT - self.fixed;
        }
    }

    pub fn set_variable(&mut self, value: u8) {
        self.variable = value.min(MAX_PERCENT);
        if self.fixed + self.variable > MAX_PERCENT {
            self.fixed = MAX_PERCENT - self.variable;
        }
    }

    /// Move one slider; the other gives way if needed.
    pub fn set(&mut self, cost_type: CostType, value: u8) {
        match cost_type {
            CostType::Fixed => self.set_fixed(value),
            CostType::Variable => self.set_variable(value),
        }
    }
}

impl From<&Budget> for BudgetSplit {
    fn from(budget: &Budget) -> Self {
        BudgetSplit::new(budget.fixed_percent, budget.variable_percent)
    }
}

/// A salary divided according to a [`BudgetSplit`], rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub salary: Decimal,
    pub fixed: Decimal,
    pub variable: Decimal,
    pub unallocated: Decimal,
}

impl Allocation {
    pub fn new(salary: Decimal, split: BudgetSplit) -> Self {
        let fixed = percent_of(salary, split.fixed());
        let variable = percent_of(salary, split.variable());
        Self {
            salary,
            fixed,
            variable,
            unallocated: salary - fixed - variable,
        }
    }

    pub fn for_budget(budget: &Budget) -> Self {
        Self::new(budget.salary, BudgetSplit::from(budget))
    }

    pub fn get(&self, cost_type: CostType) -> Decimal {
        match cost_type {
            CostType::Fixed => self.fixed,
            CostType::Variable => self.variable,
        }
    }
}

fn percent_of(amount: Decimal, percent: u8) -> Decimal {
    (amount * Decimal::from(percent) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raising_fixed_clamps_variable() {
        let mut split = BudgetSplit::new(50, 30);
        split.set_fixed(80);
        assert_eq!(split.fixed(), 80);
        assert_eq!(split.variable(), 20);
    }

    #[test]
    fn test_raising_variable_clamps_fixed() {
        let mut split = BudgetSplit::new(50, 30);
        split.set_variable(70);
        assert_eq!(split.fixed(), 30);
        assert_eq!(split.variable(), 70);
    }

    #[test]
    fn test_lowering_leaves_other_slider_alone() {
        let mut split = BudgetSplit::new(60, 40);
        split.set_fixed(10);
        assert_eq!(split.variable(), 40);
        assert_eq!(split.unallocated(), 50);
    }

    #[test]
    fn test_values_above_hundred_are_clamped() {
        let mut split = BudgetSplit::default();
        split.set_variable(250);
        assert_eq!(split.variable(), 100);
        assert_eq!(split.fixed(), 0);
    }

    #[test]
    fn test_new_normalizes_overshooting_pair() {
        let split = BudgetSplit::new(70, 70);
        assert_eq!(split.fixed(), 70);
        assert_eq!(split.variable(), 30);
    }

    #[test]
    fn test_decoding_normalizes_overshooting_pair() {
        let split: BudgetSplit = serde_json::from_str(r#"{"fixed":90,"variable":90}"#).unwrap();
        assert_eq!(split.fixed(), 90);
        assert_eq!(split.variable(), 10);
        assert_eq!(split.unallocated(), 0);

        let split: BudgetSplit = serde_json::from_str(r#"{"fixed":200,"variable":255}"#).unwrap();
        assert_eq!(split, BudgetSplit::new(100, 0));
        assert_eq!(split.unallocated(), 0);
    }

    #[test]
    fn test_allocation_rounds_to_cents() {
        let alloc = Allocation::new(dec!(3333.33), BudgetSplit::new(33, 33));
        assert_eq!(alloc.fixed, dec!(1100.00));
        assert_eq!(alloc.variable, dec!(1100.00));
        assert_eq!(alloc.unallocated, dec!(1133.33));
    }
}
