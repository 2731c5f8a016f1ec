use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{CostType, NewCost};

/// Raw text from the add/edit cost form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostDraft {
    pub name: String,
    pub amount: String,
    pub description: String,
    pub cost_type: CostType,
}

impl CostDraft {
    pub fn new(cost_type: CostType) -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            description: String::new(),
            cost_type,
        }
    }

    /// Turn the form into a request payload, or explain why it can't be sent.
    pub fn validate(&self) -> Result<NewCost, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let amount = parse_amount(&self.amount)?;
        let description = self.description.trim();

        Ok(NewCost {
            name: name.to_string(),
            amount,
            cost_type: self.cost_type,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Parse a positive money amount typed by the user. Thousands separators
/// and a leading currency sign are tolerated.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }
    let cleaned: String = trimmed
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-' && c != '.')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let amount = Decimal::from_str(&cleaned)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(amount)
}
