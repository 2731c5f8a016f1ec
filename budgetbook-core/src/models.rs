//! Wire types shared with the budget backend.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::period::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    Fixed,
    Variable,
}

impl CostType {
    pub const ALL: [CostType; 2] = [CostType::Fixed, CostType::Variable];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostType::Fixed => "fixed",
            CostType::Variable => "variable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostType::Fixed => "Fixed",
            CostType::Variable => "Variable",
        }
    }

    pub fn other(&self) -> CostType {
        match self {
            CostType::Fixed => CostType::Variable,
            CostType::Variable => CostType::Fixed,
        }
    }
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(CostType::Fixed),
            "variable" => Ok(CostType::Variable),
            other => Err(format!("Unknown cost type: {}", other)),
        }
    }
}

/// An expense as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub cost_type: CostType,
    #[serde(default)]
    pub is_checked: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Payload for creating a cost, alone or as part of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCost {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub cost_type: CostType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Cost> for NewCost {
    fn from(cost: &Cost) -> Self {
        Self {
            name: cost.name.clone(),
            amount: cost.amount,
            cost_type: cost.cost_type,
            description: cost.description.clone(),
        }
    }
}

/// `POST /api/costs` body: a new cost dated into the selected month.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCostRequest<'a> {
    #[serde(flatten)]
    pub cost: &'a NewCost,
    pub date: String,
}

/// `PUT /api/costs/{id}` body; replaces every editable field.
pub type CostUpdate = NewCost;

#[derive(Debug, Clone, Serialize)]
pub struct BatchAddRequest<'a> {
    pub year: i32,
    pub month: String,
    pub expenses: &'a [NewCost],
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeChange {
    #[serde(rename = "type")]
    pub cost_type: CostType,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckedChange {
    pub is_checked: bool,
}

/// Salary-based plan for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(deserialize_with = "number_or_string")]
    pub year: i32,
    #[serde(deserialize_with = "number_or_string")]
    pub month: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub savings_goal: Option<Decimal>,
    pub fixed_percent: u8,
    pub variable_percent: u8,
}

impl Budget {
    pub fn period(&self) -> Option<Period> {
        Period::new(self.year, self.month)
    }
}

/// One entry of the month summary: the month has at least one cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthMarker {
    #[serde(deserialize_with = "number_or_string")]
    pub year: i32,
    #[serde(deserialize_with = "number_or_string")]
    pub month: u32,
}

impl MonthMarker {
    pub fn period(&self) -> Option<Period> {
        Period::new(self.year, self.month)
    }
}

/// Per-month spending totals from `GET /api/costs/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostHistoryEntry {
    #[serde(deserialize_with = "number_or_string")]
    pub year: i32,
    #[serde(deserialize_with = "number_or_string")]
    pub month: u32,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub fixed_total: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub variable_total: Decimal,
}

/// The backend stores dates as text, so year and month come back either as
/// numbers or as zero-padded strings depending on the query.
fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64>,
    <T as FromStr>::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => {
            T::try_from(n).map_err(|_| D::Error::custom(format!("{} is out of range", n)))
        }
        Raw::Text(s) => s.trim().parse::<T>().map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_defaults_missing_optional_fields() {
        let json = r#"{"id":3,"name":"Rent","amount":950.5,"cost_type":"fixed"}"#;
        let cost: Cost = serde_json::from_str(json).unwrap();
        assert_eq!(cost.amount, dec!(950.5));
        assert_eq!(cost.cost_type, CostType::Fixed);
        assert!(!cost.is_checked);
        assert!(cost.description.is_none());
        assert!(cost.created_at.is_empty());
    }

    #[test]
    fn test_new_cost_uses_type_key() {
        let cost = NewCost {
            name: "Coffee".to_string(),
            amount: dec!(3.5),
            cost_type: CostType::Variable,
            description: None,
        };
        let value = serde_json::to_value(&cost).unwrap();
        assert_eq!(value["type"], "variable");
        assert_eq!(value["amount"], 3.5);
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_create_request_flattens_cost_and_adds_date() {
        let cost = NewCost {
            name: "Gym".to_string(),
            amount: dec!(30),
            cost_type: CostType::Fixed,
            description: Some("monthly".to_string()),
        };
        let body = CreateCostRequest {
            cost: &cost,
            date: "2025-07-01T12:00:00".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["name"], "Gym");
        assert_eq!(value["description"], "monthly");
        assert_eq!(value["date"], "2025-07-01T12:00:00");
    }

    #[test]
    fn test_marker_accepts_padded_strings_and_numbers() {
        let markers: Vec<MonthMarker> =
            serde_json::from_str(r#"[{"year":"2025","month":"07"},{"year":2025,"month":8}]"#)
                .unwrap();
        assert_eq!(markers[0], MonthMarker { year: 2025, month: 7 });
        assert_eq!(markers[1], MonthMarker { year: 2025, month: 8 });
    }

    #[test]
    fn test_marker_rejects_garbage() {
        let result: Result<MonthMarker, _> =
            serde_json::from_str(r#"{"year":"twenty","month":"07"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_budget_optional_savings_goal() {
        let json = r#"{"year":2025,"month":"07","salary":4000,"fixed_percent":50,"variable_percent":30}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.salary, dec!(4000));
        assert!(budget.savings_goal.is_none());
        assert_eq!(budget.period(), Period::new(2025, 7));
    }

    #[test]
    fn test_cost_type_parse() {
        assert_eq!("Fixed".parse::<CostType>(), Ok(CostType::Fixed));
        assert!("monthly".parse::<CostType>().is_err());
        assert_eq!(CostType::Fixed.other(), CostType::Variable);
    }
}
