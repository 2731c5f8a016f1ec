pub mod api;
pub mod assistant;
pub mod config;
mod error;
pub mod history;
pub mod ledger;
pub mod models;
pub mod money;
pub mod period;
pub mod picker;
pub mod split;
pub mod validation;

pub use api::{ApiClient, Endpoint};
pub use error::{ApiError, ApiResult, ValidationError};
pub use models::{Budget, Cost, CostType, MonthMarker, NewCost};
pub use money::Currency;
pub use period::Period;
pub use rust_decimal::Decimal;
