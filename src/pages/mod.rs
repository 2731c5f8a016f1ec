pub mod assistant;
pub mod history;
pub mod ledger;
