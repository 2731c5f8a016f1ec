//! User actions: one backend call each, followed by the refetches that keep
//! the ledger in sync. Failures are logged to the console and returned so
//! the caller can show them; shared state is only touched on success.

use budgetbook_core::models::CostUpdate;
use budgetbook_core::{ApiClient, Budget, CostType, NewCost};
use leptos::prelude::*;

use crate::browser::log_error;
use crate::state::LedgerState;

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

// -- Reloads --

pub async fn reload_summary(api: &ApiClient, state: LedgerState) {
    match api.monthly_summary().await {
        Ok(markers) => state.markers.set(markers),
        Err(e) => log_error("Failed to fetch monthly summary", e),
    }
}

pub async fn reload_costs(api: &ApiClient, state: LedgerState) {
    let period = state.period.get_untracked();
    match api.list_costs(period).await {
        // The user may have picked another month while this was in flight.
        Ok(costs) if state.period.get_untracked() == period => state.costs.set(costs),
        Ok(_) => {}
        Err(e) => log_error("Failed to fetch costs", e),
    }
}

pub async fn reload_budget(api: &ApiClient, state: LedgerState) {
    let period = state.period.get_untracked();
    match api.budget(period).await {
        Ok(budget) if state.period.get_untracked() == period => state.budget.set(budget),
        Ok(_) => {}
        Err(e) => log_error("Failed to fetch budget", e),
    }
}

/// After adding or removing costs: the summary first, since the month may
/// have gained or lost its only entry.
async fn reload_after_change(api: &ApiClient, state: LedgerState) {
    reload_summary(api, state).await;
    reload_costs(api, state).await;
}

// -- Cost mutations --

pub async fn add_cost(api: &ApiClient, state: LedgerState, cost: NewCost) -> Result<(), String> {
    let period = state.period.get_untracked();
    api.create_cost(&cost, period).await.map_err(|e| {
        log_error("Error adding cost", &e);
        String::from(e)
    })?;
    reload_after_change(api, state).await;
    Ok(())
}

pub async fn delete_cost(api: &ApiClient, state: LedgerState, id: i64) -> Result<(), String> {
    api.delete_cost(id).await.map_err(|e| {
        log_error(&format!("Error deleting cost {}", id), &e);
        String::from(e)
    })?;
    reload_after_change(api, state).await;
    Ok(())
}

pub async fn clear_costs(
    api: &ApiClient,
    state: LedgerState,
    cost_type: CostType,
) -> Result<(), String> {
    let period = state.period.get_untracked();
    api.clear_costs(cost_type, period).await.map_err(|e| {
        log_error(&format!("Error clearing {} costs", cost_type), &e);
        String::from(e)
    })?;
    reload_after_change(api, state).await;
    Ok(())
}

pub async fn move_cost(
    api: &ApiClient,
    state: LedgerState,
    id: i64,
    cost_type: CostType,
) -> Result<(), String> {
    api.set_cost_type(id, cost_type).await.map_err(|e| {
        log_error(&format!("Error updating cost {}", id), &e);
        String::from(e)
    })?;
    reload_costs(api, state).await;
    Ok(())
}

pub async fn set_checked(
    api: &ApiClient,
    state: LedgerState,
    id: i64,
    is_checked: bool,
) -> Result<(), String> {
    api.set_cost_checked(id, is_checked).await.map_err(|e| {
        log_error(&format!("Error updating cost {}", id), &e);
        String::from(e)
    })?;
    reload_costs(api, state).await;
    Ok(())
}

pub async fn update_cost(
    api: &ApiClient,
    state: LedgerState,
    id: i64,
    update: CostUpdate,
) -> Result<(), String> {
    api.update_cost(id, &update).await.map_err(|e| {
        log_error(&format!("Error editing cost {}", id), &e);
        String::from(e)
    })?;
    reload_costs(api, state).await;
    Ok(())
}

/// Log several costs into the selected month at once (carry-over and
/// assistant proposals).
pub async fn import_costs(
    api: &ApiClient,
    state: LedgerState,
    costs: Vec<NewCost>,
) -> Result<usize, String> {
    if costs.is_empty() {
        return Ok(0);
    }
    let period = state.period.get_untracked();
    api.batch_add(period, &costs).await.map_err(|e| {
        log_error("Error adding costs", &e);
        String::from(e)
    })?;
    reload_after_change(api, state).await;
    Ok(costs.len())
}

// -- Budget --

pub async fn save_budget(api: &ApiClient, state: LedgerState, budget: Budget) -> Result<(), String> {
    api.save_budget(&budget).await.map_err(|e| {
        log_error("Error saving budget", &e);
        String::from(e)
    })?;
    reload_budget(api, state).await;
    Ok(())
}
