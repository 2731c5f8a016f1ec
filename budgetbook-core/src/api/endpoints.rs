use reqwest::Method;
use url::Url;

use crate::error::ApiResult;
use crate::models::CostType;
use crate::period::Period;

/// Every backend route the client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListCosts(Period),
    CreateCost,
    Summary,
    DeleteCost(i64),
    SetCostType(i64),
    SetCostChecked(i64),
    UpdateCost(i64),
    ClearCosts(CostType, Period),
    PreviousCosts(Period),
    BatchAdd,
    GetBudget(Period),
    SaveBudget(Period),
    BudgetHistory,
    CostHistory,
    Chat,
    Recognize,
    Transcribe,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListCosts(_)
            | Endpoint::Summary
            | Endpoint::PreviousCosts(_)
            | Endpoint::GetBudget(_)
            | Endpoint::BudgetHistory
            | Endpoint::CostHistory => Method::GET,
            Endpoint::CreateCost
            | Endpoint::BatchAdd
            | Endpoint::SaveBudget(_)
            | Endpoint::Chat
            | Endpoint::Recognize
            | Endpoint::Transcribe => Method::POST,
            Endpoint::DeleteCost(_) | Endpoint::ClearCosts(..) => Method::DELETE,
            Endpoint::SetCostType(_) | Endpoint::SetCostChecked(_) => Method::PATCH,
            Endpoint::UpdateCost(_) => Method::PUT,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ListCosts(_) | Endpoint::CreateCost => "/api/costs".to_string(),
            Endpoint::Summary => "/api/costs/summary".to_string(),
            Endpoint::DeleteCost(id) | Endpoint::UpdateCost(id) => format!("/api/costs/{}", id),
            Endpoint::SetCostType(id) => format!("/api/costs/{}/type", id),
            Endpoint::SetCostChecked(id) => format!("/api/costs/{}/checked", id),
            Endpoint::ClearCosts(cost_type, _) => format!("/api/costs/clear/{}", cost_type),
            Endpoint::PreviousCosts(_) => "/api/costs/all_previous".to_string(),
            Endpoint::BatchAdd => "/api/costs/batch_add".to_string(),
            Endpoint::GetBudget(p) | Endpoint::SaveBudget(p) => {
                format!("/api/costs/budget/{}/{}", p.year, p.month)
            }
            Endpoint::BudgetHistory => "/api/budgets/history".to_string(),
            Endpoint::CostHistory => "/api/costs/history".to_string(),
            Endpoint::Chat => "/api/chat".to_string(),
            Endpoint::Recognize => "/api/recognize".to_string(),
            Endpoint::Transcribe => "/api/transcribe".to_string(),
        }
    }

    /// Query parameters; month-scoped routes send a zero-padded month.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::ListCosts(p) | Endpoint::ClearCosts(_, p) | Endpoint::PreviousCosts(p) => {
                vec![("year", p.year.to_string()), ("month", p.month_param())]
            }
            _ => Vec::new(),
        }
    }

    pub fn url(&self, base: &Url) -> ApiResult<Url> {
        let mut url = base.join(&self.path())?;
        let query = self.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:5000").unwrap()
    }

    fn july() -> Period {
        Period::new(2025, 7).unwrap()
    }

    #[test]
    fn test_list_costs_pads_month() {
        let url = Endpoint::ListCosts(july()).url(&base()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/costs?year=2025&month=07");
        assert_eq!(Endpoint::ListCosts(july()).method(), Method::GET);
    }

    #[test]
    fn test_clear_costs_route() {
        let endpoint = Endpoint::ClearCosts(CostType::Variable, july());
        assert_eq!(endpoint.method(), Method::DELETE);
        assert_eq!(
            endpoint.url(&base()).unwrap().as_str(),
            "http://localhost:5000/api/costs/clear/variable?year=2025&month=07"
        );
    }

    #[test]
    fn test_budget_route_uses_path_segments() {
        let url = Endpoint::SaveBudget(july()).url(&base()).unwrap();
        assert_eq!(url.path(), "/api/costs/budget/2025/7");
        assert!(url.query().is_none());
        assert_eq!(Endpoint::SaveBudget(july()).method(), Method::POST);
        assert_eq!(Endpoint::GetBudget(july()).method(), Method::GET);
    }

    #[test]
    fn test_cost_item_routes() {
        assert_eq!(Endpoint::SetCostType(9).path(), "/api/costs/9/type");
        assert_eq!(Endpoint::SetCostType(9).method(), Method::PATCH);
        assert_eq!(Endpoint::SetCostChecked(9).path(), "/api/costs/9/checked");
        assert_eq!(Endpoint::UpdateCost(9).method(), Method::PUT);
        assert_eq!(Endpoint::DeleteCost(9).method(), Method::DELETE);
    }

    #[test]
    fn test_base_with_path_prefix_is_replaced_by_absolute_route() {
        let base = Url::parse("https://budget.example.com/app/").unwrap();
        let url = Endpoint::Summary.url(&base).unwrap();
        assert_eq!(url.as_str(), "https://budget.example.com/api/costs/summary");
    }
}
