//! Typed client for the budget REST backend.
//!
//! One method per route. Nothing is retried; a failure is returned to the
//! caller, which keeps whatever it was showing before.

pub mod endpoints;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::assistant::{
    ChatReply, ChatRequest, RecognizeResponse, TranscribeResponse, UploadPayload,
};
use crate::error::{ApiError, ApiResult, ValidationError};
use crate::models::{
    BatchAddRequest, Budget, CheckedChange, Cost, CostHistoryEntry, CostType, CostUpdate,
    CreateCostRequest, MonthMarker, NewCost, TypeChange,
};
use crate::period::Period;
use crate::validation::CostDraft;

pub use endpoints::Endpoint;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let url = endpoint.url(&self.base)?;
        let method = endpoint.method();
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("{} {} failed with status {}", method, endpoint.path(), status);
            return Err(ApiError::Status {
                method: method.to_string(),
                path: endpoint.path(),
                status,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let response = self.send::<()>(endpoint, None).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(endpoint, Some(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// For routes whose response body carries nothing the client needs.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> ApiResult<()> {
        self.send(endpoint, body).await.map(|_| ())
    }

    // -- Costs --

    pub async fn list_costs(&self, period: Period) -> ApiResult<Vec<Cost>> {
        self.get_json(Endpoint::ListCosts(period)).await
    }

    pub async fn create_cost(&self, cost: &NewCost, period: Period) -> ApiResult<()> {
        let body = CreateCostRequest {
            cost,
            date: period.expense_date(),
        };
        self.execute(Endpoint::CreateCost, Some(&body)).await
    }

    /// Validate form input and create the cost. Invalid drafts never reach
    /// the network.
    pub async fn submit_draft(&self, draft: &CostDraft, period: Period) -> ApiResult<NewCost> {
        let cost = draft.validate()?;
        self.create_cost(&cost, period).await?;
        Ok(cost)
    }

    pub async fn monthly_summary(&self) -> ApiResult<Vec<MonthMarker>> {
        self.get_json(Endpoint::Summary).await
    }

    pub async fn delete_cost(&self, id: i64) -> ApiResult<()> {
        self.execute::<()>(Endpoint::DeleteCost(id), None).await
    }

    pub async fn set_cost_type(&self, id: i64, cost_type: CostType) -> ApiResult<()> {
        self.execute(Endpoint::SetCostType(id), Some(&TypeChange { cost_type }))
            .await
    }

    pub async fn set_cost_checked(&self, id: i64, is_checked: bool) -> ApiResult<()> {
        self.execute(Endpoint::SetCostChecked(id), Some(&CheckedChange { is_checked }))
            .await
    }

    pub async fn update_cost(&self, id: i64, update: &CostUpdate) -> ApiResult<()> {
        self.execute(Endpoint::UpdateCost(id), Some(update)).await
    }

    pub async fn clear_costs(&self, cost_type: CostType, period: Period) -> ApiResult<()> {
        self.execute::<()>(Endpoint::ClearCosts(cost_type, period), None)
            .await
    }

    /// Costs of the month before `period`, as candidates for carrying over.
    pub async fn previous_costs(&self, period: Period) -> ApiResult<Vec<Cost>> {
        self.get_json(Endpoint::PreviousCosts(period)).await
    }

    pub async fn batch_add(&self, period: Period, expenses: &[NewCost]) -> ApiResult<()> {
        let body = BatchAddRequest {
            year: period.year,
            month: period.month_param(),
            expenses,
        };
        self.execute(Endpoint::BatchAdd, Some(&body)).await
    }

    // -- Budget --

    /// The month's budget, or `None` when none has been saved yet.
    pub async fn budget(&self, period: Period) -> ApiResult<Option<Budget>> {
        match self.send::<()>(Endpoint::GetBudget(period), None).await {
            Ok(response) => Ok(response.json::<Option<Budget>>().await?),
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn save_budget(&self, budget: &Budget) -> ApiResult<()> {
        let period = budget
            .period()
            .ok_or(ValidationError::InvalidMonth(budget.month))?;
        self.execute(Endpoint::SaveBudget(period), Some(budget)).await
    }

    // -- History --

    pub async fn budget_history(&self) -> ApiResult<Vec<Budget>> {
        self.get_json(Endpoint::BudgetHistory).await
    }

    pub async fn cost_history(&self) -> ApiResult<Vec<CostHistoryEntry>> {
        self.get_json(Endpoint::CostHistory).await
    }

    // -- Assistant --

    pub async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatReply> {
        self.post_json(Endpoint::Chat, request).await
    }

    pub async fn recognize(&self, upload: &UploadPayload) -> ApiResult<RecognizeResponse> {
        self.post_json(Endpoint::Recognize, upload).await
    }

    pub async fn transcribe(&self, upload: &UploadPayload) -> ApiResult<TranscribeResponse> {
        self.post_json(Endpoint::Transcribe, upload).await
    }
}
