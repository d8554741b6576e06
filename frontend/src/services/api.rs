use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Category, CategoryBreakdownRow, DashboardSummary, MonthlySummaryRow, NewCategory,
    NewTransaction, Transaction, TransactionKind, TrendRow,
};
use thiserror::Error;

/// The app is served by the same host as the API, so the default root is a
/// relative path.
pub const DEFAULT_API_ROOT: &str = "/api";

/// Transport and protocol failures, normalised into one shape for callers.
/// Errors are communicated by HTTP status only; no structured error body is
/// assumed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network-level failure: unreachable host, aborted request.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    RequestFailed(u16),
    /// The response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// An [`ApiError`] that occurred while refreshing part of the client
/// snapshot. The snapshot it was refreshing is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to load {what}: {source}")]
pub struct LoadError {
    what: &'static str,
    source: ApiError,
}

impl LoadError {
    pub fn new(what: &'static str, source: ApiError) -> Self {
        Self { what, source }
    }
}

fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::RequestFailed(status))
    }
}

/// Thin client for the finance REST API. One method per endpoint; no
/// retries, the caller decides whether a failure reaches the user.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_ROOT.to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(response.status())?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(response.status())?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        // The body is an acknowledgement message; only the status matters.
        check_status(response.status())
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json("/dashboard").await
    }

    pub async fn fetch_monthly_summary(&self) -> Result<Vec<MonthlySummaryRow>, ApiError> {
        self.get_json("/estadisticas/resumen-mensual").await
    }

    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/transacciones").await
    }

    pub async fn create_transaction(&self, body: &NewTransaction) -> Result<Transaction, ApiError> {
        self.post_json("/transacciones", body).await
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/transacciones/{id}")).await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categorias").await
    }

    pub async fn create_category(&self, body: &NewCategory) -> Result<Category, ApiError> {
        self.post_json("/categorias", body).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/categorias/{id}")).await
    }

    pub async fn fetch_category_breakdown(
        &self,
        kind: TransactionKind,
    ) -> Result<Vec<CategoryBreakdownRow>, ApiError> {
        self.get_json(&format!("/estadisticas/por-categoria?tipo={}", kind.as_wire()))
            .await
    }

    pub async fn fetch_trends(&self) -> Result<Vec<TrendRow>, ApiError> {
        self.get_json("/estadisticas/tendencias").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(201), Ok(()));
        assert_eq!(check_status(204), Ok(()));
    }

    #[test]
    fn failure_statuses_map_to_request_failed() {
        assert_eq!(check_status(404), Err(ApiError::RequestFailed(404)));
        assert_eq!(check_status(500), Err(ApiError::RequestFailed(500)));
        assert_eq!(check_status(301), Err(ApiError::RequestFailed(301)));
    }

    #[test]
    fn load_error_reports_what_and_cause() {
        let err = LoadError::new("transactions", ApiError::RequestFailed(500));
        assert_eq!(
            err.to_string(),
            "failed to load transactions: request failed with status 500"
        );
    }
}
