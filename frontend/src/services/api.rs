use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    AnalysisType, AvailablePeriod, InsightsRequest, InsightsResponse, NotFoundResponse,
    PayslipRecord, Period, PeriodKey, ReportPayload, SummaryRecord, SummaryRequest, UserIdentity,
};
use thiserror::Error;

use crate::config::AppConfig;

/// Shown on a 404 when the server does not say what is missing
pub const NOT_FOUND_FALLBACK: &str = "No data found for selected period";
/// Shown for every failure other than a 404
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load data. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// No payroll data for the requested period(s). The server may send the
    /// periods that do have data.
    #[error("No data found: {}", .message.as_deref().unwrap_or("no details"))]
    NotFound {
        message: Option<String>,
        available_periods: Option<Vec<AvailablePeriod>>,
    },
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Builds a not-found error from a 404 body; unreadable bodies carry no details
    pub fn from_not_found_body(body: &str) -> Self {
        let parsed: NotFoundResponse = serde_json::from_str(body).unwrap_or_default();
        ApiError::NotFound {
            message: parsed.error_message().map(str::to_string),
            available_periods: parsed.into_available_periods(),
        }
    }

    /// Message for the error banner of the reports page
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound { message, .. } => message
                .clone()
                .unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string()),
            _ => LOAD_FAILED_MESSAGE.to_string(),
        }
    }

    /// Replacement period list sent along with a 404, if any
    pub fn corrected_periods(&self) -> Option<Vec<Period>> {
        match self {
            ApiError::NotFound {
                available_periods: Some(periods),
                ..
            } => Some(shared::periods_from_available(periods.clone())),
            _ => None,
        }
    }
}

/// API client for the payroll backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client using the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Periods with payroll data for the user
    pub async fn get_available_periods(
        &self,
        identity: &UserIdentity,
    ) -> Result<Vec<AvailablePeriod>, ApiError> {
        let response = Request::get(&self.url("/available-months"))
            .query([("username", identity.username.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    /// Payslip for a single period
    pub async fn get_payslip(
        &self,
        identity: &UserIdentity,
        period: &PeriodKey,
    ) -> Result<PayslipRecord, ApiError> {
        let params = payslip_query(identity, period);
        let response = Request::get(&self.url("/payslip"))
            .query(params.iter().map(|(name, value)| (*name, value)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    /// Summary across two or more periods
    pub async fn get_summary(&self, request: &SummaryRequest) -> Result<SummaryRecord, ApiError> {
        let response = Request::post(&self.url("/api/payslip/summary"))
            .json(request)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    /// Natural-language analysis of a payslip or summary
    pub async fn generate_insights(&self, payload: &ReportPayload) -> Result<String, ApiError> {
        let request = InsightsRequest {
            payslip_data: payload,
            analysis_type: AnalysisType::Standard,
        };

        let response = Request::post(&self.url("/api/insights/generate"))
            .json(&request)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: InsightsResponse = read_json(response).await?;
        Ok(body.insights)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Query string of `GET /payslip`
pub fn payslip_query(identity: &UserIdentity, period: &PeriodKey) -> Vec<(&'static str, String)> {
    vec![
        ("username", identity.username.clone()),
        ("month", period.month.clone()),
        ("year", period.year.to_string()),
        ("period_start", period.period_start.to_string()),
        ("period_end", period.period_end.to_string()),
    ]
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status, &body))
}

fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == 404 {
        ApiError::from_not_found_body(body)
    } else {
        ApiError::Server {
            status,
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> UserIdentity {
        UserIdentity {
            username: "jdelacruz".to_string(),
        }
    }

    #[test]
    fn test_payslip_query_carries_identity_and_key() {
        let key = Period::new("January", 2025, 1, 15).key();
        let params = payslip_query(&identity(), &key);
        assert_eq!(
            params,
            vec![
                ("username", "jdelacruz".to_string()),
                ("month", "January".to_string()),
                ("year", "2025".to_string()),
                ("period_start", "1".to_string()),
                ("period_end", "15".to_string()),
            ]
        );
    }

    #[test]
    fn test_not_found_prefers_server_message() {
        let body = r#"{"detail": {"error": "No payslip for January 1-15, 2025", "available_periods": [
            {"month": "February", "year": 2025, "period_start": 1, "period_end": 15}
        ]}}"#;
        let error = classify_failure(404, body);
        assert_eq!(error.user_message(), "No payslip for January 1-15, 2025");

        let periods = error.corrected_periods().unwrap();
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].display, "February 1-15, 2025");
    }

    #[test]
    fn test_not_found_without_detail_uses_fallback() {
        let error = classify_failure(404, "not json at all");
        assert_eq!(error.user_message(), NOT_FOUND_FALLBACK);
        assert_eq!(error.corrected_periods(), None);

        let error = classify_failure(404, r#"{"detail": {"available_periods": []}}"#);
        assert_eq!(error.user_message(), NOT_FOUND_FALLBACK);
        assert_eq!(error.corrected_periods(), Some(vec![]));
    }

    #[test]
    fn test_other_failures_use_generic_message() {
        let error = classify_failure(500, "Internal Server Error");
        assert_eq!(
            error,
            ApiError::Server {
                status: 500,
                body: "Internal Server Error".to_string()
            }
        );
        assert_eq!(error.user_message(), LOAD_FAILED_MESSAGE);
        assert_eq!(ApiError::Network("offline".to_string()).user_message(), LOAD_FAILED_MESSAGE);
        assert_eq!(error.corrected_periods(), None);
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::NotFound {
            message: None,
            available_periods: None,
        };
        assert_eq!(error.to_string(), "No data found: no details");
        assert_eq!(
            ApiError::Parse("expected value".to_string()).to_string(),
            "Failed to parse response: expected value"
        );
    }

    #[test]
    fn test_client_urls() {
        let client = ApiClient::with_base_url("https://payroll.example.com".to_string());
        assert_eq!(client.base_url(), "https://payroll.example.com");
        assert_eq!(client.url("/payslip"), "https://payroll.example.com/payslip");
    }
}
