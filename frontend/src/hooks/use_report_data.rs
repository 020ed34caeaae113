use std::cell::Cell;

use yew::prelude::*;
use shared::{Period, PeriodKey, ReportPayload, SelectionSet, SummaryRequest, UserIdentity};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

/// Lifecycle of the report for the current selection
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReportStatus {
    #[default]
    Idle,
    Loading,
    Loaded(ReportPayload),
    Failed(String),
}

impl ReportStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ReportStatus::Loading)
    }

    pub fn report(&self) -> Option<&ReportPayload> {
        match self {
            ReportStatus::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ReportStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Request to send for a selection
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRequest {
    /// Nothing selected, nothing to fetch
    None,
    Payslip(PeriodKey),
    Summary(SummaryRequest),
}

impl ReportRequest {
    /// One period fetches a payslip, two or more a summary
    pub fn plan(identity: &UserIdentity, selection: &[PeriodKey]) -> Self {
        match selection {
            [] => ReportRequest::None,
            [key] => ReportRequest::Payslip(key.clone()),
            keys => ReportRequest::Summary(SummaryRequest {
                username: identity.username.clone(),
                selected_periods: keys.to_vec(),
            }),
        }
    }

    async fn send(&self, api_client: &ApiClient, identity: &UserIdentity) -> Option<Result<ReportPayload, ApiError>> {
        match self {
            ReportRequest::None => None,
            ReportRequest::Payslip(key) => Some(
                api_client
                    .get_payslip(identity, key)
                    .await
                    .map(ReportPayload::Payslip),
            ),
            ReportRequest::Summary(request) => Some(
                api_client
                    .get_summary(request)
                    .await
                    .map(ReportPayload::Summary),
            ),
        }
    }
}

/// Hands out request tickets; only the latest ticket is current.
///
/// A response is applied only if its ticket is still current, so a slow
/// answer for an old selection never overwrites a newer one.
#[derive(Debug, Default)]
pub struct RequestGuard {
    current: Cell<u64>,
}

impl RequestGuard {
    /// Starts a new request generation and returns its ticket
    pub fn begin(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    pub fn ticket(&self) -> u64 {
        self.current.get()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }
}

pub struct UseReportDataResult {
    pub state: ReportStatus,
}

/// Hook fetching the payslip or summary for the selected periods.
///
/// Every selection change starts a new request generation. When a 404 comes
/// with the periods that do have data, `on_periods_corrected` receives them.
#[hook]
pub fn use_report_data(
    api_client: &ApiClient,
    identity: &UserIdentity,
    selection: &SelectionSet,
    on_periods_corrected: Callback<Vec<Period>>,
) -> UseReportDataResult {
    let status = use_state(ReportStatus::default);
    let guard = use_memo((), |_| RequestGuard::default());
    let keys = selection.keys();

    {
        let api_client = api_client.clone();
        let status = status.clone();
        let guard = guard.clone();

        use_effect_with((identity.clone(), keys), move |(identity, keys)| {
            let ticket = guard.begin();
            let request = ReportRequest::plan(identity, keys);

            if request == ReportRequest::None {
                status.set(ReportStatus::Idle);
            } else {
                status.set(ReportStatus::Loading);
                let identity = identity.clone();

                spawn_local(async move {
                    let Some(result) = request.send(&api_client, &identity).await else {
                        return;
                    };

                    if !guard.is_current(ticket) {
                        Logger::debug_with_component("report-data", "Discarding response for a previous selection");
                        return;
                    }

                    match result {
                        Ok(report) => status.set(ReportStatus::Loaded(report)),
                        Err(e) => {
                            Logger::error_with_component("report-data", &format!("Failed to load report: {}", e));
                            if let Some(periods) = e.corrected_periods() {
                                on_periods_corrected.emit(periods);
                            }
                            status.set(ReportStatus::Failed(e.user_message()));
                        }
                    }
                });
            }

            || ()
        });
    }

    UseReportDataResult {
        state: (*status).clone(),
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
    fn test_plan_empty_selection() {
        assert_eq!(ReportRequest::plan(&identity(), &[]), ReportRequest::None);
    }

    #[test]
    fn test_plan_single_period_fetches_payslip() {
        let key = Period::new("January", 2025, 1, 15).key();
        assert_eq!(
            ReportRequest::plan(&identity(), &[key.clone()]),
            ReportRequest::Payslip(key)
        );
    }

    #[test]
    fn test_plan_multiple_periods_fetch_summary() {
        for count in [2, 7, 12] {
            let keys: Vec<PeriodKey> = shared::MONTHS[..count]
                .iter()
                .map(|month| Period::new(*month, 2025, 1, 15).key())
                .collect();

            match ReportRequest::plan(&identity(), &keys) {
                ReportRequest::Summary(request) => {
                    assert_eq!(request.username, "jdelacruz");
                    assert_eq!(request.selected_periods, keys);
                }
                other => panic!("expected a summary request, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_request_guard_only_latest_ticket_is_current() {
        let guard = RequestGuard::default();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert_eq!(guard.ticket(), second);
    }

    #[test]
    fn test_report_status_accessors() {
        assert!(ReportStatus::Loading.is_loading());
        assert_eq!(ReportStatus::Idle.report(), None);
        assert_eq!(
            ReportStatus::Failed("No data found for selected period".to_string()).error(),
            Some("No data found for selected period")
        );
    }
}
