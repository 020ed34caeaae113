use std::cell::Cell;

use yew::prelude::*;
use shared::ReportPayload;
use wasm_bindgen_futures::spawn_local;
use crate::hooks::use_report_data::RequestGuard;
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

/// Shown in place of insights when generation fails
pub const INSIGHTS_FALLBACK: &str = "Unable to generate insights at this time. Please try again later.";

#[derive(Clone, PartialEq, Default)]
pub struct InsightsState {
    pub insights: Option<String>,
    pub generating: bool,
}

pub struct UseInsightsResult {
    pub state: InsightsState,
    pub actions: UseInsightsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseInsightsActions {
    pub generate_insights: Callback<()>,
}

/// At most one request in flight, tied to the view it was made for
#[derive(Debug, Default)]
pub struct InsightsTracker {
    view: RequestGuard,
    pending: Cell<bool>,
}

impl InsightsTracker {
    /// Marks a new displayed report; results for the previous one are dropped
    pub fn change_view(&self) {
        self.view.begin();
    }

    /// Returns the view ticket, or `None` while another request is pending
    pub fn try_start(&self) -> Option<u64> {
        if self.pending.replace(true) {
            None
        } else {
            Some(self.view.ticket())
        }
    }

    /// Ends the pending request; returns whether its view is still displayed
    pub fn finish(&self, ticket: u64) -> bool {
        self.pending.set(false);
        self.view.is_current(ticket)
    }
}

/// Text shown for a finished insights request
pub fn insight_text(result: Result<String, ApiError>) -> String {
    result.unwrap_or_else(|_| INSIGHTS_FALLBACK.to_string())
}

/// Hook generating AI insights for the displayed report on demand
#[hook]
pub fn use_insights(api_client: &ApiClient, report: Option<&ReportPayload>) -> UseInsightsResult {
    let insights = use_state(|| Option::<String>::None);
    let generating = use_state(|| false);
    let tracker = use_memo((), |_| InsightsTracker::default());
    let report = report.cloned();

    // Insight text belongs to one view; drop it when the report changes
    {
        let insights = insights.clone();
        let tracker = tracker.clone();
        use_effect_with(report.clone(), move |_| {
            tracker.change_view();
            insights.set(None);
            || ()
        });
    }

    let generate_insights = {
        let api_client = api_client.clone();
        let insights = insights.clone();
        let generating = generating.clone();
        let tracker = tracker.clone();

        use_callback(report, move |_, report| {
            let Some(payload) = report.clone() else {
                return;
            };
            let Some(ticket) = tracker.try_start() else {
                Logger::debug_with_component("insights", "Insights already generating, ignoring request");
                return;
            };

            let api_client = api_client.clone();
            let insights = insights.clone();
            let generating = generating.clone();
            let tracker = tracker.clone();

            generating.set(true);
            spawn_local(async move {
                let result = api_client.generate_insights(&payload).await;
                if let Err(e) = &result {
                    Logger::error_with_component("insights", &format!("Error getting insights: {}", e));
                }
                let text = insight_text(result);

                if tracker.finish(ticket) {
                    insights.set(Some(text));
                } else {
                    Logger::debug_with_component("insights", "Discarding insights for a previous report");
                }
                generating.set(false);
            });
        })
    };

    let state = InsightsState {
        insights: (*insights).clone(),
        generating: *generating,
    };

    let actions = UseInsightsActions { generate_insights };

    UseInsightsResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_request_ignored_while_pending() {
        let tracker = InsightsTracker::default();
        let ticket = tracker.try_start().unwrap();
        assert_eq!(tracker.try_start(), None);

        assert!(tracker.finish(ticket));
        assert!(tracker.try_start().is_some());
    }

    #[test]
    fn test_result_for_previous_view_is_discarded() {
        let tracker = InsightsTracker::default();
        tracker.change_view();
        let ticket = tracker.try_start().unwrap();

        tracker.change_view();
        assert!(!tracker.finish(ticket));

        // Pending flag is released either way
        assert!(tracker.try_start().is_some());
    }

    #[test]
    fn test_failed_request_shows_fallback() {
        let tracker = InsightsTracker::default();
        let ticket = tracker.try_start().unwrap();

        let text = insight_text(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(text, INSIGHTS_FALLBACK);
        assert!(tracker.finish(ticket));
        assert!(tracker.try_start().is_some());
    }

    #[test]
    fn test_insight_text_passes_through() {
        let text = "- Net pay rose in March\n- SSS stayed flat".to_string();
        assert_eq!(insight_text(Ok(text.clone())), text);
    }
}
