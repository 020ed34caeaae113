use yew::prelude::*;
use shared::{ReportPayload, UserIdentity};
use super::insights_panel::InsightsPanel;
use super::payslip_view::PayslipView;
use super::period_picker::PeriodPicker;
use super::summary_view::SummaryView;
use crate::config::AppConfig;
use crate::hooks::use_available_periods::use_available_periods;
use crate::hooks::use_insights::use_insights;
use crate::hooks::use_period_selection::use_period_selection;
use crate::hooks::use_report_data::use_report_data;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::print;

#[derive(Properties, PartialEq)]
pub struct ReportsPageProps {
    pub identity: UserIdentity,
    pub api_client: ApiClient,
    pub config: AppConfig,
}

#[function_component(ReportsPage)]
pub fn reports_page(props: &ReportsPageProps) -> Html {
    let periods = use_available_periods(&props.api_client, &props.identity);
    let selection = use_period_selection();
    let report = use_report_data(
        &props.api_client,
        &props.identity,
        &selection.state.selection,
        periods.actions.replace_periods.clone(),
    );
    let insights = use_insights(&props.api_client, report.state.report());

    let selected_count = selection.state.selection.len();

    let on_print = {
        let report = report.state.report().cloned();
        let print_delay_ms = props.config.print_delay_ms;
        Callback::from(move |_: ()| {
            let today = chrono::Local::now().date_naive();
            let document = print::prepare_print_document(selected_count, report.as_ref(), today);
            if let Err(e) = print::print_report(document, print_delay_ms) {
                Logger::error_with_component("reports-page", &format!("Printing failed: {}", e));
            }
        })
    };

    let insights_panel = html! {
        <InsightsPanel state={insights.state.clone()} actions={insights.actions.clone()} />
    };

    let report_view = match report.state.report() {
        Some(ReportPayload::Payslip(payslip)) if selected_count == 1 => html! {
            <PayslipView payslip={payslip.clone()} on_print={on_print.clone()}>
                {insights_panel}
            </PayslipView>
        },
        Some(ReportPayload::Summary(summary)) if selected_count > 1 => html! {
            <SummaryView summary={summary.clone()} on_print={on_print.clone()}>
                {insights_panel}
            </SummaryView>
        },
        _ => html! {},
    };

    html! {
        <div class="reports-page">
            <div class="container">
                <div class="page-header">
                    <h1>{"Payroll Reports"}</h1>
                    <p>{"Generate and view your payroll summaries and detailed reports"}</p>
                </div>

                <PeriodPicker
                    available={periods.state.periods.clone()}
                    selection={selection.state.selection.clone()}
                    filter={selection.state.filter.clone()}
                    actions={selection.actions.clone()}
                    max_periods={props.config.max_selected_periods}
                    loading={periods.state.loading}
                />

                if report.state.is_loading() {
                    <div class="loading-card">
                        <div class="spinner"></div>
                        <p>{"Loading your payroll data..."}</p>
                    </div>
                }

                if let Some(message) = report.state.error() {
                    <div class="error-banner">
                        <span class="error-icon">{"!"}</span>
                        <p>{message.to_string()}</p>
                    </div>
                }

                {report_view}
            </div>
        </div>
    }
}
