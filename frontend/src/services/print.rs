//! Printable payslip and summary documents.
//!
//! The builders are pure: they turn a loaded record into a self-contained HTML
//! document (inline styles only). [`print_report`] performs the browser side
//! effect of opening a window, writing the document and invoking print.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use shared::{
    format_currency, format_optional_currency, format_optional_quantity, BreakdownRow,
    PayslipRecord, ReportPayload, SummaryRecord,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};
use crate::services::logging::Logger;

/// Summaries with more periods than this print in landscape
pub const PORTRAIT_MAX_PERIODS: usize = 3;

const CELL: &str = "padding: 6px; border: 1px solid #ccc;";
const CELL_RIGHT: &str = "padding: 6px; text-align: right; border: 1px solid #ccc;";
const CELL_BOLD: &str = "padding: 6px; font-weight: bold; border: 1px solid #ccc;";
const CELL_BOLD_RIGHT: &str = "padding: 6px; text-align: right; font-weight: bold; border: 1px solid #ccc;";
const HEADER_CELL: &str = "padding: 8px; text-align: left; border: 1px solid #ccc;";
const HEADER_CELL_RIGHT: &str = "padding: 8px; text-align: right; border: 1px solid #ccc;";
const NET_PAY_LABEL: &str = "padding: 10px; font-size: 16px; font-weight: bold; text-align: center; border: 1px solid #ccc;";
const NET_PAY_AMOUNT: &str = "padding: 10px; font-size: 16px; font-weight: bold; text-align: right; border: 1px solid #ccc;";

const PAYSLIP_CSS: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f2f2f2; font-weight: bold; }
.text-right { text-align: right; }
.text-center { text-align: center; }
.font-bold { font-weight: bold; }
"#;

/// Amount next to an earning label. The base rate row always shows a value,
/// padding rows below the bonuses stay blank.
fn earning_amount_cell(index: usize, amount: Option<f64>) -> String {
    if index == 0 {
        format_optional_currency(amount)
    } else {
        amount.map(format_currency).unwrap_or_default()
    }
}

fn payslip_info(record: &PayslipRecord) -> Markup {
    html! {
        div style="margin-bottom: 20px;" {
            p { strong { "Payroll Period:" } " " (record.period) }
            p { strong { "Employment Type:" } " " (record.employment_type.label()) }
            @if record.employment_type.is_regular() {
                p { strong { "Salary Grade:" } " " (record.salary_grade.as_deref().unwrap_or("")) }
                p {
                    strong { "Worked Days:" } " "
                    (format_optional_quantity(record.days_present)) " / " (format_optional_quantity(record.working_days))
                }
            } @else {
                p { strong { "Total Hours:" } " " (format_optional_quantity(record.total_hours)) " hours" }
            }
        }
    }
}

/// Printable single-period payslip
pub fn build_payslip_document(record: &PayslipRecord) -> String {
    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { "Payslip - " (record.full_name) }
                style { (PreEscaped(PAYSLIP_CSS)) }
            }
            body {
                div style="padding: 20px; font-family: Arial, sans-serif;" {
                    div style="text-align: center; margin-bottom: 20px;" {
                        h1 style="margin: 0;" { (record.full_name) }
                    }
                    (payslip_info(record))
                    div style="margin-bottom: 30px;" {
                        table style="width: 100%; border-collapse: collapse;" {
                            thead {
                                tr style="background-color: #f2f2f2;" {
                                    th style=(HEADER_CELL) { "Earnings" }
                                    th style=(HEADER_CELL_RIGHT) { "Amount" }
                                    th style=(HEADER_CELL) { "Deductions" }
                                    th style=(HEADER_CELL_RIGHT) { "Amount" }
                                }
                            }
                            tbody {
                                @for (index, row) in record.combined_rows().iter().enumerate() {
                                    tr {
                                        td style=(CELL) { (row.earning_label) }
                                        td style=(CELL_RIGHT) { (earning_amount_cell(index, row.earning_amount)) }
                                        @match row.deduction {
                                            Some(deduction) => {
                                                td style=(CELL) { (deduction.label) }
                                                td style=(CELL_RIGHT) { (format_currency(deduction.amount)) }
                                            },
                                            None => {
                                                td style=(CELL) {}
                                                td style=(CELL_RIGHT) {}
                                            },
                                        }
                                    }
                                }
                                tr.totals-row {
                                    td style=(CELL_BOLD) { "Total Earnings" }
                                    td style=(CELL_BOLD_RIGHT) { (format_currency(record.gross_income)) }
                                    td style=(CELL_BOLD) { "Total Deductions" }
                                    td style=(CELL_BOLD_RIGHT) { (format_currency(record.total_deductions())) }
                                }
                                tr.net-pay-row {
                                    td colspan="2" style=(NET_PAY_LABEL) { "Net Pay" }
                                    td colspan="2" style=(NET_PAY_AMOUNT) { (format_currency(record.net_pay)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}

/// Page layout of a printed summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLayout {
    /// Compact portrait page for up to three periods
    Portrait,
    /// Denser landscape page for four or more periods
    Landscape,
}

impl SummaryLayout {
    pub fn for_period_count(count: usize) -> Self {
        if count <= PORTRAIT_MAX_PERIODS {
            SummaryLayout::Portrait
        } else {
            SummaryLayout::Landscape
        }
    }

    fn stylesheet(&self) -> String {
        let (body_font, h1_font, info_margin, h2_font, h2_margin, table_margin, cell_padding) =
            match self {
                SummaryLayout::Portrait => (12, 18, 10, 14, 15, 15, 5),
                SummaryLayout::Landscape => (11, 16, 8, 13, 10, 10, 4),
            };
        let (footer_font, footer_margin, footer_padding, page_size, page_margin) = match self {
            SummaryLayout::Portrait => (10, 10, 5, "portrait", 10),
            SummaryLayout::Landscape => (9, 8, 4, "landscape", 7),
        };

        format!(
            r#"body {{ font-family: Arial, sans-serif; margin: 0; padding: 15px; font-size: {body_font}px; }}
.summary-report {{ width: 100%; max-width: 100%; }}
h1 {{ font-size: {h1_font}px; margin: 5px 0; text-align: center; }}
.employee-info {{ text-align: center; margin-bottom: {info_margin}px; font-size: {body_font}px; }}
h2 {{ font-size: {h2_font}px; margin: {h2_margin}px 0 5px 0; border-bottom: 1px solid #000; padding-bottom: 3px; }}
table {{ width: 100%; border-collapse: collapse; margin-bottom: {table_margin}px; page-break-inside: avoid; }}
th, td {{ padding: {cell_padding}px; text-align: left; border: 1px solid #ddd; }}
th {{ background-color: #f2f2f2; font-weight: bold; }}
.text-right {{ text-align: right; }}
.text-center {{ text-align: center; }}
.font-bold {{ font-weight: bold; }}
.nowrap {{ white-space: nowrap; }}
.total-row {{ font-weight: bold; background-color: #f5f5f5; }}
.footer {{ text-align: center; font-size: {footer_font}px; margin-top: {footer_margin}px; padding-top: {footer_padding}px; }}
@media print {{
  @page {{ size: {page_size}; margin: {page_margin}mm; }}
}}"#
        )
    }

    /// Class added to period labels so wide tables keep them on one line
    fn label_class(&self) -> Option<&'static str> {
        match self {
            SummaryLayout::Portrait => None,
            SummaryLayout::Landscape => Some("nowrap"),
        }
    }

    fn period_header_class(&self) -> &'static str {
        match self {
            SummaryLayout::Portrait => "text-right",
            SummaryLayout::Landscape => "text-right nowrap",
        }
    }
}

/// Printable multi-period summary
pub fn build_summary_document(record: &SummaryRecord, generated_on: NaiveDate) -> String {
    let layout = SummaryLayout::for_period_count(record.periods.len());
    let label_class = layout.label_class();
    let labels = record.period_labels();
    let totals = record.summary_totals();

    let period_headers = html! {
        @for label in &labels {
            th class=(layout.period_header_class()) { (*label) }
        }
    };

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { "Payroll Summary Report - " (record.full_name) }
                style { (PreEscaped(layout.stylesheet())) }
            }
            body {
                div.summary-report {
                    h1 { "Payroll Summary Report" }
                    div.employee-info {
                        (record.full_name) br;
                        (record.employee_line()) br;
                        "Period: " (record.periods.join(", "))
                    }

                    h2 { "Period Summary" }
                    table.period-summary {
                        thead {
                            tr {
                                th { "Period" }
                                th.text-right { "Income" }
                                th.text-right { "Deductions" }
                                th.text-right { "Net Pay" }
                            }
                        }
                        tbody {
                            @for (label, row) in record.period_rows() {
                                tr {
                                    td class=[label_class] { (label) }
                                    td.text-right { (format_currency(row.gross_income)) }
                                    td.text-right { (format_currency(row.total_deductions)) }
                                    td.text-right { (format_currency(row.net_income)) }
                                }
                            }
                            tr.total-row {
                                td { "TOTAL" }
                                td.text-right { (format_currency(totals.gross_income)) }
                                td.text-right { (format_currency(totals.total_deductions)) }
                                td.text-right { (format_currency(totals.net_income)) }
                            }
                        }
                    }

                    h2 { "Income Breakdown" }
                    table.income-breakdown {
                        thead {
                            tr {
                                th { "Income Type" }
                                (period_headers)
                                th.text-right { "Total" }
                            }
                        }
                        tbody { (breakdown_rows(&record.income_rows(), &labels, label_class)) }
                    }

                    h2 { "Deduction Breakdown" }
                    table.deduction-breakdown {
                        thead {
                            tr {
                                th { "Deduction Type" }
                                (period_headers)
                                th.text-right { "Total" }
                                th.text-right { "Current Balance" }
                            }
                        }
                        tbody { (breakdown_rows(&record.deduction_rows(), &labels, label_class)) }
                    }

                    div.footer {
                        "This is a system generated payroll summary report" br;
                        "Generated on: " (generated_on.format("%-m/%-d/%Y").to_string())
                    }
                }
            }
        }
    };
    markup.into_string()
}

fn breakdown_rows(rows: &[BreakdownRow<'_>], labels: &[&str], label_class: Option<&str>) -> Markup {
    html! {
        @for row in rows {
            tr {
                td class=[label_class] { (row.label) }
                @for label in labels {
                    td.text-right { (format_optional_currency(row.amount_for(label))) }
                }
                td.text-right.font-bold { (format_currency(row.total)) }
                @if let Some(balance) = row.balance {
                    td.text-right { (format_currency(balance)) }
                }
            }
        }
    }
}

/// Document to print for the current page state, if there is anything to print.
///
/// One selected period prints the payslip; two or more print the summary,
/// provided it has a period summary.
pub fn prepare_print_document(
    selected_count: usize,
    report: Option<&ReportPayload>,
    generated_on: NaiveDate,
) -> Option<String> {
    match report? {
        ReportPayload::Payslip(payslip) if selected_count == 1 => Some(build_payslip_document(payslip)),
        ReportPayload::Summary(summary) if selected_count > 1 && summary.has_period_summary() => {
            Some(build_summary_document(summary, generated_on))
        }
        _ => None,
    }
}

fn open_print_window() -> Result<Window> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No browser window available"))?;
    window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| anyhow!("Failed to open print window: {:?}", e))?
        .ok_or_else(|| anyhow!("Print window was blocked"))
}

fn write_document(print_window: &Window, html: &str) -> Result<()> {
    let print_document: HtmlDocument = print_window
        .document()
        .ok_or_else(|| anyhow!("Print window has no document"))?
        .dyn_into()
        .map_err(|_| anyhow!("Print window document is not an HTML document"))?;

    print_document
        .write_1(html)
        .map_err(|e| anyhow!("Failed to write print document: {:?}", e))?;
    print_document
        .close()
        .map_err(|e| anyhow!("Failed to finish print document: {:?}", e))
}

/// Opens a new window, writes `document` into it and shows the print dialog
/// after `delay_ms`. Without a document the new window is closed right away.
pub fn print_report(document: Option<String>, delay_ms: u32) -> Result<()> {
    let print_window = open_print_window()?;

    let Some(html) = document else {
        print_window
            .close()
            .map_err(|e| anyhow!("Failed to close print window: {:?}", e))?;
        return Ok(());
    };

    write_document(&print_window, &html)?;
    if let Err(e) = print_window.focus() {
        Logger::warn_with_component("print", &format!("Failed to focus print window: {:?}", e));
    }

    gloo::timers::callback::Timeout::new(delay_ms, move || {
        if let Err(e) = print_window.print() {
            Logger::warn_with_component("print", &format!("Print dialog failed: {:?}", e));
        }
    })
    .forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BonusItem, DeductionItem, EmploymentType};

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    fn sss_payslip() -> PayslipRecord {
        PayslipRecord {
            full_name: "Juan Dela Cruz".to_string(),
            period: "January 1-15, 2025".to_string(),
            employment_type: EmploymentType::Regular,
            salary_grade: Some("11".to_string()),
            rate_per_month: Some(20000.0),
            working_days: Some(11.0),
            days_present: Some(10.0),
            gross_income: 20000.0,
            net_pay: 19500.0,
            deductions: vec![DeductionItem {
                label: "SSS".to_string(),
                amount: 500.0,
                balance: None,
            }],
            ..Default::default()
        }
    }

    fn summary_with_periods(count: usize) -> SummaryRecord {
        let mut record = SummaryRecord {
            full_name: "Juan Dela Cruz".to_string(),
            employment_type: EmploymentType::Regular,
            salary_grade: Some("11".to_string()),
            ..Default::default()
        };
        for i in 0..count {
            let label = format!("Period {:02}", i + 1);
            record.periods.push(label.clone());
            record.period_summary.insert(
                label.clone(),
                shared::PeriodTotals {
                    gross_income: 10000.0,
                    total_deductions: 1000.0 + i as f64,
                    net_income: 9000.0 - i as f64,
                },
            );
            record
                .income_breakdown
                .entry("Basic".to_string())
                .or_default()
                .insert(label.clone(), 10000.0);
            record
                .deduction_breakdown
                .entry("SSS".to_string())
                .or_default()
                .insert(label.clone(), 500.0);
            record
                .deduction_breakdown
                .entry("Salary Loan_balance".to_string())
                .or_default()
                .insert(label, 3000.0 - 500.0 * i as f64);
        }
        record
            .deduction_breakdown
            .entry("Salary Loan".to_string())
            .or_default()
            .insert("Period 01".to_string(), 500.0);
        record
    }

    fn count_rows(html: &str, table_class: &str) -> usize {
        let start = html.find(&format!("<table class=\"{}\">", table_class)).unwrap();
        let body = &html[start..];
        let end = body.find("</table>").unwrap();
        let body = &body[..end];
        let tbody = &body[body.find("<tbody>").unwrap()..];
        tbody.matches("<tr").count()
    }

    #[test]
    fn test_regular_payslip_scenario() {
        let html = build_payslip_document(&sss_payslip());

        assert!(html.contains("<title>Payslip - Juan Dela Cruz</title>"));
        assert!(html.contains("<strong>Employment Type:</strong> Regular"));
        assert!(html.contains("<strong>Salary Grade:</strong> 11"));
        assert!(html.contains("<strong>Worked Days:</strong> 10 / 11"));
        assert!(!html.contains("Total Hours"));

        // One combined row + totals + net pay
        let tbody = &html[html.find("<tbody>").unwrap()..];
        assert_eq!(tbody.matches("<tr").count(), 3);
        let first_row = &tbody[..tbody.find("</tr>").unwrap()];
        assert!(first_row.contains(">Basic</td>"));
        assert!(first_row.contains(">₱20,000.00</td>"));
        assert!(first_row.contains(">SSS</td>"));
        assert!(first_row.contains(">₱500.00</td>"));

        let totals = &tbody[tbody.find("totals-row").unwrap()..];
        assert!(totals.contains("₱20,000.00"));
        assert!(totals.contains("₱500.00"));
        assert!(html.contains(">₱19,500.00</td>"));
    }

    #[test]
    fn test_irregular_payslip_shows_hours() {
        let payslip = PayslipRecord {
            full_name: "Ana Reyes".to_string(),
            period: "February 1-15, 2025".to_string(),
            employment_type: EmploymentType::Irregular,
            salary_grade: Some("5".to_string()),
            rate_per_hour: Some(85.5),
            total_hours: Some(64.0),
            gross_income: 5472.0,
            net_pay: 5472.0,
            ..Default::default()
        };
        let html = build_payslip_document(&payslip);

        assert!(html.contains("<strong>Employment Type:</strong> Irregular"));
        assert!(html.contains("<strong>Total Hours:</strong> 64 hours"));
        assert!(!html.contains("Salary Grade"));
        assert!(!html.contains("Worked Days"));
        assert!(html.contains(">Hourly Rate</td>"));
        assert!(html.contains(">₱85.50</td>"));
    }

    #[test]
    fn test_payslip_row_count_and_deduction_total() {
        let mut payslip = sss_payslip();
        payslip.bonuses = vec![BonusItem {
            label: "Overtime".to_string(),
            amount: 1200.0,
        }];
        payslip.deductions = ["SSS", "PhilHealth", "Pag-IBIG", "Tax"]
            .iter()
            .enumerate()
            .map(|(i, label)| DeductionItem {
                label: label.to_string(),
                amount: 100.0 * (i + 1) as f64,
                balance: None,
            })
            .collect();

        let html = build_payslip_document(&payslip);
        let tbody = &html[html.find("<tbody>").unwrap()..];
        // max(1 + 1, 4) combined rows + totals + net pay
        assert_eq!(tbody.matches("<tr").count(), payslip.combined_row_count() + 2);
        assert_eq!(payslip.combined_row_count(), 4);
        let totals = &tbody[tbody.find("totals-row").unwrap()..];
        assert!(totals.contains("₱1,000.00"));
    }

    #[test]
    fn test_payslip_text_is_escaped() {
        let mut payslip = sss_payslip();
        payslip.full_name = "<script>alert(1)</script>".to_string();
        let html = build_payslip_document(&payslip);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_layout_depends_on_period_count() {
        assert_eq!(SummaryLayout::for_period_count(2), SummaryLayout::Portrait);
        assert_eq!(SummaryLayout::for_period_count(3), SummaryLayout::Portrait);
        assert_eq!(SummaryLayout::for_period_count(4), SummaryLayout::Landscape);
        assert_eq!(SummaryLayout::for_period_count(12), SummaryLayout::Landscape);

        let portrait = build_summary_document(&summary_with_periods(3), generated_on());
        assert!(portrait.contains("size: portrait"));
        assert!(portrait.contains("font-size: 12px"));

        let landscape = build_summary_document(&summary_with_periods(4), generated_on());
        assert!(landscape.contains("size: landscape"));
        assert!(landscape.contains("font-size: 11px"));
        assert!(landscape.contains("<td class=\"nowrap\">Period 04</td>"));
    }

    #[test]
    fn test_summary_total_row_sums_columns() {
        let record = summary_with_periods(4);
        let html = build_summary_document(&record, generated_on());

        // 4 period rows + TOTAL
        assert_eq!(count_rows(&html, "period-summary"), 5);
        let total_row = &html[html.find("<td>TOTAL</td>").unwrap()..];
        let total_row = &total_row[..total_row.find("</tr>").unwrap()];
        assert!(total_row.contains("₱40,000.00"));
        assert!(total_row.contains("₱4,006.00"));
        assert!(total_row.contains("₱35,994.00"));
    }

    #[test]
    fn test_summary_breakdowns() {
        let record = summary_with_periods(2);
        let html = build_summary_document(&record, generated_on());

        assert!(html.contains("Regular Employee | Grade 11"));
        assert!(html.contains("Period: Period 01, Period 02"));
        assert!(html.contains("Generated on: 2/3/2025"));
        assert_eq!(count_rows(&html, "income-breakdown"), 1);

        // Balance rows are not listed as deduction types
        assert_eq!(count_rows(&html, "deduction-breakdown"), 2);
        assert!(!html.contains("Salary Loan_balance"));

        let loan_row = &html[html.find(">Salary Loan</td>").unwrap()..];
        let loan_row = &loan_row[..loan_row.find("</tr>").unwrap()];
        // Period 02 has no loan deduction, balance comes from the last period
        assert!(loan_row.contains("<td class=\"text-right\">-</td>"));
        assert!(loan_row.contains("<td class=\"text-right\">₱2,500.00</td>"));

        let sss_row = &html[html.find(">SSS</td>").unwrap()..];
        let sss_row = &sss_row[..sss_row.find("</tr>").unwrap()];
        assert!(sss_row.contains("<td class=\"text-right font-bold\">₱1,000.00</td>"));
        assert!(sss_row.contains("<td class=\"text-right\">₱0.00</td>"));
    }

    #[test]
    fn test_prepare_print_document_matches_selection() {
        let payslip = ReportPayload::Payslip(sss_payslip());
        let summary = ReportPayload::Summary(summary_with_periods(2));

        assert!(prepare_print_document(1, Some(&payslip), generated_on()).is_some());
        assert!(prepare_print_document(2, Some(&payslip), generated_on()).is_none());
        assert!(prepare_print_document(2, Some(&summary), generated_on()).is_some());
        assert!(prepare_print_document(1, Some(&summary), generated_on()).is_none());
        assert!(prepare_print_document(0, None, generated_on()).is_none());

        let empty_summary = ReportPayload::Summary(SummaryRecord::default());
        assert!(prepare_print_document(2, Some(&empty_summary), generated_on()).is_none());
    }

    #[test]
    fn test_missing_base_rate_renders_dash() {
        let mut payslip = sss_payslip();
        payslip.rate_per_month = None;
        payslip.deductions.push(DeductionItem {
            label: "PhilHealth".to_string(),
            amount: 250.0,
            balance: None,
        });

        let html = build_payslip_document(&payslip);
        let tbody = &html[html.find("<tbody>").unwrap()..];
        let rows: Vec<&str> = tbody.split("</tr>").collect();
        assert!(rows[0].contains(">Basic</td>"));
        assert!(rows[0].contains(">-</td>"));

        // Padding row below the bonuses keeps blank earning cells
        assert!(rows[1].contains(">PhilHealth</td>"));
        assert!(!rows[1].contains(">-</td>"));
    }

    #[test]
    fn test_summary_text_is_escaped() {
        let mut record = summary_with_periods(2);
        record.full_name = "Tom & Jerry <Sr.>".to_string();
        let html = build_summary_document(&record, generated_on());
        assert!(html.contains("<title>Payroll Summary Report - Tom &amp; Jerry &lt;Sr.&gt;</title>"));
        assert!(!html.contains("<Sr.>"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn payslip_html() -> String {
        build_payslip_document(&PayslipRecord {
            full_name: "Juan Dela Cruz".to_string(),
            period: "January 1-15, 2025".to_string(),
            ..Default::default()
        })
    }

    #[wasm_bindgen_test]
    fn test_document_is_written_into_print_window() {
        // Browsers blocking popups leave nothing to write into
        let Ok(print_window) = open_print_window() else {
            return;
        };

        write_document(&print_window, &payslip_html()).unwrap();
        let document = print_window.document().unwrap();
        assert_eq!(document.title(), "Payslip - Juan Dela Cruz");
        print_window.close().unwrap();
    }

    #[wasm_bindgen_test]
    fn test_print_report_without_document() {
        if let Err(e) = print_report(None, 0) {
            assert!(e.to_string().contains("blocked"), "{}", e);
        }
    }

    #[wasm_bindgen_test]
    fn test_print_report_with_document() {
        if let Err(e) = print_report(Some(payslip_html()), 0) {
            assert!(e.to_string().contains("blocked"), "{}", e);
        }
    }
}
