use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod money;
pub mod selection;

pub use money::{format_currency, format_optional_currency, format_optional_quantity, CURRENCY_SYMBOL};
pub use selection::{available_years, PeriodFilter, SelectionSet, MAX_SELECTED_PERIODS};

/// Month names in calendar order (January = 0 … December = 11)
pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Suffix of the synthetic deduction breakdown rows that carry running balances
pub const BALANCE_SUFFIX: &str = "_balance";

/// Position of a month name within the year, if it is one of [`MONTHS`]
pub fn month_index(month: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == month)
}

/// Logged-in user as stored by the login page under `localStorage["user"]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
}

/// Pay period as listed by `GET /available-months`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailablePeriod {
    pub month: String,
    pub year: i32,
    pub period_start: u32,
    pub period_end: u32,
}

/// The four fields that identify a pay period.
///
/// Also the wire shape of each entry in `selected_periods` of a summary request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    pub month: String,
    pub year: i32,
    pub period_start: u32,
    pub period_end: u32,
}

/// A selectable pay period with its human-readable label
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub month: String,
    pub year: i32,
    pub period_start: u32,
    pub period_end: u32,
    /// Derived label, e.g. "January 1-15, 2025"
    pub display: String,
}

impl Period {
    pub fn new(month: impl Into<String>, year: i32, period_start: u32, period_end: u32) -> Self {
        let month = month.into();
        let display = format!("{} {}-{}, {}", month, period_start, period_end, year);
        Self {
            month,
            year,
            period_start,
            period_end,
            display,
        }
    }

    pub fn key(&self) -> PeriodKey {
        PeriodKey {
            month: self.month.clone(),
            year: self.year,
            period_start: self.period_start,
            period_end: self.period_end,
        }
    }

    /// Compares the identifying fields only; `display` is ignored
    pub fn same_period(&self, other: &Period) -> bool {
        self.month == other.month
            && self.year == other.year
            && self.period_start == other.period_start
            && self.period_end == other.period_end
    }

    /// Stable string used as a list key when rendering
    pub fn dom_key(&self) -> String {
        format!("{}-{}-{}-{}", self.month, self.year, self.period_start, self.period_end)
    }
}

impl From<AvailablePeriod> for Period {
    fn from(period: AvailablePeriod) -> Self {
        Period::new(period.month, period.year, period.period_start, period.period_end)
    }
}

/// Converts a backend listing into selectable periods
pub fn periods_from_available(available: Vec<AvailablePeriod>) -> Vec<Period> {
    available.into_iter().map(Period::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    /// Salaried, monthly rate, paid on attendance days
    #[default]
    Regular,
    /// Hourly rate, paid on hours worked
    Irregular,
}

impl EmploymentType {
    /// Capitalized label used in headers ("Regular" / "Irregular")
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::Regular => "Regular",
            EmploymentType::Irregular => "Irregular",
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, EmploymentType::Regular)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentType::Regular => write!(f, "regular"),
            EmploymentType::Irregular => write!(f, "irregular"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BonusItem {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeductionItem {
    pub label: String,
    pub amount: f64,
    /// Remaining balance on a recurring deduction (loans), if tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// One period's computed payroll result, as returned by `GET /payslip`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipRecord {
    pub full_name: String,
    pub period: String,
    pub employment_type: EmploymentType,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub salary_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_month: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_present: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_absent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub bonuses: Vec<BonusItem>,
    #[serde(default)]
    pub deductions: Vec<DeductionItem>,
    pub gross_income: f64,
    pub net_pay: f64,
}

/// One row of the combined earnings/deductions table of a printed payslip.
///
/// Earnings and deductions share a row by index only.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow<'a> {
    pub earning_label: &'a str,
    pub earning_amount: Option<f64>,
    pub deduction: Option<&'a DeductionItem>,
}

impl PayslipRecord {
    /// Monthly rate for regular employees, hourly rate for irregular ones
    pub fn base_rate(&self) -> Option<f64> {
        match self.employment_type {
            EmploymentType::Regular => self.rate_per_month,
            EmploymentType::Irregular => self.rate_per_hour,
        }
    }

    pub fn base_rate_label(&self) -> &'static str {
        match self.employment_type {
            EmploymentType::Regular => "Basic",
            EmploymentType::Irregular => "Hourly Rate",
        }
    }

    pub fn total_deductions(&self) -> f64 {
        self.deductions.iter().map(|d| d.amount).sum()
    }

    pub fn combined_row_count(&self) -> usize {
        (1 + self.bonuses.len()).max(self.deductions.len())
    }

    pub fn combined_rows(&self) -> Vec<CombinedRow<'_>> {
        (0..self.combined_row_count())
            .map(|i| {
                let (earning_label, earning_amount) = if i == 0 {
                    (self.base_rate_label(), self.base_rate())
                } else {
                    match self.bonuses.get(i - 1) {
                        Some(bonus) => (bonus.label.as_str(), Some(bonus.amount)),
                        None => ("", None),
                    }
                };
                CombinedRow {
                    earning_label,
                    earning_amount,
                    deduction: self.deductions.get(i),
                }
            })
            .collect()
    }
}

/// Per-period totals inside a summary
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub gross_income: f64,
    pub total_deductions: f64,
    pub net_income: f64,
}

impl std::ops::Add for PeriodTotals {
    type Output = PeriodTotals;

    fn add(self, other: PeriodTotals) -> PeriodTotals {
        PeriodTotals {
            gross_income: self.gross_income + other.gross_income,
            total_deductions: self.total_deductions + other.total_deductions,
            net_income: self.net_income + other.net_income,
        }
    }
}

/// Amounts keyed by period label
pub type PeriodAmounts = BTreeMap<String, f64>;

/// Aggregated view over several periods, as returned by `POST /api/payslip/summary`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub full_name: String,
    pub employment_type: EmploymentType,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub salary_grade: Option<String>,
    /// Period labels in selection order
    #[serde(default)]
    pub periods: Vec<String>,
    #[serde(default)]
    pub period_summary: BTreeMap<String, PeriodTotals>,
    #[serde(default)]
    pub income_breakdown: BTreeMap<String, PeriodAmounts>,
    /// Deduction amounts per type, plus `<type>_balance` rows holding running balances
    #[serde(default)]
    pub deduction_breakdown: BTreeMap<String, PeriodAmounts>,
}

/// One row of an income or deduction breakdown table
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow<'a> {
    pub label: &'a str,
    pub amounts: &'a PeriodAmounts,
    /// Sum across every period present in `amounts`
    pub total: f64,
    /// Current balance, only set for deduction rows
    pub balance: Option<f64>,
}

impl BreakdownRow<'_> {
    /// Amount shown in a period column; `None` renders as "-"
    pub fn amount_for(&self, period: &str) -> Option<f64> {
        self.amounts.get(period).copied().filter(|amount| *amount != 0.0)
    }
}

impl SummaryRecord {
    /// Period labels in display order: the order of `periods`, then any
    /// summarized period the list does not mention.
    pub fn period_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .periods
            .iter()
            .filter(|p| self.period_summary.contains_key(p.as_str()))
            .map(String::as_str)
            .collect();
        for key in self.period_summary.keys() {
            if !labels.contains(&key.as_str()) {
                labels.push(key.as_str());
            }
        }
        labels
    }

    pub fn period_rows(&self) -> Vec<(&str, PeriodTotals)> {
        self.period_labels()
            .into_iter()
            .filter_map(|label| self.period_summary.get(label).map(|totals| (label, *totals)))
            .collect()
    }

    /// Column sums of the period summary (the TOTAL row)
    pub fn summary_totals(&self) -> PeriodTotals {
        self.period_rows()
            .into_iter()
            .fold(PeriodTotals::default(), |acc, (_, totals)| acc + totals)
    }

    pub fn has_period_summary(&self) -> bool {
        !self.period_summary.is_empty()
    }

    pub fn last_period(&self) -> Option<&str> {
        self.periods.last().map(String::as_str)
    }

    /// Balance of a deduction type as of the last period, 0 when not tracked
    pub fn current_balance(&self, deduction_type: &str) -> f64 {
        let balance_key = format!("{}{}", deduction_type, BALANCE_SUFFIX);
        self.last_period()
            .and_then(|period| self.deduction_breakdown.get(&balance_key)?.get(period).copied())
            .unwrap_or(0.0)
    }

    pub fn income_rows(&self) -> Vec<BreakdownRow<'_>> {
        self.income_breakdown
            .iter()
            .map(|(label, amounts)| BreakdownRow {
                label: label.as_str(),
                amounts,
                total: amounts.values().sum(),
                balance: None,
            })
            .collect()
    }

    /// Deduction rows without the synthetic balance entries
    pub fn deduction_rows(&self) -> Vec<BreakdownRow<'_>> {
        self.deduction_breakdown
            .iter()
            .filter(|(label, _)| !label.ends_with(BALANCE_SUFFIX))
            .map(|(label, amounts)| BreakdownRow {
                label: label.as_str(),
                amounts,
                total: amounts.values().sum(),
                balance: Some(self.current_balance(label)),
            })
            .collect()
    }

    pub fn employee_line(&self) -> String {
        format!(
            "{} Employee | Grade {}",
            self.employment_type.label(),
            self.salary_grade.as_deref().unwrap_or("")
        )
    }
}

/// Report loaded for the current selection.
///
/// Serializes as the bare record so it can be sent as `payslip_data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportPayload {
    Payslip(PayslipRecord),
    Summary(SummaryRecord),
}

/// Body of `POST /api/payslip/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub username: String,
    pub selected_periods: Vec<PeriodKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Standard,
}

/// Body of `POST /api/insights/generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsRequest<'a> {
    pub payslip_data: &'a ReportPayload,
    pub analysis_type: AnalysisType,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsightsResponse {
    pub insights: String,
}

/// Body of a 404 from the payslip and summary endpoints
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NotFoundResponse {
    #[serde(default)]
    pub detail: Option<NotFoundDetail>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NotFoundDetail {
    Structured {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        available_periods: Option<Vec<AvailablePeriod>>,
    },
    Message(String),
}

impl NotFoundResponse {
    pub fn error_message(&self) -> Option<&str> {
        match self.detail.as_ref()? {
            NotFoundDetail::Structured { error, .. } => error.as_deref(),
            NotFoundDetail::Message(message) => Some(message.as_str()),
        }
    }

    pub fn into_available_periods(self) -> Option<Vec<AvailablePeriod>> {
        match self.detail? {
            NotFoundDetail::Structured { available_periods, .. } => available_periods,
            NotFoundDetail::Message(_) => None,
        }
    }
}

/// Salary grades arrive either as numbers or strings depending on the record
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}
