use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{format_currency, format_optional_currency, format_optional_quantity, EmploymentType, PayslipRecord};
use super::stat_card::StatCard;

/// One stat card of the payslip header grid
#[derive(Debug, Clone, PartialEq)]
pub struct PayslipStat {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub accent: Option<&'static str>,
}

impl PayslipStat {
    fn new(label: &'static str, value: String, icon: &'static str) -> Self {
        Self {
            label,
            value,
            icon,
            accent: None,
        }
    }

    fn with_accent(mut self, accent: &'static str) -> Self {
        self.accent = Some(accent);
        self
    }
}

/// Stat cards shown for a payslip, in display order
pub fn payslip_stats(payslip: &PayslipRecord) -> Vec<PayslipStat> {
    let mut stats = vec![
        PayslipStat::new("Working Days", format_optional_quantity(payslip.working_days), "📅"),
        PayslipStat::new("Days Present", format_optional_quantity(payslip.days_present), "🕒")
            .with_accent("accent-green"),
    ];

    if payslip.days_absent.is_some() {
        stats.push(
            PayslipStat::new("Days Absent", format_optional_quantity(payslip.days_absent), "🕒")
                .with_accent("accent-red"),
        );
    }

    match payslip.employment_type {
        EmploymentType::Irregular => {
            stats.push(PayslipStat::new(
                "Total Hours",
                format!("{} hrs", format_optional_quantity(payslip.total_hours)),
                "🕒",
            ));
            stats.push(PayslipStat::new("Rate / Hour", format_optional_currency(payslip.rate_per_hour), "💲"));
        }
        EmploymentType::Regular => {
            stats.push(PayslipStat::new("Monthly Rate", format_optional_currency(payslip.rate_per_month), "💲"));
        }
    }

    stats.push(PayslipStat::new("Gross Income", format_currency(payslip.gross_income), "📈"));
    stats
}

#[derive(Properties, PartialEq)]
pub struct PayslipViewProps {
    pub payslip: PayslipRecord,
    pub on_print: Callback<()>,
    /// Rendered below the print button (the insights panel)
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PayslipView)]
pub fn payslip_view(props: &PayslipViewProps) -> Html {
    let payslip = &props.payslip;

    let on_print_click = {
        let on_print = props.on_print.clone();
        Callback::from(move |_: MouseEvent| on_print.emit(()))
    };

    html! {
        <div class="report-card">
            <div class="report-header payslip-header">
                <div>
                    <h1>{payslip.full_name.clone()}</h1>
                    <p class="report-subtitle">
                        {format!("{} | {} Employee", payslip.period, payslip.employment_type.label())}
                    </p>
                </div>
                <div class="report-header-total">
                    <p class="report-header-label">{"Net Pay"}</p>
                    <p class="report-header-amount">{format_currency(payslip.net_pay)}</p>
                </div>
            </div>

            <div class="report-body">
                <div class="stat-grid">
                    { for payslip_stats(payslip).into_iter().map(|stat| html! {
                        <StatCard
                            key={stat.label}
                            label={stat.label}
                            value={stat.value}
                            icon={stat.icon}
                            class={classes!(stat.accent)}
                        />
                    }) }
                </div>

                if !payslip.bonuses.is_empty() {
                    <div class="report-section">
                        <h2>{"Bonuses & Additional Income"}</h2>
                        <table class="report-table">
                            <thead>
                                <tr>
                                    <th>{"Bonus Type"}</th>
                                    <th class="text-right">{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for payslip.bonuses.iter().map(|bonus| html! {
                                    <tr>
                                        <td>{bonus.label.clone()}</td>
                                        <td class="text-right">{format_currency(bonus.amount)}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }

                <div class="report-section">
                    <h2>{"Deductions"}</h2>
                    <table class="report-table">
                        <thead>
                            <tr>
                                <th>{"Deduction Type"}</th>
                                <th class="text-right">{"Amount"}</th>
                                <th class="text-right">{"Remaining Balance"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if payslip.deductions.is_empty() {
                                <tr>
                                    <td colspan="3" class="text-center muted">{"No deductions this period"}</td>
                                </tr>
                            } else {
                                { for payslip.deductions.iter().map(|deduction| html! {
                                    <tr>
                                        <td>{deduction.label.clone()}</td>
                                        <td class="text-right">{format_currency(deduction.amount)}</td>
                                        <td class="text-right">
                                            {deduction.balance.map(format_currency).unwrap_or_else(|| "N/A".to_string())}
                                        </td>
                                    </tr>
                                }) }
                                <tr class="total-row">
                                    <td>{"Total Deductions"}</td>
                                    <td class="text-right">{format_currency(payslip.total_deductions())}</td>
                                    <td></td>
                                </tr>
                            }
                        </tbody>
                    </table>
                </div>

                <div class="report-section">
                    <table class="report-table net-pay-table">
                        <tbody>
                            <tr class="net-pay-row">
                                <td>{"NET PAY"}</td>
                                <td class="text-right">{format_currency(payslip.net_pay)}</td>
                                <td></td>
                            </tr>
                        </tbody>
                    </table>
                </div>

                <div class="report-actions">
                    <button class="btn btn-primary" onclick={on_print_click}>{"Print Payslip"}</button>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(stats: &[PayslipStat]) -> Vec<&'static str> {
        stats.iter().map(|s| s.label).collect()
    }

    #[test]
    fn test_regular_stats() {
        let payslip = PayslipRecord {
            employment_type: EmploymentType::Regular,
            rate_per_month: Some(20000.0),
            working_days: Some(11.0),
            days_present: Some(10.0),
            gross_income: 18181.82,
            ..Default::default()
        };
        let stats = payslip_stats(&payslip);
        assert_eq!(
            labels(&stats),
            vec!["Working Days", "Days Present", "Monthly Rate", "Gross Income"]
        );
        assert_eq!(stats[0].value, "11");
        assert_eq!(stats[2].value, "₱20,000.00");
        assert_eq!(stats[3].value, "₱18,181.82");
    }

    #[test]
    fn test_irregular_stats_with_absences() {
        let payslip = PayslipRecord {
            employment_type: EmploymentType::Irregular,
            rate_per_hour: Some(85.5),
            total_hours: Some(64.0),
            days_absent: Some(2.0),
            ..Default::default()
        };
        let stats = payslip_stats(&payslip);
        assert_eq!(
            labels(&stats),
            vec!["Working Days", "Days Present", "Days Absent", "Total Hours", "Rate / Hour", "Gross Income"]
        );
        assert_eq!(stats[0].value, "-");
        assert_eq!(stats[2].accent, Some("accent-red"));
        assert_eq!(stats[3].value, "64 hrs");
        assert_eq!(stats[4].value, "₱85.50");
    }
}
