use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{format_currency, BreakdownRow, SummaryRecord};

#[derive(Properties, PartialEq)]
pub struct SummaryViewProps {
    pub summary: SummaryRecord,
    pub on_print: Callback<()>,
    /// Rendered below the print button (the insights panel)
    #[prop_or_default]
    pub children: Html,
}

fn breakdown_table(
    title: &str,
    type_heading: &str,
    rows: &[BreakdownRow<'_>],
    labels: &[&str],
    amount_class: &'static str,
    with_balance: bool,
) -> Html {
    html! {
        <div class="report-section">
            <h2>{title.to_string()}</h2>
            <div class="table-scroll">
                <table class="report-table breakdown-table">
                    <thead>
                        <tr>
                            <th class="sticky-col">{type_heading.to_string()}</th>
                            { for labels.iter().map(|label| html! {
                                <th key={label.to_string()} class="text-right period-col">{label.to_string()}</th>
                            }) }
                            <th class="text-right">{"Total"}</th>
                            if with_balance {
                                <th class="text-right">{"Current Balance"}</th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| html! {
                            <tr key={row.label.to_string()}>
                                <td class="sticky-col">{row.label.to_string()}</td>
                                { for labels.iter().map(|label| match row.amount_for(label) {
                                    Some(amount) => html! {
                                        <td class="text-right"><span class={amount_class}>{format_currency(amount)}</span></td>
                                    },
                                    None => html! {
                                        <td class="text-right"><span class="muted">{"-"}</span></td>
                                    },
                                }) }
                                <td class="text-right font-bold">{format_currency(row.total)}</td>
                                if with_balance {
                                    <td class="text-right">{format_currency(row.balance.unwrap_or(0.0))}</td>
                                }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[function_component(SummaryView)]
pub fn summary_view(props: &SummaryViewProps) -> Html {
    let summary = &props.summary;
    let labels = summary.period_labels();
    let totals = summary.summary_totals();

    let on_print_click = {
        let on_print = props.on_print.clone();
        Callback::from(move |_: MouseEvent| on_print.emit(()))
    };

    html! {
        <div class="report-card">
            <div class="report-header summary-header">
                <div>
                    <h1>{summary.full_name.clone()}</h1>
                    <p class="report-subtitle">{summary.employee_line()}</p>
                </div>
                <div class="report-header-total">
                    <p class="report-header-label">{"Total Net Pay"}</p>
                    <p class="report-header-amount">{format_currency(totals.net_income)}</p>
                </div>
            </div>

            <div class="report-body">
                <div class="report-section">
                    <h2>{"Period Summary"}</h2>
                    <table class="report-table">
                        <thead>
                            <tr>
                                <th>{"Period"}</th>
                                <th class="text-right">{"Income"}</th>
                                <th class="text-right">{"Deductions"}</th>
                                <th class="text-right">{"Net Pay"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for summary.period_rows().into_iter().map(|(label, row)| html! {
                                <tr key={label.to_string()}>
                                    <td>{label.to_string()}</td>
                                    <td class="text-right income">{format_currency(row.gross_income)}</td>
                                    <td class="text-right deduction">{format_currency(row.total_deductions)}</td>
                                    <td class="text-right net">{format_currency(row.net_income)}</td>
                                </tr>
                            }) }
                            <tr class="total-row">
                                <td>{"TOTAL"}</td>
                                <td class="text-right income">{format_currency(totals.gross_income)}</td>
                                <td class="text-right deduction">{format_currency(totals.total_deductions)}</td>
                                <td class="text-right net">{format_currency(totals.net_income)}</td>
                            </tr>
                        </tbody>
                    </table>
                </div>

                {breakdown_table("Income Breakdown", "Income Type", &summary.income_rows(), &labels, "income", false)}
                {breakdown_table("Deduction Breakdown", "Deduction Type", &summary.deduction_rows(), &labels, "deduction", true)}

                <div class="report-actions">
                    <button class="btn btn-primary" onclick={on_print_click}>{"Print Summary Report"}</button>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
