use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use shared::{available_years, Period, PeriodFilter, SelectionSet, MAX_SELECTED_PERIODS, MONTHS};
use crate::hooks::use_period_selection::UsePeriodSelectionActions;

#[derive(Properties, PartialEq)]
pub struct PeriodPickerProps {
    pub available: Vec<Period>,
    pub selection: SelectionSet,
    pub filter: PeriodFilter,
    pub actions: UsePeriodSelectionActions,
    #[prop_or(MAX_SELECTED_PERIODS)]
    pub max_periods: usize,
    #[prop_or_default]
    pub loading: bool,
}

/// Empty select value means "no filter"
fn year_from_select(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

fn month_from_select(value: &str) -> Option<String> {
    shared::month_index(value).map(|_| value.to_string())
}

#[function_component(PeriodPicker)]
pub fn period_picker(props: &PeriodPickerProps) -> Html {
    let expanded = use_state(|| true);

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(!*expanded);
        })
    };

    let on_year_change = {
        let set_year = props.actions.set_year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_year.emit(year_from_select(&select.value()));
        })
    };

    let on_from_month_change = {
        let set_from_month = props.actions.set_from_month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_from_month.emit(month_from_select(&select.value()));
        })
    };

    let on_to_month_change = {
        let set_to_month = props.actions.set_to_month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_to_month.emit(month_from_select(&select.value()));
        })
    };

    let on_clear_filters = {
        let clear_filters = props.actions.clear_filters.clone();
        Callback::from(move |_: MouseEvent| clear_filters.emit(()))
    };

    let month_options = |selected: Option<&str>| -> Html {
        html! {
            <>
                <option value="" selected={selected.is_none()}>{"--"}</option>
                { for MONTHS.iter().map(|month| html! {
                    <option key={*month} value={*month} selected={selected == Some(*month)}>{*month}</option>
                }) }
            </>
        }
    };

    let visible = props.filter.apply(&props.available);

    html! {
        <div class="period-picker card">
            <div class="period-picker-header" onclick={toggle_expanded}>
                <div>
                    <h3>{"Select Report Period"}</h3>
                    <p class="period-picker-hint">
                        {format!("Choose up to {} periods to include in your report", props.max_periods)}
                    </p>
                </div>
                <span class="chevron">{if *expanded { "▴" } else { "▾" }}</span>
            </div>

            if *expanded {
                <div class="period-picker-body">
                    <div class="period-filters">
                        <div class="filter-field">
                            <label for="filter-year">{"Filter by Year"}</label>
                            <select id="filter-year" onchange={on_year_change}>
                                <option value="" selected={props.filter.year.is_none()}>{"All"}</option>
                                { for available_years(&props.available).into_iter().map(|year| html! {
                                    <option
                                        key={year}
                                        value={year.to_string()}
                                        selected={props.filter.year == Some(year)}
                                    >
                                        {year.to_string()}
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="filter-field">
                            <label for="filter-from-month">{"From Month"}</label>
                            <select id="filter-from-month" onchange={on_from_month_change}>
                                {month_options(props.filter.from_month.as_deref())}
                            </select>
                        </div>

                        <div class="filter-field">
                            <label for="filter-to-month">{"To Month"}</label>
                            <select id="filter-to-month" onchange={on_to_month_change}>
                                {month_options(props.filter.to_month.as_deref())}
                            </select>
                        </div>

                        <button
                            class="btn btn-secondary"
                            disabled={!props.filter.is_active()}
                            onclick={on_clear_filters}
                        >
                            {"Clear Filters"}
                        </button>
                    </div>

                    if props.loading && props.available.is_empty() {
                        <p class="muted">{"Loading available periods..."}</p>
                    }

                    <div class="period-grid">
                        { for visible.into_iter().map(|period| {
                            let selected = props.selection.contains(period);
                            let enabled = props.selection.can_select(period);
                            let onchange = {
                                let toggle_period = props.actions.toggle_period.clone();
                                let period = period.clone();
                                Callback::from(move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    toggle_period.emit((period.clone(), input.checked()));
                                })
                            };

                            html! {
                                <label
                                    key={period.dom_key()}
                                    class={classes!(
                                        "period-option",
                                        selected.then_some("selected"),
                                        (!enabled).then_some("disabled")
                                    )}
                                >
                                    <input
                                        type="checkbox"
                                        class="sr-only"
                                        checked={selected}
                                        disabled={!enabled}
                                        {onchange}
                                    />
                                    <span class={classes!("checkbox", selected.then_some("checked"))}>
                                        if selected { {"✓"} }
                                    </span>
                                    <span class="period-label">{period.display.clone()}</span>
                                </label>
                            }
                        }) }
                    </div>

                    if !props.selection.is_empty() {
                        <div class="selected-periods">
                            <span class="selected-periods-title">{"Selected Periods:"}</span>
                            <div class="chips">
                                { for props.selection.periods().iter().map(|period| html! {
                                    <span key={period.dom_key()} class="chip">{period.display.clone()}</span>
                                }) }
                            </div>
                        </div>
                    }
                </div>
            }
        </div>
    }
}
