use yew::prelude::*;
use shared::{Period, PeriodFilter, SelectionSet};
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct PeriodSelectionState {
    pub selection: SelectionSet,
    pub filter: PeriodFilter,
}

pub struct UsePeriodSelectionResult {
    pub state: PeriodSelectionState,
    pub actions: UsePeriodSelectionActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePeriodSelectionActions {
    /// `(period, selected)`: add when selected and there is room, remove otherwise
    pub toggle_period: Callback<(Period, bool)>,
    pub set_year: Callback<Option<i32>>,
    pub set_from_month: Callback<Option<String>>,
    pub set_to_month: Callback<Option<String>>,
    pub clear_filters: Callback<()>,
}

/// Hook holding the chosen periods and the filters of the period picker.
///
/// Filters only narrow what the picker lists; they never change the selection.
#[hook]
pub fn use_period_selection() -> UsePeriodSelectionResult {
    let selection = use_state(SelectionSet::new);
    let filter = use_state(PeriodFilter::default);

    let toggle_period = {
        let selection = selection.clone();
        use_callback((*selection).clone(), move |(period, selected): (Period, bool), current| {
            let mut next = current.clone();
            if next.toggle(period, selected) {
                selection.set(next);
            } else if selected && current.is_full() {
                Logger::warn_with_component("period-selection", "Ignored selection beyond the period limit");
            }
        })
    };

    let set_year = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |year: Option<i32>, current| {
            filter.set(PeriodFilter {
                year,
                ..current.clone()
            });
        })
    };

    let set_from_month = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |from_month: Option<String>, current| {
            filter.set(PeriodFilter {
                from_month,
                ..current.clone()
            });
        })
    };

    let set_to_month = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |to_month: Option<String>, current| {
            filter.set(PeriodFilter {
                to_month,
                ..current.clone()
            });
        })
    };

    let clear_filters = {
        let filter = filter.clone();
        use_callback((), move |_, _| {
            filter.set(PeriodFilter::default());
        })
    };

    let state = PeriodSelectionState {
        selection: (*selection).clone(),
        filter: (*filter).clone(),
    };

    let actions = UsePeriodSelectionActions {
        toggle_period,
        set_year,
        set_from_month,
        set_to_month,
        clear_filters,
    };

    UsePeriodSelectionResult { state, actions }
}
