use yew::prelude::*;
use shared::{periods_from_available, Period, UserIdentity};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct AvailablePeriodsState {
    pub periods: Vec<Period>,
    pub loading: bool,
}

pub struct UseAvailablePeriodsResult {
    pub state: AvailablePeriodsState,
    pub actions: UseAvailablePeriodsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAvailablePeriodsActions {
    /// Replaces the known list, e.g. with the periods sent along with a 404
    pub replace_periods: Callback<Vec<Period>>,
}

/// Hook listing the pay periods that have payroll data for the user.
///
/// A failed listing is logged and leaves the list empty; it never surfaces
/// as a page error.
#[hook]
pub fn use_available_periods(api_client: &ApiClient, identity: &UserIdentity) -> UseAvailablePeriodsResult {
    let periods = use_state(Vec::<Period>::new);
    let loading = use_state(|| false);

    let refresh_periods = {
        let api_client = api_client.clone();
        let identity = identity.clone();
        let periods = periods.clone();
        let loading = loading.clone();

        use_callback(identity.clone(), move |_, _| {
            let api_client = api_client.clone();
            let identity = identity.clone();
            let periods = periods.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_available_periods(&identity).await {
                    Ok(available) => {
                        Logger::debug_with_component(
                            "available-periods",
                            &format!("Loaded {} periods", available.len()),
                        );
                        periods.set(periods_from_available(available));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "available-periods",
                            &format!("Failed to fetch available periods: {}", e),
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    let replace_periods = {
        let periods = periods.clone();
        use_callback((), move |replacement: Vec<Period>, _| {
            Logger::info_with_component(
                "available-periods",
                &format!("Replacing period list with {} periods from the server", replacement.len()),
            );
            periods.set(replacement);
        })
    };

    // Load the list on mount
    use_effect_with(identity.clone(), move |_| {
        refresh_periods.emit(());
        || ()
    });

    let state = AvailablePeriodsState {
        periods: (*periods).clone(),
        loading: *loading,
    };

    let actions = UseAvailablePeriodsActions { replace_periods };

    UseAvailablePeriodsResult { state, actions }
}
