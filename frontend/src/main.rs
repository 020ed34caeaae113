use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::navbar::Navbar;
use components::reports_page::ReportsPage;
use config::AppConfig;
use services::api::ApiClient;
use services::logging::Logger;
use services::session;

const REPORTS_HREF: &str = "/Reports";

#[function_component(App)]
fn app() -> Html {
    // Identity and configuration are read once per page load
    let identity = use_memo((), |_| session::load_identity());
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo((), |_| ApiClient::new());

    use_effect_with((), {
        let api_client = api_client.clone();
        let signed_in = identity.is_some();
        move |_| {
            Logger::info_with_component(
                "app",
                &format!("Reports page started (api: {}, signed in: {})", api_client.base_url(), signed_in),
            );
            || ()
        }
    });

    html! {
        <div class="app">
            <Navbar active_href={REPORTS_HREF} />
            <main>
                {match &*identity {
                    Some(identity) => html! {
                        <ReportsPage
                            identity={identity.clone()}
                            api_client={(*api_client).clone()}
                            config={(*config).clone()}
                        />
                    },
                    None => html! {
                        <div class="container">
                            <div class="sign-in-notice">
                                <h2>{"You are not signed in"}</h2>
                                <p>{"Sign in to view and print your payslips."}</p>
                                <a class="btn btn-primary" href={components::navbar::LOGIN_PATH}>{"Go to login"}</a>
                            </div>
                        </div>
                    },
                }}
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
