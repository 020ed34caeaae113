use yew::prelude::*;
use web_sys::MouseEvent;
use crate::services::logging::Logger;
use crate::services::session;

/// Top navigation entries as `(label, href)`
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Dashboard", "/"),
    ("Scan DTR", "/Upload"),
    ("Print Payslip", "/Reports"),
    ("Records", "/records"),
];

/// Entries of the profile dropdown, above Logout
pub const PROFILE_LINKS: [(&str, &str); 2] = [
    ("Payroll Profile", "/Profile"),
    ("Settings", "/settings"),
];

pub const LOGIN_PATH: &str = "/login";

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Link of the current page, rendered as active
    #[prop_or_default]
    pub active_href: Option<AttrValue>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let show_profile_dropdown = use_state(|| false);

    let toggle_dropdown = {
        let show_profile_dropdown = show_profile_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            show_profile_dropdown.set(!*show_profile_dropdown);
        })
    };

    // Close dropdown when clicking outside
    let on_backdrop_click = {
        let show_profile_dropdown = show_profile_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            show_profile_dropdown.set(false);
        })
    };

    let on_menu_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_logout = Callback::from(|_: MouseEvent| {
        session::clear_session();
        let navigated = web_sys::window()
            .map(|window| window.location().set_href(LOGIN_PATH).is_ok())
            .unwrap_or(false);
        if !navigated {
            Logger::error_with_component("navbar", "Failed to navigate to the login page");
        }
    });

    html! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <div class="navbar-brand">
                    <div class="brand-icon">{"📄"}</div>
                    <h2>{"AutoPayslip"}</h2>
                </div>

                <div class="navbar-right">
                    <div class="navbar-links">
                        { for NAV_LINKS.iter().map(|(label, href)| {
                            let active = props.active_href.as_deref() == Some(*href);
                            html! {
                                <a
                                    key={*href}
                                    href={*href}
                                    class={classes!("nav-link", active.then_some("active"))}
                                >
                                    {*label}
                                </a>
                            }
                        }) }
                    </div>

                    <div class="profile-dropdown">
                        <button
                            class="profile-button"
                            onclick={toggle_dropdown}
                            aria-label="Profile menu"
                        >
                            <span class="profile-avatar">{"👤"}</span>
                            <span>{"Profile"}</span>
                            <span class={classes!("chevron", (*show_profile_dropdown).then_some("open"))}>{"▾"}</span>
                        </button>

                        if *show_profile_dropdown {
                            <>
                                <div class="profile-backdrop" onclick={on_backdrop_click}></div>
                                <div class="profile-menu" onclick={on_menu_click}>
                                    { for PROFILE_LINKS.iter().map(|(label, href)| html! {
                                        <a key={*href} href={*href} class="profile-item">
                                            <span>{*label}</span>
                                        </a>
                                    }) }
                                    <hr class="profile-divider" />
                                    <button class="profile-item logout" onclick={on_logout}>
                                        <span>{"Logout"}</span>
                                    </button>
                                </div>
                            </>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_link_present() {
        assert!(NAV_LINKS.contains(&("Print Payslip", "/Reports")));
        assert_eq!(NAV_LINKS[0], ("Dashboard", "/"));
        assert_eq!(LOGIN_PATH, "/login");
    }
}
