//! Page layouts.
//!
//! - Site pages: header, content, footer
//! - Auth pages: centered card on a tinted background with the logo on top
//! - Account pages: account header with user menu, tab strip, content

use dioxus::prelude::*;
use learnhub_core::account::current_user;
use learnhub_ui::{Avatar, AvatarSize};

use crate::app::Route;
use crate::components::header::{Logo, SiteHeader};
use crate::components::footer::SiteFooter;
use crate::context::use_start_route;

#[component]
pub fn SiteLayout() -> Element {
    use_start_route();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            SiteHeader {}
            main { class: "flex-1", Outlet::<Route> {} }
            SiteFooter {}
        }
    }
}

#[component]
pub fn AuthLayout() -> Element {
    use_start_route();

    rsx! {
        div { class: "auth-shell min-h-screen flex flex-col items-center justify-center px-4 py-12",
            div { class: "mb-8", Logo {} }
            div { class: "w-full max-w-md", Outlet::<Route> {} }
        }
    }
}

/// Tabs across the top of the account pages
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AccountTab {
    Dashboard,
    Settings,
    Invoices,
}

impl AccountTab {
    pub const ALL: [AccountTab; 3] = [AccountTab::Dashboard, AccountTab::Settings, AccountTab::Invoices];

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountTab::Dashboard => "Dashboard",
            AccountTab::Settings => "Settings",
            AccountTab::Invoices => "Invoices",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AccountTab::Dashboard => "\u{25A4}",
            AccountTab::Settings => "\u{2699}",
            AccountTab::Invoices => "\u{1F5CE}",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            AccountTab::Dashboard => Route::Dashboard {},
            AccountTab::Settings => Route::Settings {},
            AccountTab::Invoices => Route::Invoices {},
        }
    }

    /// Tab owning the given route, if it is an account page.
    pub fn for_route(route: &Route) -> Option<AccountTab> {
        AccountTab::ALL.into_iter().find(|tab| tab.route() == *route)
    }
}

#[component]
pub fn AccountLayout() -> Element {
    use_start_route();
    let route = use_route::<Route>();
    let active = AccountTab::for_route(&route);

    rsx! {
        div { class: "min-h-screen bg-neutral-50",
            header { class: "bg-white border-b border-neutral-200",
                div { class: "container",
                    div { class: "flex h-16 items-center justify-between",
                        div { class: "flex items-center gap-8",
                            Logo {}
                            nav { class: "desktop-only flex items-center gap-6",
                                Link { to: Route::Home {}, class: "nav-link text-sm font-medium text-neutral-600", "Home" }
                                Link { to: Route::Courses {}, class: "nav-link text-sm font-medium text-neutral-600", "Courses" }
                            }
                        }
                        UserMenu {}
                    }
                }
            }
            div { class: "bg-primary-600 text-white",
                div { class: "container",
                    nav { class: "flex items-center gap-1 py-4",
                        for tab in AccountTab::ALL {
                            Link {
                                to: tab.route(),
                                class: if Some(tab) == active { "account-tab active" } else { "account-tab" },
                                span { "{tab.icon()}" }
                                "{tab.display_name()}"
                            }
                        }
                    }
                }
            }
            div { class: "container py-8", Outlet::<Route> {} }
        }
    }
}

/// Avatar button with a dropdown of account links
#[component]
fn UserMenu() -> Element {
    let mut open = use_signal(|| false);
    let navigator = use_navigator();
    let user = use_hook(current_user);
    let name = user.name();

    rsx! {
        div { class: "relative",
            button {
                class: "flex items-center gap-3 p-2 rounded-lg user-menu-button",
                r#type: "button",
                onclick: move |_| open.toggle(),
                Avatar { name: name.clone(), size: AvatarSize::Sm }
                span { class: "text-sm font-medium text-neutral-700", "{name}" }
                span { class: "text-neutral-500", "\u{25BE}" }
            }
            if open() {
                div { class: "dropdown absolute right-0 mt-2 w-48 bg-white rounded-lg border border-neutral-200 py-2 z-50",
                    Link {
                        to: Route::Dashboard {},
                        class: "dropdown-item block px-4 py-2 text-sm text-neutral-700",
                        onclick: move |_| open.set(false),
                        "Dashboard"
                    }
                    Link {
                        to: Route::Settings {},
                        class: "dropdown-item block px-4 py-2 text-sm text-neutral-700",
                        onclick: move |_| open.set(false),
                        "Settings"
                    }
                    hr { class: "my-2 border-neutral-200" }
                    button {
                        class: "dropdown-item block w-full text-left px-4 py-2 text-sm text-neutral-700",
                        r#type: "button",
                        onclick: move |_| {
                            open.set(false);
                            tracing::info!("Signed out");
                            navigator.push(Route::Login {});
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_matches_its_route() {
        for tab in AccountTab::ALL {
            assert_eq!(AccountTab::for_route(&tab.route()), Some(tab));
        }
        assert_eq!(AccountTab::for_route(&Route::Home {}), None);
    }
}
