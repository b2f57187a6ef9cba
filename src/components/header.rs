//! Site Header Component
//!
//! Desktop: logo, nav links and auth buttons in one row
//! Mobile: logo plus a menu toggle revealing the same links stacked

use dioxus::prelude::*;
use learnhub_ui::{button_class, ButtonSize, ButtonVariant, IconButton};

use crate::app::Route;

/// Top-level destinations in the site header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Tracks,
}

impl NavLocation {
    pub const ALL: [NavLocation; 2] = [NavLocation::Home, NavLocation::Tracks];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Tracks => "Tracks",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Tracks => Route::Courses {},
        }
    }
}

/// Brand mark linking home
#[component]
pub fn Logo(#[props(default)] class: Option<String>) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        Link { to: Route::Home {}, class: "logo {extra}",
            span { class: "logo-mark", "G" }
            span { class: "logo-text", "client" }
        }
    }
}

/// Site header with mobile menu
#[component]
pub fn SiteHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    let login_class = button_class(ButtonVariant::Ghost, ButtonSize::Md, false, false, None);
    let signup_class = button_class(ButtonVariant::Primary, ButtonSize::Md, false, false, None);
    let mobile_login = button_class(ButtonVariant::Outline, ButtonSize::Md, false, true, None);
    let mobile_signup = button_class(ButtonVariant::Primary, ButtonSize::Md, false, true, None);

    rsx! {
        header { class: "site-header sticky top-0 z-50 w-full border-b border-neutral-200 bg-white",
            div { class: "container",
                div { class: "flex h-16 items-center justify-between",
                    div { class: "flex items-center gap-8",
                        Logo {}
                        nav { class: "desktop-only flex items-center space-x-6",
                            for location in NavLocation::ALL {
                                Link {
                                    to: location.route(),
                                    class: "nav-link text-sm font-medium text-neutral-600",
                                    "{location.display_name()}"
                                }
                            }
                        }
                    }
                    div { class: "flex items-center gap-4",
                        div { class: "desktop-only flex items-center gap-3",
                            Link { to: Route::Login {}, class: "{login_class}", "Login" }
                            Link { to: Route::Signup {}, class: "{signup_class}", "Sign up" }
                        }
                        IconButton {
                            class: "mobile-only".to_string(),
                            aria_label: "Toggle mobile menu".to_string(),
                            onclick: move |_| menu_open.toggle(),
                            if menu_open() { "\u{2715}" } else { "\u{2630}" }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile-only border-t border-neutral-200 bg-white",
                    div { class: "container py-4",
                        nav { class: "flex flex-col space-y-4",
                            for location in NavLocation::ALL {
                                Link {
                                    to: location.route(),
                                    class: "nav-link text-sm font-medium text-neutral-600 py-2",
                                    onclick: move |_| menu_open.set(false),
                                    "{location.display_name()}"
                                }
                            }
                            div { class: "pt-4 border-t border-neutral-200 space-y-3",
                                Link { to: Route::Login {}, class: "{mobile_login}", "Login" }
                                Link { to: Route::Signup {}, class: "{mobile_signup}", "Sign up" }
                            }
                        }
                    }
                }
            }
        }
    }
}
