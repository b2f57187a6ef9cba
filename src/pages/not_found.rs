//! Fallback for unknown paths and missing tracks.

use dioxus::prelude::*;
use learnhub_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{SiteFooter, SiteHeader};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No page at /{}", segments.join("/"));

    rsx! {
        div { class: "min-h-screen flex flex-col",
            SiteHeader {}
            main { class: "flex-1", Missing {} }
            SiteFooter {}
        }
    }
}

/// 404 body, also shown inside the site layout for unknown track ids
#[component]
pub fn Missing() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "not-found flex items-center justify-center",
            div { class: "text-center",
                h1 { class: "text-6xl font-bold text-neutral-900 mb-4", "404" }
                h2 { class: "text-2xl font-semibold text-neutral-700 mb-4", "Page Not Found" }
                p { class: "text-neutral-600 mb-8 max-w-md",
                    "Sorry, we couldn't find the page you're looking for. "
                    "The page may have been moved or doesn't exist."
                }
                div { class: "flex justify-center gap-4",
                    Button {
                        onclick: move |_| {
                            navigator.push(Route::Home {});
                        },
                        "Go Home"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| navigator.go_back(),
                        "Go Back"
                    }
                }
            }
        }
    }
}
