//! Loading Indicators
//!
//! Spinners for in-flight actions and skeleton blocks for content that is
//! still arriving.

use dioxus::prelude::*;
use learnhub_core::variants::{spinner_style, SpinnerSize, SpinnerVariant};

use super::compose_class;

pub fn loader_class(size: SpinnerSize, variant: SpinnerVariant, extra: Option<&str>) -> String {
    compose_class(spinner_style(size, variant), extra)
}

#[component]
pub fn Loader(
    #[props(default)] size: SpinnerSize,
    #[props(default)] variant: SpinnerVariant,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = loader_class(size, variant, class.as_deref());

    rsx! {
        span { class: "spinner {class}", role: "status", "aria-label": "Loading" }
    }
}

/// Placeholder block shown in place of text or images
#[component]
pub fn Skeleton(#[props(default)] class: Option<String>) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        div { class: "animate-pulse rounded-md bg-neutral-200 {extra}" }
    }
}

/// Full-screen centered spinner
#[component]
pub fn PageLoader(#[props(default)] message: Option<String>) -> Element {
    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center gap-4",
            Loader { size: SpinnerSize::Xl, variant: SpinnerVariant::Primary }
            if let Some(message) = message {
                p { class: "text-sm text-neutral-500", "{message}" }
            }
        }
    }
}

/// Dims its children and shows a spinner on top while `loading`
#[component]
pub fn LoadingOverlay(loading: bool, children: Element) -> Element {
    rsx! {
        div { class: "relative",
            {children}
            if loading {
                div { class: "absolute inset-0 flex items-center justify-center bg-white/70 rounded-lg",
                    Loader { size: SpinnerSize::Lg, variant: SpinnerVariant::Primary }
                }
            }
        }
    }
}

#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        div { class: "rounded-lg border border-neutral-200 bg-white p-6 space-y-4",
            Skeleton { class: "h-6 w-1/2".to_string() }
            Skeleton { class: "h-4 w-full".to_string() }
            Skeleton { class: "h-4 w-3/4".to_string() }
        }
    }
}

/// Placeholder shaped like a course tile
#[component]
pub fn CourseCardSkeleton() -> Element {
    rsx! {
        div { class: "rounded-lg border border-neutral-200 bg-white overflow-hidden",
            Skeleton { class: "h-48 w-full rounded-none".to_string() }
            div { class: "p-6 space-y-3",
                Skeleton { class: "h-4 w-1/4".to_string() }
                Skeleton { class: "h-6 w-3/4".to_string() }
                Skeleton { class: "h-4 w-full".to_string() }
                div { class: "flex justify-between pt-2",
                    Skeleton { class: "h-4 w-16".to_string() }
                    Skeleton { class: "h-8 w-24".to_string() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_class_tokens() {
        assert_eq!(
            loader_class(SpinnerSize::Lg, SpinnerVariant::White, None),
            "animate-spin h-8 w-8 text-white"
        );
    }

    #[test]
    fn loader_defaults() {
        let class = loader_class(SpinnerSize::default(), SpinnerVariant::default(), Some("mr-2"));
        assert_eq!(class, "animate-spin h-6 w-6 text-neutral-500 mr-2");
    }
}
