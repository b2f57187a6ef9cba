//! Badge Component
//!
//! Small status pills: invoice status, course category, enrollment progress.

use dioxus::prelude::*;
use learnhub_core::variants::{badge_style, BadgeSize, BadgeVariant, StyleState};

use super::compose_class;

pub fn badge_class(
    variant: BadgeVariant,
    size: BadgeSize,
    state: Option<StyleState>,
    extra: Option<&str>,
) -> String {
    compose_class(badge_style(variant, size, state), extra)
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    pub children: Element,
    #[props(default)]
    pub variant: BadgeVariant,
    #[props(default)]
    pub size: BadgeSize,
    /// Error/success override the variant
    #[props(default)]
    pub state: Option<StyleState>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = badge_class(props.variant, props.size, props.state, props.class.as_deref());

    rsx! {
        span { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_badge() {
        let class = badge_class(BadgeVariant::Success, BadgeSize::Sm, None, None);
        assert!(class.contains("bg-success-500"));
        assert!(class.contains("px-2 py-1"));
    }

    #[test]
    fn error_state_overrides_variant() {
        let class = badge_class(BadgeVariant::Info, BadgeSize::Md, Some(StyleState::Error), None);
        assert!(class.contains("bg-error-500"));
        assert!(!class.contains("bg-info-500"));
    }
}
