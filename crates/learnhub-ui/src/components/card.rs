//! Card Components
//!
//! Bordered surfaces for course tiles, forms and dashboard panels.

use dioxus::prelude::*;
use learnhub_core::variants::{card_style, CardSize, CardVariant, StyleState};

use super::compose_class;

pub fn card_class(
    variant: CardVariant,
    size: CardSize,
    disabled: bool,
    extra: Option<&str>,
) -> String {
    let state = disabled.then_some(StyleState::Disabled);
    compose_class(card_style(variant, size, state), extra)
}

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    #[props(default)]
    pub variant: CardVariant,
    #[props(default)]
    pub size: CardSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Makes the whole card clickable
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

/// Card container
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card { variant: CardVariant::Elevated, size: CardSize::Lg,
///         CardHeader { title: "Login".to_string() }
///         CardContent { LoginForm {} }
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardProps) -> Element {
    let class = card_class(props.variant, props.size, props.disabled, props.class.as_deref());

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Title block at the top of a card
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
) -> Element {
    rsx! {
        div { class: "flex flex-col space-y-1.5 mb-6",
            h3 { class: "text-2xl font-semibold leading-none tracking-tight", "{title}" }
            if let Some(description) = description {
                p { class: "text-sm text-neutral-500", "{description}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "space-y-4", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "flex items-center pt-6", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_defaults() {
        let class = card_class(CardVariant::default(), CardSize::default(), false, None);
        assert!(class.starts_with("rounded-lg border bg-white"));
        assert!(class.contains("p-6"));
    }

    #[test]
    fn interactive_card_with_extra_padding_override() {
        let class = card_class(CardVariant::Interactive, CardSize::Sm, false, Some("p-0"));
        assert!(class.contains("cursor-pointer"));
        assert!(class.ends_with("p-4 p-0"));
    }

    #[test]
    fn disabled_card() {
        let class = card_class(CardVariant::Default, CardSize::Md, true, None);
        assert!(class.ends_with("opacity-50 pointer-events-none"));
    }
}
