//! Button Components
//!
//! Variant-driven buttons:
//! - Primary: filled brand color, the main call to action
//! - Secondary / Destructive: filled alternates
//! - Outline / Ghost / Link: low-emphasis actions
//!
//! While `loading`, a button shows a spinner in place of its left icon and
//! ignores clicks.

use dioxus::prelude::*;
use learnhub_core::variants::{
    button_style, ButtonSize, ButtonVariant, SpinnerSize, SpinnerVariant, StyleState,
};

use super::{compose_class, Loader};

/// Class list for a button, also used by router links styled as buttons.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    extra: Option<&str>,
) -> String {
    let state = disabled.then_some(StyleState::Disabled);
    let mut style = button_style(variant, size, state);
    if full_width {
        style = style.with_extra("w-full");
    }
    compose_class(style, extra)
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner and disables the button
    #[props(default = false)]
    pub loading: bool,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Glyph rendered before the label (hidden while loading)
    #[props(default)]
    pub left_icon: Option<String>,
    /// Glyph rendered after the label (hidden while loading)
    #[props(default)]
    pub right_icon: Option<String>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         size: ButtonSize::Lg,
///         full_width: true,
///         loading: form.read().submitting(),
///         button_type: "submit".to_string(),
///         "Login"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let is_disabled = props.disabled || props.loading;
    let full_class = button_class(
        props.variant,
        props.size,
        is_disabled,
        props.full_width,
        props.class.as_deref(),
    );
    let left_icon = props.left_icon.clone().filter(|_| !props.loading);
    let right_icon = props.right_icon.clone().filter(|_| !props.loading);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: is_disabled,
            "aria-busy": if props.loading { "true" } else { "false" },
            onclick: move |_| {
                if is_disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                Loader {
                    size: SpinnerSize::Sm,
                    variant: spinner_variant(props.variant),
                    class: "mr-2".to_string(),
                }
            }
            if let Some(icon) = left_icon {
                span { class: "mr-2", "{icon}" }
            }
            {props.children}
            if let Some(icon) = right_icon {
                span { class: "ml-2", "{icon}" }
            }
        }
    }
}

/// Spinner color that stays visible on the button's background.
fn spinner_variant(variant: ButtonVariant) -> SpinnerVariant {
    match variant {
        ButtonVariant::Primary | ButtonVariant::Secondary | ButtonVariant::Destructive => {
            SpinnerVariant::White
        }
        _ => SpinnerVariant::Primary,
    }
}

/// Icon button for compact actions (menu toggle, close, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub variant: Option<ButtonVariant>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = button_class(
        props.variant.unwrap_or(ButtonVariant::Ghost),
        ButtonSize::Icon,
        false,
        false,
        props.class.as_deref(),
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_class_uses_resolver() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Lg, false, false, None);
        assert!(class.contains("bg-primary-600"));
        assert!(class.contains("h-11"));
        assert!(!class.contains("w-full"));
    }

    #[test]
    fn button_class_full_width_and_extra() {
        let class = button_class(
            ButtonVariant::Outline,
            ButtonSize::Sm,
            false,
            true,
            Some("border-primary-600"),
        );
        assert!(class.ends_with("w-full border-primary-600"));
    }

    #[test]
    fn disabled_button_gets_disabled_tokens() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Md, true, false, None);
        assert!(class.contains(" opacity-50 pointer-events-none"));
    }

    #[test]
    fn spinner_contrasts_with_fill() {
        assert_eq!(spinner_variant(ButtonVariant::Primary), SpinnerVariant::White);
        assert_eq!(spinner_variant(ButtonVariant::Outline), SpinnerVariant::Primary);
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }
}
