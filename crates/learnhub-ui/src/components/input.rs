//! Input Field Components
//!
//! Text inputs and textareas with inline validation messages.
//! Features:
//! - Border color follows state: error beats success beats the variant
//! - Optional leading icon glyph
//! - Optional show/hide toggle for password fields
//! - One message line below the field: error, else success, else helper text

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;
use learnhub_core::variants::{input_style, InputSize, InputVariant, StyleState};

use super::compose_class;

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique element id for label association
fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// State shown by an input, derived from its messages.
fn input_state(error: bool, success: bool, disabled: bool) -> Option<StyleState> {
    if error {
        Some(StyleState::Error)
    } else if success {
        Some(StyleState::Success)
    } else if disabled {
        Some(StyleState::Disabled)
    } else {
        None
    }
}

/// Class list for an input element.
pub fn input_class(
    variant: InputVariant,
    size: InputSize,
    state: Option<StyleState>,
    has_left_icon: bool,
    has_right_icon: bool,
    extra: Option<&str>,
) -> String {
    let mut style = input_style(variant, size, state);
    if has_left_icon {
        style = style.with_extra("pl-10");
    }
    if has_right_icon {
        style = style.with_extra("pr-10");
    }
    compose_class(style, extra)
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Validation error; switches the field to the error style
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub success: Option<String>,
    /// Shown when there is no error or success message
    #[props(default)]
    pub helper_text: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub variant: InputVariant,
    #[props(default)]
    pub size: InputSize,
    /// Glyph shown inside the field on the left
    #[props(default)]
    pub left_icon: Option<String>,
    /// Adds a show/hide button to password fields
    #[props(default = false)]
    pub show_password_toggle: bool,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub name: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut form = use_signal(FormState::new);
///
/// rsx! {
///     Input {
///         value: form.read().value("email").to_string(),
///         oninput: move |s: String| form.write().update("email", s, &rules),
///         input_type: "email".to_string(),
///         placeholder: "Email".to_string(),
///         left_icon: "\u{2709}".to_string(),
///         error: form.read().error("email").map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let generated_id = use_hook(|| next_id("input"));
    let mut show_password = use_signal(|| false);

    let id = props.id.clone().unwrap_or(generated_id);
    let is_password = props.input_type == "password";
    let toggles = is_password && props.show_password_toggle;
    let input_type = if toggles && show_password() {
        "text".to_string()
    } else {
        props.input_type.clone()
    };
    let has_status_icon = props.error.is_some() || props.success.is_some();
    let class = input_class(
        props.variant,
        props.size,
        input_state(props.error.is_some(), props.success.is_some(), props.disabled),
        props.left_icon.is_some(),
        toggles || has_status_icon,
        props.class.as_deref(),
    );

    rsx! {
        div { class: "w-full space-y-2",
            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-neutral-700",
                    r#for: "{id}",
                    "{label}"
                }
            }
            div { class: "relative",
                if let Some(icon) = &props.left_icon {
                    span { class: "input-icon-left text-neutral-500", "{icon}" }
                }
                input {
                    id: "{id}",
                    name: props.name.as_deref().unwrap_or(""),
                    class: "{class}",
                    r#type: "{input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    required: props.required,
                    disabled: props.disabled,
                    "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                    oninput: move |e| props.oninput.call(e.value()),
                }
                if toggles {
                    button {
                        class: "input-icon-right p-1 rounded",
                        r#type: "button",
                        tabindex: "-1",
                        "aria-label": if show_password() { "Hide password" } else { "Show password" },
                        onclick: move |_| show_password.toggle(),
                        if show_password() { "\u{25C9}" } else { "\u{25CE}" }
                    }
                } else if props.error.is_some() {
                    span { class: "input-icon-right text-error-500", "!" }
                } else if props.success.is_some() {
                    span { class: "input-icon-right text-success-500", "\u{2713}" }
                }
            }
            FieldMessage {
                error: props.error.clone(),
                success: props.success.clone(),
                helper_text: props.helper_text.clone(),
            }
        }
    }
}

/// The single message line under a field.
#[component]
fn FieldMessage(
    error: Option<String>,
    success: Option<String>,
    helper_text: Option<String>,
) -> Element {
    if let Some(error) = error {
        return rsx! {
            p { class: "mt-1 text-sm text-error-500", role: "alert", "{error}" }
        };
    }
    if let Some(success) = success {
        return rsx! {
            p { class: "mt-1 text-sm text-success-500", "{success}" }
        };
    }
    match helper_text {
        Some(help) => rsx! { p { class: "mt-1 text-sm text-neutral-500", "{help}" } },
        None => rsx! {},
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input, e.g. the optional checkout notes
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| next_id("textarea"));
    let class = input_class(
        InputVariant::Default,
        InputSize::Md,
        input_state(props.error.is_some(), false, props.disabled),
        false,
        false,
        Some("h-auto min-h-24"),
    );

    rsx! {
        div { class: "w-full space-y-2",
            if let Some(label) = &props.label {
                label { class: "block text-sm font-medium text-neutral-700", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldMessage { error: props.error.clone(), success: None, helper_text: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique() {
        let a = next_id("input");
        let b = next_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }

    #[test]
    fn error_beats_success_beats_disabled() {
        assert_eq!(input_state(true, true, true), Some(StyleState::Error));
        assert_eq!(input_state(false, true, true), Some(StyleState::Success));
        assert_eq!(input_state(false, false, true), Some(StyleState::Disabled));
        assert_eq!(input_state(false, false, false), None);
    }

    #[test]
    fn icon_padding_is_added() {
        let class = input_class(InputVariant::Default, InputSize::Lg, None, true, true, None);
        assert!(class.contains("pl-10"));
        assert!(class.contains("pr-10"));
        assert!(class.contains("h-12"));
    }

    #[test]
    fn error_state_styles_border() {
        let class = input_class(
            InputVariant::Default,
            InputSize::Md,
            Some(StyleState::Error),
            false,
            false,
            None,
        );
        assert!(class.contains("border-error-500"));
        assert!(!class.contains("border-neutral-300"));
    }
}
