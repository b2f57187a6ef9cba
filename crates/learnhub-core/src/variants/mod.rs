//! Variant resolution for the component library.
//!
//! A component kind plus a handful of named options (variant, size, state)
//! deterministically resolves to a [`StyleDescriptor`]. Options are explicit
//! enums per kind; string input that names nothing falls back to the kind's
//! declared default rather than failing.
//!
//! ```ignore
//! use learnhub_core::variants::{resolve, ComponentKind};
//!
//! let style = resolve(ComponentKind::Button, "outline", "sm", None);
//! rsx! { button { class: "{style}", "Login" } }
//! ```

mod descriptor;
mod options;
mod resolve;

pub use descriptor::StyleDescriptor;
pub use options::{
    AvatarSize, BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, CardSize, CardVariant,
    ComponentKind, InputSize, InputVariant, SpinnerSize, SpinnerVariant, StyleOption, StyleState,
};
pub use resolve::{
    avatar_fallback_text, avatar_style, badge_style, button_style, card_style, input_style,
    resolve, spinner_style, StyleRequest,
};
