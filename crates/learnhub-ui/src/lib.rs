//! LearnHub UI Components
//!
//! This crate provides the Dioxus component library the LearnHub pages are
//! built from.
//!
//! ## Styling
//!
//! Components never hardcode their look. Each one turns its typed options
//! (variant, size, state) into a
//! [`StyleDescriptor`](learnhub_core::StyleDescriptor) through the core
//! variant resolver and renders the resulting class list. Extra classes passed
//! by a page are appended after the resolved ones.

pub mod components;

pub use components::*;
pub use learnhub_core::variants::{
    AvatarSize, BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, CardSize, CardVariant,
    InputSize, InputVariant, SpinnerSize, SpinnerVariant,
};
