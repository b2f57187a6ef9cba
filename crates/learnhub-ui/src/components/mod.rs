//! Reusable UI components
//!
//! Buttons, inputs, cards, badges, avatars and loaders, each driven by the
//! core variant resolver.

mod avatar;
mod badge;
mod button;
mod card;
mod input;
mod loader;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use loader::*;

/// Resolved classes followed by caller-supplied extras.
pub(crate) fn compose_class(
    style: learnhub_core::StyleDescriptor,
    extra: Option<&str>,
) -> String {
    match extra {
        Some(extra) => style.with_extra(extra).class(),
        None => style.class(),
    }
}
