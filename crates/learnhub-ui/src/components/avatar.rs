//! Avatar Components
//!
//! Round user pictures. Without an image the avatar shows the initials of
//! the given name (or an explicit fallback) on a brand-colored disc.

use dioxus::prelude::*;
use learnhub_core::account::initials;
use learnhub_core::variants::{avatar_fallback_text, avatar_style, AvatarSize};

use super::compose_class;

pub fn avatar_class(size: AvatarSize, extra: Option<&str>) -> String {
    compose_class(avatar_style(size), extra)
}

/// Text shown when there is no image: explicit fallback, else initials.
fn fallback_label(name: Option<&str>, fallback: Option<&str>) -> String {
    match (fallback, name) {
        (Some(fallback), _) => fallback.to_string(),
        (None, Some(name)) => initials(name),
        (None, None) => initials(""),
    }
}

/// Visible avatars and the overflow count for a group.
fn split_group(names: &[String], max: usize) -> (&[String], usize) {
    let shown = names.len().min(max);
    (&names[..shown], names.len() - shown)
}

#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Image URL
    #[props(default)]
    pub src: Option<String>,
    /// Used for alt text and initials
    #[props(default)]
    pub name: Option<String>,
    /// Overrides the initials
    #[props(default)]
    pub fallback: Option<String>,
    #[props(default)]
    pub size: AvatarSize,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let class = avatar_class(props.size, props.class.as_deref());
    let text_size = avatar_fallback_text(props.size);
    let alt = props.name.clone().unwrap_or_else(|| "Avatar".to_string());
    let label = fallback_label(props.name.as_deref(), props.fallback.as_deref());

    rsx! {
        span { class: "{class}",
            if let Some(src) = &props.src {
                img { class: "aspect-square h-full w-full object-cover", src: "{src}", alt: "{alt}" }
            } else {
                span {
                    class: "flex h-full w-full items-center justify-center rounded-full bg-primary-100 text-primary-700 font-medium {text_size}",
                    "{label}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AvatarGroupProps {
    pub names: Vec<String>,
    /// Avatars shown before collapsing the rest into "+N"
    #[props(default = 3)]
    pub max: usize,
    #[props(default)]
    pub size: AvatarSize,
}

/// Overlapping row of avatars
#[component]
pub fn AvatarGroup(props: AvatarGroupProps) -> Element {
    let (shown, overflow) = split_group(&props.names, props.max);

    rsx! {
        div { class: "flex -space-x-2",
            for name in shown.iter() {
                Avatar {
                    key: "{name}",
                    name: name.clone(),
                    size: props.size,
                    class: "ring-2 ring-white".to_string(),
                }
            }
            if overflow > 0 {
                Avatar {
                    fallback: format!("+{overflow}"),
                    size: props.size,
                    class: "ring-2 ring-white".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_prefers_explicit_text() {
        assert_eq!(fallback_label(Some("John Doe"), Some("JD!")), "JD!");
        assert_eq!(fallback_label(Some("John Doe"), None), "JD");
        assert_eq!(fallback_label(None, None), "??");
    }

    #[test]
    fn group_overflow() {
        let names: Vec<String> = ["Ana", "Ben", "Cy", "Dee", "Eve"].map(String::from).to_vec();
        let (shown, overflow) = split_group(&names, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(overflow, 2);

        let (shown, overflow) = split_group(&names[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn avatar_class_by_size() {
        assert!(avatar_class(AvatarSize::Xxl, None).contains("h-20 w-20"));
    }
}
