//! Per-kind option enums.
//!
//! Each enum lists every option a component kind recognizes, plus the
//! default used when a caller passes something unrecognized.

/// A named style option with a fixed set of values and a fallback default.
pub trait StyleOption: Sized + Copy + Default + 'static {
    /// Every recognized value, in declaration order.
    const ALL: &'static [Self];

    /// The option's name as written in markup (`"primary"`, `"lg"`, ...).
    fn name(&self) -> &'static str;

    /// Exact, case-sensitive lookup by name.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|opt| opt.name() == name)
    }

    /// Lookup by name, degrading to the default for unknown names.
    fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

macro_rules! style_option {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl StyleOption for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

style_option! {
    /// The five component kinds the resolver knows about
    pub enum ComponentKind {
        Button => "button",
        Input => "input",
        Badge => "badge",
        Avatar => "avatar",
        Card => "card",
    }
    default = Button;
}

/// Interaction state layered on top of variant and size.
///
/// Not a [`StyleOption`]: there is no fallback state, so an unknown name
/// means no state at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleState {
    Error,
    Success,
    Disabled,
}

impl StyleState {
    pub const ALL: [StyleState; 3] = [StyleState::Error, StyleState::Success, StyleState::Disabled];

    pub fn name(&self) -> &'static str {
        match self {
            StyleState::Error => "error",
            StyleState::Success => "success",
            StyleState::Disabled => "disabled",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.name() == name)
    }

    /// Unknown or missing states are treated as "no state".
    pub fn from_optional(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::parse)
    }
}

impl std::fmt::Display for StyleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

style_option! {
    /// Button style variants
    pub enum ButtonVariant {
        /// Filled brand color, the main call to action
        Primary => "primary",
        Secondary => "secondary",
        /// Bordered on white
        Outline => "outline",
        Ghost => "ghost",
        /// Text-only, underlined on hover
        Link => "link",
        /// Irreversible actions (logout, delete)
        Destructive => "destructive",
    }
    default = Primary;
}

style_option! {
    pub enum ButtonSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        /// Square, for icon-only buttons
        Icon => "icon",
    }
    default = Md;
}

style_option! {
    pub enum InputVariant {
        Default => "default",
        Error => "error",
        Success => "success",
    }
    default = Default;
}

style_option! {
    pub enum InputSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
    default = Md;
}

style_option! {
    pub enum CardVariant {
        Default => "default",
        Outlined => "outlined",
        Elevated => "elevated",
        /// Hover shadow and pointer cursor
        Interactive => "interactive",
    }
    default = Default;
}

style_option! {
    pub enum CardSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
    default = Md;
}

style_option! {
    pub enum BadgeVariant {
        Default => "default",
        Secondary => "secondary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Outline => "outline",
    }
    default = Default;
}

style_option! {
    pub enum BadgeSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
    default = Md;
}

style_option! {
    pub enum AvatarSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
    }
    default = Md;
}

style_option! {
    /// Loading spinner size
    pub enum SpinnerSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default = Md;
}

style_option! {
    /// Loading spinner color
    pub enum SpinnerVariant {
        Default => "default",
        Primary => "primary",
        White => "white",
    }
    default = Default;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(ButtonVariant::parse("outline"), Some(ButtonVariant::Outline));
        assert_eq!(ButtonVariant::parse("Outline"), None);
        assert_eq!(ButtonVariant::parse(" outline"), None);
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        assert_eq!(ButtonVariant::parse_or_default("neon"), ButtonVariant::Primary);
        assert_eq!(ButtonSize::parse_or_default("xxl"), ButtonSize::Md);
        assert_eq!(AvatarSize::parse_or_default(""), AvatarSize::Md);
        assert_eq!(BadgeVariant::parse_or_default("danger"), BadgeVariant::Default);
    }

    #[test]
    fn names_round_trip_for_every_option() {
        for opt in AvatarSize::ALL {
            assert_eq!(AvatarSize::parse(opt.name()), Some(*opt));
        }
        assert_eq!(AvatarSize::Xxl.to_string(), "2xl");
    }

    #[test]
    fn unknown_state_is_no_state() {
        assert_eq!(StyleState::from_optional(None), None);
        assert_eq!(StyleState::from_optional(Some("loading")), None);
        assert_eq!(StyleState::from_optional(Some("error")), Some(StyleState::Error));
    }

    #[test]
    fn unknown_state_name_never_becomes_a_state() {
        assert_eq!(StyleState::parse("bogus"), None);
        assert_eq!(StyleState::parse("Disabled"), None);
        for state in StyleState::ALL {
            assert_eq!(StyleState::parse(state.name()), Some(state));
        }
    }
}
