//! Variant tables and the resolver.
//!
//! Token order in every descriptor: base, variant, size, state.

use super::descriptor::StyleDescriptor;
use super::options::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium ring-offset-white transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-neutral-950 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";
const INPUT_BASE: &str = "flex w-full rounded-md border bg-white px-3 py-2 text-sm ring-offset-white placeholder:text-neutral-500 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
const CARD_BASE: &str = "rounded-lg border bg-white text-neutral-950 shadow-sm";
const BADGE_BASE: &str = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-neutral-950 focus:ring-offset-2";
const AVATAR_BASE: &str = "relative flex shrink-0 overflow-hidden rounded-full";
const SPINNER_BASE: &str = "animate-spin";

const DISABLED: &str = "opacity-50 pointer-events-none";
const INPUT_DISABLED: &str = "bg-neutral-50";

fn button_variant_tokens(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "bg-primary-600 text-white hover:bg-primary-700 active:bg-primary-800",
        ButtonVariant::Secondary => "bg-secondary-600 text-white hover:bg-secondary-700 active:bg-secondary-800",
        ButtonVariant::Outline => "border border-neutral-300 bg-white hover:bg-neutral-50 hover:text-neutral-900",
        ButtonVariant::Ghost => "hover:bg-neutral-100 hover:text-neutral-900",
        ButtonVariant::Link => "text-primary-600 underline-offset-4 hover:underline",
        ButtonVariant::Destructive => "bg-error-500 text-white hover:bg-error-600 active:bg-error-700",
    }
}

fn button_size_tokens(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Sm => "h-9 rounded-md px-3",
        ButtonSize::Md => "h-10 px-4 py-2",
        ButtonSize::Lg => "h-11 rounded-md px-8",
        ButtonSize::Icon => "h-10 w-10",
    }
}

fn input_variant_tokens(variant: InputVariant) -> &'static str {
    match variant {
        InputVariant::Default => "border-neutral-300 focus-visible:ring-primary-500",
        InputVariant::Error => "border-error-500 focus-visible:ring-error-500",
        InputVariant::Success => "border-success-500 focus-visible:ring-success-500",
    }
}

fn input_size_tokens(size: InputSize) -> &'static str {
    match size {
        InputSize::Sm => "h-8 px-2 text-xs",
        InputSize::Md => "h-10 px-3 py-2",
        InputSize::Lg => "h-12 px-4 text-base",
    }
}

fn card_variant_tokens(variant: CardVariant) -> &'static str {
    match variant {
        CardVariant::Default => "border-neutral-200",
        CardVariant::Outlined => "border-neutral-300 shadow-none",
        CardVariant::Elevated => "border-neutral-100 shadow-medium",
        CardVariant::Interactive => "border-neutral-200 hover:shadow-medium transition-shadow cursor-pointer",
    }
}

fn card_size_tokens(size: CardSize) -> &'static str {
    match size {
        CardSize::Sm => "p-4",
        CardSize::Md => "p-6",
        CardSize::Lg => "p-8",
    }
}

fn badge_variant_tokens(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "bg-neutral-900 text-neutral-50 hover:bg-neutral-900/80",
        BadgeVariant::Secondary => "bg-neutral-100 text-neutral-900 hover:bg-neutral-100/80",
        BadgeVariant::Success => "bg-success-500 text-white hover:bg-success-600",
        BadgeVariant::Warning => "bg-warning-500 text-white hover:bg-warning-600",
        BadgeVariant::Error => "bg-error-500 text-white hover:bg-error-600",
        BadgeVariant::Info => "bg-info-500 text-white hover:bg-info-600",
        BadgeVariant::Outline => "border border-neutral-200 bg-transparent text-neutral-900",
    }
}

fn badge_size_tokens(size: BadgeSize) -> &'static str {
    match size {
        BadgeSize::Sm => "px-2 py-1 text-xs",
        BadgeSize::Md => "px-2.5 py-0.5 text-xs",
        BadgeSize::Lg => "px-3 py-1 text-sm",
    }
}

fn avatar_size_tokens(size: AvatarSize) -> &'static str {
    match size {
        AvatarSize::Sm => "h-8 w-8",
        AvatarSize::Md => "h-10 w-10",
        AvatarSize::Lg => "h-12 w-12",
        AvatarSize::Xl => "h-16 w-16",
        AvatarSize::Xxl => "h-20 w-20",
    }
}

pub fn button_style(
    variant: ButtonVariant,
    size: ButtonSize,
    state: Option<StyleState>,
) -> StyleDescriptor {
    let mut style = StyleDescriptor::from_groups([
        BUTTON_BASE,
        button_variant_tokens(variant),
        button_size_tokens(size),
    ]);
    if state == Some(StyleState::Disabled) {
        style.push_group(DISABLED);
    }
    style
}

/// Input style. An `Error` or `Success` state replaces the variant, error
/// taking precedence, so a field showing a message is always bordered to match.
pub fn input_style(
    variant: InputVariant,
    size: InputSize,
    state: Option<StyleState>,
) -> StyleDescriptor {
    let effective = match state {
        Some(StyleState::Error) => InputVariant::Error,
        Some(StyleState::Success) => InputVariant::Success,
        _ => variant,
    };
    let mut style = StyleDescriptor::from_groups([
        INPUT_BASE,
        input_variant_tokens(effective),
        input_size_tokens(size),
    ]);
    if state == Some(StyleState::Disabled) {
        style.push_group(INPUT_DISABLED);
    }
    style
}

pub fn card_style(variant: CardVariant, size: CardSize, state: Option<StyleState>) -> StyleDescriptor {
    let mut style = StyleDescriptor::from_groups([
        CARD_BASE,
        card_variant_tokens(variant),
        card_size_tokens(size),
    ]);
    if state == Some(StyleState::Disabled) {
        style.push_group(DISABLED);
    }
    style
}

pub fn badge_style(
    variant: BadgeVariant,
    size: BadgeSize,
    state: Option<StyleState>,
) -> StyleDescriptor {
    let effective = match state {
        Some(StyleState::Error) => BadgeVariant::Error,
        Some(StyleState::Success) => BadgeVariant::Success,
        _ => variant,
    };
    StyleDescriptor::from_groups([
        BADGE_BASE,
        badge_variant_tokens(effective),
        badge_size_tokens(size),
    ])
}

/// Avatars have no variant and ignore state.
pub fn avatar_style(size: AvatarSize) -> StyleDescriptor {
    StyleDescriptor::from_groups([AVATAR_BASE, avatar_size_tokens(size)])
}

/// Text size for the initials shown when an avatar has no image.
pub fn avatar_fallback_text(size: AvatarSize) -> &'static str {
    match size {
        AvatarSize::Sm => "text-xs",
        AvatarSize::Md => "text-sm",
        AvatarSize::Lg => "text-base",
        AvatarSize::Xl => "text-lg",
        AvatarSize::Xxl => "text-xl",
    }
}

pub fn spinner_style(size: SpinnerSize, variant: SpinnerVariant) -> StyleDescriptor {
    let size_tokens = match size {
        SpinnerSize::Sm => "h-4 w-4",
        SpinnerSize::Md => "h-6 w-6",
        SpinnerSize::Lg => "h-8 w-8",
        SpinnerSize::Xl => "h-12 w-12",
    };
    let variant_tokens = match variant {
        SpinnerVariant::Default => "text-neutral-500",
        SpinnerVariant::Primary => "text-primary-600",
        SpinnerVariant::White => "text-white",
    };
    StyleDescriptor::from_groups([SPINNER_BASE, size_tokens, variant_tokens])
}

/// A string-keyed style request, as written in markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRequest<'a> {
    pub kind: ComponentKind,
    pub variant: &'a str,
    pub size: &'a str,
    pub state: Option<&'a str>,
}

impl<'a> StyleRequest<'a> {
    /// A request for the kind's default variant and size.
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            variant: "",
            size: "",
            state: None,
        }
    }

    pub fn variant(mut self, variant: &'a str) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: &'a str) -> Self {
        self.size = size;
        self
    }

    pub fn state(mut self, state: &'a str) -> Self {
        self.state = Some(state);
        self
    }

    pub fn resolve(&self) -> StyleDescriptor {
        resolve(self.kind, self.variant, self.size, self.state)
    }
}

/// Resolve a component's style from option names.
///
/// Never fails: unrecognized variant or size names fall back to the kind's
/// default, and an unrecognized state is treated as no state.
pub fn resolve(
    kind: ComponentKind,
    variant: &str,
    size: &str,
    state: Option<&str>,
) -> StyleDescriptor {
    let state = StyleState::from_optional(state);
    match kind {
        ComponentKind::Button => button_style(
            ButtonVariant::parse_or_default(variant),
            ButtonSize::parse_or_default(size),
            state,
        ),
        ComponentKind::Input => input_style(
            InputVariant::parse_or_default(variant),
            InputSize::parse_or_default(size),
            state,
        ),
        ComponentKind::Badge => badge_style(
            BadgeVariant::parse_or_default(variant),
            BadgeSize::parse_or_default(size),
            state,
        ),
        ComponentKind::Avatar => avatar_style(AvatarSize::parse_or_default(size)),
        ComponentKind::Card => card_style(
            CardVariant::parse_or_default(variant),
            CardSize::parse_or_default(size),
            state,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        let a = resolve(ComponentKind::Button, "primary", "lg", None);
        let b = resolve(ComponentKind::Button, "primary", "lg", None);
        assert_eq!(a, b);
        assert!(a.contains("bg-primary-600"));
        assert!(a.contains("h-11"));
    }

    #[test]
    fn unknown_variant_resolves_to_default_variant() {
        let fallback = resolve(ComponentKind::Button, "unknown-variant", "lg", None);
        let primary = resolve(ComponentKind::Button, "primary", "lg", None);
        assert_eq!(fallback, primary);
    }

    #[test]
    fn unknown_size_resolves_to_default_size() {
        let fallback = resolve(ComponentKind::Card, "elevated", "huge", None);
        assert_eq!(fallback, card_style(CardVariant::Elevated, CardSize::Md, None));
    }

    #[test]
    fn tokens_are_ordered_base_variant_size() {
        let style = button_style(ButtonVariant::Outline, ButtonSize::Sm, None);
        let tokens: Vec<&str> = style.tokens().collect();
        let pos = |t: &str| tokens.iter().position(|x| *x == t).unwrap();
        assert!(pos("inline-flex") < pos("border-neutral-300"));
        assert!(pos("border-neutral-300") < pos("h-9"));
        // "rounded-md" appears in base and size; it keeps its base position.
        assert_eq!(style.tokens().filter(|t| *t == "rounded-md").count(), 1);
    }

    #[test]
    fn input_error_state_overrides_variant() {
        let style = resolve(ComponentKind::Input, "success", "md", Some("error"));
        assert!(style.contains("border-error-500"));
        assert!(!style.contains("border-success-500"));

        let style = resolve(ComponentKind::Input, "default", "md", Some("success"));
        assert!(style.contains("border-success-500"));
    }

    #[test]
    fn disabled_state_appends_tokens() {
        let style = resolve(ComponentKind::Button, "primary", "md", Some("disabled"));
        let last: Vec<&str> = style.tokens().rev().take(2).collect();
        assert_eq!(last, vec!["pointer-events-none", "opacity-50"]);

        let input = resolve(ComponentKind::Input, "default", "md", Some("disabled"));
        assert!(input.contains("bg-neutral-50"));
    }

    #[test]
    fn unknown_state_is_ignored() {
        assert_eq!(
            resolve(ComponentKind::Badge, "info", "sm", Some("glowing")),
            resolve(ComponentKind::Badge, "info", "sm", None),
        );
    }

    #[test]
    fn avatar_ignores_variant_and_state() {
        let a = resolve(ComponentKind::Avatar, "anything", "2xl", Some("error"));
        assert_eq!(a, avatar_style(AvatarSize::Xxl));
        assert!(a.contains("h-20"));
        assert_eq!(avatar_fallback_text(AvatarSize::Xxl), "text-xl");
    }

    #[test]
    fn request_builder_matches_free_function() {
        let req = StyleRequest::new(ComponentKind::Badge)
            .variant("warning")
            .size("lg");
        assert_eq!(req.resolve(), resolve(ComponentKind::Badge, "warning", "lg", None));
        assert_eq!(
            StyleRequest::new(ComponentKind::Badge).resolve(),
            badge_style(BadgeVariant::Default, BadgeSize::Md, None)
        );
    }

    #[test]
    fn every_combination_resolves_to_a_descriptor() {
        for kind in ComponentKind::ALL {
            for variant in ["", "primary", "outline", "error", "elevated", "bogus"] {
                for size in ["", "sm", "md", "lg", "xl", "2xl", "icon", "bogus"] {
                    assert!(!resolve(*kind, variant, size, None).is_empty());
                }
            }
        }
    }

    #[test]
    fn spinner_defaults() {
        let style = spinner_style(SpinnerSize::default(), SpinnerVariant::default());
        assert_eq!(style.class(), "animate-spin h-6 w-6 text-neutral-500");
    }
}
