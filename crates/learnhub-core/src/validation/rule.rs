//! Declarative field rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LearnResult;

/// Address shape: a local part ending in a non-dot, then dot-separated domain
/// labels that start with a letter or digit, then an alphabetic TLD of at
/// least two letters. Case-insensitive.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Email format check. The regex crate has no look-around, so the leading
/// dot and consecutive dot rules are tested separately.
fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

/// What a single check tests.
#[derive(Clone, Debug)]
pub enum CheckKind {
    /// Non-empty. Whitespace counts as provided.
    Required,
    /// At least `n` characters, counted as Unicode scalar values (not UTF-16
    /// code units, so an emoji counts once).
    MinLength(usize),
    MaxLength(usize),
    ExactLength(usize),
    /// Every regex must find a match somewhere in the value.
    Pattern(Vec<Regex>),
    Email,
    /// Checkbox state: the value is exactly `"true"`.
    Accepted,
    /// Equal to another field's value. Evaluated after single-field checks.
    Equals(String),
}

impl CheckKind {
    pub fn is_cross_field(&self) -> bool {
        matches!(self, CheckKind::Equals(_))
    }

    /// Evaluate a single-field check. Cross-field checks always pass here.
    pub(crate) fn passes(&self, value: &str) -> bool {
        match self {
            CheckKind::Required => !value.is_empty(),
            CheckKind::MinLength(n) => value.chars().count() >= *n,
            CheckKind::MaxLength(n) => value.chars().count() <= *n,
            CheckKind::ExactLength(n) => value.chars().count() == *n,
            CheckKind::Pattern(regexes) => regexes.iter().all(|re| re.is_match(value)),
            CheckKind::Email => is_email(value),
            CheckKind::Accepted => value == "true",
            CheckKind::Equals(_) => true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Check {
    pub kind: CheckKind,
    pub message: String,
}

/// The ordered checks attached to one form field.
#[derive(Clone, Debug)]
pub struct FieldRule {
    pub field: String,
    pub checks: Vec<Check>,
}

impl FieldRule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            checks: Vec::new(),
        }
    }

    pub fn check(mut self, kind: CheckKind, message: impl Into<String>) -> Self {
        self.checks.push(Check {
            kind,
            message: message.into(),
        });
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.check(CheckKind::Required, message)
    }

    pub fn min_length(self, n: usize, message: impl Into<String>) -> Self {
        self.check(CheckKind::MinLength(n), message)
    }

    pub fn max_length(self, n: usize, message: impl Into<String>) -> Self {
        self.check(CheckKind::MaxLength(n), message)
    }

    pub fn exact_length(self, n: usize, message: impl Into<String>) -> Self {
        self.check(CheckKind::ExactLength(n), message)
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.check(CheckKind::Email, message)
    }

    pub fn accepted(self, message: impl Into<String>) -> Self {
        self.check(CheckKind::Accepted, message)
    }

    pub fn equals(self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.check(CheckKind::Equals(other.into()), message)
    }

    /// Add a pattern check, compiling each source. All must match.
    pub fn pattern(self, sources: &[&str], message: impl Into<String>) -> LearnResult<Self> {
        let regexes = sources
            .iter()
            .map(|src| Regex::new(src))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.check(CheckKind::Pattern(regexes), message))
    }
}

/// The static rule set of one form, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct FormRules {
    rules: Vec<FieldRule>,
}

impl FormRules {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Field names mentioned by the rules, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.field.as_str())
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }
}

impl FromIterator<FieldRule> for FormRules {
    fn from_iter<I: IntoIterator<Item = FieldRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_treats_whitespace_as_provided() {
        assert!(!CheckKind::Required.passes(""));
        assert!(CheckKind::Required.passes(" "));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert!(CheckKind::MinLength(2).passes("é!"));
        assert!(CheckKind::ExactLength(3).passes("日本語"));
        assert!(!CheckKind::MaxLength(2).passes("日本語"));
        assert!(CheckKind::ExactLength(1).passes("\u{1F600}"));
    }

    #[test]
    fn email_format() {
        assert!(CheckKind::Email.passes("a@b.com"));
        assert!(CheckKind::Email.passes("john.doe@example.co.uk"));
        assert!(!CheckKind::Email.passes("not-an-email"));
        assert!(!CheckKind::Email.passes("a b@c.com"));
        assert!(!CheckKind::Email.passes("a@b"));
        assert!(!CheckKind::Email.passes(" a@b.com"));
        assert!(CheckKind::Email.passes("O'Neil+tag@Mail-Host.ORG"));
    }

    #[test]
    fn email_rejects_malformed_dots_labels_and_tlds() {
        for bad in [
            "a@b.c",
            "a..b@c.com",
            ".a@b.com",
            "a.@b.com",
            "a@b.com.",
            "a@-b.com",
            "a@b.1",
            "a@b..com",
        ] {
            assert!(!CheckKind::Email.passes(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn pattern_requires_every_regex() {
        let rule = FieldRule::new("password")
            .pattern(&["[a-z]", "[A-Z]", r"\d"], "mixed")
            .unwrap();
        let kind = &rule.checks[0].kind;
        assert!(kind.passes("Abcdef12"));
        assert!(!kind.passes("abcdef12"));
        assert!(!kind.passes("ABCDEFGH"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(FieldRule::new("x").pattern(&["(oops"], "bad").is_err());
    }

    #[test]
    fn accepted_needs_literal_true() {
        assert!(CheckKind::Accepted.passes("true"));
        assert!(!CheckKind::Accepted.passes("false"));
        assert!(!CheckKind::Accepted.passes(""));
    }
}
