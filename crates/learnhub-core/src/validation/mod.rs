//! Form validation.
//!
//! [`validate`] evaluates a form's static [`FormRules`] against the current
//! field values and reports at most one message per field:
//!
//! 1. For each field, single-field checks run in declaration order; the first
//!    failure is recorded and the field's remaining checks are skipped.
//! 2. Cross-field checks ([`CheckKind::Equals`]) then run for fields that
//!    passed step 1. The error attaches to the dependent field.
//!
//! Values are taken literally: nothing is trimmed, and a missing field reads
//! as the empty string.

pub mod forms;
mod rule;

use std::collections::{BTreeMap, HashMap};

pub use rule::{Check, CheckKind, FieldRule, FormRules};

/// Field name to current value.
pub type FormValues = BTreeMap<String, String>;

/// Read access to field values by name.
pub trait FieldValues {
    fn value(&self, field: &str) -> Option<&str>;
}

impl FieldValues for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldValues for HashMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldValues for [(&str, &str)] {
    fn value(&self, field: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == field).map(|(_, v)| *v)
    }
}

/// Field name to error message. An absent field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn record(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }
}

/// Validate `values` against `rules`. Pure and total.
pub fn validate<V: FieldValues + ?Sized>(values: &V, rules: &FormRules) -> ValidationResult {
    let mut result = ValidationResult::default();
    let read = |field: &str| values.value(field).unwrap_or("");

    for rule in rules.rules() {
        let value = read(&rule.field);
        if let Some(failed) = rule
            .checks
            .iter()
            .filter(|c| !c.kind.is_cross_field())
            .find(|c| !c.kind.passes(value))
        {
            result.record(&rule.field, &failed.message);
        }
    }

    for rule in rules.rules() {
        if result.contains(&rule.field) {
            continue;
        }
        let value = read(&rule.field);
        let mismatch = rule.checks.iter().find(|c| match &c.kind {
            CheckKind::Equals(other) => value != read(other),
            _ => false,
        });
        if let Some(failed) = mismatch {
            result.record(&rule.field, &failed.message);
        }
    }

    tracing::debug!(fields = rules.rules().len(), errors = result.len(), "validated form");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> FormRules {
        FormRules::new(vec![
            FieldRule::new("name")
                .required("name required")
                .min_length(3, "name too short"),
            FieldRule::new("confirm")
                .min_length(2, "confirm too short")
                .equals("name", "must match name"),
        ])
    }

    #[test]
    fn first_failing_check_wins() {
        let values: &[(&str, &str)] = &[("name", ""), ("confirm", "zz")];
        let result = validate(values, &rules());
        assert_eq!(result.get("name"), Some("name required"));
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let values = FormValues::new();
        let result = validate(&values, &rules());
        assert_eq!(result.get("name"), Some("name required"));
        assert_eq!(result.get("confirm"), Some("confirm too short"));
    }

    #[test]
    fn single_field_error_beats_cross_field_error() {
        let values: &[(&str, &str)] = &[("name", "alice"), ("confirm", "b")];
        let result = validate(values, &rules());
        assert_eq!(result.get("confirm"), Some("confirm too short"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn cross_field_error_attaches_to_dependent() {
        let values: &[(&str, &str)] = &[("name", "alice"), ("confirm", "bob")];
        let result = validate(values, &rules());
        assert_eq!(result.get("confirm"), Some("must match name"));
        assert!(!result.contains("name"));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let values: &[(&str, &str)] = &[("name", "  a"), ("confirm", "  a")];
        assert!(validate(values, &rules()).is_empty());

        let values: &[(&str, &str)] = &[("name", "alice "), ("confirm", "alice")];
        assert_eq!(validate(values, &rules()).get("confirm"), Some("must match name"));
    }

    #[test]
    fn unmentioned_fields_are_ignored() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), "alice".to_string());
        values.insert("confirm".to_string(), "alice".to_string());
        values.insert("extra".to_string(), String::new());
        assert!(validate(&values, &rules()).is_empty());
    }
}
