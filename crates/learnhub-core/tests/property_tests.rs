//! Property-based tests for validation and variant resolution
//!
//! Uses proptest to check the purity and totality guarantees.

use proptest::prelude::*;
use learnhub_core::validation::{forms, validate, FieldRule, FormRules, FormValues};
use learnhub_core::variants::{resolve, ComponentKind, StyleOption};

// ============================================================================
// Strategy Generators
// ============================================================================

fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["email", "password", "confirmPassword", "otp", "name", "extra"])
        .prop_map(str::to_string)
}

/// Arbitrary values for a random subset of fields, including unicode and whitespace
fn values_strategy() -> impl Strategy<Value = FormValues> {
    prop::collection::btree_map(field_name_strategy(), ".{0,24}", 0..6)
}

fn rules_strategy() -> impl Strategy<Value = FormRules> {
    prop_oneof![
        Just(forms::login()),
        Just(forms::signup()),
        Just(forms::verify_otp()),
        Just(forms::change_password()),
        Just(FormRules::new(vec![
            FieldRule::new("name").required("required").max_length(8, "too long"),
            FieldRule::new("confirmPassword").equals("name", "mismatch"),
        ])),
    ]
}

fn kind_strategy() -> impl Strategy<Value = ComponentKind> {
    prop::sample::select(ComponentKind::ALL.to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Error keys are always fields the rules mention
    #[test]
    fn error_keys_subset_of_rule_fields(values in values_strategy(), rules in rules_strategy()) {
        let result = validate(&values, &rules);
        let declared: Vec<&str> = rules.fields().collect();
        for field in result.fields() {
            prop_assert!(declared.contains(&field), "unexpected key {}", field);
        }
    }

    /// Same input, same output
    #[test]
    fn validate_is_idempotent(values in values_strategy(), rules in rules_strategy()) {
        prop_assert_eq!(validate(&values, &rules), validate(&values, &rules));
    }

    /// Every reported message belongs to one of that field's checks
    #[test]
    fn messages_come_from_the_field_rule(values in values_strategy(), rules in rules_strategy()) {
        let result = validate(&values, &rules);
        for (field, message) in result.iter() {
            let rule = rules.rule(field).unwrap();
            prop_assert!(rule.checks.iter().any(|c| c.message == message));
        }
    }

    /// Resolution never fails and is deterministic, whatever the option strings
    #[test]
    fn resolve_total_and_deterministic(
        kind in kind_strategy(),
        variant in "[a-z0-9-]{0,12}",
        size in "[a-z0-9]{0,4}",
        state in prop::option::of("[a-z]{0,8}"),
    ) {
        let a = resolve(kind, &variant, &size, state.as_deref());
        let b = resolve(kind, &variant, &size, state.as_deref());
        prop_assert!(!a.is_empty());
        prop_assert_eq!(a, b);
    }
}
