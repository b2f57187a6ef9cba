//! Form validation against the application's real rule sets.
//!
//! These mirror what a learner sees when submitting each page.

use learnhub_core::form::{FormState, SubmitBlocked};
use learnhub_core::otp;
use learnhub_core::validation::{forms, validate, FormValues};

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Login
// ============================================================================

#[test]
fn test_login_invalid_email_and_short_password() {
    let result = validate(
        &values(&[("email", "not-an-email"), ("password", "abc")]),
        &forms::login(),
    );
    assert_eq!(result.len(), 2);
    assert_eq!(result.get("email"), Some("Please enter a valid email address"));
    assert_eq!(result.get("password"), Some("Password must be at least 6 characters"));
}

#[test]
fn test_login_valid() {
    let result = validate(
        &values(&[("email", "a@b.com"), ("password", "abcdef")]),
        &forms::login(),
    );
    assert!(result.is_empty());
}

#[test]
fn test_login_rejects_malformed_addresses() {
    for email in ["a@b.c", "a..b@c.com", ".a@b.com", "a@b.com.", "a@-b.com", "a@b.1"] {
        let result = validate(
            &values(&[("email", email), ("password", "abcdef")]),
            &forms::login(),
        );
        assert_eq!(
            result.get("email"),
            Some("Please enter a valid email address"),
            "{email} should be rejected"
        );
        assert_eq!(result.len(), 1);
    }
}

#[test]
fn test_login_password_whitespace_counts() {
    // Six characters including spaces: literal length, no trimming.
    let result = validate(
        &values(&[("email", "a@b.com"), ("password", "  ab  ")]),
        &forms::login(),
    );
    assert!(result.is_empty());
}

// ============================================================================
// Signup
// ============================================================================

fn signup_values(password: &str, confirm: &str) -> FormValues {
    values(&[
        ("firstName", "Ama"),
        ("lastName", "Mensah"),
        ("email", "ama@example.com"),
        ("password", password),
        ("confirmPassword", confirm),
        ("acceptTerms", "true"),
    ])
}

#[test]
fn test_signup_confirmation_mismatch_keyed_to_confirm_only() {
    let result = validate(&signup_values("Abcdef12", "different"), &forms::signup());
    assert_eq!(result.len(), 1);
    assert_eq!(result.get("confirmPassword"), Some("Passwords don't match"));
    assert!(result.get("password").is_none());
}

#[test]
fn test_signup_valid() {
    assert!(validate(&signup_values("Abcdef12", "Abcdef12"), &forms::signup()).is_empty());
}

#[test]
fn test_signup_password_checks_in_order() {
    let rules = forms::signup();

    let result = validate(&signup_values("Ab1", "Ab1"), &rules);
    assert_eq!(result.get("password"), Some("Password must be at least 8 characters"));

    let result = validate(&signup_values("abcdefgh", "abcdefgh"), &rules);
    assert_eq!(
        result.get("password"),
        Some("Password must contain uppercase, lowercase, and number")
    );
}

#[test]
fn test_signup_terms_must_be_accepted() {
    let mut v = signup_values("Abcdef12", "Abcdef12");
    v.insert("acceptTerms".into(), "false".into());
    let result = validate(&v, &forms::signup());
    assert_eq!(result.get("acceptTerms"), Some("You must accept the terms and conditions"));

    v.remove("acceptTerms");
    assert!(validate(&v, &forms::signup()).contains("acceptTerms"));
}

// ============================================================================
// OTP
// ============================================================================

#[test]
fn test_otp_rejects_non_digits() {
    let result = validate(&values(&[("otp", "12a45")]), &forms::verify_otp());
    // Five characters: the length check fails first.
    assert_eq!(result.get("otp"), Some("OTP must be 6 digits"));

    let result = validate(&values(&[("otp", "12a456")]), &forms::verify_otp());
    assert_eq!(result.get("otp"), Some("OTP must contain only numbers"));
}

#[test]
fn test_otp_valid_enables_submit() {
    let result = validate(&values(&[("otp", "123456")]), &forms::verify_otp());
    assert!(result.is_empty());
    assert!(!otp::submit_disabled("123456", false));
}

// ============================================================================
// Checkout & settings
// ============================================================================

#[test]
fn test_checkout_reports_every_missing_field() {
    let result = validate(&FormValues::new(), &forms::checkout());
    let fields: Vec<&str> = result.fields().collect();
    assert_eq!(
        fields,
        vec!["course", "email", "fullName", "gender", "location", "phone"]
    );
    assert_eq!(result.get("phone"), Some("Phone number is required"));
}

#[test]
fn test_change_password_mismatch() {
    let rules = forms::change_password();
    let result = validate(
        &values(&[("newPassword", "longenough"), ("confirmPassword", "longenougH")]),
        &rules,
    );
    assert_eq!(result.get("confirmPassword"), Some("Passwords don't match"));

    let result = validate(
        &values(&[("newPassword", "longenough"), ("confirmPassword", "short")]),
        &rules,
    );
    assert_eq!(
        result.get("confirmPassword"),
        Some("Password confirmation is required")
    );
}

#[test]
fn test_profile_prefill_passes() {
    let user = learnhub_core::account::current_user();
    let mut form = FormState::with_values([
        ("firstName", user.first_name),
        ("lastName", user.last_name),
        ("phone", user.phone),
        ("location", user.location),
    ]);
    assert!(form.begin_submit(&forms::profile()).is_ok());
}

#[test]
fn test_form_state_blocks_invalid_checkout() {
    let rules = forms::checkout();
    let mut form = FormState::new();
    form.update("fullName", "Kofi Boateng", &rules);
    assert_eq!(form.begin_submit(&rules), Err(SubmitBlocked::Invalid(5)));
    assert!(!form.submitting());
}
