//! Rule sets for every form in the application.
//!
//! Field names match the request payloads in [`crate::api`].

use super::rule::{FieldRule, FormRules};

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORDS_MISMATCH: &str = "Passwords don't match";

/// Builds a pattern check from literal sources.
fn pattern(rule: FieldRule, sources: &[&str], message: &str) -> FieldRule {
    rule.pattern(sources, message)
        .expect("form patterns are valid regex literals")
}

pub fn login() -> FormRules {
    FormRules::new(vec![
        FieldRule::new("email").email(EMAIL_MESSAGE),
        FieldRule::new("password").min_length(6, "Password must be at least 6 characters"),
    ])
}

pub fn signup() -> FormRules {
    FormRules::new(vec![
        FieldRule::new("firstName").min_length(2, "First name must be at least 2 characters"),
        FieldRule::new("lastName").min_length(2, "Last name must be at least 2 characters"),
        FieldRule::new("email").email(EMAIL_MESSAGE),
        pattern(
            FieldRule::new("password").min_length(8, "Password must be at least 8 characters"),
            &["[a-z]", "[A-Z]", r"\d"],
            "Password must contain uppercase, lowercase, and number",
        ),
        FieldRule::new("confirmPassword").equals("password", PASSWORDS_MISMATCH),
        FieldRule::new("acceptTerms").accepted("You must accept the terms and conditions"),
    ])
}

pub fn verify_otp() -> FormRules {
    FormRules::new(vec![pattern(
        FieldRule::new("otp").exact_length(crate::otp::OTP_LENGTH, "OTP must be 6 digits"),
        &[r"^\d+$"],
        "OTP must contain only numbers",
    )])
}

pub fn reset_password() -> FormRules {
    FormRules::new(vec![FieldRule::new("email").email(EMAIL_MESSAGE)])
}

/// `description` is optional and carries no checks.
pub fn checkout() -> FormRules {
    FormRules::new(vec![
        FieldRule::new("fullName").min_length(2, "Full name is required"),
        FieldRule::new("email").email(EMAIL_MESSAGE),
        FieldRule::new("course").min_length(1, "Course selection is required"),
        FieldRule::new("gender").min_length(1, "Gender is required"),
        FieldRule::new("phone").min_length(10, "Phone number is required"),
        FieldRule::new("location").min_length(2, "Location is required"),
    ])
}

pub fn profile() -> FormRules {
    FormRules::new(vec![
        FieldRule::new("firstName").min_length(2, "First name is required"),
        FieldRule::new("lastName").min_length(2, "Last name is required"),
        FieldRule::new("phone").min_length(10, "Phone number is required"),
        FieldRule::new("location").min_length(2, "Location is required"),
    ])
}

pub fn change_password() -> FormRules {
    FormRules::new(vec![
        FieldRule::new("newPassword").min_length(8, "Password must be at least 8 characters"),
        FieldRule::new("confirmPassword")
            .min_length(8, "Password confirmation is required")
            .equals("newPassword", PASSWORDS_MISMATCH),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn every_form_builds() {
        for rules in [
            login(),
            signup(),
            verify_otp(),
            reset_password(),
            checkout(),
            profile(),
            change_password(),
        ] {
            assert!(rules.fields().count() > 0);
        }
    }

    #[test]
    fn checkout_description_is_unchecked() {
        assert!(checkout().rule("description").is_none());
        let values: &[(&str, &str)] = &[
            ("fullName", "Ama Mensah"),
            ("email", "ama@example.com"),
            ("course", "Data Science Mastery"),
            ("gender", "female"),
            ("phone", "0241234567"),
            ("location", "Accra"),
        ];
        assert!(validate(values, &checkout()).is_empty());
    }
}
