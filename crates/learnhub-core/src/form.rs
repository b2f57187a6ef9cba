//! Per-page form state.
//!
//! A [`FormState`] lives as long as the page that mounted it. It holds the
//! literal field values, the last validation result and the submit
//! lifecycle. Nothing here is shared across pages or persisted.

use crate::error::LearnError;
use crate::validation::{validate, FieldValues, FormRules, FormValues, ValidationResult};

/// Submit lifecycle of a form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Why a submit did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Validation produced this many field errors.
    Invalid(usize),
    /// A submission is already running.
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: FormValues,
    errors: ValidationResult,
    submitting: bool,
    status: LoadingState,
    attempted: bool,
    failure: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with prefilled values (e.g. the profile form).
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.value(field).unwrap_or("")
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> LoadingState {
        self.status
    }

    /// Message from the last failed submission, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Record a keystroke. After the first submit attempt, errors are
    /// recomputed on every change so fixed fields clear immediately.
    pub fn update(&mut self, field: &str, value: impl Into<String>, rules: &FormRules) {
        self.values.insert(field.to_string(), value.into());
        if self.attempted {
            self.errors = validate(&self.values, rules);
        }
    }

    /// Validate and, if clean, enter the loading state.
    ///
    /// Returns a snapshot of the values to submit.
    pub fn begin_submit(&mut self, rules: &FormRules) -> Result<FormValues, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.attempted = true;
        self.errors = validate(&self.values, rules);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.len()));
        }
        self.submitting = true;
        self.status = LoadingState::Loading;
        self.failure = None;
        Ok(self.values.clone())
    }

    /// Leave the loading state with the outcome of the submission.
    pub fn finish(&mut self, outcome: Result<(), &LearnError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.status = LoadingState::Success;
                self.failure = None;
            }
            Err(err) => {
                self.status = LoadingState::Error;
                self.failure = Some(err.to_string());
            }
        }
    }

    /// Clear values and errors, keeping the last status.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors = ValidationResult::default();
        self.attempted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::forms;

    #[test]
    fn invalid_submit_blocks_and_surfaces_errors() {
        let rules = forms::login();
        let mut form = FormState::new();
        form.update("email", "nope", &rules);
        assert!(form.errors().is_empty(), "no errors before first submit");

        assert_eq!(form.begin_submit(&rules), Err(SubmitBlocked::Invalid(2)));
        assert!(!form.submitting());
        assert_eq!(form.status(), LoadingState::Idle);
        assert!(form.error("email").is_some());
    }

    #[test]
    fn errors_clear_as_fields_are_fixed_after_attempt() {
        let rules = forms::login();
        let mut form = FormState::new();
        let _ = form.begin_submit(&rules);
        form.update("email", "a@b.com", &rules);
        assert!(form.error("email").is_none());
        assert!(form.error("password").is_some());
    }

    #[test]
    fn valid_submit_enters_loading_and_blocks_resubmit() {
        let rules = forms::login();
        let mut form = FormState::with_values([("email", "a@b.com"), ("password", "abcdef")]);
        let snapshot = form.begin_submit(&rules).unwrap();
        assert_eq!(snapshot.get("email").map(String::as_str), Some("a@b.com"));
        assert!(form.submitting());
        assert_eq!(form.status(), LoadingState::Loading);
        assert_eq!(form.begin_submit(&rules), Err(SubmitBlocked::InFlight));

        form.finish(Ok(()));
        assert!(!form.submitting());
        assert_eq!(form.status(), LoadingState::Success);
    }

    #[test]
    fn failure_is_recorded() {
        let rules = forms::reset_password();
        let mut form = FormState::with_values([("email", "a@b.com")]);
        form.begin_submit(&rules).unwrap();
        let err = LearnError::Submission {
            action: "reset-password",
            reason: "unreachable".into(),
        };
        form.finish(Err(&err));
        assert_eq!(form.status(), LoadingState::Error);
        assert_eq!(form.failure(), Some("reset-password failed: unreachable"));
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let rules = forms::change_password();
        let mut form = FormState::with_values([("newPassword", "short")]);
        let _ = form.begin_submit(&rules);
        form.reset();
        assert_eq!(form.value("newPassword"), "");
        assert!(form.errors().is_empty());
    }
}
