//! Error types for LearnHub

use thiserror::Error;

/// Main error type for LearnHub operations
///
/// Field validation failures are not errors: they are reported through
/// [`ValidationResult`](crate::ValidationResult) and block submission without
/// going through this type.
#[derive(Error, Debug)]
pub enum LearnError {
    /// Course id not present in the catalog
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pattern check could not be compiled
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Request payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A submission failed after passing validation
    #[error("{action} failed: {reason}")]
    Submission {
        action: &'static str,
        reason: String,
    },

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using LearnError
pub type LearnResult<T> = Result<T, LearnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LearnError::CourseNotFound("rust-101".to_string());
        assert_eq!(format!("{}", err), "Course not found: rust-101");

        let err = LearnError::Submission {
            action: "checkout",
            reason: "card declined".to_string(),
        };
        assert_eq!(err.to_string(), "checkout failed: card declined");
    }

    #[test]
    fn test_error_from_regex() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: LearnError = regex_err.into();
        assert!(matches!(err, LearnError::Pattern(_)));
    }
}
