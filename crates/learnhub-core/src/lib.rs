//! LearnHub Core Library
//!
//! The engine behind the LearnHub course-enrollment front end.
//!
//! ## Overview
//!
//! The front end is a set of pages composed from a small component library.
//! Everything here is UI-independent and pure where it can be:
//!
//! - **Variant resolution**: a component kind plus named options (variant,
//!   size, state) resolves to a [`StyleDescriptor`], an ordered set of class
//!   tokens. Unknown options degrade to the kind's defaults.
//! - **Form validation**: static [`FieldRule`] sets are evaluated against the
//!   current field values, producing at most one message per field.
//! - **Form state**: per-page [`FormState`] tracking values, errors and the
//!   submit lifecycle.
//! - **Simulated actions**: every "API call" is a fixed delay followed by a
//!   structured log line; see [`simulate`].
//!
//! Catalog, account and invoice data are hardcoded mock records.
//!
//! ## Quick Start
//!
//! ```ignore
//! use learnhub_core::{forms, validate, FormValues};
//!
//! let rules = forms::login();
//! let mut values = FormValues::new();
//! values.insert("email".into(), "a@b.com".into());
//! values.insert("password".into(), "abcdef".into());
//!
//! assert!(validate(&values, &rules).is_empty());
//! ```

pub mod account;
pub mod api;
pub mod catalog;
pub mod error;
pub mod form;
pub mod logging;
pub mod otp;
pub mod simulate;
pub mod validation;
pub mod variants;

// Re-exports
pub use account::{Invoice, InvoiceStatus, MockUser};
pub use catalog::Course;
pub use error::{LearnError, LearnResult};
pub use form::{FormState, LoadingState, SubmitBlocked};
pub use simulate::{simulate, Action, SimulationConfig};
pub use validation::{
    forms, validate, Check, CheckKind, FieldRule, FieldValues, FormRules, FormValues,
    ValidationResult,
};
pub use variants::{
    resolve, ComponentKind, StyleDescriptor, StyleOption, StyleRequest, StyleState,
};
