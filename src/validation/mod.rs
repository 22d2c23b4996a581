//! Form validation engine
//!
//! Turns untyped form input into typed, normalized domain values. Validation
//! runs in two steps that can be used independently:
//! 1. default filling: absent keys receive their default values
//! 2. constraint checking: every field is checked and every failure reported
//!
//! Input is either accepted in full or rejected with a non-empty list of
//! field errors; there is no partial acceptance.

pub mod contact;
pub mod quote;
mod rules;

use serde::Serialize;
use thiserror::Error;

pub use contact::{apply_contact_defaults, check_contact_form, validate_contact_form};
pub use quote::{apply_quote_defaults, check_quote_request, validate_quote_request};

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field (`""` for the input as a whole)
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every constraint a rejected input failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the failing fields, in the order they were checked
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    /// First message reported for `field`
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}
