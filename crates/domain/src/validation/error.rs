//! Validation error values.
//!
//! Comparison mismatches are data, not exceptions: the comparator collects
//! every discrepancy into an ordered list so a single validation run can
//! report all of them at once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kinds of discrepancy the comparator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorCode {
    /// Expected and actual numeric status codes differ.
    HttpStatusCodeDifferent,
    /// Expected and actual reason phrases differ.
    HttpStatusMessageDifferent,
    /// An expected header name is absent from the actual headers.
    HttpRequiredHeaderMissing,
    /// An expected header is present but its value failed comparison.
    HttpHeaderValueDifferent,
}

/// A single discrepancy between an expected and an actual response.
///
/// Created only by the comparator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// The kind of discrepancy.
    pub code: ValidationErrorCode,
    /// Optional locator, such as the header the error refers to.
    pub context: Option<String>,
    /// Human-readable description with the observed values.
    pub message: String,
}

impl ValidationError {
    /// Creates an error without a locator.
    #[must_use]
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            context: None,
            message: message.into(),
        }
    }

    /// Creates an error with a locator (e.g., the header name).
    #[must_use]
    pub fn with_context(
        code: ValidationErrorCode,
        context: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            context: Some(context.into()),
            message: message.into(),
        }
    }
}

/// The verdict of one comparison: the full ordered list of discrepancies.
///
/// Deterministic order: status code, status message, then headers in the
/// order they appear in the expected response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    /// Creates an outcome from collected errors.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true if no discrepancies were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the discrepancies in report order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the number of discrepancies.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no discrepancies.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns an iterator over the discrepancies.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationOutcome {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
