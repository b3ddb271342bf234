//! Response comparison.
//!
//! Compares an expected response (the documented contract) against an
//! actual response (captured from a live exchange). All checks run
//! independently and accumulate; the comparator never short-circuits, so
//! one run reports every discrepancy.

use crate::response::HttpResponse;

use super::{ValidationError, ValidationErrorCode, ValidationOutcome};

/// Headers whose expected value is checked as a prefix of the actual
/// value rather than an exact match, tolerating trailing parameters such
/// as `; charset=utf-8`.
const DEFAULT_PARTIAL_MATCH_HEADERS: &[&str] = &["content-type"];

/// Compares expected responses against actual responses.
///
/// The comparison is one-directional: every expected header must be
/// present in the actual response, but headers only present in the actual
/// response are never flagged.
///
/// By default, headers outside the partial-match set are checked for
/// presence only, matching the documented contract; value comparison for
/// those headers can be opted into with
/// [`with_exact_header_values`](Self::with_exact_header_values).
#[derive(Debug, Clone)]
pub struct ResponseComparator {
    /// Lowercased names of headers compared by prefix.
    partial_match_headers: Vec<String>,
    /// When set, non-partial headers are also compared for exact value.
    exact_header_values: bool,
}

impl Default for ResponseComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseComparator {
    /// Creates a comparator with the default partial-match set
    /// (`content-type`) and presence-only checking for other headers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            partial_match_headers: DEFAULT_PARTIAL_MATCH_HEADERS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            exact_header_values: false,
        }
    }

    /// Replaces the set of headers compared by prefix.
    #[must_use]
    pub fn with_partial_match_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partial_match_headers = names
            .into_iter()
            .map(|name| name.into().to_ascii_lowercase())
            .collect();
        self
    }

    /// Enables exact value comparison for headers outside the
    /// partial-match set. Off by default: the documented contract checks
    /// those headers for presence only.
    #[must_use]
    pub const fn with_exact_header_values(mut self, exact: bool) -> Self {
        self.exact_header_values = exact;
        self
    }

    /// Compares an actual response against the expected one and returns
    /// every discrepancy found.
    ///
    /// Report order is deterministic: status code, status message, then
    /// headers in the order they appear in the expected response.
    #[must_use]
    pub fn compare(&self, expected: &HttpResponse, actual: &HttpResponse) -> ValidationOutcome {
        let mut errors = Vec::new();

        if expected.status != actual.status {
            errors.push(ValidationError::new(
                ValidationErrorCode::HttpStatusCodeDifferent,
                format!(
                    "Expected status code :{}, received: {}.",
                    expected.status, actual.status
                ),
            ));
        }

        if expected.status_message != actual.status_message {
            errors.push(ValidationError::new(
                ValidationErrorCode::HttpStatusMessageDifferent,
                format!(
                    "Expected status message {}, received: {}.",
                    expected.status_message, actual.status_message
                ),
            ));
        }

        for header in &expected.headers {
            let Some(actual_value) = actual.headers.get(&header.name) else {
                errors.push(ValidationError::with_context(
                    ValidationErrorCode::HttpRequiredHeaderMissing,
                    &header.name,
                    format!("Response is missing header expected header: {}.", header.name),
                ));
                continue;
            };

            let value_matches = if self.is_partial_match_header(&header.name) {
                starts_with_ignore_ascii_case(actual_value, &header.value)
            } else if self.exact_header_values {
                actual_value == header.value
            } else {
                true
            };

            if !value_matches {
                errors.push(ValidationError::with_context(
                    ValidationErrorCode::HttpHeaderValueDifferent,
                    &header.name,
                    format!(
                        "Header '{}' has unexpected value '{}' (expected {})",
                        header.name, actual_value, header.value
                    ),
                ));
            }
        }

        ValidationOutcome::from_errors(errors)
    }

    fn is_partial_match_header(&self, name: &str) -> bool {
        self.partial_match_headers
            .iter()
            .any(|partial| partial.eq_ignore_ascii_case(name))
    }
}

/// Case-insensitive ASCII prefix check.
fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
