//! Validate Response use case.
//!
//! The full validation workflow for one documented example: capture the
//! actual response over the transport, then compare it against the
//! expected response.

use std::sync::Arc;

use docprobe_domain::response::HttpResponse;
use docprobe_domain::validation::{ResponseComparator, ValidationOutcome};

use crate::ports::Exchange;

use super::CaptureResponse;

/// What one validation run produced: the captured response alongside the
/// comparison verdict, so the reporting layer can render the full text of
/// what was received next to the discrepancies.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// The response captured from the live exchange.
    pub actual: HttpResponse,
    /// The comparison verdict and its ordered error list.
    pub outcome: ValidationOutcome,
}

impl ValidationReport {
    /// Returns true if the actual response satisfied the expectation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Use case that validates a live endpoint against a documented response.
pub struct ValidateResponse<E: Exchange> {
    capture: CaptureResponse<E>,
    comparator: ResponseComparator,
}

impl<E: Exchange> ValidateResponse<E> {
    /// Creates the use case with the given transport and the default
    /// comparator.
    pub fn new(transport: Arc<E>) -> Self {
        Self {
            capture: CaptureResponse::new(transport),
            comparator: ResponseComparator::new(),
        }
    }

    /// Replaces the comparator, e.g. to widen the partial-match set.
    #[must_use]
    pub fn with_comparator(mut self, comparator: ResponseComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Captures the actual response and compares it against `expected`.
    pub async fn validate(&self, expected: &HttpResponse) -> ValidationReport {
        let actual = self.capture.capture().await;
        let outcome = self.comparator.compare(expected, &actual);
        ValidationReport { actual, outcome }
    }
}

#[cfg(test)]
mod tests {
    use docprobe_domain::response::Headers;
    use docprobe_domain::validation::ValidationErrorCode;

    use crate::ports::{ExchangeOutcome, WireResponse};

    use super::*;

    struct MockExchange {
        outcome: ExchangeOutcome,
    }

    impl Exchange for MockExchange {
        async fn perform_exchange(&self) -> ExchangeOutcome {
            self.outcome.clone()
        }
    }

    fn expected_response() -> HttpResponse {
        let mut headers = Headers::new();
        headers.push("Content-Type", "application/json");
        HttpResponse::new("HTTP/1.1", 200, "OK", headers, r#"{"id": 1}"#)
    }

    #[tokio::test]
    async fn test_validate_matching_exchange() {
        let transport = Arc::new(MockExchange {
            outcome: ExchangeOutcome::Response(WireResponse {
                protocol_version: "HTTP/1.1".to_string(),
                status: 200,
                status_message: "OK".to_string(),
                headers: vec![(
                    "Content-Type".to_string(),
                    "application/json; charset=utf-8".to_string(),
                )],
                body: r#"{"id": 1}"#.to_string(),
            }),
        });
        let use_case = ValidateResponse::new(transport);

        let report = use_case.validate(&expected_response()).await;
        assert!(report.is_valid());
        assert_eq!(report.actual.status, 200);
    }

    #[tokio::test]
    async fn test_validate_hard_failure_reports_status_mismatch() {
        let transport = Arc::new(MockExchange {
            outcome: ExchangeOutcome::HardFailure("dns lookup failed".to_string()),
        });
        let use_case = ValidateResponse::new(transport);

        let report = use_case.validate(&expected_response()).await;
        assert!(!report.is_valid());
        assert_eq!(report.actual.status, 504);
        let codes: Vec<_> = report.outcome.iter().map(|e| e.code).collect();
        assert!(codes.contains(&ValidationErrorCode::HttpStatusCodeDifferent));
        assert!(codes.contains(&ValidationErrorCode::HttpRequiredHeaderMissing));
    }

    #[tokio::test]
    async fn test_validate_with_custom_comparator() {
        let transport = Arc::new(MockExchange {
            outcome: ExchangeOutcome::Response(WireResponse {
                protocol_version: "HTTP/1.1".to_string(),
                status: 200,
                status_message: "OK".to_string(),
                headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
                body: String::new(),
            }),
        });
        let comparator = ResponseComparator::new().with_partial_match_headers(Vec::<String>::new());
        let use_case = ValidateResponse::new(transport).with_comparator(comparator);

        // With an empty partial-match set, Content-Type is presence-only.
        let report = use_case.validate(&expected_response()).await;
        assert!(report.is_valid());
    }
}
