//! Capture Response use case.
//!
//! Turns one transport attempt into exactly one normalized response.
//! Network-level failures are mapped into the data model itself, so the
//! comparator downstream always has a value to work with.

use std::sync::Arc;

use docprobe_domain::response::{Header, Headers, HttpResponse};

use crate::ports::{Exchange, ExchangeOutcome, WireResponse};

/// Use case that captures a normalized response from a transport attempt.
///
/// # Example
///
/// ```ignore
/// let transport = ReqwestExchange::get("https://api.example.com/users")?;
/// let capture = CaptureResponse::new(Arc::new(transport));
/// let actual = capture.capture().await;
/// ```
pub struct CaptureResponse<E: Exchange> {
    transport: Arc<E>,
}

impl<E: Exchange> CaptureResponse<E> {
    /// Creates the use case with the given transport.
    pub fn new(transport: Arc<E>) -> Self {
        Self { transport }
    }

    /// Performs a single exchange and normalizes whatever came back.
    ///
    /// A successful response and a protocol fault carrying a response are
    /// normalized identically; a hard failure becomes the 504 sentinel
    /// record. This never fails: mismatches and transport trouble are
    /// both data, not errors.
    pub async fn capture(&self) -> HttpResponse {
        match self.transport.perform_exchange().await {
            ExchangeOutcome::Response(wire) | ExchangeOutcome::FaultWithResponse(wire) => {
                normalize(wire)
            }
            ExchangeOutcome::HardFailure(description) => HttpResponse::failure(&description),
        }
    }
}

fn normalize(wire: WireResponse) -> HttpResponse {
    let headers: Headers = wire
        .headers
        .into_iter()
        .map(|(name, value)| Header::new(name, value))
        .collect();
    HttpResponse::new(
        wire.protocol_version,
        wire.status,
        wire.status_message,
        headers,
        wire.body,
    )
}
