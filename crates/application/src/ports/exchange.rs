//! Transport exchange port.

use std::future::Future;

/// A raw response carried back across the transport boundary.
///
/// The body has already been read to completion: the adapter drains the
/// response stream before constructing the outcome so connections can be
/// released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    /// Protocol version string (e.g., "HTTP/1.1").
    pub protocol_version: String,
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase.
    pub status_message: String,
    /// Header name/value pairs in wire order.
    pub headers: Vec<(String, String)>,
    /// Response payload as text.
    pub body: String,
}

/// The result of a single transport attempt.
///
/// Network-level failures are part of the outcome, never an error: the
/// capture step always has a value to normalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The server answered; any status code counts as an answer.
    Response(WireResponse),
    /// A protocol-level fault that still carried a server response,
    /// such as a server-generated error page.
    FaultWithResponse(WireResponse),
    /// No response at all: connection refused, DNS failure, timeout.
    /// Carries the transport's failure description.
    HardFailure(String),
}

/// Port for performing one preconfigured HTTP exchange.
///
/// This trait abstracts the transport implementation; request
/// construction, TLS, timeouts, and redirects are the adapter's concern.
/// A single call makes a single attempt; no retries are performed.
pub trait Exchange: Send + Sync {
    /// Performs the exchange and reports its outcome.
    fn perform_exchange(&self) -> impl Future<Output = ExchangeOutcome> + Send;
}
