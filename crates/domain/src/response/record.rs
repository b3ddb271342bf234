//! Normalized HTTP response record.
//!
//! The same shape is used for responses derived from documentation
//! (expected) and responses captured from a live exchange (actual).
//! A record is constructed once and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::Headers;

/// Status code recorded when the transport produced no response at all.
pub const FAILURE_STATUS: u16 = 504;

/// A transport-independent HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Protocol version string (e.g., "HTTP/1.1").
    pub protocol_version: String,
    /// Numeric status code. Always set; hard transport failures carry
    /// the [`FAILURE_STATUS`] sentinel.
    pub status: u16,
    /// Human-readable reason phrase.
    pub status_message: String,
    /// Response headers in wire order.
    pub headers: Headers,
    /// Raw response payload, uninterpreted.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(
        protocol_version: impl Into<String>,
        status: u16,
        status_message: impl Into<String>,
        headers: Headers,
        body: impl Into<String>,
    ) -> Self {
        Self {
            protocol_version: protocol_version.into(),
            status,
            status_message: status_message.into(),
            headers,
            body: body.into(),
        }
    }

    /// Creates the sentinel response for a hard transport failure
    /// (connection refused, DNS failure, timeout).
    ///
    /// The failure description is carried in the status message so the
    /// comparator always has a value to work with.
    #[must_use]
    pub fn failure(description: &str) -> Self {
        Self {
            protocol_version: "HTTP/1.1".to_string(),
            status: FAILURE_STATUS,
            status_message: format!("HttpResponseFailure {description}"),
            headers: Headers::new(),
            body: String::new(),
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the Content-Type header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }

    /// Attempts to parse the body as JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Renders the full response for diagnostics: the status line, each
    /// header in wire order, a blank line, then the body.
    ///
    /// The header block (and its trailing blank line) is omitted when
    /// there are no headers, as with a hard-failure record.
    #[must_use]
    pub fn full_http_text(&self) -> String {
        let mut text = format!(
            "{} {} {}\n",
            self.protocol_version, self.status, self.status_message
        );
        if !self.headers.is_empty() {
            for header in &self.headers {
                text.push_str(&format!("{}: {}\n", header.name, header.value));
            }
            text.push('\n');
        }
        text.push_str(&self.body);
        text
    }
}

impl std::fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.protocol_version, self.status, self.status_message
        )
    }
}
