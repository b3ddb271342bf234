//! Transport adapter using reqwest.
//!
//! Implements the `Exchange` port for live HTTP exchanges. All transport
//! concerns (TLS, timeouts, redirects) live here; the layers above only
//! ever see an `ExchangeOutcome`.

use std::time::Duration;

use reqwest::{Client, Method, Version};
use thiserror::Error;
use url::Url;

use docprobe_application::ports::{Exchange, ExchangeOutcome, WireResponse};

/// Errors raised while configuring the transport adapter.
///
/// Once an adapter is built, the exchange itself never errors; transport
/// failures are reported through the outcome instead.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The target URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Exchange implementation backed by `reqwest::Client`.
///
/// Preconfigured with one request; each [`Exchange::perform_exchange`]
/// call makes a single attempt against it.
///
/// Redirects are not followed, so documented redirect responses stay
/// observable to the comparator.
pub struct ReqwestExchange {
    client: Client,
    method: Method,
    url: Url,
    headers: Vec<(String, String)>,
}

impl ReqwestExchange {
    /// Creates an exchange for a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the URL is invalid or the client
    /// cannot be built.
    pub fn get(url: &str) -> Result<Self, TransportError> {
        Self::new(Method::GET, url)
    }

    /// Creates an exchange for the given method and URL.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Redirects: not followed
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the URL is invalid or the client
    /// cannot be built.
    pub fn new(method: Method, url: &str) -> Result<Self, TransportError> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(format!("{e}: {url}")))?;
        let client = Client::builder()
            .user_agent(concat!("docprobe/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            method,
            url,
            headers: Vec::new(),
        })
    }

    /// Creates an exchange with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, method: Method, url: Url) -> Self {
        Self {
            client,
            method,
            url,
            headers: Vec::new(),
        }
    }

    /// Adds a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn protocol_version(version: Version) -> String {
        let text = if version == Version::HTTP_09 {
            "HTTP/0.9"
        } else if version == Version::HTTP_10 {
            "HTTP/1.0"
        } else if version == Version::HTTP_2 {
            "HTTP/2.0"
        } else if version == Version::HTTP_3 {
            "HTTP/3.0"
        } else {
            "HTTP/1.1"
        };
        text.to_string()
    }
}

impl Exchange for ReqwestExchange {
    async fn perform_exchange(&self) -> ExchangeOutcome {
        let mut builder = self.client.request(self.method.clone(), self.url.clone());
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        tracing::debug!(method = %self.method, url = %self.url, "performing exchange");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, url = %self.url, "exchange failed without a response");
                return ExchangeOutcome::HardFailure(e.to_string());
            }
        };

        let status = response.status();
        let protocol_version = Self::protocol_version(response.version());
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        // Drain the body so the connection can be released.
        match response.text().await {
            Ok(body) => {
                tracing::debug!(status = status.as_u16(), "exchange completed");
                ExchangeOutcome::Response(WireResponse {
                    protocol_version,
                    status: status.as_u16(),
                    status_message: status.canonical_reason().unwrap_or("Unknown").to_string(),
                    headers,
                    body,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.url, "failed to read response body");
                ExchangeOutcome::HardFailure(format!("failed to read response body: {e}"))
            }
        }
    }
}
