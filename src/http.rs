//! HTTP client factory.
//!
//! Every provider owns one [`HttpClient`] built by [`HttpClientFactory`].
//! The client issues a single GET per call and logs the exchange according
//! to the configured [`HttpLogLevel`].

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::QueryParams;
use crate::error::{MixjarError, Result};

/// Default connection timeout, in milliseconds.
pub const DEFAULT_CONNECTION_TIMEOUT_MS: i64 = 60_000;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("mixjar/", env!("CARGO_PKG_VERSION"));

/// Query parameters whose values never reach the logs.
const REDACTED_PARAMS: &[&str] = &["access_token"];

/// How much of each HTTP exchange gets logged.
///
/// Levels are cumulative: `Headers` includes everything `Basic` logs,
/// `Body` includes everything `Headers` logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HttpLogLevel {
    /// Log nothing.
    #[default]
    None,
    /// Method, URL and response status.
    Basic,
    /// Request and response headers.
    Headers,
    /// Response body.
    Body,
}

/// Construction parameters shared by both providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Traffic logging verbosity. Defaults to [`HttpLogLevel::None`].
    pub log_level: HttpLogLevel,

    /// Connection timeout in milliseconds. Defaults to 60 000.
    ///
    /// Zero and negative values are rejected when the client is built.
    pub connection_timeout_ms: i64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            log_level: HttpLogLevel::None,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
        }
    }
}

impl HttpConfig {
    /// Validated connection timeout.
    pub fn connection_timeout(&self) -> Result<Duration> {
        if self.connection_timeout_ms <= 0 {
            return Err(MixjarError::InvalidConfig(format!(
                "connection timeout must be positive, got {} ms",
                self.connection_timeout_ms
            )));
        }
        Ok(Duration::from_millis(self.connection_timeout_ms as u64))
    }
}

/// Builds configured [`HttpClient`]s.
///
/// Building never contacts the network; it only fails on invalid
/// configuration or when the TLS backend cannot be initialized.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    config: HttpConfig,
}

impl HttpClientFactory {
    /// Create a factory for the given configuration.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Build a client ready to be reused across calls.
    pub fn build(&self) -> Result<HttpClient> {
        let timeout = self.config.connection_timeout()?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .build()?;

        debug!(
            "Built HTTP client (connect timeout {:?}, log level {:?})",
            timeout, self.config.log_level
        );

        Ok(HttpClient {
            client,
            log_level: self.config.log_level,
        })
    }
}

/// Configured network client shared by every call of one provider.
///
/// Holds no session state; cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    log_level: HttpLogLevel,
}

impl HttpClient {
    /// Logging verbosity this client was built with.
    pub fn log_level(&self) -> HttpLogLevel {
        self.log_level
    }

    /// Issue one GET request and parse the JSON body.
    ///
    /// Returns `Ok(None)` when the provider answers with no content.
    /// Non-2xx statuses are returned as [`MixjarError::RequestError`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &QueryParams,
    ) -> Result<Option<T>> {
        let request = self
            .client
            .get(url)
            .query(params.pairs())
            .build()
            .map_err(reqwest::Error::without_url)?;

        if self.log_level >= HttpLogLevel::Basic {
            info!("--> GET {}", redact(request.url()));
        }
        if self.log_level >= HttpLogLevel::Headers {
            log_headers("-->", request.headers());
        }

        // reqwest errors carry the request URL, token included
        let response = self
            .client
            .execute(request)
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if self.log_level >= HttpLogLevel::Basic {
            info!("<-- {} {}", status, redact(response.url()));
        }
        if self.log_level >= HttpLogLevel::Headers {
            log_headers("<--", response.headers());
        }

        if let Err(err) = response.error_for_status_ref() {
            warn!("GET {} failed: {}", redact(response.url()), status);
            return Err(err.without_url().into());
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        if self.log_level >= HttpLogLevel::Body {
            info!("<-- body ({} bytes): {}", body.len(), body);
        }

        parse_body(&body)
    }
}

/// Parse a response body, treating empty content and JSON `null` as absent.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(trimmed)?)
}

fn log_headers(direction: &str, headers: &HeaderMap) {
    for (name, value) in headers {
        info!(
            "{} {}: {}",
            direction,
            name,
            value.to_str().unwrap_or("<non-ascii>")
        );
    }
}

/// Render a URL with sensitive query values masked.
fn redact(url: &Url) -> String {
    let sensitive = url
        .query_pairs()
        .any(|(name, _)| REDACTED_PARAMS.contains(&name.as_ref()));
    if !sensitive {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if REDACTED_PARAMS.contains(&name.as_ref()) {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
