/*
[INPUT]:  HTTP configuration (base URL, timeouts, secret credential)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use std::time::Duration;

use crate::http::Result;
use crate::validate;

/// Base URL for the lnurl.it API
const DEFAULT_BASE_URL: &str = "https://api.lnurl.it";

/// Header carrying the static secret credential on every request
const SECRET_HEADER: &str = "x-api-secret";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the lnurl.it withdrawal API
///
/// Holds no mutable state after construction, so a single instance can be
/// shared across tasks without locking.
#[derive(Debug)]
pub struct LnurlClient {
    http_client: Client,
    base_url: Url,
    secret: String,
}

impl LnurlClient {
    /// Create a new client with default configuration
    ///
    /// The secret must be in the canonical UUID textual form; it is validated
    /// here once and never re-checked per call. No network call is made.
    pub fn new(secret: &str) -> Result<Self> {
        Self::with_config(secret, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(secret: &str, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(secret, config, DEFAULT_BASE_URL)
    }

    /// Create a new client pointed at a custom base URL (used by tests to
    /// target a mock server)
    pub fn with_config_and_base_url(
        secret: &str,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        validate::require_canonical_uuid("secret", secret)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            secret: secret.to_string(),
        })
    }

    /// Build full URL for an API endpoint
    fn api_url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(endpoint)
    }

    /// Build a request builder carrying the secret header
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .header(SECRET_HEADER, &self.secret))
    }
}
