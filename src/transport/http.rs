//! reqwest-backed [`Transport`] implementation.

use std::collections::HashMap;

use crate::config::CatalogConfig;
use crate::transport::{Transport, TransportError};

/// Library version from Cargo.toml.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Best Buy catalog API.
///
/// Sends plain `GET` requests with JSON `Accept` and library `User-Agent`
/// headers. Authentication travels in the URL, so no credential headers are
/// added here.
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use bestbuy_catalog::{ApiKey, CatalogConfig};
/// use bestbuy_catalog::transport::HttpTransport;
///
/// let config = CatalogConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .user_agent_prefix("PriceWatch/1.0")
///     .build()
///     .unwrap();
///
/// let transport = HttpTransport::new(&config).unwrap();
/// assert!(transport.default_headers()["User-Agent"].starts_with("PriceWatch/1.0 | "));
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport using the user agent settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &CatalogConfig) -> Result<Self, TransportError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}BestBuy Catalog Library v{LIBRARY_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;
        let status = res.status();

        if !status.is_success() {
            let code = status.as_u16();
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status = code, "Catalog API request failed with status {code}");
            return Err(TransportError::Status { code, body });
        }

        Ok(res.bytes().await?.to_vec())
    }
}
