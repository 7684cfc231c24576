//! The HTTP `GET` collaborator used by the catalog client.
//!
//! The client never talks to the network directly. It hands a fully built URL
//! to a [`Transport`] and receives the raw response body back. [`HttpTransport`]
//! is the reqwest-backed implementation used in production; tests substitute
//! their own.
//!
//! # Retry Behavior
//!
//! None. A failed request is reported once and never retried. Timeouts, if
//! any, are the transport's business.

mod errors;
mod http;

use std::future::Future;

pub use errors::TransportError;
pub use http::{HttpTransport, LIBRARY_VERSION};

/// Performs a `GET` and returns the response body.
///
/// Implementations must report connection failures and non-2xx responses as
/// [`TransportError`]; any body they return is treated as a successful read.
pub trait Transport {
    /// Sends a `GET` request to `url` and returns the response body bytes.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).get(url)
    }
}
