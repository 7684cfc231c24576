//! The client-facing error type for catalog fetches.
//!
//! Whatever stage of a fetch fails, the caller sees one type:
//!
//! - [`CatalogError::Transport`]: the `GET` failed (connection error or non-2xx status)
//! - [`CatalogError::Parse`]: the body was not valid JSON
//! - [`CatalogError::MalformedResponse`]: valid JSON without the required keys
//!
//! [`CatalogError::kind`] gives a flat tag for callers that only branch on
//! the stage; the underlying cause is reachable through
//! [`std::error::Error::source`].
//!
//! # Example
//!
//! ```rust,ignore
//! match client.products(None, None).await {
//!     Ok(items) => println!("{} products", items.len()),
//!     Err(e) => match e.kind() {
//!         CatalogErrorKind::Transport => eprintln!("network: {e}"),
//!         CatalogErrorKind::Parse | CatalogErrorKind::MalformedResponse => {
//!             eprintln!("bad response: {e}")
//!         }
//!     },
//! }
//! ```

use crate::catalog::ResourceType;
use crate::transport::TransportError;
use thiserror::Error;

/// The stage at which a catalog fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogErrorKind {
    /// The transport could not complete the request.
    Transport,
    /// The response body was not valid JSON.
    Parse,
    /// The response body lacked a required key.
    MalformedResponse,
}

/// Error type for catalog fetches.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be completed.
    #[error("Catalog request failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be parsed.
    #[error("Catalog response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed, but required top-level keys were missing or had
    /// the wrong type.
    #[error("Malformed {resource} response: missing or invalid {}", .fields.join(", "))]
    MalformedResponse {
        /// The resource that was requested.
        resource: ResourceType,
        /// The offending top-level keys.
        fields: Vec<&'static str>,
    },
}

impl CatalogError {
    /// Returns the stage at which the fetch failed.
    #[must_use]
    pub const fn kind(&self) -> CatalogErrorKind {
        match self {
            Self::Transport(_) => CatalogErrorKind::Transport,
            Self::Parse(_) => CatalogErrorKind::Parse,
            Self::MalformedResponse { .. } => CatalogErrorKind::MalformedResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_keeps_cause() {
        let error = CatalogError::from(TransportError::Status {
            code: 503,
            body: "maintenance".to_string(),
        });

        assert_eq!(error.kind(), CatalogErrorKind::Transport);
        assert!(error.to_string().contains("503"));
        let source = error.source().expect("transport cause");
        assert!(source.to_string().contains("maintenance"));
    }

    #[test]
    fn test_parse_error_kind() {
        let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = CatalogError::from(cause);

        assert_eq!(error.kind(), CatalogErrorKind::Parse);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_malformed_response_lists_fields() {
        let error = CatalogError::MalformedResponse {
            resource: ResourceType::Products,
            fields: vec!["totalPages", "products"],
        };

        assert_eq!(error.kind(), CatalogErrorKind::MalformedResponse);
        assert_eq!(
            error.to_string(),
            "Malformed products response: missing or invalid totalPages, products"
        );
    }
}
