//! Transport-level error types.
//!
//! # Example
//!
//! ```rust
//! use bestbuy_catalog::transport::TransportError;
//!
//! let error = TransportError::Status {
//!     code: 403,
//!     body: r#"{"errorMessage":"Key not authorized"}"#.to_string(),
//! };
//!
//! assert_eq!(error.status(), Some(403));
//! assert!(error.to_string().contains("403"));
//! ```

use thiserror::Error;

/// Error returned when a `GET` could not be completed.
///
/// Covers connection failures and responses with a non-2xx status code.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Request failed with status {code}: {body}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body, possibly empty.
        body: String,
    },
}

impl TransportError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Status { code, .. } => Some(*code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_includes_code_and_body() {
        let error = TransportError::Status {
            code: 500,
            body: "upstream timeout".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("upstream timeout"));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &TransportError::Status {
            code: 404,
            body: String::new(),
        };
        let _ = error;
    }
}
