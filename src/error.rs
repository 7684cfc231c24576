//! Error types for the Best Buy catalog client.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to the API live next to the code that raises them:
//! [`crate::transport::TransportError`] and [`crate::catalog::CatalogError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bestbuy_catalog::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`crate::CatalogConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Best Buy API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.bestbuy.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Page size must be at least one.
    #[error("Invalid page size 0. Page size must be a positive integer.")]
    InvalidPageSize,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvironmentVariable {
        /// The name of the variable.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("Best Buy API key"));
    }

    #[test]
    fn test_invalid_base_url_error_includes_url() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_environment_variable_names_variable() {
        let error = ConfigError::MissingEnvironmentVariable {
            name: "BESTBUY_API_KEY",
        };
        assert!(error.to_string().contains("BESTBUY_API_KEY"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidPageSize;
        let _: &dyn std::error::Error = &error;
    }
}
