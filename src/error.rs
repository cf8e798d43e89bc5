//! Error types for provider configuration.
//!
//! This module contains error types used when constructing and validating
//! the provider configuration.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use simple_rest_provider::{ApiUrl, ConfigError};
//!
//! let result = ApiUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during provider configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.example.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
