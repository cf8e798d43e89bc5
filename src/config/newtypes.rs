//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated base URL for the backend REST API.
///
/// This newtype ensures the URL is non-empty, carries an `http://` or
/// `https://` scheme, and has no trailing slash. Paths are appended with a
/// single `/` separator, so normalizing the trailing slash here keeps URL
/// construction simple everywhere else.
///
/// # Example
///
/// ```rust
/// use simple_rest_provider::ApiUrl;
///
/// let url = ApiUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// Trailing slashes are trimmed so that resource paths can be appended
    /// with a single separator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is empty or does
    /// not start with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url
            .splitn(2, "://")
            .nth(1)
            .is_some_and(|rest| !rest.is_empty());

        if url.is_empty() || !has_scheme || !has_host {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
