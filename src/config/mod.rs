//! Configuration types for the data provider.
//!
//! This module provides the core configuration types used to initialize
//! the provider for communication with a backend REST API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ProviderConfig`]: The main configuration struct holding all provider settings
//! - [`ProviderConfigBuilder`]: A builder for constructing [`ProviderConfig`] instances
//! - [`ApiUrl`]: A validated base URL newtype
//!
//! # Example
//!
//! ```rust
//! use simple_rest_provider::{ApiUrl, ProviderConfig};
//!
//! let config = ProviderConfig::builder()
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .default_total(500)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::ApiUrl;

use crate::error::ConfigError;

/// Fallback value for `total` when the backend omits the `x-total-count`
/// header on list responses.
pub const DEFAULT_TOTAL_FALLBACK: u64 = 100;

/// Configuration for the data provider.
///
/// This struct holds everything needed to talk to the backend: the base API
/// URL, the fallback total used when list responses omit the
/// `x-total-count` header, and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `ProviderConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use simple_rest_provider::{ApiUrl, ProviderConfig};
///
/// let config = ProviderConfig::builder()
///     .api_url(ApiUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url().as_ref(), "https://api.example.com");
/// assert_eq!(config.default_total(), 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    api_url: ApiUrl,
    default_total: u64,
    user_agent_prefix: Option<String>,
}

impl ProviderConfig {
    /// Creates a new builder for constructing a `ProviderConfig`.
    #[must_use]
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// Returns the base API URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the fallback total used when the `x-total-count` header is
    /// missing from a list response.
    #[must_use]
    pub const fn default_total(&self) -> u64 {
        self.default_total
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`ProviderConfig`] instances.
///
/// Provides a fluent API for building the configuration with optional
/// parameters.
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    api_url: Option<ApiUrl>,
    default_total: Option<u64>,
    user_agent_prefix: Option<String>,
}

impl ProviderConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base API URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the fallback total reported when a list response carries no
    /// `x-total-count` header.
    ///
    /// Defaults to [`DEFAULT_TOTAL_FALLBACK`] (100). The provider logs a
    /// warning whenever this fallback is substituted, since pagination is
    /// degraded without a real count.
    #[must_use]
    pub const fn default_total(mut self, total: u64) -> Self {
        self.default_total = Some(total);
        self
    }

    /// Sets the User-Agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ProviderConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_url` is not set.
    pub fn build(self) -> Result<ProviderConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(ProviderConfig {
            api_url,
            default_total: self.default_total.unwrap_or(DEFAULT_TOTAL_FALLBACK),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url() -> ApiUrl {
        ApiUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_api_url() {
        let result = ProviderConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_url" })
        ));
    }

    #[test]
    fn test_builder_with_required_fields_only() {
        let config = ProviderConfig::builder()
            .api_url(test_url())
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), "https://api.example.com");
        assert_eq!(config.default_total(), DEFAULT_TOTAL_FALLBACK);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_custom_default_total() {
        let config = ProviderConfig::builder()
            .api_url(test_url())
            .default_total(250)
            .build()
            .unwrap();

        assert_eq!(config.default_total(), 250);
    }

    #[test]
    fn test_builder_with_user_agent_prefix() {
        let config = ProviderConfig::builder()
            .api_url(test_url())
            .user_agent_prefix("MyAdmin/2.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyAdmin/2.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProviderConfig>();
    }
}
