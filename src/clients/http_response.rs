//! HTTP response types for the data provider.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! backend response data.

use std::collections::HashMap;

/// Header carrying the total number of matching records on list responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// An HTTP response from the backend REST API.
///
/// Contains the response status code, headers, and parsed JSON body.
/// Headers are keyed by lowercase name and may carry multiple values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched in lowercase.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the parsed `x-total-count` header value, if present and
    /// numeric.
    ///
    /// List responses are expected to carry this header with the total
    /// number of matching records, independent of page size. The provider
    /// substitutes its configured fallback when it is absent.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.header(TOTAL_COUNT_HEADER)
            .and_then(|value| value.trim().parse::<u64>().ok())
    }
}
