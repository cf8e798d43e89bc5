//! HTTP client types for backend API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! requests to the backend REST API. It handles request/response processing
//! and header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Failure Behavior
//!
//! The client performs no retries and defines no timeout of its own. A
//! network error or non-2xx response fails the call immediately, and the
//! error propagates to the provider's caller untranslated. Transport policy
//! (timeouts, cancellation) is whatever the embedding application configures.
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_rest_provider::{ApiUrl, ProviderConfig};
//! use simple_rest_provider::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = ProviderConfig::builder()
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "post")
//!     .query_param("limit", "25")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, TOTAL_COUNT_HEADER};
