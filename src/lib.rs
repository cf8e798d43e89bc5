//! # Simple REST Data Provider
//!
//! A Rust data provider translating the generic CRUD operation contract of
//! an admin dashboard into HTTP requests against a simple REST dialect, and
//! normalizing backend records into the generic shape the UI expects.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ProviderConfig`] and [`ProviderConfigBuilder`]
//! - A validated [`ApiUrl`] newtype for the backend base URL
//! - The [`DataProvider`] with nine generic operations: list, get-one,
//!   get-many, get-many-by-reference, create, update, update-many, delete,
//!   delete-many
//! - Bulk fallbacks: the backend has no bulk update/delete endpoints, so
//!   `update_many` and `delete_many` fan out into concurrent single-item
//!   calls that fail fast on the first constituent failure
//! - Record normalization: the backend's private `_id` document handle is
//!   renamed to the generic `id` field and internal bookkeeping fields are
//!   stripped on every inbound record
//!
//! ## REST dialect
//!
//! | Operation | Request |
//! |---|---|
//! | list | `GET /{resource}?{filter}&sort=&order=&offset=&limit=` |
//! | get_one | `GET /{resource}/{key}` |
//! | get_many | `GET /{resource}?id=1&id=2` |
//! | get_many_reference | `GET /{resource}?{filter}&{target}={id}&sort=...` |
//! | create | `POST /{resource}` |
//! | update | `PATCH /{resource}/{key}` |
//! | delete | `DELETE /{resource}/{key}` |
//!
//! List responses wrap records in a `collection` array and carry the total
//! matching count in the `x-total-count` header. When the header is absent
//! the provider substitutes a configurable default (100 unless overridden)
//! and logs the degraded pagination.
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_rest_provider::{ApiUrl, ProviderConfig};
//!
//! // Create configuration using the builder pattern
//! let config = ProviderConfig::builder()
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .default_total(500)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Fetching records
//!
//! ```rust,ignore
//! use simple_rest_provider::{
//!     ApiUrl, DataProvider, ListParams, Pagination, ProviderConfig, RecordId, Sort, SortOrder,
//! };
//! use serde_json::json;
//!
//! let config = ProviderConfig::builder()
//!     .api_url(ApiUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let provider = DataProvider::new(&config);
//!
//! // One page of posts by a given author
//! let params = ListParams {
//!     pagination: Pagination::new(1, 25),
//!     sort: Sort::new("title", SortOrder::Asc),
//!     filter: json!({"author": "jane@example.com"}),
//! };
//! let page = provider.list("post", &params).await?;
//! println!("showing {} of {} posts", page.data.len(), page.total);
//!
//! // A single post; composite handles resolve to their final segment
//! let post = provider.get_one("post", &RecordId::from("post/123")).await?;
//! ```
//!
//! ## Bulk fallbacks
//!
//! ```rust,ignore
//! use simple_rest_provider::RecordId;
//!
//! // No bulk-delete endpoint: three concurrent DELETE calls, fail-fast
//! let deleted = provider
//!     .delete_many("post", &[RecordId::from(1), RecordId::from(2), RecordId::from(3)])
//!     .await?;
//! assert_eq!(deleted.len(), 3);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Stateless operations**: Nothing is cached or retained between calls
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No policy of its own**: retries, timeouts, and cancellation belong to
//!   the embedding application, not the provider

pub mod clients;
pub mod config;
pub mod error;
pub mod provider;

// Re-export public types at crate root for convenience
pub use config::{ApiUrl, ProviderConfig, ProviderConfigBuilder, DEFAULT_TOTAL_FALLBACK};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export provider types
pub use provider::{
    DataProvider, GetManyReferenceParams, ListParams, ListResult, Pagination, ProviderError,
    Record, RecordId, Sort, SortOrder, UpdateManyParams, UpdateParams,
};
