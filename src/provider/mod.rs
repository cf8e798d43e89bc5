//! The data provider: the translation layer between a generic admin CRUD
//! operation contract and the backend's simple REST dialect.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DataProvider`]: the nine generic operations (list, get-one, get-many,
//!   get-many-by-reference, create, update, update-many, delete, delete-many)
//! - [`ListParams`], [`GetManyReferenceParams`], [`UpdateParams`],
//!   [`UpdateManyParams`]: operation parameter shapes
//! - [`ListResult`]: one page of records plus the backend's total count
//! - [`Record`], [`RecordId`]: the generic record shape and its identifier
//! - [`ProviderError`]: unified operation error type
//!
//! # Dialect
//!
//! List-shaped responses wrap records in a `collection` array and carry the
//! total count in the `x-total-count` header. Backend records expose a
//! composite `_id` document handle and an internal `_key`; both are private
//! bookkeeping and are normalized away on every inbound record.

mod data_provider;
mod errors;
mod params;
mod query;
mod record;

pub use data_provider::DataProvider;
pub use errors::ProviderError;
pub use params::{
    GetManyReferenceParams, ListParams, ListResult, Pagination, Sort, SortOrder, UpdateManyParams,
    UpdateParams,
};
pub use record::{Record, RecordId, BACKEND_ID_FIELD, BACKEND_KEY_FIELD, ID_FIELD};
