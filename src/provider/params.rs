//! Parameter and result types for the generic CRUD operation contract.
//!
//! These types mirror the shapes an admin dashboard supplies: 1-based
//! pagination, a single sort field with direction, and an arbitrary
//! field-to-value filter mapping.

use serde_json::Value;
use std::fmt;

use crate::provider::record::{Record, RecordId};

/// Sort direction for list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order (wire form `ASC`).
    #[default]
    Asc,
    /// Descending order (wire form `DESC`).
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

/// Sort specification: a field name and a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub order: SortOrder,
}

impl Sort {
    /// Creates a new sort specification.
    #[must_use]
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new("id", SortOrder::Asc)
    }
}

/// Pagination specification with a 1-based page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// The 1-based page number.
    pub page: u64,
    /// The number of records per page.
    pub per_page: u64,
}

impl Pagination {
    /// Creates a new pagination specification.
    #[must_use]
    pub const fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Returns the record offset for this page: `(page - 1) * per_page`.
    ///
    /// A page of 0 saturates to offset 0 rather than underflowing.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Returns the record limit for this page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 25)
    }
}

/// Parameters for the `list` operation.
#[derive(Clone, Debug, Default)]
pub struct ListParams {
    /// Pagination specification.
    pub pagination: Pagination,
    /// Sort specification.
    pub sort: Sort,
    /// Arbitrary field-to-value filter mapping. Nested objects are flattened
    /// into dotted-path query keys.
    pub filter: Value,
}

/// Parameters for the `get_many_reference` operation.
///
/// Fetches all records of a resource whose foreign-key field (`target`)
/// points at a given parent record (`id`).
#[derive(Clone, Debug)]
pub struct GetManyReferenceParams {
    /// The foreign-key field name on the referenced resource.
    pub target: String,
    /// The referencing record's identifier.
    pub id: RecordId,
    /// Pagination specification.
    pub pagination: Pagination,
    /// Sort specification.
    pub sort: Sort,
    /// Additional filter fields alongside the target pair.
    pub filter: Value,
}

/// Parameters for the `update` operation: a record id plus the full payload.
#[derive(Clone, Debug)]
pub struct UpdateParams {
    /// The identifier of the record to update.
    pub id: RecordId,
    /// The full record payload to send.
    pub data: Record,
}

/// Parameters for the `update_many` fallback: one payload applied to each id.
#[derive(Clone, Debug)]
pub struct UpdateManyParams {
    /// The identifiers of the records to update.
    pub ids: Vec<RecordId>,
    /// The payload sent in every constituent PATCH.
    pub data: Record,
}

/// Result of a `list` or `get_many_reference` operation.
///
/// `total` reflects the full matching set in the backend, independent of
/// page size; `data` holds at most one page of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListResult {
    /// The records of the requested page, in backend order.
    pub data: Vec<Record>,
    /// Total count of matching records in the backend.
    pub total: u64,
}
