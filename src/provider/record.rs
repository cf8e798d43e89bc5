//! Record types and backend record normalization.
//!
//! Backend records carry two private bookkeeping fields: a composite
//! document handle `_id` (of the form `collection/key`) and an internal key
//! `_key`. The admin UI expects neither; it wants a single generic `id`
//! field. Normalization renames `_id` to `id` and strips both private
//! fields from every inbound record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::errors::ProviderError;

/// Name of the generic identifier field the UI layer expects.
pub const ID_FIELD: &str = "id";

/// Backend's private document handle field, renamed to [`ID_FIELD`].
pub const BACKEND_ID_FIELD: &str = "_id";

/// Backend's private internal key field, stripped on normalization.
pub const BACKEND_KEY_FIELD: &str = "_key";

/// A single record within a resource: a mapping from field name to value.
///
/// Records are schemaless; after normalization every record carries an `id`
/// field uniquely identifying it within its resource collection.
pub type Record = serde_json::Map<String, Value>;

/// A record identifier, either numeric or string-valued.
///
/// Backends using composite document handles produce path-like string ids
/// such as `"post/123"`; [`RecordId::key`] extracts the final path segment
/// used as the REST lookup key.
///
/// # Example
///
/// ```rust
/// use simple_rest_provider::RecordId;
///
/// let id = RecordId::from("post/123");
/// assert_eq!(id.key(), "123");
///
/// let id = RecordId::from(42);
/// assert_eq!(id.key(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// A numeric identifier.
    Int(i64),
    /// A string identifier, possibly a composite `collection/key` handle.
    Str(String),
}

impl RecordId {
    /// Returns the REST lookup key for this identifier.
    ///
    /// For composite path-like string ids (e.g., `"a/b/c"`), only the final
    /// path segment is the key. Numeric ids render as their decimal form.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Str(s) => s
                .rsplit('/')
                .next()
                .unwrap_or(s.as_str())
                .to_string(),
        }
    }

    /// Extracts a `RecordId` from a JSON value, if it is a string or number.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(Self::Int),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Normalizes a backend record into the generic shape the UI expects.
///
/// - A `_id` field becomes `id`; `_id` and `_key` are removed.
/// - A record already carrying `id` and no `_id` is accepted as-is, with
///   `_key` still stripped. PATCH and DELETE bodies may arrive in this form.
///
/// Normalization is applied uniformly to every record-returning operation.
///
/// # Errors
///
/// Returns [`ProviderError::UnexpectedBody`] if the value is not a JSON
/// object or carries neither `_id` nor `id`.
pub fn normalize_record(value: Value, context: &str) -> Result<Record, ProviderError> {
    let Value::Object(mut record) = value else {
        return Err(ProviderError::UnexpectedBody {
            context: format!("{context}: expected a JSON object record"),
        });
    };

    record.remove(BACKEND_KEY_FIELD);

    if let Some(backend_id) = record.remove(BACKEND_ID_FIELD) {
        record.insert(ID_FIELD.to_string(), backend_id);
        return Ok(record);
    }

    if record.contains_key(ID_FIELD) {
        return Ok(record);
    }

    Err(ProviderError::UnexpectedBody {
        context: format!("{context}: record has no identifier field"),
    })
}

/// Normalizes every entry of the `collection` field of a list-shaped body.
///
/// # Errors
///
/// Returns [`ProviderError::UnexpectedBody`] if the body has no `collection`
/// array or any entry fails [`normalize_record`].
pub fn normalize_collection(body: Value, context: &str) -> Result<Vec<Record>, ProviderError> {
    let collection = match body {
        Value::Object(mut map) => match map.remove("collection") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(ProviderError::UnexpectedBody {
                    context: format!("{context}: response has no 'collection' array"),
                })
            }
        },
        _ => {
            return Err(ProviderError::UnexpectedBody {
                context: format!("{context}: expected a JSON object body"),
            })
        }
    };

    collection
        .into_iter()
        .map(|entry| normalize_record(entry, context))
        .collect()
}
