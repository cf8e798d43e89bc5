//! The data provider: generic CRUD operations over the simple REST dialect.
//!
//! Every operation is a single stateless request/response transaction, or a
//! fixed fan-out of such transactions for the two bulk fallbacks. No records
//! are held between calls and no state machine exists: the provider owns
//! only its HTTP client and configuration.

use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ProviderConfig;
use crate::provider::errors::ProviderError;
use crate::provider::params::{
    GetManyReferenceParams, ListParams, ListResult, UpdateManyParams, UpdateParams,
};
use crate::provider::query;
use crate::provider::record::{
    normalize_collection, normalize_record, Record, RecordId, BACKEND_ID_FIELD, ID_FIELD,
};

/// The data provider: translates generic admin CRUD operations into REST
/// requests against the backend dialect.
///
/// The backend offers no bulk update or delete endpoints, so
/// [`update_many`](Self::update_many) and [`delete_many`](Self::delete_many)
/// fan out into concurrent single-item calls and fail fast on the first
/// constituent failure.
///
/// # Thread Safety
///
/// `DataProvider` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use simple_rest_provider::{ApiUrl, DataProvider, ListParams, ProviderConfig};
///
/// let config = ProviderConfig::builder()
///     .api_url(ApiUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let provider = DataProvider::new(&config);
/// let result = provider.list("post", &ListParams::default()).await?;
/// println!("{} of {} posts", result.data.len(), result.total);
/// ```
#[derive(Debug)]
pub struct DataProvider {
    http: HttpClient,
    default_total: u64,
}

// Verify DataProvider is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataProvider>();
};

impl DataProvider {
    /// Creates a new data provider for the given configuration.
    #[must_use]
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            default_total: config.default_total(),
        }
    }

    /// Returns the base API URL this provider talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.http.api_url()
    }

    /// Fetches one page of records for a resource.
    ///
    /// Issues `GET /{resource}` with the flattened filter fields followed by
    /// `sort`, `order`, `offset = (page-1)*per_page`, and `limit = per_page`.
    /// The response body must carry a `collection` array; every entry is
    /// normalized. `total` comes from the `x-total-count` header, falling
    /// back to the configured default when the header is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a body without a
    /// `collection` array of records.
    pub async fn list(
        &self,
        resource: &str,
        params: &ListParams,
    ) -> Result<ListResult, ProviderError> {
        let resource = verify_resource(resource)?;

        let request = HttpRequest::builder(HttpMethod::Get, resource)
            .query(query::list_query(
                &params.filter,
                &params.sort,
                &params.pagination,
            ))
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        let total = self.read_total(&response, resource);
        let data = normalize_collection(response.body, "list")?;

        Ok(ListResult { data, total })
    }

    /// Fetches a single record by id.
    ///
    /// Composite path-like ids (e.g., `"post/123"`) are reduced to their
    /// final path segment before the lookup: `GET /{resource}/{key}`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a body that is not an
    /// identifiable record.
    pub async fn get_one(&self, resource: &str, id: &RecordId) -> Result<Record, ProviderError> {
        let resource = verify_resource(resource)?;

        let request = HttpRequest::builder(HttpMethod::Get, format!("{}/{}", resource, id.key()))
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        normalize_record(response.body, "get_one")
    }

    /// Fetches several records by id with a single request.
    ///
    /// The ids are serialized as repeated `id` query parameters:
    /// `GET /{resource}?id=1&id=2&...`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a body without a
    /// `collection` array of records.
    pub async fn get_many(
        &self,
        resource: &str,
        ids: &[RecordId],
    ) -> Result<Vec<Record>, ProviderError> {
        let resource = verify_resource(resource)?;

        let query: Vec<(String, String)> = ids
            .iter()
            .map(|id| (ID_FIELD.to_string(), id.to_string()))
            .collect();

        let request = HttpRequest::builder(HttpMethod::Get, resource)
            .query(query)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        normalize_collection(response.body, "get_many")
    }

    /// Fetches all records whose foreign-key field points at a parent record.
    ///
    /// Behaves like [`list`](Self::list) with one extra filter pair
    /// `{target: id}` in the outgoing query.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a body without a
    /// `collection` array of records.
    pub async fn get_many_reference(
        &self,
        resource: &str,
        params: &GetManyReferenceParams,
    ) -> Result<ListResult, ProviderError> {
        let resource = verify_resource(resource)?;

        let request = HttpRequest::builder(HttpMethod::Get, resource)
            .query(query::reference_query(
                &params.filter,
                &params.target,
                &params.id,
                &params.sort,
                &params.pagination,
            ))
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        let total = self.read_total(&response, resource);
        let data = normalize_collection(response.body, "get_many_reference")?;

        Ok(ListResult { data, total })
    }

    /// Creates a record: `POST /{resource}` with the payload as JSON body.
    ///
    /// The result is the submitted data merged with the backend-assigned id
    /// from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a response without an
    /// assigned id.
    pub async fn create(&self, resource: &str, data: Record) -> Result<Record, ProviderError> {
        let resource = verify_resource(resource)?;

        let request = HttpRequest::builder(HttpMethod::Post, resource)
            .body(Value::Object(data.clone()))
            .body_type(DataType::Json)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        let assigned_id = assigned_id(&response.body, "create")?;

        let mut created = data;
        created.insert(ID_FIELD.to_string(), assigned_id);
        Ok(created)
    }

    /// Updates a record: `PATCH /{resource}/{key}` with the payload as JSON
    /// body.
    ///
    /// If the payload's `image` field holds an in-memory file-upload handle
    /// (an object carrying a `rawFile` key), it is replaced by the file's
    /// already-known `src` URL before sending; the provider never uploads
    /// binary content itself. The returned record is normalized like every
    /// other inbound record.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a body that is not an
    /// identifiable record.
    pub async fn update(
        &self,
        resource: &str,
        params: UpdateParams,
    ) -> Result<Record, ProviderError> {
        let resource = verify_resource(resource)?;

        let mut data = params.data;
        resolve_upload_handle(&mut data);

        let request = HttpRequest::builder(
            HttpMethod::Patch,
            format!("{}/{}", resource, params.id.key()),
        )
        .body(Value::Object(data))
        .body_type(DataType::Json)
        .build()
        .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        normalize_record(response.body, "update")
    }

    /// Updates several records by fanning out one PATCH per id.
    ///
    /// The backend offers no bulk-update endpoint, so the calls are issued
    /// concurrently and joined; the aggregate fails as soon as any one
    /// constituent request fails, producing no partial result. On success
    /// the acknowledged ids are returned in input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProviderError`] produced by any constituent call.
    pub async fn update_many(
        &self,
        resource: &str,
        params: &UpdateManyParams,
    ) -> Result<Vec<RecordId>, ProviderError> {
        let resource = verify_resource(resource)?;

        let calls = params.ids.iter().map(|id| async move {
            let request = HttpRequest::builder(
                HttpMethod::Patch,
                format!("{}/{}", resource, id.key()),
            )
            .body(Value::Object(params.data.clone()))
            .body_type(DataType::Json)
            .build()
            .map_err(crate::clients::HttpError::from)?;

            let response = self.http.request(request).await?;
            assigned_record_id(&response.body, "update_many")
        });

        futures::future::try_join_all(calls).await
    }

    /// Deletes a record: `DELETE /{resource}/{key}`.
    ///
    /// The returned (deleted) record is normalized like every other inbound
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on HTTP failure or a body that is not an
    /// identifiable record.
    pub async fn delete(&self, resource: &str, id: &RecordId) -> Result<Record, ProviderError> {
        let resource = verify_resource(resource)?;

        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("{}/{}", resource, id.key()))
                .build()
                .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        normalize_record(response.body, "delete")
    }

    /// Deletes several records by fanning out one DELETE per id.
    ///
    /// Same scatter-gather contract as [`update_many`](Self::update_many):
    /// concurrent calls, fail-fast on the first failure, acknowledged ids
    /// in input order on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProviderError`] produced by any constituent call.
    pub async fn delete_many(
        &self,
        resource: &str,
        ids: &[RecordId],
    ) -> Result<Vec<RecordId>, ProviderError> {
        let resource = verify_resource(resource)?;

        let calls = ids.iter().map(|id| async move {
            let request =
                HttpRequest::builder(HttpMethod::Delete, format!("{}/{}", resource, id.key()))
                    .build()
                    .map_err(crate::clients::HttpError::from)?;

            let response = self.http.request(request).await?;
            assigned_record_id(&response.body, "delete_many")
        });

        futures::future::try_join_all(calls).await
    }

    /// Reads the total count from a list response, substituting the
    /// configured default when the header is missing.
    fn read_total(&self, response: &HttpResponse, resource: &str) -> u64 {
        response.total_count().map_or_else(
            || {
                tracing::warn!(
                    "Missing x-total-count header on '{}' list response; \
                     pagination degraded to configured default of {}",
                    resource,
                    self.default_total
                );
                self.default_total
            },
            |total| total,
        )
    }
}

/// Validates a resource name for use as a path segment.
fn verify_resource(resource: &str) -> Result<&str, ProviderError> {
    if resource.is_empty() || resource.contains('/') {
        return Err(ProviderError::InvalidResource {
            resource: resource.to_string(),
        });
    }
    Ok(resource)
}

/// Extracts the backend-assigned id value from a response body.
///
/// The dialect reports the assigned id as `id`; a composite `_id` handle is
/// accepted as a fallback.
fn assigned_id(body: &Value, context: &str) -> Result<Value, ProviderError> {
    body.get(ID_FIELD)
        .or_else(|| body.get(BACKEND_ID_FIELD))
        .cloned()
        .ok_or_else(|| ProviderError::UnexpectedBody {
            context: format!("{context}: response has no assigned id"),
        })
}

/// Extracts the acknowledged id of a bulk-fallback constituent response.
fn assigned_record_id(body: &Value, context: &str) -> Result<RecordId, ProviderError> {
    let value = assigned_id(body, context)?;
    RecordId::from_value(&value).ok_or_else(|| ProviderError::UnexpectedBody {
        context: format!("{context}: acknowledged id is neither string nor number"),
    })
}

/// Replaces an in-memory file-upload handle in the `image` field by its
/// already-known source URL.
fn resolve_upload_handle(data: &mut Record) {
    let replacement = match data.get("image") {
        Some(Value::Object(handle)) if handle.contains_key("rawFile") => {
            Some(handle.get("src").cloned().unwrap_or(Value::Null))
        }
        _ => None,
    };
    if let Some(src) = replacement {
        data.insert("image".to_string(), src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_verify_resource_accepts_plain_name() {
        assert_eq!(verify_resource("post").unwrap(), "post");
    }

    #[test]
    fn test_verify_resource_rejects_empty() {
        assert!(matches!(
            verify_resource(""),
            Err(ProviderError::InvalidResource { .. })
        ));
    }

    #[test]
    fn test_verify_resource_rejects_path_separators() {
        assert!(matches!(
            verify_resource("post/extra"),
            Err(ProviderError::InvalidResource { .. })
        ));
    }

    #[test]
    fn test_assigned_id_prefers_generic_field() {
        let value = assigned_id(&json!({"id": 7, "_id": "post/7"}), "create").unwrap();
        assert_eq!(value, json!(7));
    }

    #[test]
    fn test_assigned_id_falls_back_to_backend_handle() {
        let value = assigned_id(&json!({"_id": "post/7"}), "create").unwrap();
        assert_eq!(value, json!("post/7"));
    }

    #[test]
    fn test_assigned_id_missing_is_error() {
        assert!(matches!(
            assigned_id(&json!({"title": "x"}), "create"),
            Err(ProviderError::UnexpectedBody { .. })
        ));
    }

    #[test]
    fn test_resolve_upload_handle_replaces_raw_file() {
        let mut data = record(json!({
            "title": "Hello",
            "image": {"rawFile": {"path": "local.png"}, "src": "https://cdn.example.com/a.png"}
        }));

        resolve_upload_handle(&mut data);

        assert_eq!(
            data.get("image"),
            Some(&json!("https://cdn.example.com/a.png"))
        );
    }

    #[test]
    fn test_resolve_upload_handle_keeps_plain_url() {
        let mut data = record(json!({"image": "https://cdn.example.com/a.png"}));
        resolve_upload_handle(&mut data);
        assert_eq!(
            data.get("image"),
            Some(&json!("https://cdn.example.com/a.png"))
        );
    }

    #[test]
    fn test_resolve_upload_handle_ignores_missing_image() {
        let mut data = record(json!({"title": "no image"}));
        resolve_upload_handle(&mut data);
        assert_eq!(data.get("image"), None);
    }
}
