//! Error types for provider operations.

use thiserror::Error;

use crate::clients::HttpError;

/// Unified error type for data provider operations.
///
/// HTTP and network failures propagate from the client untranslated; the
/// provider adds only the failure modes it can detect itself: an invalid
/// resource name and a response body missing an expected field.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The resource name is empty or otherwise unusable as a path segment.
    #[error("Invalid resource name '{resource}'.")]
    InvalidResource {
        /// The resource name that was provided.
        resource: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response body ({context}).")]
    UnexpectedBody {
        /// Which operation was reading the body, and what it expected.
        context: String,
    },

    /// An HTTP-level error (validation, network, or non-2xx response).
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_resource_message() {
        let error = ProviderError::InvalidResource {
            resource: String::new(),
        };
        assert!(error.to_string().contains("Invalid resource name"));
    }

    #[test]
    fn test_unexpected_body_message() {
        let error = ProviderError::UnexpectedBody {
            context: "list: response has no 'collection' array".to_string(),
        };
        assert!(error.to_string().contains("collection"));
    }

    #[test]
    fn test_http_error_passes_through() {
        let inner = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"error":"Not Found"}"#.to_string(),
        });
        let error = ProviderError::from(inner);
        assert!(error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ProviderError::InvalidResource {
            resource: "bad".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
