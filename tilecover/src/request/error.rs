//! Error types for request resolution.

use thiserror::Error;

use crate::service::ServiceError;

/// Errors surfaced by [`GetTileRequest`](crate::request::GetTileRequest).
///
/// Every failure is terminal for the request: nothing is retried apart
/// from the documented one-shot format-template fallback, which recovers
/// locally and only surfaces [`MissingFormatTemplate`](Self::MissingFormatTemplate)
/// when the fallback format has no template either.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The requested layer does not exist in the catalog
    #[error("Unknown layer \"{0}\"")]
    UnknownLayer(String),

    /// A mandatory request field was never configured
    #[error("Request is missing required field: {0}")]
    MissingField(&'static str),

    /// The map scale could not be computed from the configured extent
    #[error("Failed to compute request scale: {0}")]
    ScaleComputation(String),

    /// The layer links no usable matrix set
    #[error("No usable tile matrix set for layer \"{layer}\"")]
    NoMatchingMatrix { layer: String },

    /// Neither the requested nor the fallback format has a REST template
    #[error("No resource template for layer \"{layer}\" in format \"{format}\"")]
    MissingFormatTemplate { layer: String, format: String },

    /// A service-level failure, including an oversized coverage
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        assert_eq!(
            RequestError::UnknownLayer("roads".to_string()).to_string(),
            "Unknown layer \"roads\""
        );
        assert_eq!(
            RequestError::MissingField("extent").to_string(),
            "Request is missing required field: extent"
        );
        assert!(RequestError::NoMatchingMatrix {
            layer: "aerial".to_string()
        }
        .to_string()
        .contains("aerial"));
    }

    #[test]
    fn test_service_errors_pass_through_transparently() {
        let inner = ServiceError::TileCountExceeded {
            required: 4096,
            limit: 256,
        };
        let err = RequestError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(matches!(err, RequestError::Service(_)));
    }
}
