//! Error types for tile services.

use thiserror::Error;

/// Errors surfaced by [`TileService`](crate::service::TileService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service was constructed with an unusable name or URL template.
    #[error("Invalid service configuration: {0}")]
    InvalidConfiguration(String),

    /// A coverage request would produce more tiles than the caller's cap.
    ///
    /// The count is computed from the tile-index ranges before any tile is
    /// built, so an oversized request fails without enumerating anything.
    #[error("Extent requires {required} tiles, exceeding the limit of {limit}")]
    TileCountExceeded { required: u64, limit: u64 },
}
