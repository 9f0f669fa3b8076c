//! Error types for the catalog service layer.

use thiserror::Error;

/// Errors that can occur while serving catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A request parameter was malformed or out of range. Detected
    /// before any storage call is issued.
    #[error("invalid {field}: {value:?}")]
    Validation { field: &'static str, value: String },

    /// The requested entity does not exist (zero rows affected, or no
    /// song/details pair matched).
    #[error("not found: {entity}")]
    NotFound { entity: String },

    /// The upstream metadata provider refused or failed the request.
    #[error("upstream error from {source_name}: {message}")]
    Upstream {
        source_name: String,
        message: String,
    },

    /// A response from the upstream provider could not be parsed.
    #[error("parse error from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A storage engine failure propagated from the core layer.
    #[error("storage error: {0}")]
    Storage(#[from] cantoria_core::Error),
}

impl CatalogError {
    pub(crate) fn validation(field: &'static str, value: impl Into<String>) -> Self {
        Self::Validation {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// Returns `true` when the error was raised by request validation,
    /// before any storage call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` when the error indicates the entity was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` when the error originated at the upstream
    /// metadata provider (unreachable, non-2xx, or unparsable payload).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::Parse { .. } | Self::Request(_)
        )
    }
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
