use shared::{ParseSortKeyError, VenueId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures at the edges of the catalog: loading records and addressing
/// them by id. Filtering itself never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Venue '{0}' not found")]
    VenueNotFound(VenueId),

    #[error("Duplicate venue id '{0}'")]
    DuplicateId(VenueId),

    #[error("Invalid venue '{id}': {reason}")]
    InvalidVenue { id: VenueId, reason: String },

    #[error("Failed to parse venue data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Venue source '{source_id}' failed: {message}")]
    Source { source_id: String, message: String },

    #[error("No venue source returned any venues")]
    NoSourceAvailable,
}

impl From<ParseSortKeyError> for CatalogError {
    fn from(err: ParseSortKeyError) -> Self {
        CatalogError::InvalidSortKey(err.0)
    }
}

impl CatalogError {
    pub fn invalid(id: &VenueId, reason: impl Into<String>) -> Self {
        CatalogError::InvalidVenue {
            id: id.clone(),
            reason: reason.into(),
        }
    }
}
