//! Venue data sources.
//!
//! The collection is fetched once when the catalog view mounts. The query
//! pipeline never sees a source, only the validated collection it produced.

mod fallback;
mod json;
mod mock;

use std::collections::HashSet;

use async_trait::async_trait;
use shared::Venue;
use tracing::info;

use crate::config::{CatalogConfig, SourceKind};
use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;

pub use fallback::FallbackVenueSource;
pub use json::JsonVenueSource;
pub use mock::MockVenueSource;

#[async_trait]
pub trait VenueSource: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    async fn fetch_venues(&self) -> Result<Vec<Venue>>;
}

/// Builds the source selected by `config`.
pub fn source_from_config(config: &CatalogConfig) -> Box<dyn VenueSource> {
    let mock = MockVenueSource::new(config.mock_count, config.mock_seed);
    match config.source {
        SourceKind::Bundled => Box::new(JsonVenueSource::bundled()),
        SourceKind::Mock => Box::new(mock),
        SourceKind::BundledThenMock => Box::new(FallbackVenueSource::new(vec![
            Box::new(JsonVenueSource::bundled()),
            Box::new(mock),
        ])),
    }
}

/// Fetches the collection once and wraps it in a store.
///
/// # Errors
/// Returns the source's error, or a validation error for bad records.
pub async fn load_store(source: &dyn VenueSource, page_size: usize) -> Result<CatalogStore> {
    let venues = source.fetch_venues().await?;
    info!("Loaded {} venues from {}", venues.len(), source.name());
    CatalogStore::new(venues, page_size)
}

/// Checks the collection invariants: unique non-empty ids, non-negative
/// finite prices and ratings within `[0, 5]`.
///
/// # Errors
/// Returns the first violation found.
pub fn validate_collection(venues: &[Venue]) -> Result<()> {
    let mut seen = HashSet::with_capacity(venues.len());
    for venue in venues {
        if venue.id.is_empty() {
            return Err(CatalogError::invalid(&venue.id, "id must not be empty"));
        }
        if !seen.insert(&venue.id) {
            return Err(CatalogError::DuplicateId(venue.id.clone()));
        }
        if !venue.price_per_hour.is_finite() || venue.price_per_hour < 0.0 {
            return Err(CatalogError::invalid(
                &venue.id,
                format!("price per hour {} is not a non-negative amount", venue.price_per_hour),
            ));
        }
        if !(0.0..=5.0).contains(&venue.rating) {
            return Err(CatalogError::invalid(
                &venue.id,
                format!("rating {} is outside [0, 5]", venue.rating),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VenueFixture;

    #[test]
    fn test_validate_accepts_good_collection() {
        let venues = vec![
            VenueFixture::new("a").rating(0.0).price(0.0).build(),
            VenueFixture::new("b").rating(5.0).build(),
        ];
        assert!(validate_collection(&venues).is_ok());
        assert!(validate_collection(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let negative = [VenueFixture::new("a").price(-1.0).build()];
        assert!(matches!(
            validate_collection(&negative),
            Err(CatalogError::InvalidVenue { .. })
        ));

        let nan = [VenueFixture::new("a").price(f64::NAN).build()];
        assert!(validate_collection(&nan).is_err());

        let rating = [VenueFixture::new("a").rating(5.5).build()];
        assert!(validate_collection(&rating).is_err());

        let blank = [VenueFixture::new(" ").build()];
        assert!(validate_collection(&blank).is_err());
    }

    #[tokio::test]
    async fn test_load_store_from_mock() {
        let source = MockVenueSource::new(12, 1);
        let store = load_store(&source, 9).await.unwrap();
        assert_eq!(store.len(), 12);
        assert_eq!(store.view().items.len(), 9);
    }

    #[tokio::test]
    async fn test_source_from_config() {
        let config = CatalogConfig {
            source: SourceKind::Mock,
            mock_count: 7,
            ..CatalogConfig::default()
        };
        let source = source_from_config(&config);
        assert_eq!(source.id(), "mock");
        assert_eq!(source.fetch_venues().await.unwrap().len(), 7);

        let source = source_from_config(&CatalogConfig::default());
        assert_eq!(source.id(), "fallback");
        assert!(!source.fetch_venues().await.unwrap().is_empty());
    }
}
