use std::borrow::Cow;

use async_trait::async_trait;
use shared::Venue;

use super::VenueSource;
use crate::error::{CatalogError, Result};

const BUNDLED_VENUES: &str = include_str!("../../data/venues.json");

/// Venues decoded from a JSON array
#[derive(Debug, Clone)]
pub struct JsonVenueSource {
    json: Cow<'static, str>,
}

impl JsonVenueSource {
    pub fn from_json(json: impl Into<Cow<'static, str>>) -> Self {
        Self { json: json.into() }
    }

    /// The dataset shipped with the crate
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_VENUES)
    }

    /// # Errors
    /// Returns `CatalogError::Parse` if the document is not a venue array.
    pub fn parse(&self) -> Result<Vec<Venue>> {
        Ok(serde_json::from_str(&self.json)?)
    }
}

#[async_trait]
impl VenueSource for JsonVenueSource {
    fn id(&self) -> &'static str {
        "json"
    }

    fn name(&self) -> &'static str {
        "JSON dataset"
    }

    async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        self.parse().map_err(|e| CatalogError::Source {
            source_id: self.id().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::validate_collection;

    #[test]
    fn test_bundled_dataset_is_valid() {
        let venues = JsonVenueSource::bundled().parse().unwrap();
        assert!(venues.len() >= 10);
        validate_collection(&venues).unwrap();
        assert!(venues.iter().all(|v| !v.is_favorite));
    }

    #[test]
    fn test_malformed_json() {
        let source = JsonVenueSource::from_json("{\"not\": \"an array\"}");
        assert!(matches!(source.parse(), Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_failure_names_the_source() {
        let source = JsonVenueSource::from_json("[{\"id\": 1}]");
        match source.fetch_venues().await {
            Err(CatalogError::Source { source_id, .. }) => assert_eq!(source_id, "json"),
            other => panic!("expected a source error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_from_string() {
        let source = JsonVenueSource::from_json(
            r#"[{"id":"x","name":"Loft","city":"Porto","capacity":30,"pricePerHour":75,"rating":4.2,"amenities":["WiFi"]}]"#
                .to_string(),
        );
        let venues = source.fetch_venues().await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].price_per_hour, 75.0);
        assert!(venues[0].has_amenity("WiFi"));
    }
}
