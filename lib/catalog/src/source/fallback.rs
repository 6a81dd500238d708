use async_trait::async_trait;
use shared::Venue;
use tracing::warn;

use super::{validate_collection, VenueSource};
use crate::error::{CatalogError, Result};

/// Tries each source in order and keeps the first non-empty, valid answer.
pub struct FallbackVenueSource {
    sources: Vec<Box<dyn VenueSource>>,
}

impl FallbackVenueSource {
    pub fn new(sources: Vec<Box<dyn VenueSource>>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl VenueSource for FallbackVenueSource {
    fn id(&self) -> &'static str {
        "fallback"
    }

    fn name(&self) -> &'static str {
        "Fallback"
    }

    async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        let mut any_answered = false;
        for source in &self.sources {
            match source.fetch_venues().await {
                Ok(venues) if venues.is_empty() => {
                    any_answered = true;
                }
                Ok(venues) => match validate_collection(&venues) {
                    Ok(()) => return Ok(venues),
                    Err(e) => warn!("{} returned invalid venues: {}", source.name(), e),
                },
                Err(e) => warn!("{} failed: {}", source.name(), e),
            }
        }

        if any_answered {
            Ok(Vec::new())
        } else {
            Err(CatalogError::NoSourceAvailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{JsonVenueSource, MockVenueSource};

    #[tokio::test]
    async fn test_skips_broken_source() {
        let source = FallbackVenueSource::new(vec![
            Box::new(JsonVenueSource::from_json("not json")),
            Box::new(MockVenueSource::new(5, 3)),
        ]);
        assert_eq!(source.fetch_venues().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_skips_invalid_and_empty_sources() {
        let duplicated = r#"[
            {"id":"a","name":"A","city":"Porto","capacity":1,"pricePerHour":1,"rating":1},
            {"id":"a","name":"B","city":"Porto","capacity":1,"pricePerHour":1,"rating":1}
        ]"#;
        let source = FallbackVenueSource::new(vec![
            Box::new(JsonVenueSource::from_json("[]")),
            Box::new(JsonVenueSource::from_json(duplicated)),
            Box::new(MockVenueSource::new(2, 3)),
        ]);
        assert_eq!(source.fetch_venues().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_all_failing() {
        let source = FallbackVenueSource::new(vec![Box::new(JsonVenueSource::from_json("oops"))]);
        assert!(matches!(
            source.fetch_venues().await,
            Err(CatalogError::NoSourceAvailable)
        ));

        let source = FallbackVenueSource::new(vec![Box::new(JsonVenueSource::from_json("[]"))]);
        assert!(source.fetch_venues().await.unwrap().is_empty());
    }
}
