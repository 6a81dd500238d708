//! Choices offered by the filter panel, derived from the loaded collection.

use itertools::{Itertools, MinMaxResult};
use shared::Venue;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Facets {
    /// Distinct cities, sorted
    pub cities: Vec<String>,
    /// Distinct amenity tags, sorted
    pub amenities: Vec<String>,
    /// Distinct category labels, sorted
    pub categories: Vec<String>,
    /// Smallest and largest capacity present
    pub capacity_bounds: Option<(u32, u32)>,
    /// Cheapest and most expensive hourly price present
    pub price_bounds: Option<(f64, f64)>,
    /// Mean rating over the whole collection
    pub average_rating: Option<f64>,
}

impl Facets {
    pub fn from_venues(venues: &[Venue]) -> Self {
        Self {
            cities: venues
                .iter()
                .map(|v| v.city.clone())
                .filter(|city| !city.is_empty())
                .sorted()
                .dedup()
                .collect(),
            amenities: venues
                .iter()
                .flat_map(|v| v.amenities.iter().cloned())
                .sorted()
                .dedup()
                .collect(),
            categories: venues
                .iter()
                .flat_map(|v| v.categories.iter().cloned())
                .sorted()
                .dedup()
                .collect(),
            capacity_bounds: bounds(venues.iter().map(|v| v.capacity).minmax()),
            price_bounds: bounds(
                venues
                    .iter()
                    .map(|v| v.price_per_hour)
                    .minmax_by(|a, b| a.total_cmp(b)),
            ),
            average_rating: (!venues.is_empty())
                .then(|| venues.iter().map(|v| v.rating).sum::<f64>() / venues.len() as f64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.capacity_bounds.is_none()
    }
}

fn bounds<T: Copy>(result: MinMaxResult<T>) -> Option<(T, T)> {
    match result {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(only) => Some((only, only)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}
