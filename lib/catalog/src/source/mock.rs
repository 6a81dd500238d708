use std::collections::BTreeSet;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use shared::{Venue, VenueId};

use super::VenueSource;
use crate::error::Result;

const CITIES: &[&str] = &["Lisbon", "Porto", "Madrid", "Barcelona", "Berlin", "Amsterdam"];

const NAME_STYLES: &[&str] = &[
    "Grand", "Urban", "Rustic", "Skyline", "Garden", "Harbor", "Velvet", "Copper", "Ivory",
    "Lantern",
];

const NAME_KINDS: &[&str] = &[
    "Hall", "Loft", "Terrace", "Pavilion", "Studio", "Ballroom", "Gallery", "Warehouse",
];

const AMENITIES: &[&str] = &[
    "WiFi",
    "Parking",
    "Catering",
    "AV Equipment",
    "Stage",
    "Outdoor Space",
    "Wheelchair Access",
    "Bar",
    "Kitchen",
    "Air Conditioning",
];

const CATEGORIES: &[&str] = &[
    "Wedding",
    "Corporate",
    "Conference",
    "Birthday",
    "Concert",
    "Workshop",
    "Exhibition",
];

const DESCRIPTIONS: &[&str] = &[
    "A bright, flexible space suited to receptions and launches.",
    "Exposed brick, high ceilings and room for a dance floor.",
    "An intimate setting with natural light and a private entrance.",
    "Modern interiors with built-in sound and lighting rigs.",
    "A calm retreat with greenery, ideal for daytime gatherings.",
];

/// Deterministic placeholder venues.
///
/// The same `(count, seed)` pair always yields the same records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockVenueSource {
    count: usize,
    seed: u64,
}

impl MockVenueSource {
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    pub fn generate(&self) -> Vec<Venue> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count).map(|index| random_venue(&mut rng, index)).collect()
    }
}

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

fn pick_many(rng: &mut StdRng, values: &[&str], min: usize, max: usize) -> BTreeSet<String> {
    let amount = rng.random_range(min..=max);
    values
        .choose_multiple(rng, amount)
        .map(|value| value.to_string())
        .collect()
}

fn random_venue(rng: &mut StdRng, index: usize) -> Venue {
    let style = pick(rng, NAME_STYLES);
    let kind = pick(rng, NAME_KINDS);
    let city = pick(rng, CITIES);
    let capacity = rng.random_range(2..=50u32) * 10;
    let price_per_hour = f64::from(rng.random_range(10..=300u32) * 5);
    let rating = f64::from(rng.random_range(30..=50u32)) / 10.0;

    Venue {
        id: VenueId::new(format!("mock-{index:03}")),
        name: format!("The {style} {kind}"),
        description: pick(rng, DESCRIPTIONS).to_string(),
        city: city.to_string(),
        address: format!("{} {} Street, {city}", rng.random_range(1..=200u32), style),
        capacity,
        price_per_hour,
        rating,
        amenities: pick_many(rng, AMENITIES, 2, 6),
        categories: pick_many(rng, CATEGORIES, 1, 3),
        image_url: Some(format!("https://picsum.photos/seed/venuely-{index}/640/420")),
        is_favorite: false,
    }
}

#[async_trait]
impl VenueSource for MockVenueSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn name(&self) -> &'static str {
        "Placeholder venues"
    }

    async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.generate())
    }
}
