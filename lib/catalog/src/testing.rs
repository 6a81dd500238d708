//! Venue fixtures for unit tests

use shared::{Venue, VenueId};

/// Builder for a venue with sensible defaults; only the fields a test
/// cares about need to be set.
#[derive(Debug, Clone)]
pub struct VenueFixture {
    venue: Venue,
}

impl VenueFixture {
    pub fn new(id: &str) -> Self {
        Self {
            venue: Venue {
                id: VenueId::new(id),
                name: format!("Venue {id}"),
                description: String::new(),
                city: "Lisbon".to_string(),
                address: String::new(),
                capacity: 100,
                price_per_hour: 100.0,
                rating: 4.0,
                amenities: Default::default(),
                categories: Default::default(),
                image_url: None,
                is_favorite: false,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.venue.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.venue.description = description.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.venue.city = city.to_string();
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.venue.capacity = capacity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.venue.price_per_hour = price;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.venue.rating = rating;
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.venue.amenities = amenities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.venue.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn favorite(mut self) -> Self {
        self.venue.is_favorite = true;
        self
    }

    pub fn build(self) -> Venue {
        self.venue
    }
}

/// `count` venues with ids `v-0..v-{count-1}` and increasing prices
pub fn numbered_venues(count: usize) -> Vec<Venue> {
    (0..count)
        .map(|i| {
            VenueFixture::new(&format!("v-{i}"))
                .price(100.0 + i as f64)
                .build()
        })
        .collect()
}
