//! Display helpers for venue fields

use shared::Venue;

/// Whole amounts print without decimals: `$650`, `$87.50`
pub fn price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

pub fn price_per_hour(amount: f64) -> String {
    format!("{} / hour", price(amount))
}

pub fn capacity(guests: u32) -> String {
    match guests {
        1 => "1 guest".to_string(),
        n => format!("Up to {n} guests"),
    }
}

pub fn rating(score: f64) -> String {
    format!("{score:.1}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five stars for a score in `[0, 5]`, rounded to the nearest half star
pub fn stars(score: f64) -> [Star; 5] {
    let halves = (score.clamp(0.0, 5.0) * 2.0).round() as usize;
    std::array::from_fn(|i| {
        let filled = halves.saturating_sub(i * 2);
        match filled {
            0 => Star::Empty,
            1 => Star::Half,
            _ => Star::Full,
        }
    })
}

/// The first `limit` amenities plus how many were left out
pub fn amenity_preview(venue: &Venue, limit: usize) -> (Vec<String>, usize) {
    let shown: Vec<String> = venue.amenities.iter().take(limit).cloned().collect();
    let hidden = venue.amenities.len() - shown.len();
    (shown, hidden)
}

/// "Showing 10–18 of 20 venues"
pub fn results_summary(shown: Option<(usize, usize)>, total: usize) -> String {
    match (shown, total) {
        (_, 0) => "No venues match your filters".to_string(),
        (Some((first, last)), 1) if first == last => "Showing 1 venue".to_string(),
        (Some((first, last)), total) => format!("Showing {first}–{last} of {total} venues"),
        (None, total) => format!("{total} venues match, but this page is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::VenueId;

    #[test]
    fn test_price() {
        assert_eq!(price(650.0), "$650");
        assert_eq!(price(87.5), "$87.50");
        assert_eq!(price_per_hour(120.0), "$120 / hour");
    }

    #[test]
    fn test_stars() {
        use Star::*;
        assert_eq!(stars(5.0), [Full; 5]);
        assert_eq!(stars(0.0), [Empty; 5]);
        assert_eq!(stars(3.5), [Full, Full, Full, Half, Empty]);
        assert_eq!(stars(4.3), [Full, Full, Full, Full, Half]);
        assert_eq!(stars(4.2), [Full, Full, Full, Full, Empty]);
    }

    #[test]
    fn test_amenity_preview() {
        let venue = Venue {
            id: VenueId::new("a"),
            name: "A".to_string(),
            description: String::new(),
            city: "Porto".to_string(),
            address: String::new(),
            capacity: 10,
            price_per_hour: 10.0,
            rating: 4.0,
            amenities: ["Bar", "Kitchen", "Parking", "WiFi"]
                .into_iter()
                .map(String::from)
                .collect(),
            categories: Default::default(),
            image_url: None,
            is_favorite: false,
        };

        let (shown, hidden) = amenity_preview(&venue, 3);
        assert_eq!(shown, vec!["Bar", "Kitchen", "Parking"]);
        assert_eq!(hidden, 1);
        assert_eq!(amenity_preview(&venue, 10).1, 0);
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(None, 0), "No venues match your filters");
        assert_eq!(results_summary(Some((1, 1)), 1), "Showing 1 venue");
        assert_eq!(results_summary(Some((10, 18)), 20), "Showing 10–18 of 20 venues");
        assert_eq!(results_summary(None, 20), "20 venues match, but this page is empty");
    }

    #[test]
    fn test_capacity() {
        assert_eq!(capacity(1), "1 guest");
        assert_eq!(capacity(250), "Up to 250 guests");
    }
}
