use catalog::query::{filter_and_sort, matches};
use catalog::{apply, toggle_favorite, FilterState, MockVenueSource, SortKey, Venue, VenueId};

fn collection() -> Vec<Venue> {
    MockVenueSource::new(60, 2024).generate()
}

fn states() -> Vec<FilterState> {
    let base = FilterState::new(9);
    vec![
        base.clone(),
        base.clone().with_search("the"),
        base.clone().with_location(Some("Porto".into())),
        base.clone().with_min_capacity(100).with_max_capacity(Some(300)),
        base.clone().with_min_price(200.0).with_max_price(Some(900.0)),
        base.clone().with_amenities(["WiFi"]),
        base.clone().with_sort(SortKey::PriceLow).with_page(2),
        base.clone().with_sort(SortKey::Capacity).with_page(7),
        base.with_search("hall")
            .with_amenities(["Bar", "Parking"])
            .with_sort(SortKey::Rating),
    ]
}

#[test]
fn total_matched_counts_the_pre_pagination_set() {
    let venues = collection();
    for state in states() {
        let result = apply(&venues, &state);
        let expected = venues.iter().filter(|v| matches(v, &state)).count();
        assert_eq!(result.total_matched, expected);
        assert_eq!(filter_and_sort(&venues, &state).len(), expected);
        assert!(result.items.len() <= state.page_size());
    }
}

#[test]
fn apply_is_idempotent() {
    let venues = collection();
    for state in states() {
        assert_eq!(apply(&venues, &state), apply(&venues, &state));
    }
}

#[test]
fn tightening_a_bound_never_increases_matches() {
    let venues = collection();
    let mut previous = usize::MAX;
    for min in (0..=500u32).step_by(50) {
        let state = FilterState::default().with_min_capacity(min);
        let matched = apply(&venues, &state).total_matched;
        assert!(matched <= previous, "min capacity {min} matched more");
        previous = matched;
    }

    let mut previous = usize::MAX;
    for max in (0..=1500u32).rev().step_by(100) {
        let state = FilterState::default().with_max_price(Some(f64::from(max)));
        let matched = apply(&venues, &state).total_matched;
        assert!(matched <= previous, "max price {max} matched more");
        previous = matched;
    }
}

#[test]
fn price_low_is_non_decreasing() {
    let venues = collection();
    let state = FilterState::default().with_sort(SortKey::PriceLow);
    let sorted = filter_and_sort(&venues, &state);
    assert!(sorted
        .windows(2)
        .all(|pair| pair[0].price_per_hour <= pair[1].price_per_hour));
}

#[test]
fn recommended_orders_by_rating_then_price() {
    let venues = collection();
    let sorted = filter_and_sort(&venues, &FilterState::default());
    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.rating >= b.rating);
        if a.rating == b.rating {
            assert!(a.price_per_hour <= b.price_per_hour);
        }
    }
}

#[test]
fn amenity_selection_requires_every_tag() {
    let venues = collection();
    let state = FilterState::default().with_amenities(["WiFi", "Parking"]);
    let matched = filter_and_sort(&venues, &state);
    assert!(matched
        .iter()
        .all(|v| v.has_amenity("WiFi") && v.has_amenity("Parking")));

    let wifi_only = venues
        .iter()
        .filter(|v| v.has_amenity("WiFi") && !v.has_amenity("Parking"))
        .count();
    let with_wifi = apply(&venues, &FilterState::default().with_amenities(["WiFi"])).total_matched;
    assert_eq!(with_wifi, matched.len() + wifi_only);
}

#[test]
fn pages_cover_every_match_exactly_once() {
    let venues = collection();
    let state = FilterState::new(9).with_sort(SortKey::Capacity);
    let first = apply(&venues, &state);

    let mut seen: Vec<VenueId> = Vec::new();
    for page in 1..=first.total_pages() + 1 {
        let result = apply(&venues, &state.clone().with_page(page));
        seen.extend(result.items.into_iter().map(|v| v.id));
    }

    let expected: Vec<VenueId> = filter_and_sort(&venues, &state)
        .into_iter()
        .map(|v| v.id.clone())
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn toggle_preserves_order_and_length() {
    let venues = collection();
    let target = venues[17].id.clone();
    let toggled = toggle_favorite(&venues, &target);

    assert_eq!(toggled.len(), venues.len());
    for (before, after) in venues.iter().zip(&toggled) {
        assert_eq!(before.id, after.id);
        if before.id == target {
            assert_ne!(before.is_favorite, after.is_favorite);
        } else {
            assert_eq!(before, after);
        }
    }

    assert_eq!(toggle_favorite(&venues, &VenueId::new("ghost")), venues);
}
