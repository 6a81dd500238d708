//! The query pipeline: filter → sort → paginate.
//!
//! [`apply`] is a pure function of the collection and the state. It never
//! mutates its input and has no failure path: no matches and out-of-range
//! pages are empty results.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use shared::{SortKey, Venue};
use tracing::debug;

use crate::filter::{FilterState, RangeFilter};

/// One page of results plus the pre-pagination match count
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub items: Vec<Venue>,
    pub total_matched: usize,
    pub page: usize,
    pub page_size: usize,
}

impl QueryResult {
    /// `ceil(total_matched / page_size)`, 0 when the page size is 0
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_matched.div_ceil(self.page_size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 1-based positions of the first and last shown venue within all
    /// matches, for "Showing 10–18 of 20".
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

struct Criteria<'a> {
    needle: String,
    location: Option<&'a str>,
    capacity: RangeFilter<u32>,
    price: RangeFilter<f64>,
    amenities: &'a BTreeSet<String>,
}

impl<'a> Criteria<'a> {
    fn new(state: &'a FilterState) -> Self {
        Self {
            needle: state.normalized_query(),
            location: state.location(),
            capacity: state.capacity_range(),
            price: state.price_range(),
            amenities: state.amenities(),
        }
    }

    fn admits(&self, venue: &Venue) -> bool {
        venue.matches_text(&self.needle)
            && self.location.map_or(true, |city| venue.city == city)
            && self.capacity.contains(venue.capacity)
            && self.price.contains(venue.price_per_hour)
            && venue.has_all_amenities(self.amenities)
    }
}

/// True when `venue` passes every filter of `state`
pub fn matches(venue: &Venue, state: &FilterState) -> bool {
    Criteria::new(state).admits(venue)
}

// Adding 0.0 folds -0.0 into 0.0, so equal amounts compare equal.
fn cmp_amount(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Ordering of two venues under `sort`
pub fn compare(sort: SortKey, a: &Venue, b: &Venue) -> Ordering {
    match sort {
        SortKey::PriceLow => cmp_amount(a.price_per_hour, b.price_per_hour),
        SortKey::PriceHigh => cmp_amount(b.price_per_hour, a.price_per_hour),
        SortKey::Rating => cmp_amount(b.rating, a.rating),
        SortKey::Capacity => b.capacity.cmp(&a.capacity),
        SortKey::Recommended => cmp_amount(b.rating, a.rating)
            .then_with(|| cmp_amount(a.price_per_hour, b.price_per_hour)),
    }
}

/// Matching venues in display order, before pagination.
/// Ties keep their collection order.
pub fn filter_and_sort<'v>(collection: &'v [Venue], state: &FilterState) -> Vec<&'v Venue> {
    let criteria = Criteria::new(state);
    let mut matched: Vec<&Venue> = collection.iter().filter(|v| criteria.admits(v)).collect();
    let sort = state.sort();
    matched.sort_by(|a, b| compare(sort, a, b));
    matched
}

/// The `[(page-1)*page_size, page*page_size)` slice of `items`.
/// Page 0, a zero page size and pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Runs the pipeline and returns the current page.
pub fn apply(collection: &[Venue], state: &FilterState) -> QueryResult {
    let matched = filter_and_sort(collection, state);
    let items: Vec<Venue> = paginate(&matched, state.page(), state.page_size())
        .iter()
        .map(|venue| (*venue).clone())
        .collect();

    debug!(
        total = collection.len(),
        matched = matched.len(),
        page = state.page(),
        shown = items.len(),
        "Catalog query recomputed"
    );

    QueryResult {
        items,
        total_matched: matched.len(),
        page: state.page(),
        page_size: state.page_size(),
    }
}

/// The `count` best venues by recommendation
pub fn featured(collection: &[Venue], count: usize) -> Vec<Venue> {
    let mut ranked: Vec<&Venue> = collection.iter().collect();
    ranked.sort_by(|a, b| compare(SortKey::Recommended, a, b));
    ranked.into_iter().take(count).cloned().collect()
}

/// Page numbers shown by a pagination control: at most `width` numbers,
/// centred on `current` and clipped to `[1, total]`.
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(width / 2).max(1);
    let mut end = start + width - 1;
    if end > total {
        end = total;
        start = total - width + 1;
    }
    (start..=end).collect()
}
