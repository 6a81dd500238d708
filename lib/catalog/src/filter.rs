//! Filter/sort/page state of a browsing session.
//!
//! [`FilterState`] is a value: every edit consumes it and returns the next
//! state, and every edit other than a page change sends the user back to
//! page 1. Range bounds are clamped on edit so `min <= max` holds before
//! the query pipeline ever sees the state.

use std::collections::BTreeSet;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use shared::SortKey;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;

/// Numeric type usable as a range bound
pub trait RangeValue: Copy + PartialOrd + Debug {
    /// Smallest value a minimum bound may take
    const FLOOR: Self;

    /// Rejects values that cannot be ordered (NaN)
    fn is_orderable(self) -> bool {
        true
    }
}

impl RangeValue for u32 {
    const FLOOR: Self = 0;
}

impl RangeValue for f64 {
    const FLOOR: Self = 0.0;

    fn is_orderable(self) -> bool {
        !self.is_nan()
    }
}

/// Inclusive `[min, max]` bound; a missing `max` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawRange<T>",
    bound(deserialize = "T: RangeValue + Deserialize<'de>")
)]
pub struct RangeFilter<T> {
    min: T,
    max: Option<T>,
}

impl<T: RangeValue> Default for RangeFilter<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: RangeValue> RangeFilter<T> {
    pub fn unbounded() -> Self {
        Self {
            min: T::FLOOR,
            max: None,
        }
    }

    /// Builds a bounded range; the arguments may come in either order.
    pub fn new(a: T, b: T) -> Self {
        let (low, high) = if b < a { (b, a) } else { (a, b) };
        Self::unbounded().with_max(high).with_min(low)
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> Option<T> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none() && self.min == T::FLOOR
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && self.max.map_or(true, |max| value <= max)
    }

    /// Sets the minimum, clamped to `[FLOOR, max]`.
    #[must_use]
    pub fn with_min(mut self, value: T) -> Self {
        if !value.is_orderable() {
            return self;
        }

        let mut min = if value < T::FLOOR { T::FLOOR } else { value };
        if let Some(max) = self.max {
            if min > max {
                min = max;
            }
        }
        self.min = min;
        self
    }

    /// Sets the maximum, clamped to `[min, +inf)`.
    #[must_use]
    pub fn with_max(mut self, value: T) -> Self {
        if !value.is_orderable() {
            return self;
        }

        self.max = Some(if value < self.min { self.min } else { value });
        self
    }

    #[must_use]
    pub fn without_max(mut self) -> Self {
        self.max = None;
        self
    }
}

/// Bounds as they appear on the wire, before clamping
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawRange<T> {
    #[serde(default)]
    min: Option<T>,
    #[serde(default)]
    max: Option<T>,
}

impl<T: RangeValue> From<RawRange<T>> for RangeFilter<T> {
    fn from(raw: RawRange<T>) -> Self {
        match (raw.min, raw.max) {
            (Some(min), Some(max)) => Self::new(min, max),
            (None, Some(max)) => Self::unbounded().with_max(max),
            (Some(min), None) => Self::unbounded().with_min(min),
            (None, None) => Self::unbounded(),
        }
    }
}

/// A single user edit of the filter state
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Search(String),
    Location(Option<String>),
    MinCapacity(u32),
    MaxCapacity(Option<u32>),
    MinPrice(f64),
    MaxPrice(Option<f64>),
    ToggleAmenity(String),
    Sort(SortKey),
    Page(usize),
    Reset,
}

impl FilterUpdate {
    /// A sort change from its wire token (`price_low`, `rating`, ...).
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidSortKey` for an unknown token.
    pub fn sort_token(token: &str) -> Result<Self> {
        Ok(FilterUpdate::Sort(token.parse()?))
    }

    /// True for edits that change which venues match or how they are ordered
    pub fn resets_page(&self) -> bool {
        !matches!(self, FilterUpdate::Page(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    search_query: String,
    location: Option<String>,
    capacity: RangeFilter<u32>,
    price: RangeFilter<f64>,
    amenities: BTreeSet<String>,
    sort: SortKey,
    page: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            location: None,
            capacity: RangeFilter::unbounded(),
            price: RangeFilter::unbounded(),
            amenities: BTreeSet::new(),
            sort: SortKey::default(),
            page: 1,
            page_size,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Lowercased, trimmed query; empty means no text constraint
    pub fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }

    /// Selected city, `None` when no location constraint applies
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|city| !city.is_empty())
    }

    pub fn capacity_range(&self) -> RangeFilter<u32> {
        self.capacity
    }

    pub fn price_range(&self) -> RangeFilter<f64> {
        self.price
    }

    pub fn amenities(&self) -> &BTreeSet<String> {
        &self.amenities
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// 1-indexed page number
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True when any constraint narrows the collection (sort and page excluded)
    pub fn has_active_filters(&self) -> bool {
        !self.normalized_query().is_empty()
            || self.location().is_some()
            || !self.capacity.is_unbounded()
            || !self.price.is_unbounded()
            || !self.amenities.is_empty()
    }

    fn first_page(mut self) -> Self {
        self.page = 1;
        self
    }

    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self.first_page()
    }

    #[must_use]
    pub fn with_location(mut self, city: Option<String>) -> Self {
        self.location = city.filter(|c| !c.is_empty());
        self.first_page()
    }

    #[must_use]
    pub fn with_min_capacity(mut self, min: u32) -> Self {
        self.capacity = self.capacity.with_min(min);
        self.first_page()
    }

    #[must_use]
    pub fn with_max_capacity(mut self, max: Option<u32>) -> Self {
        self.capacity = match max {
            Some(max) => self.capacity.with_max(max),
            None => self.capacity.without_max(),
        };
        self.first_page()
    }

    #[must_use]
    pub fn with_min_price(mut self, min: f64) -> Self {
        self.price = self.price.with_min(min);
        self.first_page()
    }

    #[must_use]
    pub fn with_max_price(mut self, max: Option<f64>) -> Self {
        self.price = match max {
            Some(max) => self.price.with_max(max),
            None => self.price.without_max(),
        };
        self.first_page()
    }

    /// Adds the amenity to the required set, or removes it if already required.
    #[must_use]
    pub fn with_amenity_toggled(mut self, amenity: impl Into<String>) -> Self {
        let amenity = amenity.into();
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
        self.first_page()
    }

    #[must_use]
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self.first_page()
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self.first_page()
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Clears every filter and the sort, keeping the page size.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.page_size)
    }

    /// Produces the state that follows `update`.
    #[must_use]
    pub fn apply(self, update: FilterUpdate) -> Self {
        match update {
            FilterUpdate::Search(query) => self.with_search(query),
            FilterUpdate::Location(city) => self.with_location(city),
            FilterUpdate::MinCapacity(min) => self.with_min_capacity(min),
            FilterUpdate::MaxCapacity(max) => self.with_max_capacity(max),
            FilterUpdate::MinPrice(min) => self.with_min_price(min),
            FilterUpdate::MaxPrice(max) => self.with_max_price(max),
            FilterUpdate::ToggleAmenity(amenity) => self.with_amenity_toggled(amenity),
            FilterUpdate::Sort(sort) => self.with_sort(sort),
            FilterUpdate::Page(page) => self.with_page(page),
            FilterUpdate::Reset => self.reset(),
        }
    }
}
