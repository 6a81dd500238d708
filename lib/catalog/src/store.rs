//! The catalog store: the loaded collection, the current filter state and
//! the last computed page.

use shared::{Venue, VenueId};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::facets::Facets;
use crate::favorites;
use crate::filter::{FilterState, FilterUpdate};
use crate::query::{self, QueryResult};
use crate::source::validate_collection;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    venues: Vec<Venue>,
    state: FilterState,
    view: QueryResult,
    facets: Facets,
}

impl CatalogStore {
    /// Takes ownership of a validated collection and computes the first page.
    ///
    /// # Errors
    /// Returns an error if two venues share an id or a record is out of range.
    pub fn new(venues: Vec<Venue>, page_size: usize) -> Result<Self> {
        validate_collection(&venues)?;
        let state = FilterState::new(page_size);
        let view = query::apply(&venues, &state);
        let facets = Facets::from_venues(&venues);

        Ok(Self {
            venues,
            state,
            view,
            facets,
        })
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &QueryResult {
        &self.view
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn get(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == *id)
    }

    pub fn favorite_count(&self) -> usize {
        favorites::favorite_count(&self.venues)
    }

    pub fn featured(&self, count: usize) -> Vec<Venue> {
        query::featured(&self.venues, count)
    }

    /// Applies a state-change event and recomputes the visible page.
    pub fn dispatch(&mut self, update: FilterUpdate) {
        debug!(?update, "Filter update");
        let state = std::mem::take(&mut self.state).apply(update);
        self.replace_state(state);
    }

    /// Replaces the whole filter state and recomputes the visible page.
    pub fn replace_state(&mut self, state: FilterState) {
        self.state = state;
        self.view = query::apply(&self.venues, &self.state);
    }

    /// Flips the favorite flag of one venue.
    ///
    /// The record keeps its position, and the visible page is patched in
    /// place rather than recomputed.
    ///
    /// # Errors
    /// Returns `CatalogError::VenueNotFound` if no venue has this id.
    pub fn toggle_favorite(&mut self, id: &VenueId) -> Result<bool> {
        let venue = self
            .venues
            .iter_mut()
            .find(|venue| venue.id == *id)
            .ok_or_else(|| CatalogError::VenueNotFound(id.clone()))?;
        venue.is_favorite = !venue.is_favorite;
        let is_favorite = venue.is_favorite;

        if let Some(shown) = self.view.items.iter_mut().find(|venue| venue.id == *id) {
            shown.is_favorite = is_favorite;
        }
        Ok(is_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{numbered_venues, VenueFixture};
    use shared::SortKey;

    #[test]
    fn test_new_computes_first_page() {
        let store = CatalogStore::new(numbered_venues(20), 9).unwrap();
        assert_eq!(store.len(), 20);
        assert_eq!(store.view().items.len(), 9);
        assert_eq!(store.view().total_matched, 20);
        assert_eq!(store.view().total_pages(), 3);
        assert_eq!(store.state().page(), 1);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let venues = vec![VenueFixture::new("a").build(), VenueFixture::new("a").build()];
        let err = CatalogStore::new(venues, 9).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn test_dispatch_recomputes_and_resets_page() {
        let mut store = CatalogStore::new(numbered_venues(20), 9).unwrap();
        store.dispatch(FilterUpdate::Page(3));
        assert_eq!(store.view().items.len(), 2);

        store.dispatch(FilterUpdate::MaxPrice(Some(104.0)));
        assert_eq!(store.state().page(), 1);
        assert_eq!(store.view().total_matched, 5);
        assert_eq!(store.view().total_pages(), 1);
    }

    #[test]
    fn test_replace_state_wholesale() {
        let mut store = CatalogStore::new(numbered_venues(5), 9).unwrap();
        let state = FilterState::new(2).with_sort(SortKey::PriceHigh).with_page(2);
        store.replace_state(state.clone());

        assert_eq!(store.state(), &state);
        let ids: Vec<_> = store.view().items.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v-2", "v-1"]);
    }

    #[test]
    fn test_toggle_favorite_patches_view_in_place() {
        let mut store = CatalogStore::new(numbered_venues(4), 9).unwrap();
        let order_before: Vec<_> = store.view().items.iter().map(|v| v.id.clone()).collect();

        let id = VenueId::new("v-2");
        assert_eq!(store.toggle_favorite(&id).unwrap(), true);
        assert!(store.get(&id).unwrap().is_favorite);
        assert!(store.view().items[2].is_favorite);
        assert_eq!(store.favorite_count(), 1);

        let order_after: Vec<_> = store.view().items.iter().map(|v| v.id.clone()).collect();
        assert_eq!(order_before, order_after);

        assert_eq!(store.toggle_favorite(&id).unwrap(), false);
        assert_eq!(store.favorite_count(), 0);
    }

    #[test]
    fn test_toggle_favorite_unknown_id() {
        let mut store = CatalogStore::new(numbered_venues(3), 9).unwrap();
        let before = store.clone();

        let err = store.toggle_favorite(&VenueId::new("nope")).unwrap_err();
        assert!(matches!(err, CatalogError::VenueNotFound(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::new(Vec::new(), 9).unwrap();
        assert!(store.is_empty());
        assert!(store.view().is_empty());
        assert!(store.facets().is_empty());
        assert!(store.featured(3).is_empty());
    }
}
