use catalog::{CatalogError, CatalogStore, Facets, FilterState, FilterUpdate, QueryResult};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::{Venue, VenueId};

/// Handle to the catalog store shared through the component tree.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    store: Signal<Option<CatalogStore>>,
    error: Signal<Option<String>>,
}

impl Catalog {
    pub fn new(store: Signal<Option<CatalogStore>>, error: Signal<Option<String>>) -> Self {
        Self { store, error }
    }

    /// Installs the result of the one-shot venue load.
    pub fn load(&mut self, result: Result<CatalogStore, CatalogError>) {
        match result {
            Ok(store) => {
                info!("Catalog ready with {} venues", store.len());
                self.store.set(Some(store));
                self.error.set(None);
            }
            Err(e) => {
                warn!("Failed to load venues: {e}");
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.store.read().is_some()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    /// Applies a filter edit; the visible page is recomputed immediately.
    pub fn dispatch(&mut self, update: FilterUpdate) {
        if let Some(store) = self.store.write().as_mut() {
            store.dispatch(update);
        }
    }

    pub fn toggle_favorite(&mut self, id: &VenueId) {
        if let Some(store) = self.store.write().as_mut() {
            if let Err(e) = store.toggle_favorite(id) {
                warn!("{e}");
            }
        }
    }

    pub fn view(&self) -> QueryResult {
        self.store
            .read()
            .as_ref()
            .map(|store| store.view().clone())
            .unwrap_or_default()
    }

    pub fn state(&self) -> FilterState {
        self.store
            .read()
            .as_ref()
            .map(|store| store.state().clone())
            .unwrap_or_default()
    }

    pub fn facets(&self) -> Facets {
        self.store
            .read()
            .as_ref()
            .map(|store| store.facets().clone())
            .unwrap_or_default()
    }

    pub fn venue(&self, id: &VenueId) -> Option<Venue> {
        self.store.read().as_ref().and_then(|store| store.get(id).cloned())
    }

    pub fn venue_count(&self) -> usize {
        self.store.read().as_ref().map_or(0, CatalogStore::len)
    }

    pub fn favorite_count(&self) -> usize {
        self.store
            .read()
            .as_ref()
            .map_or(0, CatalogStore::favorite_count)
    }

    pub fn featured(&self, count: usize) -> Vec<Venue> {
        self.store
            .read()
            .as_ref()
            .map(|store| store.featured(count))
            .unwrap_or_default()
    }
}

pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}
