//! Venue catalog core: filter state, the filter → sort → paginate query
//! pipeline, favorites, the catalog store and the venue data sources.
//!
//! Nothing here depends on a rendering environment. A view builds a
//! [`FilterState`], hands it to [`query::apply`] together with the venue
//! collection and renders the returned [`QueryResult`].

pub mod config;
pub mod error;
pub mod facets;
pub mod favorites;
pub mod filter;
pub mod query;
pub mod source;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::{CatalogConfig, SourceKind, CONFIG};
pub use error::{CatalogError, Result};
pub use facets::Facets;
pub use favorites::{favorite_count, favorites, toggle_favorite};
pub use filter::{FilterState, FilterUpdate, RangeFilter};
pub use query::{apply, featured, page_window, QueryResult};
pub use source::{
    load_store, source_from_config, validate_collection, FallbackVenueSource, JsonVenueSource,
    MockVenueSource, VenueSource,
};
pub use store::CatalogStore;

pub use shared::{SortKey, Venue, VenueId};
