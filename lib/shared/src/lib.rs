//! Data model shared by the catalog core, the UI components and the web app.

pub mod sort;
pub mod venue;

pub use sort::{ParseSortKeyError, SortKey};
pub use venue::{Venue, VenueId};
