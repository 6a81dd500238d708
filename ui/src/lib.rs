//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::{favorites_badge, Navbar};

mod layout;
pub use layout::Layout;

mod context;
pub use context::*;

pub mod format;

mod components;
pub use components::*;
