pub mod animated_background;
pub mod filters;
pub mod footer;
pub mod modal;
pub mod pagination;
pub mod simple;
pub mod venue_card;
pub mod venue_details;
pub mod venue_image;
pub mod venue_list;

pub use animated_background::*;
pub use filters::*;
pub use footer::*;
pub use modal::*;
pub use pagination::*;
pub use simple::*;
pub use venue_card::*;
pub use venue_details::*;
pub use venue_image::*;
pub use venue_list::*;
