mod about;
mod home;
mod not_found;
mod venues;

pub use about::About;
pub use home::Home;
pub use not_found::NotFound;
pub use venues::VenueListPage;
