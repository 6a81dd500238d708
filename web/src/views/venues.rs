use dioxus::prelude::*;
use ui::VenueList;

#[component]
pub fn VenueListPage() -> Element {
    rsx! {
        VenueList {}
    }
}
