mod amenity_list;
mod location_select;
mod range_inputs;
mod search_bar;
mod sort_select;

pub use amenity_list::AmenityList;
pub use location_select::LocationSelect;
pub use range_inputs::{CapacityInputs, PriceInputs};
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;

use catalog::FilterUpdate;
use dioxus::prelude::*;

use crate::{use_catalog, Button, ButtonVariant};

/// Sidebar with every filter control wired to the shared catalog.
#[component]
pub fn FilterPanel() -> Element {
    let mut catalog = use_catalog();
    let state = catalog.state();
    let facets = catalog.facets();

    rsx! {
      aside { class: "bg-venue-panel border border-white/10 rounded-xl p-5 space-y-6 h-fit",
        div { class: "flex items-center justify-between",
          h2 { class: "text-lg font-semibold text-white", "Filters" }
          Button {
            variant: ButtonVariant::Ghost,
            disabled: !state.has_active_filters(),
            title: "Clear every filter and the sort",
            onclick: move |_| catalog.dispatch(FilterUpdate::Reset),
            "Reset filters"
          }
        }

        SearchBar { value: state.search_query().to_string() }
        LocationSelect {
          cities: facets.cities.clone(),
          selected: state.location().map(str::to_string),
        }
        CapacityInputs {
          range: state.capacity_range(),
          bounds: facets.capacity_bounds,
        }
        PriceInputs { range: state.price_range(), bounds: facets.price_bounds }
        AmenityList {
          amenities: facets.amenities.clone(),
          selected: state.amenities().clone(),
        }
        SortSelect { selected: state.sort() }
      }
    }
}
