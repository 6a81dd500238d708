use std::collections::BTreeSet;

use catalog::FilterUpdate;
use dioxus::prelude::*;

use crate::{use_catalog, Checkbox};

/// Every listed amenity must be present on a venue for it to match.
#[component]
pub fn AmenityList(amenities: Vec<String>, selected: BTreeSet<String>) -> Element {
    let mut catalog = use_catalog();

    rsx! {
      fieldset {
        legend { class: "block text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
          "Amenities"
        }
        if amenities.is_empty() {
          p { class: "text-sm text-gray-500", "No amenities listed" }
        }
        ul { class: "space-y-2 max-h-56 overflow-y-auto pr-1",
          for amenity in amenities {
            li { key: "{amenity}",
              button {
                r#type: "button",
                class: "flex items-center w-full text-left text-sm text-gray-300 hover:text-white cursor-pointer",
                onclick: {
                    let amenity = amenity.clone();
                    move |_| catalog.dispatch(FilterUpdate::ToggleAmenity(amenity.clone()))
                },
                Checkbox { is_selected: selected.contains(&amenity), label: amenity.clone() }
              }
            }
          }
        }
      }
    }
}
