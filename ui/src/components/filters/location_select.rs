use catalog::FilterUpdate;
use dioxus::prelude::*;

use crate::use_catalog;

#[component]
pub fn LocationSelect(cities: Vec<String>, selected: Option<String>) -> Element {
    let mut catalog = use_catalog();
    let current = selected.unwrap_or_default();

    rsx! {
      label { class: "block",
        span { class: "block text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
          "Location"
        }
        select {
          class: "w-full bg-black/20 text-white px-3 py-2 rounded-lg border border-white/10 focus:outline-none focus:ring-2 focus:ring-venue-accent cursor-pointer",
          value: "{current}",
          onchange: move |event| {
              let city = event.value();
              catalog.dispatch(FilterUpdate::Location((!city.is_empty()).then_some(city)));
          },
          option { value: "", selected: current.is_empty(), "All cities" }
          for city in cities {
            option {
              key: "{city}",
              value: "{city}",
              selected: city == current,
              "{city}"
            }
          }
        }
      }
    }
}
