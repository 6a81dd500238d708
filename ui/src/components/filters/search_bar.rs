use catalog::FilterUpdate;
use dioxus::prelude::*;

use crate::use_catalog;

#[component]
pub fn SearchBar(value: String) -> Element {
    let mut catalog = use_catalog();

    rsx! {
      label { class: "block",
        span { class: "block text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
          "Search"
        }
        div { class: "relative",
          svg {
            class: "w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-gray-500",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
              stroke_linecap: "round",
              stroke_linejoin: "round",
              stroke_width: "2",
              d: "M21 21l-4.35-4.35M10.5 18a7.5 7.5 0 100-15 7.5 7.5 0 000 15z",
            }
          }
          input {
            r#type: "search",
            value: "{value}",
            class: "w-full bg-black/20 text-white placeholder-gray-500 pl-9 pr-3 py-2 rounded-lg border border-white/10 focus:outline-none focus:ring-2 focus:ring-venue-accent transition-shadow",
            placeholder: "Name, description or category",
            oninput: move |event| catalog.dispatch(FilterUpdate::Search(event.value())),
          }
        }
      }
    }
}
