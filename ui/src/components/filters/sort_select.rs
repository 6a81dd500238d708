use catalog::FilterUpdate;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::SortKey;

use crate::use_catalog;

#[component]
pub fn SortSelect(selected: SortKey) -> Element {
    let mut catalog = use_catalog();

    rsx! {
      label { class: "block",
        span { class: "block text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
          "Sort by"
        }
        select {
          class: "w-full bg-black/20 text-white px-3 py-2 rounded-lg border border-white/10 focus:outline-none focus:ring-2 focus:ring-venue-accent cursor-pointer",
          value: selected.as_str(),
          onchange: move |event| match FilterUpdate::sort_token(&event.value()) {
              Ok(update) => catalog.dispatch(update),
              Err(e) => warn!("Ignoring sort option: {e}"),
          },
          for (key, value) in SortKey::ALL.into_iter().map(|key| (key, key.as_str())) {
            option { key: "{value}", value, selected: key == selected, {key.label()} }
          }
        }
      }
    }
}
