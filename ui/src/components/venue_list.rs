use catalog::FilterUpdate;
use dioxus::prelude::*;
use shared::VenueId;

use crate::{
    format, use_catalog, Button, ButtonVariant, FilterPanel, Pagination, VenueCard, VenueDetails,
};

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}

/// Filter sidebar, results header, card grid and pagination.
#[component]
pub fn VenueList() -> Element {
    let mut catalog = use_catalog();
    let mut opened = use_signal::<Option<VenueId>>(|| None);

    let view = catalog.view();
    let summary = format::results_summary(view.shown_range(), view.total_matched);
    let items = view.items.clone();
    let detail = opened.read().as_ref().and_then(|id| catalog.venue(id));

    rsx! {
      if let Some(venue) = detail {
        VenueDetails {
          venue,
          on_close: move |_| opened.set(None),
          on_toggle_favorite: move |id: VenueId| catalog.toggle_favorite(&id),
        }
      }

      div { class: "grid grid-cols-1 lg:grid-cols-[18rem_1fr] gap-8",
        FilterPanel {}

        section {
          div { class: "flex items-baseline justify-between mb-6",
            h1 { class: "text-2xl font-bold text-white", "Venues" }
            p { class: "text-sm text-gray-400", "{summary}" }
          }

          if items.is_empty() {
            div { class: "flex flex-col items-center justify-center text-center py-20 border border-dashed border-white/10 rounded-xl",
              p { class: "text-lg text-gray-300 mb-2", "No venues match your filters" }
              p { class: "text-sm text-gray-500 mb-6",
                "Try widening the price or guest range, or removing some amenities."
              }
              Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| catalog.dispatch(FilterUpdate::Reset),
                "Reset filters"
              }
            }
          } else {
            div { class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6",
              for venue in items {
                VenueCard {
                  key: "{venue.id}",
                  venue,
                  on_toggle_favorite: move |id: VenueId| catalog.toggle_favorite(&id),
                  on_open: move |id: VenueId| opened.set(Some(id)),
                }
              }
            }
          }

          Pagination {
            result: view,
            on_select: move |page: usize| {
                catalog.dispatch(FilterUpdate::Page(page));
                scroll_to_top();
            },
          }
        }
      }
    }
}
