use dioxus::prelude::*;
use shared::{Venue, VenueId};

use crate::{format, Button, ButtonVariant, Modal, ModalSize, RatingStars, VenueImage};

#[component]
fn Fact(label: String, value: String) -> Element {
    rsx! {
      div { class: "bg-black/20 rounded-lg p-3",
        dt { class: "text-xs uppercase tracking-wider text-gray-500", "{label}" }
        dd { class: "text-white font-semibold mt-1", "{value}" }
      }
    }
}

/// Full description of a venue, opened from its card.
#[component]
pub fn VenueDetails(
    venue: Venue,
    on_close: EventHandler,
    on_toggle_favorite: EventHandler<VenueId>,
) -> Element {
    let id = venue.id.clone();
    let favorite_label = if venue.is_favorite {
        "Remove from favorites"
    } else {
        "Save to favorites"
    };

    rsx! {
      Modal {
        on_close: move |_| on_close.call(()),
        size: ModalSize::Large,
        header: rsx! {
          h2 { class: "text-xl font-bold text-white truncate", "{venue.name}" }
          p { class: "text-sm text-gray-400 truncate",
            if venue.address.is_empty() {
              "{venue.city}"
            } else {
              "{venue.address}, {venue.city}"
            }
          }
        },
        VenueImage {
          src: venue.image_url.clone(),
          alt: venue.name.clone(),
          class: "h-64 w-full",
        }
        div { class: "p-6 space-y-6",
          div { class: "flex items-center gap-2",
            RatingStars { score: venue.rating }
            span { class: "text-sm text-gray-400", {format::rating(venue.rating)} }
          }

          if !venue.description.is_empty() {
            p { class: "text-gray-300 leading-relaxed", "{venue.description}" }
          }

          dl { class: "grid grid-cols-2 gap-3",
            Fact { label: "Capacity", value: format::capacity(venue.capacity) }
            Fact { label: "Price", value: format::price_per_hour(venue.price_per_hour) }
          }

          if !venue.categories.is_empty() {
            section {
              h3 { class: "text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
                "Good for"
              }
              div { class: "flex flex-wrap gap-2",
                for category in venue.categories.iter() {
                  span {
                    key: "{category}",
                    class: "text-xs px-2 py-1 rounded-full bg-venue-accent/15 text-venue-accent",
                    "{category}"
                  }
                }
              }
            }
          }

          if !venue.amenities.is_empty() {
            section {
              h3 { class: "text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
                "Amenities"
              }
              ul { class: "grid grid-cols-2 gap-2 text-sm text-gray-300",
                for amenity in venue.amenities.iter() {
                  li { key: "{amenity}", class: "flex items-center gap-2",
                    span { class: "w-1.5 h-1.5 rounded-full bg-venue-accent" }
                    "{amenity}"
                  }
                }
              }
            }
          }

          div { class: "flex justify-end gap-3 pt-2",
            Button {
              variant: ButtonVariant::Secondary,
              onclick: move |_| on_close.call(()),
              "Close"
            }
            Button {
              pressed: venue.is_favorite,
              onclick: move |_| on_toggle_favorite.call(id.clone()),
              {favorite_label}
            }
          }
        }
      }
    }
}
