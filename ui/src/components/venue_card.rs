use dioxus::prelude::*;
use shared::{Venue, VenueId};

use crate::format::{self, Star};
use crate::VenueImage;

/// Amenity chips shown on a card before collapsing into "+N"
const AMENITY_CHIPS: usize = 3;

#[component]
pub fn RatingStars(score: f64) -> Element {
    let title = format!("{} out of 5", format::rating(score));

    rsx! {
      div { class: "flex items-center gap-0.5 text-amber-400", title,
        for (i, star) in format::stars(score).into_iter().enumerate() {
          svg {
            key: "{i}",
            class: "w-4 h-4",
            view_box: "0 0 20 20",
            fill: "currentColor",
            match star {
                Star::Full => rsx! {
                  path { d: "M10 1.5l2.6 5.3 5.9.9-4.3 4.1 1 5.8L10 14.9l-5.2 2.7 1-5.8L1.5 7.7l5.9-.9z" }
                },
                Star::Half => rsx! {
                  path { d: "M10 1.5v13.4l-5.2 2.7 1-5.8L1.5 7.7l5.9-.9z" }
                  path { class: "text-white/15", d: "M10 1.5l2.6 5.3 5.9.9-4.3 4.1 1 5.8L10 14.9z" }
                },
                Star::Empty => rsx! {
                  path { class: "text-white/15", d: "M10 1.5l2.6 5.3 5.9.9-4.3 4.1 1 5.8L10 14.9l-5.2 2.7 1-5.8L1.5 7.7l5.9-.9z" }
                },
            }
          }
        }
      }
    }
}

#[component]
pub fn FavoriteButton(active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let label = if active {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
      button {
        class: "p-2 rounded-full bg-black/40 backdrop-blur-sm transition-colors cursor-pointer",
        class: if active { "text-rose-500" } else { "text-white/80 hover:text-rose-400" },
        title: label,
        "aria-pressed": active,
        onclick: move |evt| onclick.call(evt),
        svg {
          class: "w-5 h-5",
          view_box: "0 0 24 24",
          fill: if active { "currentColor" } else { "none" },
          stroke: "currentColor",
          stroke_width: "2",
          path {
            stroke_linecap: "round",
            stroke_linejoin: "round",
            d: "M21 8.25c0-2.49-2.1-4.5-4.69-4.5-1.93 0-3.6 1.12-4.31 2.73-.72-1.61-2.38-2.73-4.31-2.73C5.1 3.75 3 5.76 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12z",
          }
        }
      }
    }
}

#[component]
pub fn VenueCard(
    venue: Venue,
    on_toggle_favorite: EventHandler<VenueId>,
    on_open: EventHandler<VenueId>,
) -> Element {
    let (chips, hidden) = format::amenity_preview(&venue, AMENITY_CHIPS);
    let open_id = venue.id.clone();
    let favorite_id = venue.id.clone();

    rsx! {
      article {
        class: "group bg-venue-panel border border-white/10 rounded-xl overflow-hidden shadow-lg hover:border-venue-accent/50 hover:-translate-y-1 transition-all duration-200 cursor-pointer flex flex-col",
        onclick: move |_| on_open.call(open_id.clone()),

        div { class: "relative",
          VenueImage {
            src: venue.image_url.clone(),
            alt: venue.name.clone(),
            class: "h-48 w-full",
          }
          div { class: "absolute top-3 right-3",
            FavoriteButton {
              active: venue.is_favorite,
              onclick: move |evt: MouseEvent| {
                  evt.stop_propagation();
                  on_toggle_favorite.call(favorite_id.clone());
              },
            }
          }
        }

        div { class: "p-4 flex flex-col gap-3 flex-1",
          div {
            h3 { class: "text-lg font-semibold text-white truncate group-hover:text-venue-accent transition-colors",
              "{venue.name}"
            }
            p { class: "text-sm text-gray-400", "{venue.city}" }
          }

          div { class: "flex items-center gap-2",
            RatingStars { score: venue.rating }
            span { class: "text-sm text-gray-400", {format::rating(venue.rating)} }
          }

          div { class: "flex items-center justify-between text-sm",
            span { class: "text-gray-300", {format::capacity(venue.capacity)} }
            span { class: "font-semibold text-white", {format::price_per_hour(venue.price_per_hour)} }
          }

          if !chips.is_empty() {
            ul { class: "flex flex-wrap gap-1.5 mt-auto",
              for chip in chips {
                li {
                  key: "{chip}",
                  class: "text-xs px-2 py-1 rounded-full bg-white/5 border border-white/10 text-gray-300",
                  "{chip}"
                }
              }
              if hidden > 0 {
                li { class: "text-xs px-2 py-1 rounded-full bg-venue-accent/15 text-venue-accent",
                  "+{hidden}"
                }
              }
            }
          }
        }
      }
    }
}
