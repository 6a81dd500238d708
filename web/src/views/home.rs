use catalog::CONFIG;
use dioxus::prelude::*;
use shared::VenueId;
use ui::{format, use_catalog, AnimatedBackground, VenueCard, VenueDetails};

use crate::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "Search that listens",
        "Filter by city, guest count, hourly budget and the amenities you can't do without.",
    ),
    (
        "Honest pricing",
        "Every venue lists its hourly rate up front, so the shortlist fits the budget.",
    ),
    (
        "Keep a shortlist",
        "Heart the places you like and compare them side by side later.",
    ),
];

#[component]
fn Stat(value: String, label: String) -> Element {
    rsx! {
        div { class: "text-center",
            p { class: "text-3xl font-bold text-white", "{value}" }
            p { class: "text-sm text-gray-400 mt-1", "{label}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let mut catalog = use_catalog();
    let mut opened = use_signal::<Option<VenueId>>(|| None);

    let featured = catalog.featured(CONFIG.featured_count);
    let facets = catalog.facets();
    let average_rating = facets
        .average_rating
        .map(format::rating)
        .unwrap_or_else(|| "–".to_string());
    let detail = opened.read().as_ref().and_then(|id| catalog.venue(id));

    rsx! {
        if let Some(venue) = detail {
            VenueDetails {
                venue,
                on_close: move |_| opened.set(None),
                on_toggle_favorite: move |id: VenueId| catalog.toggle_favorite(&id),
            }
        }

        // Hero
        section { class: "relative isolate py-24 sm:py-32 text-center",
            AnimatedBackground {}
            h1 { class: "text-4xl sm:text-6xl font-bold tracking-tight text-white",
                "Find the room for your next "
                span { class: "text-venue-accent", "event" }
            }
            p { class: "mt-6 text-lg text-gray-300 max-w-2xl mx-auto",
                "Conference halls, rooftop terraces and quiet studios, ready to book by the hour."
            }
            div { class: "mt-10 flex justify-center gap-4",
                Link {
                    class: "bg-venue-accent text-white font-semibold px-6 py-3 rounded-lg shadow-lg shadow-venue-accent/20 hover:bg-venue-accent/90 transition-all",
                    to: Route::VenueListPage {},
                    "Browse venues"
                }
                Link {
                    class: "font-semibold px-6 py-3 rounded-lg border border-white/10 text-gray-300 hover:bg-white/5 hover:text-white transition-all",
                    to: Route::About {},
                    "How it works"
                }
            }
        }

        // Stats
        section { class: "grid grid-cols-3 gap-6 py-10 border-y border-white/5",
            Stat { value: catalog.venue_count().to_string(), label: "Venues" }
            Stat { value: facets.cities.len().to_string(), label: "Cities" }
            Stat { value: average_rating, label: "Average rating" }
        }

        // Features
        section { class: "grid grid-cols-1 md:grid-cols-3 gap-6 py-16",
            for (title, body) in FEATURES {
                div {
                    key: "{title}",
                    class: "bg-venue-panel border border-white/10 rounded-xl p-6",
                    h3 { class: "text-lg font-semibold text-white mb-2", "{title}" }
                    p { class: "text-gray-400 text-sm leading-relaxed", "{body}" }
                }
            }
        }

        // Featured venues
        if !featured.is_empty() {
            section { class: "py-10",
                div { class: "flex items-baseline justify-between mb-6",
                    h2 { class: "text-2xl font-bold text-white", "Featured venues" }
                    Link {
                        class: "text-sm text-venue-accent hover:underline",
                        to: Route::VenueListPage {},
                        "See all"
                    }
                }
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                    for venue in featured {
                        VenueCard {
                            key: "{venue.id}",
                            venue,
                            on_toggle_favorite: move |id: VenueId| catalog.toggle_favorite(&id),
                            on_open: move |id: VenueId| opened.set(Some(id)),
                        }
                    }
                }
            }
        }
    }
}
