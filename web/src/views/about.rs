use dioxus::prelude::*;

use crate::Route;

const VALUES: [(&str, &str); 3] = [
    ("Clarity", "Capacity, price and amenities are on every listing. No call needed to get a quote."),
    ("Choice", "From a twenty-seat studio to a five-hundred-guest hall, in the cities people meet in."),
    ("Trust", "Ratings come from the people who actually hosted there."),
];

const STEPS: [&str; 3] = [
    "Narrow the list by city, guest count, budget and amenities.",
    "Open a venue to read the details and save the ones you like.",
    "Contact the venue with your shortlist and date.",
];

const TEAM: [(&str, &str); 3] = [
    ("Ana Ribeiro", "Partnerships"),
    ("Jonas Weber", "Engineering"),
    ("Lucía Martín", "Design"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto space-y-16",
            section {
                h1 { class: "text-4xl font-bold text-white mb-6", "About Venuely" }
                p { class: "text-lg text-gray-300 leading-relaxed",
                    "Venuely helps teams, couples and organisers find the right space for their event. "
                    "We list venues across Europe with clear capacity, pricing and amenities so the search takes minutes instead of days."
                }
            }

            section {
                h2 { class: "text-2xl font-semibold text-white mb-6", "What we care about" }
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    for (title, body) in VALUES {
                        div {
                            key: "{title}",
                            class: "bg-venue-panel border border-white/10 rounded-xl p-5",
                            h3 { class: "font-semibold text-venue-accent mb-2", "{title}" }
                            p { class: "text-sm text-gray-400", "{body}" }
                        }
                    }
                }
            }

            section {
                h2 { class: "text-2xl font-semibold text-white mb-6", "How it works" }
                ol { class: "space-y-4",
                    for (i, step) in STEPS.into_iter().enumerate() {
                        li { key: "{i}", class: "flex gap-4 items-start",
                            span { class: "w-8 h-8 shrink-0 rounded-full bg-venue-accent/15 text-venue-accent font-bold flex items-center justify-center",
                                {(i + 1).to_string()}
                            }
                            p { class: "text-gray-300 pt-1", "{step}" }
                        }
                    }
                }
            }

            section {
                h2 { class: "text-2xl font-semibold text-white mb-6", "The team" }
                ul { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    for (name, role) in TEAM {
                        li {
                            key: "{name}",
                            class: "bg-venue-panel border border-white/10 rounded-xl p-5 text-center",
                            p { class: "font-semibold text-white", "{name}" }
                            p { class: "text-sm text-gray-400", "{role}" }
                        }
                    }
                }
            }

            div { class: "text-center",
                Link {
                    class: "bg-venue-accent text-white font-semibold px-6 py-3 rounded-lg hover:bg-venue-accent/90 transition-colors",
                    to: Route::VenueListPage {},
                    "Start browsing"
                }
            }
        }
    }
}
