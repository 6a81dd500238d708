use dioxus::prelude::*;

use provider::CatalogProvider;
use ui::{use_catalog, Layout, Navbar};
use views::{About, Home, NotFound, VenueListPage};

mod provider;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        Home {},
        #[route("/venues")]
        VenueListPage {},
        #[route("/about")]
        About {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Venuely" }

        CatalogProvider { Router::<Route> {} }
    }
}

#[component]
fn WebNavbar() -> Element {
    let catalog = use_catalog();
    let link_class = "nav-link text-white font-medium border-b-2 border-transparent hover:border-venue-accent pb-0.5";

    rsx! {
        Layout {
            header: rsx! {
                Navbar { favorites: catalog.favorite_count(),
                    Link { class: "{link_class}", active_class: "border-venue-accent", to: Route::Home {}, "Home" }
                    Link {
                        class: "{link_class}",
                        active_class: "border-venue-accent",
                        to: Route::VenueListPage {},
                        "Venues"
                    }
                    Link { class: "{link_class}", active_class: "border-venue-accent", to: Route::About {}, "About" }
                }
            },
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    const TAILWIND_INPUT: &str = include_str!("../tailwind.css");

    #[test]
    fn test_tailwind_scans_both_component_crates() {
        assert!(TAILWIND_INPUT.contains(r#"@source "./src/"#));
        assert!(TAILWIND_INPUT.contains(r#"@source "../ui/src/"#));
    }

    #[test]
    fn test_tailwind_defines_venue_palette() {
        for token in ["--color-venue-bg", "--color-venue-panel", "--color-venue-accent"] {
            assert!(TAILWIND_INPUT.contains(token), "missing {token}");
        }
    }
}
