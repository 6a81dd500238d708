use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-screen text-center px-6",
            h1 { class: "text-6xl font-bold text-venue-accent mb-4", "404" }
            p { class: "text-gray-400 mb-8", "Nothing lives at /{path}" }
            Link {
                class: "bg-venue-accent text-white font-semibold px-6 py-3 rounded-lg hover:bg-venue-accent/90 transition-colors",
                to: Route::Home {},
                "Back to home"
            }
        }
    }
}
