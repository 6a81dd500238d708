use catalog::{load_store, source_from_config, VenueSource, CONFIG};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use ui::Catalog;

/// Loads the venue collection once and shares it with every page.
#[component]
pub fn CatalogProvider(children: Element) -> Element {
    let store = use_signal(|| None);
    let error = use_signal(|| None::<String>);
    let mut catalog = use_context_provider(|| Catalog::new(store, error));

    use_future(move || async move {
        let source = source_from_config(&CONFIG);
        info!("Loading venues from {}", source.name());
        let result = load_store(source.as_ref(), CONFIG.page_size).await;
        catalog.load(result);
    });

    if let Some(message) = catalog.error() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center h-screen text-center px-6",
                h1 { class: "text-2xl font-bold text-rose-400 mb-3", "Venues could not be loaded" }
                p { class: "text-gray-400 max-w-md", "{message}" }
            }
        };
    }

    if !catalog.is_loaded() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center h-screen",
                div { class: "animate-spin rounded-full h-16 w-16 border-t-4 border-b-4 border-venue-accent mb-6" }
                h1 { class: "text-2xl font-bold text-venue-accent animate-pulse", "Venuely" }
            }
        };
    }

    rsx! {
        {children}
    }
}
