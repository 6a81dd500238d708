use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
      footer { class: "mt-16 py-6 text-center border-t border-white/5",
        div { class: "flex flex-col sm:flex-row justify-center items-center gap-4 sm:gap-8 text-xs text-gray-500",
          span { "© {year} Venuely" }
          span { class: "hidden sm:inline text-white/10", "|" }
          span { "Find the room. Book the moment." }
        }
      }
    }
}
