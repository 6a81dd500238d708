use crate::components::Footer;
use dioxus::prelude::*;

/// Page shell: `header` on top, the routed page in `main`, footer last.
#[component]
pub fn Layout(header: Element, children: Element) -> Element {
    rsx! {
      div { class: "relative z-10 flex flex-col min-h-screen max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
        {header}
        main { class: "flex-grow flex flex-col relative w-full py-8", {children} }
        Footer {}
      }
    }
}
