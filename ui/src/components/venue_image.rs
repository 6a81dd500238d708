use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct VenueImageProps {
    /// Image URL; a placeholder is drawn when missing or broken
    pub src: Option<String>,
    /// The alt text for accessibility.
    pub alt: String,
    #[props(optional, into)]
    pub class: String,
}

/// The URL to load, unless it is the one that already failed.
fn loadable<'a>(src: Option<&'a str>, failed: Option<&str>) -> Option<&'a str> {
    src.filter(|src| !src.is_empty() && failed != Some(*src))
}

#[component]
pub fn VenueImage(props: VenueImageProps) -> Element {
    // Keyed by URL so a reused component retries when `src` changes.
    let mut failed_src = use_signal(|| None::<String>);
    let class = props.class;
    let failed = failed_src.read().clone();

    rsx! {
      div { class: "bg-venue-panel flex items-center justify-center overflow-hidden {class}",
        match loadable(props.src.as_deref(), failed.as_deref()) {
            Some(src) => {
                let broken = src.to_string();
                rsx! {
                  img {
                    src: "{src}",
                    alt: "{props.alt}",
                    class: "w-full h-full object-cover",
                    "loading": "lazy",
                    onerror: move |_| failed_src.set(Some(broken.clone())),
                  }
                }
            }
            _ => rsx! {
              svg {
                class: "w-12 h-12 text-white/20",
                xmlns: "http://www.w3.org/2000/svg",
                fill: "none",
                "viewBox": "0 0 24 24",
                "stroke-width": "1.5",
                stroke: "currentColor",
                path {
                  "stroke-linecap": "round",
                  "stroke-linejoin": "round",
                  d: "M2.25 21h19.5M3.75 21V6.75L12 3l8.25 3.75V21M9 21v-5.25h6V21M7.5 9.75h.008v.008H7.5V9.75zm4.5 0h.008v.008H12V9.75zm4.5 0h.008v.008H16.5V9.75z",
                }
              }
            },
        }
      }
    }
}
