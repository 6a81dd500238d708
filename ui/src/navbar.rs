use dioxus::prelude::*;

/// Badge text for the favorites counter; large counts are capped.
pub fn favorites_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Brand, navigation links passed as `children`, and the favorites counter.
#[component]
pub fn Navbar(favorites: usize, children: Element) -> Element {
    let badge = favorites_badge(favorites);
    let title = match favorites {
        1 => "1 favorite venue".to_string(),
        n => format!("{n} favorite venues"),
    };

    rsx! {
        header { class: "flex flex-wrap gap-4 justify-between items-center py-6 border-b border-white/5",
            div { class: "flex items-center gap-3 group cursor-default",
                div { class: "w-10 h-10 bg-venue-accent rounded-lg flex items-center justify-center group-hover:-rotate-6 transition-transform",
                    svg {
                        class: "w-6 h-6 text-white",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M3 21h18M5 21V7l7-4 7 4v14M9 21v-6h6v6",
                        }
                    }
                }
                span { class: "text-2xl font-bold tracking-tight text-white", "Venuely" }
            }

            nav { class: "flex items-center gap-6 bg-venue-panel/50 px-6 py-2 rounded-full border border-white/5 backdrop-blur-sm",
                {children}

                div { class: "h-4 w-px bg-white/10" }

                div { class: "relative p-2", title,
                    svg {
                        class: "w-5 h-5",
                        class: if badge.is_some() { "text-rose-500" } else { "text-gray-300" },
                        fill: if badge.is_some() { "currentColor" } else { "none" },
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M21 8.25c0-2.49-2.1-4.5-4.69-4.5-1.93 0-3.6 1.12-4.31 2.73-.72-1.61-2.38-2.73-4.31-2.73C5.1 3.75 3 5.76 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12z",
                        }
                    }
                    if let Some(ref badge) = badge {
                        span { class: "absolute -top-0.5 -right-0.5 min-w-4 h-4 px-1 rounded-full bg-venue-accent text-[10px] font-bold text-white flex items-center justify-center",
                            "{badge}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_badge() {
        assert_eq!(favorites_badge(0), None);
        assert_eq!(favorites_badge(7).as_deref(), Some("7"));
        assert_eq!(favorites_badge(140).as_deref(), Some("99+"));
    }
}
