use catalog::{FilterUpdate, RangeFilter};
use dioxus::prelude::*;

use crate::{format, use_catalog};

const INPUT_CLASS: &str = "w-full bg-black/20 text-white placeholder-gray-500 px-3 py-2 rounded-lg border border-white/10 focus:outline-none focus:ring-2 focus:ring-venue-accent";

// Blank or unparsable text clears the bound.
fn parse_bound<T: std::str::FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

#[component]
fn RangeField(
    label: String,
    min_text: String,
    max_text: String,
    min_placeholder: String,
    max_placeholder: String,
    step: String,
    on_min: EventHandler<String>,
    on_max: EventHandler<String>,
) -> Element {
    rsx! {
      fieldset {
        legend { class: "block text-xs font-semibold uppercase tracking-wider text-gray-400 mb-2",
          "{label}"
        }
        div { class: "flex items-center gap-2",
          input {
            r#type: "number",
            min: "0",
            step: "{step}",
            class: INPUT_CLASS,
            value: "{min_text}",
            placeholder: "{min_placeholder}",
            oninput: move |event| on_min.call(event.value()),
          }
          span { class: "text-gray-500", "–" }
          input {
            r#type: "number",
            min: "0",
            step: "{step}",
            class: INPUT_CLASS,
            value: "{max_text}",
            placeholder: "{max_placeholder}",
            oninput: move |event| on_max.call(event.value()),
          }
        }
      }
    }
}

/// Guest count bounds; the reducer keeps min <= max.
#[component]
pub fn CapacityInputs(range: RangeFilter<u32>, bounds: Option<(u32, u32)>) -> Element {
    let mut catalog = use_catalog();
    let (low, high) = bounds.unwrap_or((0, 0));

    let min_text = match range.min() {
        0 => String::new(),
        min => min.to_string(),
    };
    let max_text = range.max().map(|max| max.to_string()).unwrap_or_default();

    rsx! {
      RangeField {
        label: "Guests".to_string(),
        min_text,
        max_text,
        min_placeholder: format!("Min {low}"),
        max_placeholder: format!("Max {high}"),
        step: "10".to_string(),
        on_min: move |text: String| {
            catalog.dispatch(FilterUpdate::MinCapacity(parse_bound(&text).unwrap_or(0)));
        },
        on_max: move |text: String| {
            catalog.dispatch(FilterUpdate::MaxCapacity(parse_bound(&text)));
        },
      }
    }
}

/// Hourly price bounds; the reducer keeps min <= max.
#[component]
pub fn PriceInputs(range: RangeFilter<f64>, bounds: Option<(f64, f64)>) -> Element {
    let mut catalog = use_catalog();
    let (low, high) = bounds.unwrap_or((0.0, 0.0));

    let min_text = if range.min() > 0.0 {
        range.min().to_string()
    } else {
        String::new()
    };
    let max_text = range.max().map(|max| max.to_string()).unwrap_or_default();

    rsx! {
      RangeField {
        label: "Price per hour".to_string(),
        min_text,
        max_text,
        min_placeholder: format!("Min {}", format::price(low)),
        max_placeholder: format!("Max {}", format::price(high)),
        step: "5".to_string(),
        on_min: move |text: String| {
            catalog.dispatch(FilterUpdate::MinPrice(parse_bound(&text).unwrap_or(0.0)));
        },
        on_max: move |text: String| {
            catalog.dispatch(FilterUpdate::MaxPrice(parse_bound(&text)));
        },
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound::<u32>(" 120 "), Some(120));
        assert_eq!(parse_bound::<u32>(""), None);
        assert_eq!(parse_bound::<u32>("-5"), None);
        assert_eq!(parse_bound::<f64>("87.5"), Some(87.5));
        assert_eq!(parse_bound::<f64>("abc"), None);
    }
}
