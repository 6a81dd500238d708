use dioxus::prelude::*;

/// A check mark with an optional label beside it.
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    is_selected: bool,
    #[props(optional, into)]
    label: Option<String>,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
      span { class: "inline-flex items-center gap-3 min-w-0",
        span {
          class: "w-5 h-5 shrink-0 border rounded flex items-center justify-center transition-colors duration-200",
          class: if props.is_selected { "border-venue-accent bg-venue-accent text-white" } else { "border-gray-500 bg-transparent" },
          role: "checkbox",
          "aria-checked": props.is_selected,
          if props.is_selected {
            svg {
              class: "w-3 h-3",
              fill: "none",
              stroke: "currentColor",
              view_box: "0 0 24 24",
              path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "4",
                d: "M5 13l4 4L19 7",
              }
            }
          }
        }
        if let Some(label) = props.label {
          span { class: "truncate", "{label}" }
        }
      }
    }
}
