use dioxus::prelude::*;

/// Width of the dialog panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn width_class(self) -> &'static str {
        match self {
            ModalSize::Small => "max-w-md",
            ModalSize::Medium => "max-w-2xl",
            ModalSize::Large => "max-w-4xl",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    /// Called on backdrop click, the close button, or Escape
    pub on_close: EventHandler,
    pub children: Element,
    pub header: Element,
    #[props(optional, default)]
    pub size: ModalSize,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    let width = props.size.width_class();

    rsx! {
      // Backdrop
      div {
        class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-40 transition-opacity",
        onclick: move |_| props.on_close.call(()),
      }

      div {
        class: "fixed inset-0 flex items-center justify-center z-50 p-4",
        role: "dialog",
        "aria-modal": "true",
        tabindex: "-1",
        onclick: move |_| props.on_close.call(()),
        onkeydown: move |event| {
            if event.key() == Key::Escape {
                props.on_close.call(());
            }
        },

        div {
          class: "bg-venue-panel border border-white/10 max-h-[85vh] overflow-hidden flex flex-col rounded-xl shadow-2xl {width} w-full",
          onclick: move |event| event.stop_propagation(),
          div { class: "flex items-start justify-between gap-4 p-4 border-b border-white/10 bg-black/20",
            div { class: "flex-1 min-w-0", {props.header} }
            button {
              class: "text-gray-400 hover:text-white transition-colors cursor-pointer",
              "aria-label": "Close",
              onclick: move |_| props.on_close.call(()),
              svg {
                class: "w-6 h-6",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                  stroke_linecap: "round",
                  stroke_linejoin: "round",
                  stroke_width: "2",
                  d: "M6 18L18 6M6 6l12 12",
                }
              }
            }
          }
          div { class: "overflow-y-auto", {props.children} }
        }
      }
    }
}
