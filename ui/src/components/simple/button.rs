use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-venue-accent text-white font-semibold px-6 py-3 shadow-lg shadow-venue-accent/20 hover:bg-venue-accent/90 transition-all duration-200 cursor-pointer",
            ButtonVariant::Secondary => "font-semibold px-6 py-3 border border-white/10 text-gray-300 transition-all duration-200 hover:bg-white/5 hover:text-white cursor-pointer",
            ButtonVariant::Ghost => "text-sm px-3 py-2 text-gray-400 hover:text-white transition-colors cursor-pointer",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    children: Element,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, default)]
    disabled: bool,
    #[props(optional, into)]
    class: String,
    /// Tooltip text
    #[props(optional, into)]
    title: Option<String>,
    /// Toggle state, exposed as `aria-pressed`
    #[props(optional)]
    pressed: Option<bool>,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_classes = props.variant.classes();
    let disabled_classes = if props.disabled {
        "opacity-30 cursor-not-allowed grayscale pointer-events-none"
    } else {
        ""
    };
    let additional_classes = props.class;

    rsx! {
        button {
            class: "{variant_classes} {disabled_classes} {additional_classes} rounded-lg",
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            disabled: props.disabled,
            title: props.title,
            "aria-pressed": props.pressed.map(|on| on.to_string()),
            {props.children}
        }
    }
}
