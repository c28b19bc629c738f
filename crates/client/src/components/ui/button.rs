use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-group-green text-white hover:opacity-90 focus:ring-green-700",
            Self::Danger => "bg-group-red text-white hover:opacity-90 focus:ring-red-700",
            Self::Ghost => "bg-transparent text-gray-700 hover:bg-black/5 focus:ring-gray-400",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub r#type: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let disabled = props.disabled.unwrap_or(false);
    let base = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold shadow-md transition-colors focus:outline-none focus:ring-2 disabled:opacity-50 disabled:pointer-events-none";
    let class = format!(
        "{base} {} {}",
        props.variant.unwrap_or_default().class(),
        props.class.unwrap_or_default()
    );

    rsx! {
        button {
            class,
            r#type: props.r#type.unwrap_or_else(|| "button".to_string()),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
