use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full rounded-md bg-white text-gray-900 px-3 py-2 text-sm border border-gray-300 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-green-700/40 focus:border-green-700";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Date,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
        }
    }
}

/// Labelled single-line input bound to a string signal.
#[component]
pub fn Field(
    label: String,
    value: Signal<String>,
    #[props(optional)] placeholder: Option<String>,
    #[props(optional)] input_type: Option<InputType>,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label { class: "block space-y-1",
            span { class: "text-sm font-medium text-gray-700", "{label}" }
            input {
                class: FIELD_CLASS,
                r#type: input_type.unwrap_or(InputType::Text).as_str(),
                required,
                value: "{value}",
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |e: FormEvent| {
                    let mut value = value;
                    value.set(e.value());
                },
            }
        }
    }
}

/// Labelled multi-line input bound to a string signal.
#[component]
pub fn TextAreaField(label: String, value: Signal<String>) -> Element {
    rsx! {
        label { class: "block space-y-1",
            span { class: "text-sm font-medium text-gray-700", "{label}" }
            textarea {
                class: "{FIELD_CLASS} min-h-[90px] resize-y",
                value: "{value}",
                oninput: move |e: FormEvent| {
                    let mut value = value;
                    value.set(e.value());
                },
            }
        }
    }
}
