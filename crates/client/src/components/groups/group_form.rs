//! Create/edit group form.

use dioxus::prelude::*;
use groupmatch_shared::GroupForm;

use crate::components::ui::{Button, ButtonVariant, Field, InputType, TextAreaField};

#[component]
pub fn GroupFormView(
    #[props(optional)] initial: Option<GroupForm>,
    submit_label: String,
    on_submit: EventHandler<GroupForm>,
) -> Element {
    let initial = initial.unwrap_or_default();
    let name = use_signal(|| initial.name.clone());
    let quote = use_signal(|| initial.quote.clone());
    let description = use_signal(|| initial.description.clone());
    let interests = use_signal(|| initial.interests.clone());
    let location = use_signal(|| initial.location.clone());
    let date = use_signal(|| initial.date.clone().unwrap_or_default());

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let date = date.read().trim().to_string();
        on_submit.call(GroupForm {
            name: name.read().trim().to_string(),
            quote: quote.read().clone(),
            description: description.read().clone(),
            interests: interests.read().clone(),
            location: location.read().trim().to_string(),
            date: if date.is_empty() { None } else { Some(date) },
        });
    };

    rsx! {
        form { class: "space-y-4", onsubmit: handle_submit,
            Field { label: "Name", value: name, required: true }
            Field { label: "Quote", value: quote }
            TextAreaField { label: "Description", value: description }
            Field {
                label: "Interests",
                value: interests,
                placeholder: "Hiking,Chess",
            }
            Field { label: "Location", value: location }
            Field { label: "Date", value: date, input_type: InputType::Date }
            div { class: "flex justify-end pt-2",
                Button { r#type: "submit", variant: ButtonVariant::Primary, "{submit_label}" }
            }
        }
    }
}
