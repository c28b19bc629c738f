use dioxus::prelude::*;
use groupmatch_shared::AddMemberForm;

use crate::components::ui::{Button, Field, InputType};

#[component]
pub fn AddMemberFormView(on_submit: EventHandler<AddMemberForm>) -> Element {
    let email = use_signal(String::new);

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(AddMemberForm {
                    email: email.read().trim().to_string(),
                });
            },
            Field {
                label: "Email",
                value: email,
                input_type: InputType::Email,
                placeholder: "friend@example.com",
                required: true,
            }
            div { class: "flex justify-end",
                Button { r#type: "submit", "Add member" }
            }
        }
    }
}
