use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant, Modal};

/// Destructive-action confirmation. Cancel is the default choice.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { title, on_close: on_cancel,
            p { class: "text-sm text-gray-700", "{message}" }
            div { class: "flex justify-end gap-3 pt-6",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
