//! The signed-in user's groups.

use std::rc::Rc;

use dioxus::prelude::*;
use groupmatch_client_core::GroupListController;

use crate::components::groups::{GroupCard, GroupFormView};
use crate::components::ui::Modal;
use crate::hooks::{
    use_refresh_flag, use_refreshable_resource, use_screen_context, use_view_token,
};
use crate::stores::AppState;
use crate::Route;

#[component]
pub fn GroupList() -> Element {
    let app = use_context::<AppState>();
    let ctx = use_screen_context();
    let token = use_view_token();
    let flag = use_refresh_flag();
    let revision = use_signal(|| 0u64);

    let list = use_hook(move || {
        Rc::new(
            GroupListController::new(ctx, token)
                .with_refresh_listener(Rc::new(move |value| flag.set(value)))
                .on_change(Rc::new(move || {
                    let mut revision = revision;
                    *revision.write() += 1;
                })),
        )
    });

    use_hook(move || {
        if app.take_left_deleted() {
            crate::log_debug!("returned from a deleted group");
        }
    });

    let loader = list.clone();
    let _load = use_refreshable_resource(flag, move || {
        let list = loader.clone();
        async move { list.load().await }
    });

    // Subscribe to controller changes.
    let _ = revision.read();
    let groups = list.groups();

    let open_list = list.clone();
    let close_list = list.clone();
    let submit_list = list.clone();

    rsx! {
        div { class: "max-w-5xl mx-auto",
            h1 { class: "text-3xl font-bold mb-6", "My groups" }
            if groups.is_empty() && list.needs_login() {
                p { class: "text-gray-600",
                    "You need to "
                    Link { to: Route::Login {}, class: "text-group-green underline", "log in" }
                    " to see your groups."
                }
            } else if groups.is_empty() && list.is_loaded() {
                p { class: "text-gray-500", "You are not a member of any group yet." }
            } else if groups.is_empty() {
                p { class: "text-gray-500", "Loading groups..." }
            }
            div { class: "flex flex-wrap gap-4",
                for group in groups {
                    GroupCard { key: "{group.id}", group }
                }
            }
            button {
                class: "fixed bottom-8 right-8 w-14 h-14 rounded-full bg-group-green text-white text-3xl shadow-xl hover:opacity-90 disabled:opacity-50",
                r#type: "button",
                title: "Create group",
                disabled: list.is_creating(),
                onclick: move |_| {
                    open_list.open_create();
                },
                "+"
            }
            if list.is_create_open() {
                Modal {
                    title: "Create group",
                    on_close: move |_| {
                        close_list.close_create();
                    },
                    GroupFormView {
                        submit_label: "Create",
                        on_submit: move |form| {
                            let list = submit_list.clone();
                            spawn(async move { list.submit_create(form).await });
                        },
                    }
                }
            }
        }
    }
}
