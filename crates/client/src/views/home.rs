use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::Route;

/// Landing page: sends the user to their groups, or to login first.
#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::GroupList {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        div { class: "flex items-center justify-center min-h-[50vh] text-gray-500",
            "Redirecting..."
        }
    }
}
