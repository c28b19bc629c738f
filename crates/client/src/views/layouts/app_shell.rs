//! Top-level layout: navigation bar, toast and the refresh listener.

use dioxus::prelude::*;
use groupmatch_client_core::RefreshSignal;

use crate::auth_session::AuthContext;
use crate::components::Toast;
use crate::stores::AppState;
use crate::Route;

#[component]
pub fn AppShell() -> Element {
    let mut auth = use_context::<AuthContext>();
    let app = use_context::<AppState>();
    let nav = use_navigator();

    // Run whatever callback a destructive action attached, then go idle.
    use_effect(move || {
        let signal = app.refresh.read().clone();
        if signal.requested {
            (signal.callback)();
            let mut refresh = app.refresh;
            refresh.set(RefreshSignal::idle());
        }
    });

    let email = auth.email();

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            nav { class: "flex items-center justify-between px-6 py-3 bg-white border-b border-group-green shadow-sm",
                Link {
                    to: Route::GroupList {},
                    class: "text-xl font-bold text-group-green",
                    "GroupMatch"
                }
                div { class: "flex items-center gap-4 text-sm",
                    if let Some(email) = email {
                        span { class: "text-gray-600", "{email}" }
                        button {
                            class: "text-group-red hover:underline",
                            r#type: "button",
                            onclick: move |_| {
                                auth.logout();
                                nav.push(Route::Login {});
                            },
                            "Log out"
                        }
                    } else {
                        Link { to: Route::Login {}, class: "text-group-green hover:underline", "Log in" }
                    }
                }
            }
            Toast {}
            main { class: "p-6", Outlet::<Route> {} }
        }
    }
}
