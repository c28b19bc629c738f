//! Renders the active notification from [`AppState`].

use dioxus::prelude::*;
use groupmatch_client_core::NotificationKind;

use crate::auth_session::AuthContext;
use crate::stores::AppState;
use crate::timer;

#[component]
pub fn Toast() -> Element {
    let app = use_context::<AppState>();
    let auth = use_context::<AuthContext>();

    // Auto-dismiss: the serial pins the timer to the notification it saw.
    use_effect(move || {
        let serial = {
            let slot = app.alert.read();
            if slot.current().is_none() {
                return;
            }
            slot.serial()
        };
        let timeout = auth.config.read().notification_timeout;
        spawn(async move {
            timer::sleep(timeout).await;
            app.expire_alert(serial);
        });
    });

    let current = app.alert.read().current().cloned();
    let Some(notification) = current.filter(|n| n.active) else {
        return rsx! {};
    };
    let tone = match notification.kind {
        NotificationKind::Notify => "bg-group-green",
        NotificationKind::Error => "bg-group-red",
    };

    rsx! {
        div { class: "fixed top-4 left-1/2 -translate-x-1/2 z-50 {tone} text-white rounded-md shadow-lg px-4 py-3 flex items-center gap-4",
            role: "alert",
            span { class: "text-sm", "{notification.message}" }
            button {
                class: "text-white/80 hover:text-white",
                r#type: "button",
                onclick: move |_| app.dismiss_alert(),
                "×"
            }
        }
    }
}
