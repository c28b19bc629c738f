use dioxus::prelude::*;
use groupmatch_shared::LoginRequest;

use crate::auth_session::AuthContext;
use crate::components::ui::{Button, Field, InputType};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let request = LoginRequest {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        error.set(None);
        is_loading.set(true);
        spawn(async move {
            let mut auth = auth;
            match auth.client().login(&request).await {
                Ok(response) => {
                    crate::log_info!("logged in as {}", request.email);
                    auth.login(request.email, response.token);
                    nav.push(Route::GroupList {});
                }
                Err(err) => {
                    crate::log_warn!("login failed: {}", err);
                    error.set(Some(err.detail()));
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "flex justify-center pt-16",
            form {
                class: "w-full max-w-sm bg-white border border-group-green rounded-md shadow-lg p-6 space-y-4",
                onsubmit: handle_submit,
                h2 { class: "text-2xl font-bold", "Log in" }
                Field {
                    label: "Email",
                    value: email,
                    input_type: InputType::Email,
                    required: true,
                }
                Field {
                    label: "Password",
                    value: password,
                    input_type: InputType::Password,
                    required: true,
                }
                if let Some(err) = error.read().as_ref() {
                    div { class: "p-3 bg-red-50 border border-group-red rounded-md text-group-red text-sm",
                        "{err}"
                    }
                }
                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: *is_loading.read(),
                    if *is_loading.read() {
                        "Logging in..."
                    } else {
                        "Log in"
                    }
                }
            }
        }
    }
}
