use std::rc::Rc;

use dioxus::prelude::*;
use groupmatch_client_core::{CancellationToken, ScreenContext};

use crate::auth_session::AuthContext;
use crate::stores::{AppState, RouteNavigator};

/// Collaborators for a screen controller, built once per component.
pub fn use_screen_context() -> ScreenContext {
    let auth = use_context::<AuthContext>();
    let app = use_context::<AppState>();
    let nav = use_navigator();

    use_hook(move || ScreenContext {
        remote: Rc::new(auth),
        notifications: Rc::new(app),
        signals: Rc::new(app),
        navigator: Rc::new(RouteNavigator(nav)),
    })
}

/// Token cancelled when the calling component is dropped.
pub fn use_view_token() -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    use_drop({
        let token = token.clone();
        move || token.cancel()
    });
    token
}
