//! Authentication session management with persistent storage.

use async_trait::async_trait;
use dioxus::prelude::*;
use groupmatch_client_core::{Fetched, GroupsRemote, MutationResult, RemoteAction};
use groupmatch_shared::{ApiError, Group, GroupId};
use serde::{Deserialize, Serialize};

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::storage;

const STORAGE_KEY: &str = "groupmatch_session";

/// Authentication context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub session: Signal<Option<AuthSession>>,
    pub config: Signal<ClientConfig>,
}

/// Stored session data
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub email: String,
    pub token: String,
}

/// Provider component that sets up auth context
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(|| storage::load::<AuthSession>(STORAGE_KEY));
    let config = use_signal(ClientConfig::from_env);

    // Sync session to storage
    use_effect(move || match session.read().as_ref() {
        Some(sess) => {
            if !storage::save(STORAGE_KEY, sess) {
                crate::log_warn!("Could not persist session for {}", sess.email);
            }
        }
        None => storage::remove(STORAGE_KEY),
    });

    use_context_provider(|| AuthContext { session, config });

    children
}

impl AuthContext {
    pub fn login(&mut self, email: String, token: String) {
        self.session.set(Some(AuthSession { email, token }));
    }

    /// Logout and clear session
    pub fn logout(&mut self) {
        self.session.set(None);
    }

    /// Create an API client configured for the current session
    pub fn client(&self) -> ApiClient {
        ApiClient::new()
            .with_base_url(self.config.read().api_base_url.clone())
            .with_token(self.session.read().as_ref().map(|s| s.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn email(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.email.clone())
    }
}

/// Resolves the session on every call, so a screen built before login
/// picks up the token once it exists.
#[async_trait(?Send)]
impl GroupsRemote for AuthContext {
    async fn perform(&self, action: RemoteAction) -> Result<MutationResult, ApiError> {
        self.client().perform(action).await
    }

    async fn my_groups(&self) -> Result<Fetched<Vec<Group>>, ApiError> {
        self.client().my_groups().await
    }

    async fn group(&self, id: GroupId) -> Result<Fetched<Group>, ApiError> {
        self.client().group(id).await
    }

    async fn birthdays(&self, id: GroupId) -> Result<Fetched<Vec<String>>, ApiError> {
        self.client().birthdays(id).await
    }
}
