//! HTTP API client for the groups backend.

use async_trait::async_trait;
use groupmatch_client_core::{Fetched, GroupsRemote, MutationResult, RemoteAction, Verb};
use groupmatch_shared::{
    auth_header, group_birthdays_path, group_path, ApiError, Group, GroupId, LoginRequest,
    LoginResponse, LOGIN_PATH, MY_GROUPS_PATH,
};
use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client that attaches the session token to authenticated calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            token: None,
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Send a request and return the raw body of a successful response.
    ///
    /// Authenticated calls without a token fail with
    /// [`ApiError::MissingToken`] before anything is sent.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<String, ApiError> {
        let mut rb = self.client.request(method, self.url(path));

        if authenticated {
            let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
            rb = rb.header(header::AUTHORIZATION, auth_header(token));
        }
        if let Some(body) = body {
            rb = rb.json(body);
        }

        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// Make an authenticated GET request
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let text = self.send(Method::GET, path, None, true).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Deserialize(e.to_string()))?;
        let text = self.send(Method::POST, LOGIN_PATH, Some(&body), false).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    async fn call(&self, action: &RemoteAction) -> Result<Option<Value>, ApiError> {
        let body = action.body()?;
        let text = self
            .send(method_for(action.verb()), &action.path(), body.as_ref(), true)
            .await?;
        Ok(decode_body(&text))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn method_for(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    }
}

/// Decode the body of an accepted mutation.
///
/// The status already decided the outcome, so an empty (e.g. `204 No
/// Content`) or non-JSON body only means there is nothing to hand back.
fn decode_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            crate::log_debug!("ignoring non-JSON success body: {}", e);
            None
        }
    }
}

#[async_trait(?Send)]
impl GroupsRemote for ApiClient {
    async fn perform(&self, action: RemoteAction) -> Result<MutationResult, ApiError> {
        let outcome = self.call(&action).await;
        if let Err(err) = &outcome {
            crate::log_debug!("{} failed: {}", action.name(), err.detail());
        }
        MutationResult::settle(outcome)
    }

    async fn my_groups(&self) -> Result<Fetched<Vec<Group>>, ApiError> {
        Fetched::settle(self.get_json(MY_GROUPS_PATH).await)
    }

    async fn group(&self, id: GroupId) -> Result<Fetched<Group>, ApiError> {
        Fetched::settle(self.get_json(&group_path(id)).await)
    }

    async fn birthdays(&self, id: GroupId) -> Result<Fetched<Vec<String>>, ApiError> {
        Fetched::settle(self.get_json(&group_birthdays_path(id)).await)
    }
}
