//! GroupMatch Client - Dioxus web application
//!
//! Screens, components and platform glue for the group dashboard. Screen
//! behavior lives in `groupmatch-client-core`; this crate wires it to
//! signals, the router and the HTTP backend.

pub mod logging;

pub mod api_client;
pub mod auth_session;
pub mod config;
pub mod storage;
pub mod timer;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod stores;
pub mod views;

pub use api_client::ApiClient;
pub use auth_session::{AuthContext, AuthProvider, AuthSession};
pub use config::ClientConfig;
pub use routes::Route;
