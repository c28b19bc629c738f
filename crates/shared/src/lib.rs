//! Shared types and utilities for the groupmatch client crates.

pub mod api;
pub mod error;
pub mod models;

pub use api::*;
pub use error::*;
pub use models::*;
