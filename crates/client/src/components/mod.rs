//! Reusable UI components.

pub mod groups;
pub mod toast;
pub mod ui;

pub use toast::Toast;
