//! Hooks shared by the group screens.

pub mod refreshable_resource;
pub mod screen_context;

pub use refreshable_resource::{use_refresh_flag, use_refreshable_resource, RefreshFlag};
pub use screen_context::{use_screen_context, use_view_token};
