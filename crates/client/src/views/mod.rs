//! View components for the application.

pub mod group_profile;
pub mod groups;
pub mod home;
pub mod layouts;
pub mod login;

pub use group_profile::{GroupProfile, GroupProfileDetail};
pub use groups::GroupList;
pub use home::Home;
pub use layouts::AppShell;
pub use login::Login;
