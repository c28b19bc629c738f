//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{AppShell, GroupList, GroupProfile, Home, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        // Landing page redirects to the group list
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/groups")]
        GroupList {},
        #[route("/groups/:id")]
        GroupProfile { id: u64 },
}
