//! REST paths and header conventions for the groups backend.

use crate::models::GroupId;

/// Authorization header scheme: `Authorization: Token <token>`.
pub const AUTH_SCHEME: &str = "Token";

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const MY_GROUPS_PATH: &str = "/api/groups/getMyGroups";
pub const GROUPS_PATH: &str = "/api/groups/";
pub const ADD_MEMBER_PATH: &str = "/api/groups/addUser/";

/// Path of a single group resource.
pub fn group_path(id: GroupId) -> String {
    format!("{GROUPS_PATH}{id}/")
}

/// Path listing the birthdays of a group's members.
pub fn group_birthdays_path(id: GroupId) -> String {
    format!("{GROUPS_PATH}{id}/getBirthdays/")
}

/// Build the `Authorization` header value for a session token.
pub fn auth_header(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}
