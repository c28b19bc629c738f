//! Wire models for groups and the forms that create or edit them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Description attached to interests entered as a comma-separated string.
pub const PLACEHOLDER_INTEREST_DESCRIPTION: &str = "beskrivelse";

// --- Identity ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// --- Groups ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Interest {
    pub fn with_placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: PLACEHOLDER_INTEREST_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub interests: Vec<Interest>,
    /// Member emails in server order. Duplicates are kept as delivered.
    #[serde(default)]
    pub members: Vec<String>,
    /// Whether the signed-in user administers this group.
    #[serde(default)]
    pub group_admin: bool,
    #[serde(default)]
    pub date: Option<String>,
}

// --- Forms ---

/// Values collected by the create/edit group form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupForm {
    pub name: String,
    pub quote: String,
    pub description: String,
    /// Comma-separated interest names, e.g. `"Hiking,Chess"`.
    pub interests: String,
    pub location: String,
    pub date: Option<String>,
}

impl GroupForm {
    /// Expand the form into the body the groups endpoint expects.
    pub fn to_request(&self) -> CreateGroupRequest {
        CreateGroupRequest {
            name: self.name.clone(),
            quote: self.quote.clone(),
            description: self.description.clone(),
            interests: parse_interests(&self.interests),
            location: self.location.clone(),
            date: self.date.clone(),
        }
    }
}

impl From<&Group> for GroupForm {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            quote: group.quote.clone(),
            description: group.description.clone(),
            interests: group
                .interests
                .iter()
                .map(|i| i.name.as_str())
                .collect::<Vec<_>>()
                .join(","),
            location: group.location.clone(),
            date: group.date.clone(),
        }
    }
}

/// Split a comma-separated interest string into interest records.
///
/// Order is preserved. Blank segments are dropped and a repeated name keeps
/// only its first occurrence.
pub fn parse_interests(raw: &str) -> Vec<Interest> {
    let mut interests: Vec<Interest> = Vec::new();
    for name in raw.split(',').map(str::trim) {
        if name.is_empty() || interests.iter().any(|i| i.name == name) {
            continue;
        }
        interests.push(Interest::with_placeholder(name));
    }
    interests
}

/// Values collected by the add-member form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddMemberForm {
    pub email: String,
}

// --- Request Types ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    pub quote: String,
    pub description: String,
    pub interests: Vec<Interest>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Updates send the same body shape as creation.
pub type UpdateGroupRequest = CreateGroupRequest;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub group_id: GroupId,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Group {
        Group {
            id: GroupId(7),
            name: "Bowlerne".to_string(),
            location: "Trondheim".to_string(),
            quote: "Strike!".to_string(),
            description: "We bowl".to_string(),
            interests: vec![
                Interest::with_placeholder("Wii Sports"),
                Interest::with_placeholder("Pils"),
            ],
            members: vec!["a@example.com".to_string(), "b@example.com".to_string()],
            group_admin: true,
            date: None,
        }
    }

    #[test]
    fn interests_keep_order_and_placeholder_description() {
        let parsed = parse_interests("Hiking,Chess");
        assert_eq!(
            parsed,
            vec![
                Interest {
                    name: "Hiking".to_string(),
                    description: "beskrivelse".to_string(),
                },
                Interest {
                    name: "Chess".to_string(),
                    description: "beskrivelse".to_string(),
                },
            ]
        );
    }

    #[test]
    fn interests_skip_blank_and_repeated_names() {
        let names: Vec<_> = parse_interests(" Fisking, ,Pils,Fisking,")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Fisking", "Pils"]);
        assert!(parse_interests("").is_empty());
    }

    #[test]
    fn edit_form_is_prefilled_from_group() {
        let form = GroupForm::from(&group());
        assert_eq!(form.name, "Bowlerne");
        assert_eq!(form.interests, "Wii Sports,Pils");
        assert_eq!(form.to_request().interests, group().interests);
    }

    #[test]
    fn group_decodes_camel_case_with_defaults() {
        let json = r#"{"id": 3, "name": "Gutta Krutt", "members": ["bob@example.com"], "groupAdmin": true}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, GroupId(3));
        assert!(group.group_admin);
        assert!(group.interests.is_empty());
        assert_eq!(group.members.len(), 1);
    }

    #[test]
    fn add_member_request_uses_camel_case() {
        let body = serde_json::to_value(AddMemberRequest {
            group_id: GroupId(9),
            email: "kare@example.com".to_string(),
        })
        .unwrap();
        assert_eq!(body["groupId"], 9);
        assert_eq!(body["email"], "kare@example.com");
    }
}
