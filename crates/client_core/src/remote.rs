//! The remote action contract: every group mutation resolves to a uniform
//! [`MutationResult`] envelope.

use async_trait::async_trait;
use groupmatch_shared::{
    group_path, AddMemberRequest, ApiError, CreateGroupRequest, FailureKind, Group, GroupId,
    UpdateGroupRequest, ADD_MEMBER_PATH, GROUPS_PATH,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP verb of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// A single group mutation and its payload.
///
/// Payloads are already shaped by the caller; interest strings, for example,
/// are expanded before the action is built.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteAction {
    CreateGroup(CreateGroupRequest),
    UpdateGroup { id: GroupId, body: UpdateGroupRequest },
    DeleteGroup(GroupId),
    AddMember(AddMemberRequest),
}

impl RemoteAction {
    pub fn name(&self) -> &'static str {
        match self {
            RemoteAction::CreateGroup(_) => "create-group",
            RemoteAction::UpdateGroup { .. } => "update-group",
            RemoteAction::DeleteGroup(_) => "delete-group",
            RemoteAction::AddMember(_) => "add-member",
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            RemoteAction::CreateGroup(_) | RemoteAction::AddMember(_) => Verb::Post,
            RemoteAction::UpdateGroup { .. } => Verb::Put,
            RemoteAction::DeleteGroup(_) => Verb::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            RemoteAction::CreateGroup(_) => GROUPS_PATH.to_string(),
            RemoteAction::UpdateGroup { id, .. } | RemoteAction::DeleteGroup(id) => group_path(*id),
            RemoteAction::AddMember(_) => ADD_MEMBER_PATH.to_string(),
        }
    }

    /// JSON body of the call, if the verb carries one.
    pub fn body(&self) -> Result<Option<Value>, ApiError> {
        let body = match self {
            RemoteAction::CreateGroup(body) | RemoteAction::UpdateGroup { body, .. } => {
                serde_json::to_value(body)
            }
            RemoteAction::AddMember(body) => serde_json::to_value(body),
            RemoteAction::DeleteGroup(_) => return Ok(None),
        };
        body.map(Some).map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

/// Uniform envelope returned by every remote action.
///
/// When `success` is false the body must not be relied upon; `failure`
/// says what kind of expected failure occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult<T = Value> {
    pub success: bool,
    pub body: Option<T>,
    pub failure: Option<FailureKind>,
}

impl<T> MutationResult<T> {
    pub fn succeeded(body: Option<T>) -> Self {
        Self {
            success: true,
            body,
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind) -> Self {
        Self {
            success: false,
            body: None,
            failure: Some(kind),
        }
    }

    /// Fold a raw call outcome into the envelope.
    ///
    /// Expected failures (missing token, HTTP error status) become
    /// `success: false`; transport failures are passed back as `Err`.
    pub fn settle(outcome: Result<Option<T>, ApiError>) -> Result<Self, ApiError> {
        match outcome {
            Ok(body) => Ok(Self::succeeded(body)),
            Err(err) => match err.failure_kind() {
                Some(kind) => Ok(Self::failed(kind)),
                None => Err(err),
            },
        }
    }
}

impl MutationResult<Value> {
    /// Decode the body into a concrete type, if there is a usable one.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.success {
            return None;
        }
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_value(body.clone()).ok())
    }
}

/// Outcome of an authenticated read.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub missing_token: bool,
    pub body: Option<T>,
}

impl<T> Fetched<T> {
    pub fn found(body: T) -> Self {
        Self {
            missing_token: false,
            body: Some(body),
        }
    }

    pub fn missing_token() -> Self {
        Self {
            missing_token: true,
            body: None,
        }
    }

    /// The body, unless the read hit the missing-token condition.
    pub fn usable(self) -> Option<T> {
        if self.missing_token {
            None
        } else {
            self.body
        }
    }

    /// Fold a raw read outcome. A missing token is a soft failure, other
    /// errors are returned.
    pub fn settle(outcome: Result<T, ApiError>) -> Result<Self, ApiError> {
        match outcome {
            Ok(body) => Ok(Self::found(body)),
            Err(ApiError::MissingToken) => Ok(Self::missing_token()),
            Err(err) => Err(err),
        }
    }
}

/// Remote collaborator for the group screens.
///
/// Implementations never retry. `Err` is reserved for transport-level
/// failures; everything the backend answers is folded into the envelopes.
#[async_trait(?Send)]
pub trait GroupsRemote {
    async fn perform(&self, action: RemoteAction) -> Result<MutationResult, ApiError>;

    async fn my_groups(&self) -> Result<Fetched<Vec<Group>>, ApiError>;

    async fn group(&self, id: GroupId) -> Result<Fetched<Group>, ApiError>;

    async fn birthdays(&self, id: GroupId) -> Result<Fetched<Vec<String>>, ApiError>;
}
