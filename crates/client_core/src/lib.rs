//! Screen orchestration for the groupmatch groups feature.
//!
//! Controllers in this crate hold no rendering code. A view builds a
//! [`ScreenContext`] from its stores, hands it to a controller, and renders
//! whatever the controller reports.

pub mod age;
pub mod context;
pub mod detail;
pub mod dialog;
pub mod list;
pub mod remote;
pub mod signals;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use age::{age_gap_text, AGE_GAP_PLACEHOLDER};
pub use context::{ScreenContext, UNEXPECTED_FAILURE};
pub use detail::{DetailDialog, GroupDetailController};
pub use dialog::{DialogState, Dialogs};
pub use list::{GroupListController, ListDialog, RefreshToggle};
pub use remote::{Fetched, GroupsRemote, MutationResult, RemoteAction, Verb};
pub use signals::{
    AppSignals, Destination, Navigator, Notification, NotificationKind, NotificationSink,
    RefreshSignal,
};
pub use workflow::{CancellationToken, InFlight};
