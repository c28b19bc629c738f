use std::rc::Rc;

use groupmatch_shared::ApiError;

use crate::remote::GroupsRemote;
use crate::signals::{AppSignals, Navigator, Notification, NotificationSink};

/// Shown when a call fails below the level of a backend answer.
pub const UNEXPECTED_FAILURE: &str = "Something went wrong. Please try again later.";

/// Collaborators handed to a screen controller at construction.
#[derive(Clone)]
pub struct ScreenContext {
    pub remote: Rc<dyn GroupsRemote>,
    pub notifications: Rc<dyn NotificationSink>,
    pub signals: Rc<dyn AppSignals>,
    pub navigator: Rc<dyn Navigator>,
}

impl ScreenContext {
    pub(crate) fn notify(&self, message: impl Into<String>) {
        self.notifications.publish(Notification::notify(message));
    }

    pub(crate) fn error(&self, message: impl Into<String>) {
        self.notifications.publish(Notification::error(message));
    }

    /// Log a transport failure and tell the user something went wrong.
    pub(crate) fn unexpected(&self, action: &str, err: &ApiError) {
        tracing::error!(action, error = %err, "remote call failed");
        self.error(UNEXPECTED_FAILURE);
    }
}
