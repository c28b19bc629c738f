//! Contracts for the app-wide stores a screen writes into.

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Notify,
    Error,
}

/// A toast written by a screen. Each write replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub active: bool,
}

impl Notification {
    pub fn notify(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Notify,
            message: message.into(),
            active: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            active: true,
        }
    }
}

/// Write side of the notification store.
pub trait NotificationSink {
    fn publish(&self, notification: Notification);
}

/// Cross-screen request for other views to re-derive their data.
#[derive(Clone)]
pub struct RefreshSignal {
    pub requested: bool,
    pub callback: Rc<dyn Fn()>,
}

impl RefreshSignal {
    /// Not requested, with a callback that does nothing.
    pub fn idle() -> Self {
        Self {
            requested: false,
            callback: Rc::new(|| {}),
        }
    }

    pub fn request(callback: Rc<dyn Fn()>) -> Self {
        Self {
            requested: true,
            callback,
        }
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::idle()
    }
}

impl fmt::Debug for RefreshSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshSignal")
            .field("requested", &self.requested)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RefreshSignal {
    fn eq(&self, other: &Self) -> bool {
        self.requested == other.requested && Rc::ptr_eq(&self.callback, &other.callback)
    }
}

/// Write side of the app-wide navigation and refresh flags.
pub trait AppSignals {
    /// Mark that the user just left a resource that was deleted.
    fn set_left_deleted(&self, value: bool);

    fn set_refresh_signal(&self, signal: RefreshSignal);
}

/// Screens a controller can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    GroupList,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::GroupList => "/groups",
        }
    }
}

pub trait Navigator {
    fn go_to(&self, destination: Destination);
}
