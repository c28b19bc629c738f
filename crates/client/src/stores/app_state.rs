//! Notification, "left a deleted resource" flag and refresh signal.
//!
//! These live in context rather than in globals: [`AppStateProvider`] owns
//! the signals and every screen receives a copy of [`AppState`] through
//! its [`ScreenContext`](groupmatch_client_core::ScreenContext).

use dioxus::prelude::*;
use groupmatch_client_core::{
    AppSignals, Destination, Navigator as ScreenNavigator, Notification, NotificationSink,
    RefreshSignal,
};

use crate::Route;

/// The one notification currently shown, numbered by publication.
///
/// Each publish replaces the previous notification and bumps the serial,
/// so a timer started for one notification never clears a later one, even
/// when the later one has the same text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertSlot {
    serial: u64,
    current: Option<Notification>,
}

impl AlertSlot {
    pub fn publish(&mut self, notification: Notification) -> u64 {
        self.serial += 1;
        self.current = Some(notification);
        self.serial
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear the notification published as `serial`, unless a newer one
    /// has replaced it.
    pub fn expire(&mut self, serial: u64) -> bool {
        if self.serial != serial || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub alert: Signal<AlertSlot>,
    pub left_deleted: Signal<bool>,
    pub refresh: Signal<RefreshSignal>,
}

#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let alert = use_signal(AlertSlot::default);
    let left_deleted = use_signal(|| false);
    let refresh = use_signal(RefreshSignal::idle);

    use_context_provider(|| AppState {
        alert,
        left_deleted,
        refresh,
    });

    children
}

impl AppState {
    pub fn dismiss_alert(&self) {
        let mut alert = self.alert;
        alert.write().dismiss();
    }

    /// Timer-driven dismissal of the notification numbered `serial`.
    pub fn expire_alert(&self, serial: u64) {
        let mut alert = self.alert;
        if alert.peek().serial() == serial {
            alert.write().expire(serial);
        }
    }

    /// Read and clear the "left a deleted resource" flag.
    pub fn take_left_deleted(&self) -> bool {
        let mut left_deleted = self.left_deleted;
        let value = *left_deleted.peek();
        if value {
            left_deleted.set(false);
        }
        value
    }
}

impl NotificationSink for AppState {
    fn publish(&self, notification: Notification) {
        let mut alert = self.alert;
        alert.write().publish(notification);
    }
}

impl AppSignals for AppState {
    fn set_left_deleted(&self, value: bool) {
        let mut left_deleted = self.left_deleted;
        left_deleted.set(value);
    }

    fn set_refresh_signal(&self, signal: RefreshSignal) {
        let mut refresh = self.refresh;
        refresh.set(signal);
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::GroupList => Route::GroupList {},
        }
    }
}

/// Router-backed navigation for screen controllers.
#[derive(Clone)]
pub struct RouteNavigator(pub Navigator);

impl ScreenNavigator for RouteNavigator {
    fn go_to(&self, destination: Destination) {
        self.0.push(Route::from(destination));
    }
}
