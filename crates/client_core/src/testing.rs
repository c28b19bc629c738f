//! Recording fakes for controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use groupmatch_shared::{ApiError, Group, GroupId, Interest};

use crate::context::ScreenContext;
use crate::remote::{Fetched, GroupsRemote, MutationResult, RemoteAction};
use crate::signals::{
    AppSignals, Destination, Navigator, Notification, NotificationKind, NotificationSink,
    RefreshSignal,
};
use crate::workflow::CancellationToken;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Remote(&'static str),
    Notified(NotificationKind, String),
    Refreshed,
    LeftDeleted(bool),
    RefreshSignal { requested: bool },
    Navigated(&'static str),
    Flipped(bool),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Remote that answers from queued responses and succeeds when the queue
/// is empty.
#[derive(Default)]
pub struct ScriptedRemote {
    log: EventLog,
    mutations: RefCell<VecDeque<Result<MutationResult, ApiError>>>,
    reads: RefCell<VecDeque<Result<Fetched<Vec<Group>>, ApiError>>>,
    cancel_during_call: RefCell<Option<CancellationToken>>,
    pub actions: RefCell<Vec<RemoteAction>>,
}

impl ScriptedRemote {
    pub fn answer(&self, outcome: Result<MutationResult, ApiError>) {
        self.mutations.borrow_mut().push_back(outcome);
    }

    pub fn answer_read(&self, outcome: Result<Fetched<Vec<Group>>, ApiError>) {
        self.reads.borrow_mut().push_back(outcome);
    }

    /// Tear the view down while the next call is in flight.
    pub fn cancel_during_call(&self, token: CancellationToken) {
        *self.cancel_during_call.borrow_mut() = Some(token);
    }

    fn in_flight(&self) {
        if let Some(token) = self.cancel_during_call.borrow_mut().take() {
            token.cancel();
        }
    }
}

#[async_trait(?Send)]
impl GroupsRemote for ScriptedRemote {
    async fn perform(&self, action: RemoteAction) -> Result<MutationResult, ApiError> {
        self.log.borrow_mut().push(Event::Remote(action.name()));
        self.actions.borrow_mut().push(action);
        self.in_flight();
        tokio::task::yield_now().await;
        self.mutations
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(MutationResult::succeeded(None)))
    }

    async fn my_groups(&self) -> Result<Fetched<Vec<Group>>, ApiError> {
        self.log.borrow_mut().push(Event::Remote("my-groups"));
        self.in_flight();
        tokio::task::yield_now().await;
        self.reads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Fetched::found(Vec::new())))
    }

    async fn group(&self, _id: GroupId) -> Result<Fetched<Group>, ApiError> {
        Ok(Fetched::missing_token())
    }

    async fn birthdays(&self, _id: GroupId) -> Result<Fetched<Vec<String>>, ApiError> {
        Ok(Fetched::missing_token())
    }
}

/// Records every store write and navigation into the event log.
pub struct Recorder {
    log: EventLog,
}

impl NotificationSink for Recorder {
    fn publish(&self, notification: Notification) {
        assert!(notification.active);
        self.log
            .borrow_mut()
            .push(Event::Notified(notification.kind, notification.message));
    }
}

impl AppSignals for Recorder {
    fn set_left_deleted(&self, value: bool) {
        self.log.borrow_mut().push(Event::LeftDeleted(value));
    }

    fn set_refresh_signal(&self, signal: RefreshSignal) {
        self.log.borrow_mut().push(Event::RefreshSignal {
            requested: signal.requested,
        });
    }
}

impl Navigator for Recorder {
    fn go_to(&self, destination: Destination) {
        self.log.borrow_mut().push(Event::Navigated(destination.path()));
    }
}

pub struct Harness {
    pub log: EventLog,
    pub remote: Rc<ScriptedRemote>,
    recorder: Rc<Recorder>,
}

impl Harness {
    pub fn new() -> Self {
        let log = EventLog::default();
        Self {
            remote: Rc::new(ScriptedRemote {
                log: log.clone(),
                ..Default::default()
            }),
            recorder: Rc::new(Recorder { log: log.clone() }),
            log,
        }
    }

    pub fn context(&self) -> ScreenContext {
        ScreenContext {
            remote: self.remote.clone(),
            notifications: self.recorder.clone(),
            signals: self.recorder.clone(),
            navigator: self.recorder.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Callback that logs `Event::Refreshed`.
    pub fn refresh_callback(&self) -> Rc<dyn Fn()> {
        let log = self.log.clone();
        Rc::new(move || log.borrow_mut().push(Event::Refreshed))
    }

    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notified(kind, message) => Some((kind, message)),
                _ => None,
            })
            .collect()
    }
}

pub fn sample_group(admin: bool) -> Group {
    Group {
        id: GroupId(42),
        name: "Gutta Krutt".to_string(),
        location: "Bergen".to_string(),
        quote: "Alltid klare".to_string(),
        description: "Fishing on weekends".to_string(),
        interests: vec![Interest::with_placeholder("Fisking")],
        members: vec!["bob@example.com".to_string(), "kare@example.com".to_string()],
        group_admin: admin,
        date: None,
    }
}
