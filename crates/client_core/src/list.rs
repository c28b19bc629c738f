//! The "my groups" dashboard: loading the list and creating groups.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use groupmatch_shared::{Group, GroupForm};

use crate::context::ScreenContext;
use crate::dialog::Dialogs;
use crate::remote::RemoteAction;
use crate::workflow::{CancellationToken, InFlight};

pub const GROUP_CREATE_FAILED: &str = "The group could not be created.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDialog {
    Create,
}

/// Boolean inverted only to make the view re-run its load.
///
/// The listener receives the new value; every toggle is a reload request,
/// even when two toggles bring the value back to where it started.
#[derive(Default)]
pub struct RefreshToggle {
    value: Cell<bool>,
    on_flip: Option<Rc<dyn Fn(bool)>>,
}

impl RefreshToggle {
    pub fn new(on_flip: Rc<dyn Fn(bool)>) -> Self {
        Self {
            value: Cell::new(false),
            on_flip: Some(on_flip),
        }
    }

    pub fn value(&self) -> bool {
        self.value.get()
    }

    pub fn toggle(&self) -> bool {
        let value = !self.value.get();
        self.value.set(value);
        if let Some(on_flip) = &self.on_flip {
            on_flip(value);
        }
        value
    }
}

#[derive(Debug, Default)]
struct ListState {
    groups: Vec<Group>,
    loaded: bool,
    needs_login: bool,
    dialogs: Dialogs<ListDialog>,
    in_flight: InFlight<ListDialog>,
}

pub struct GroupListController {
    ctx: ScreenContext,
    state: RefCell<ListState>,
    toggle: RefreshToggle,
    on_change: Option<Rc<dyn Fn()>>,
    token: CancellationToken,
}

impl GroupListController {
    pub fn new(ctx: ScreenContext, token: CancellationToken) -> Self {
        Self {
            ctx,
            state: RefCell::default(),
            toggle: RefreshToggle::default(),
            on_change: None,
            token,
        }
    }

    /// Listener for the refresh flip-flop. The view re-runs [`Self::load`]
    /// from it.
    pub fn with_refresh_listener(mut self, on_flip: Rc<dyn Fn(bool)>) -> Self {
        self.toggle = RefreshToggle::new(on_flip);
        self
    }

    pub fn on_change(mut self, on_change: Rc<dyn Fn()>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn groups(&self) -> Vec<Group> {
        self.state.borrow().groups.clone()
    }

    /// Whether a load has ever replaced the list.
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    /// Whether the last load was turned away for lack of a session token.
    pub fn needs_login(&self) -> bool {
        self.state.borrow().needs_login
    }

    pub fn refresh_flag(&self) -> bool {
        self.toggle.value()
    }

    pub fn toggle_refresh(&self) -> bool {
        self.toggle.toggle()
    }

    pub fn is_create_open(&self) -> bool {
        self.state.borrow().dialogs.is_open(ListDialog::Create)
    }

    pub fn is_creating(&self) -> bool {
        self.state.borrow().in_flight.is_submitting(ListDialog::Create)
    }

    pub fn open_create(&self) -> bool {
        let changed = self.state.borrow_mut().dialogs.open(ListDialog::Create);
        if changed {
            self.changed();
        }
        changed
    }

    pub fn close_create(&self) -> bool {
        let changed = self.state.borrow_mut().dialogs.close(ListDialog::Create);
        if changed {
            self.changed();
        }
        changed
    }

    /// Fetch the signed-in user's groups. Anything short of a usable answer
    /// leaves the current list in place.
    pub async fn load(&self) {
        let outcome = self.ctx.remote.my_groups().await;
        if self.token.is_cancelled() {
            tracing::debug!("group list torn down before load resolved");
            return;
        }

        match outcome {
            Ok(fetched) => match fetched.usable() {
                Some(groups) => {
                    {
                        let mut state = self.state.borrow_mut();
                        state.groups = groups;
                        state.loaded = true;
                        state.needs_login = false;
                    }
                    self.changed();
                }
                None => {
                    tracing::debug!("no session token, keeping current groups");
                    self.state.borrow_mut().needs_login = true;
                    self.changed();
                }
            },
            Err(err) => tracing::warn!(error = %err, "failed to load groups"),
        }
    }

    /// Create a group from the form. The list is reloaded afterwards
    /// whatever the outcome.
    pub async fn submit_create(&self, form: GroupForm) {
        {
            let mut state = self.state.borrow_mut();
            if !state.in_flight.begin(ListDialog::Create) {
                tracing::debug!("ignoring repeated create");
                return;
            }
            state.dialogs.close(ListDialog::Create);
        }
        self.changed();

        let outcome = self
            .ctx
            .remote
            .perform(RemoteAction::CreateGroup(form.to_request()))
            .await;
        if self.token.is_cancelled() {
            tracing::debug!("group list torn down before create resolved");
            return;
        }
        self.state.borrow_mut().in_flight.finish(ListDialog::Create);

        match outcome {
            Ok(result) if result.success => {
                self.ctx.notify(format!("Group {} was created.", form.name));
            }
            Ok(result) => {
                tracing::warn!(failure = ?result.failure, "group creation rejected");
                self.ctx.error(GROUP_CREATE_FAILED);
            }
            Err(err) => self.ctx.unexpected("create-group", &err),
        }
        self.toggle_refresh();
        self.changed();
    }

    fn changed(&self) {
        if let Some(on_change) = &self.on_change {
            on_change();
        }
    }
}
