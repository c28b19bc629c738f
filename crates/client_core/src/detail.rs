//! Workflows behind a single group's profile screen: add member, edit and
//! delete.
//!
//! Every handler follows the same steps: mark the action as submitting,
//! close its dialog, call the remote, then (if the view is still alive)
//! branch on the result and write to the shared stores.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use groupmatch_shared::{AddMemberForm, AddMemberRequest, Group, GroupForm};

use crate::age::{age_gap_text, AGE_GAP_PLACEHOLDER};
use crate::context::ScreenContext;
use crate::dialog::Dialogs;
use crate::remote::RemoteAction;
use crate::signals::{Destination, RefreshSignal};
use crate::workflow::{CancellationToken, InFlight};

pub const MEMBER_ADDED: &str = "Successfully added member to group";
pub const MEMBER_ADD_FAILED: &str =
    "An error occurred. This could be a server error, or the person does not exist.";
pub const GROUP_EDITED: &str = "Successfully edited group";
pub const GROUP_EDIT_FAILED: &str = "An error occurred. Please try again later.";

/// Admin dialogs of the detail screen. Each one backs exactly one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailDialog {
    AddMember,
    Edit,
    Delete,
}

#[derive(Debug, Clone)]
struct DetailState {
    group: Group,
    birthdays: Option<Vec<String>>,
    dialogs: Dialogs<DetailDialog>,
    in_flight: InFlight<DetailDialog>,
}

pub struct GroupDetailController {
    ctx: ScreenContext,
    state: RefCell<DetailState>,
    hide_admin_controls: bool,
    refresh: Option<Rc<dyn Fn()>>,
    on_change: Option<Rc<dyn Fn()>>,
    token: CancellationToken,
}

impl GroupDetailController {
    pub fn new(ctx: ScreenContext, group: Group, token: CancellationToken) -> Self {
        Self {
            ctx,
            state: RefCell::new(DetailState {
                group,
                birthdays: None,
                dialogs: Dialogs::new(),
                in_flight: InFlight::new(),
            }),
            hide_admin_controls: false,
            refresh: None,
            on_change: None,
            token,
        }
    }

    /// Called after a successful add-member or edit.
    pub fn with_refresh(mut self, refresh: Rc<dyn Fn()>) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn hide_admin_controls(mut self, hide: bool) -> Self {
        self.hide_admin_controls = hide;
        self
    }

    /// Called whenever dialog or submission state changes.
    pub fn on_change(mut self, on_change: Rc<dyn Fn()>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Replace the displayed data with a fresh fetch. Does not notify.
    pub fn sync(&self, group: &Group, birthdays: Option<&[String]>) {
        let mut state = self.state.borrow_mut();
        if state.group != *group {
            state.group = group.clone();
        }
        state.birthdays = birthdays.map(<[String]>::to_vec);
    }

    pub fn group(&self) -> Group {
        self.state.borrow().group.clone()
    }

    pub fn shows_admin_controls(&self) -> bool {
        !self.hide_admin_controls && self.state.borrow().group.group_admin
    }

    pub fn active_dialog(&self) -> Option<DetailDialog> {
        self.state.borrow().dialogs.active()
    }

    pub fn is_submitting(&self, action: DetailDialog) -> bool {
        self.state.borrow().in_flight.is_submitting(action)
    }

    pub fn age_gap_text(&self) -> String {
        self.age_gap_text_on(Local::now().date_naive())
    }

    pub fn age_gap_text_on(&self, today: NaiveDate) -> String {
        match &self.state.borrow().birthdays {
            Some(birthdays) => age_gap_text(birthdays, today),
            None => AGE_GAP_PLACEHOLDER.to_string(),
        }
    }

    /// Open an admin dialog. Refused when admin controls are not shown.
    pub fn open_dialog(&self, dialog: DetailDialog) -> bool {
        if !self.shows_admin_controls() {
            return false;
        }
        let changed = self.state.borrow_mut().dialogs.open(dialog);
        if changed {
            self.changed();
        }
        changed
    }

    pub fn close_dialog(&self, dialog: DetailDialog) -> bool {
        let changed = self.state.borrow_mut().dialogs.close(dialog);
        if changed {
            self.changed();
        }
        changed
    }

    pub async fn submit_add_member(&self, form: AddMemberForm) {
        let Some(group) = self.begin(DetailDialog::AddMember) else {
            return;
        };
        let action = RemoteAction::AddMember(AddMemberRequest {
            group_id: group.id,
            email: form.email,
        });
        let outcome = self.ctx.remote.perform(action).await;
        if !self.settle(DetailDialog::AddMember) {
            return;
        }

        match outcome {
            Ok(result) if result.success => {
                self.ctx.notify(MEMBER_ADDED);
                self.run_refresh();
            }
            Ok(result) => {
                tracing::warn!(group = %group.id, failure = ?result.failure, "add member rejected");
                self.ctx.error(MEMBER_ADD_FAILED);
            }
            Err(err) => self.ctx.unexpected("add-member", &err),
        }
    }

    pub async fn submit_edit(&self, form: GroupForm) {
        let Some(group) = self.begin(DetailDialog::Edit) else {
            return;
        };
        let action = RemoteAction::UpdateGroup {
            id: group.id,
            body: form.to_request(),
        };
        let outcome = self.ctx.remote.perform(action).await;
        if !self.settle(DetailDialog::Edit) {
            return;
        }

        match outcome {
            Ok(result) if result.success => {
                self.ctx.notify(GROUP_EDITED);
                self.run_refresh();
            }
            Ok(result) => {
                tracing::warn!(group = %group.id, failure = ?result.failure, "group update rejected");
                self.ctx.error(GROUP_EDIT_FAILED);
            }
            Err(err) => self.ctx.unexpected("update-group", &err),
        }
    }

    /// Delete the group and, on success, leave for the group list.
    pub async fn confirm_delete(&self) {
        let Some(group) = self.begin(DetailDialog::Delete) else {
            return;
        };
        let outcome = self.ctx.remote.perform(RemoteAction::DeleteGroup(group.id)).await;
        if !self.settle(DetailDialog::Delete) {
            return;
        }

        match outcome {
            Ok(result) if result.success => {
                self.ctx
                    .notify(format!("Group {} was successfully deleted.", group.name));
                self.ctx.signals.set_left_deleted(true);
                self.ctx.signals.set_refresh_signal(RefreshSignal::idle());
                self.ctx.navigator.go_to(Destination::GroupList);
            }
            Ok(result) => {
                tracing::warn!(group = %group.id, failure = ?result.failure, "group delete rejected");
                self.ctx
                    .error(format!("Group {} could not be deleted.", group.name));
            }
            Err(err) => self.ctx.unexpected("delete-group", &err),
        }
    }

    /// Start `action`: returns the group it acts on, or `None` if the same
    /// action is already submitting. Closes the action's dialog.
    fn begin(&self, action: DetailDialog) -> Option<Group> {
        let group = {
            let mut state = self.state.borrow_mut();
            if !state.in_flight.begin(action) {
                tracing::debug!(?action, "ignoring repeated submit");
                return None;
            }
            state.dialogs.close(action);
            state.group.clone()
        };
        self.changed();
        Some(group)
    }

    /// Finish `action` after the remote answered. Returns `false` when the
    /// view is gone and nothing else should happen.
    fn settle(&self, action: DetailDialog) -> bool {
        if self.token.is_cancelled() {
            tracing::debug!(?action, "view torn down before the call resolved");
            return false;
        }
        self.state.borrow_mut().in_flight.finish(action);
        self.changed();
        true
    }

    fn run_refresh(&self) {
        if let Some(refresh) = &self.refresh {
            refresh();
        }
    }

    fn changed(&self) {
        if let Some(on_change) = &self.on_change {
            on_change();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UNEXPECTED_FAILURE;
    use crate::remote::MutationResult;
    use crate::signals::NotificationKind;
    use crate::testing::{sample_group, Event, Harness};
    use groupmatch_shared::{ApiError, FailureKind};
    use std::cell::Cell;

    fn controller(harness: &Harness) -> GroupDetailController {
        GroupDetailController::new(harness.context(), sample_group(true), CancellationToken::new())
            .with_refresh(harness.refresh_callback())
    }

    fn member(email: &str) -> AddMemberForm {
        AddMemberForm {
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn add_member_success_notifies_then_refreshes() {
        let harness = Harness::new();
        let detail = controller(&harness);
        assert!(detail.open_dialog(DetailDialog::AddMember));

        detail.submit_add_member(member("ole@example.com")).await;

        assert_eq!(detail.active_dialog(), None);
        assert_eq!(
            harness.events(),
            vec![
                Event::Remote("add-member"),
                Event::Notified(NotificationKind::Notify, MEMBER_ADDED.to_string()),
                Event::Refreshed,
            ]
        );
        let actions = harness.remote.actions.borrow();
        assert_eq!(
            actions[0],
            RemoteAction::AddMember(AddMemberRequest {
                group_id: sample_group(true).id,
                email: "ole@example.com".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn add_member_without_refresh_callback_only_notifies() {
        let harness = Harness::new();
        let detail =
            GroupDetailController::new(harness.context(), sample_group(true), CancellationToken::new());

        detail.submit_add_member(member("ole@example.com")).await;

        assert_eq!(
            harness.notifications(),
            vec![(NotificationKind::Notify, MEMBER_ADDED.to_string())]
        );
        assert!(!harness.events().contains(&Event::Refreshed));
    }

    #[tokio::test]
    async fn add_member_failure_is_one_generic_error() {
        for kind in [FailureKind::NotFound, FailureKind::Server, FailureKind::MissingToken] {
            let harness = Harness::new();
            harness.remote.answer(Ok(MutationResult::failed(kind)));
            let detail = controller(&harness);
            detail.open_dialog(DetailDialog::AddMember);

            detail.submit_add_member(member("ghost@example.com")).await;

            assert_eq!(detail.active_dialog(), None);
            assert_eq!(
                harness.notifications(),
                vec![(NotificationKind::Error, MEMBER_ADD_FAILED.to_string())]
            );
            assert!(!harness.events().contains(&Event::Refreshed));
        }
    }

    #[tokio::test]
    async fn edit_sends_expanded_interests_and_refreshes() {
        let harness = Harness::new();
        let detail = controller(&harness);
        detail.open_dialog(DetailDialog::Edit);
        let form = GroupForm {
            name: "Gutta Krutt".to_string(),
            interests: "Fisking,Pils".to_string(),
            ..GroupForm::from(&sample_group(true))
        };

        detail.submit_edit(form.clone()).await;

        assert_eq!(detail.active_dialog(), None);
        assert_eq!(
            harness.events(),
            vec![
                Event::Remote("update-group"),
                Event::Notified(NotificationKind::Notify, GROUP_EDITED.to_string()),
                Event::Refreshed,
            ]
        );
        let actions = harness.remote.actions.borrow();
        match &actions[0] {
            RemoteAction::UpdateGroup { id, body } => {
                assert_eq!(*id, sample_group(true).id);
                assert_eq!(body.interests.len(), 2);
                assert_eq!(body.interests[1].name, "Pils");
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[tokio::test]
    async fn edit_failure_reports_error_without_refresh() {
        let harness = Harness::new();
        harness.remote.answer(Ok(MutationResult::failed(FailureKind::Invalid)));
        let detail = controller(&harness);

        detail.submit_edit(GroupForm::default()).await;

        assert_eq!(
            harness.notifications(),
            vec![(NotificationKind::Error, GROUP_EDIT_FAILED.to_string())]
        );
        assert!(!harness.events().contains(&Event::Refreshed));
    }

    #[tokio::test]
    async fn delete_success_flags_resets_signal_and_navigates_last() {
        let harness = Harness::new();
        let detail = controller(&harness);
        detail.open_dialog(DetailDialog::Delete);

        detail.confirm_delete().await;

        assert_eq!(detail.active_dialog(), None);
        assert_eq!(
            harness.events(),
            vec![
                Event::Remote("delete-group"),
                Event::Notified(
                    NotificationKind::Notify,
                    "Group Gutta Krutt was successfully deleted.".to_string()
                ),
                Event::LeftDeleted(true),
                Event::RefreshSignal { requested: false },
                Event::Navigated("/groups"),
            ]
        );
    }

    #[tokio::test]
    async fn delete_failure_stays_on_screen() {
        let harness = Harness::new();
        harness.remote.answer(Ok(MutationResult::failed(FailureKind::Forbidden)));
        let detail = controller(&harness);
        detail.open_dialog(DetailDialog::Delete);

        detail.confirm_delete().await;

        assert_eq!(
            harness.events(),
            vec![
                Event::Remote("delete-group"),
                Event::Notified(
                    NotificationKind::Error,
                    "Group Gutta Krutt could not be deleted.".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn transport_failures_share_one_policy() {
        let harness = Harness::new();
        for _ in 0..3 {
            harness.remote.answer(Err(ApiError::Network("connection reset".into())));
        }
        let detail = controller(&harness);

        detail.submit_add_member(member("ole@example.com")).await;
        detail.submit_edit(GroupForm::default()).await;
        detail.confirm_delete().await;

        let unexpected = (NotificationKind::Error, UNEXPECTED_FAILURE.to_string());
        assert_eq!(harness.notifications(), vec![unexpected.clone(), unexpected.clone(), unexpected]);
        let events = harness.events();
        assert!(!events.contains(&Event::Refreshed));
        assert!(!events.iter().any(|e| matches!(e, Event::Navigated(_) | Event::LeftDeleted(_))));
        assert!(!detail.is_submitting(DetailDialog::Delete));
    }

    #[tokio::test]
    async fn torn_down_view_skips_everything_after_the_call() {
        let harness = Harness::new();
        let token = CancellationToken::new();
        harness.remote.cancel_during_call(token.clone());
        let detail = GroupDetailController::new(harness.context(), sample_group(true), token)
            .with_refresh(harness.refresh_callback());

        detail.confirm_delete().await;

        assert_eq!(harness.events(), vec![Event::Remote("delete-group")]);
    }

    #[tokio::test]
    async fn repeated_submit_while_in_flight_is_ignored() {
        let harness = Harness::new();
        let detail = controller(&harness);

        tokio::join!(
            detail.submit_add_member(member("a@example.com")),
            detail.submit_add_member(member("a@example.com")),
        );

        assert_eq!(harness.remote.actions.borrow().len(), 1);
        assert!(!detail.is_submitting(DetailDialog::AddMember));
    }

    #[test]
    fn admin_dialogs_need_admin_rights() {
        let harness = Harness::new();
        let member_view =
            GroupDetailController::new(harness.context(), sample_group(false), CancellationToken::new());
        assert!(!member_view.shows_admin_controls());
        assert!(!member_view.open_dialog(DetailDialog::Edit));

        let hidden = controller(&harness).hide_admin_controls(true);
        assert!(!hidden.open_dialog(DetailDialog::Delete));
    }

    #[test]
    fn one_dialog_at_a_time_and_idempotent_close() {
        let harness = Harness::new();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let detail = controller(&harness).on_change(Rc::new(move || counter.set(counter.get() + 1)));

        assert!(detail.open_dialog(DetailDialog::Edit));
        assert!(detail.open_dialog(DetailDialog::Delete));
        assert_eq!(detail.active_dialog(), Some(DetailDialog::Delete));
        assert!(!detail.open_dialog(DetailDialog::Delete));

        assert!(detail.close_dialog(DetailDialog::Delete));
        assert!(!detail.close_dialog(DetailDialog::Delete));
        assert_eq!(changes.get(), 3);
        assert!(harness.events().is_empty());
    }

    #[test]
    fn age_gap_uses_synced_birthdays() {
        let harness = Harness::new();
        let detail = controller(&harness);
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(detail.age_gap_text_on(today), "...");

        let birthdays = vec!["2000-01-01".to_string(), "1994-06-01".to_string()];
        detail.sync(&sample_group(true), Some(&birthdays));
        assert_eq!(detail.age_gap_text_on(today), "24-29 years");
    }
}
