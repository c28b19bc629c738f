//! A single group: fetching it and the detail view with its admin dialogs.

use std::rc::Rc;

use dioxus::prelude::*;
use groupmatch_client_core::{DetailDialog, GroupDetailController};
use groupmatch_shared::{AddMemberForm, Group, GroupForm, GroupId};

use crate::components::groups::{
    AddMemberFormView, AdminOnlyButton, ConfirmDialog, GroupFormView, InterestBadge, MembersCount,
};
use crate::components::ui::{ButtonVariant, Modal};
use crate::hooks::{
    use_refresh_flag, use_refreshable_resource, use_screen_context, use_view_token,
};
use crate::Route;

/// Route target for `/groups/:id`.
#[component]
pub fn GroupProfile(id: Signal<u64>) -> Element {
    let ctx = use_screen_context();
    let flag = use_refresh_flag();

    let data = use_refreshable_resource(flag, move || {
        let remote = ctx.remote.clone();
        let id = GroupId(*id.read());
        async move {
            let group = remote.group(id).await;
            let birthdays = remote.birthdays(id).await;
            (group, birthdays)
        }
    });

    let rendered = match &*data.read() {
        None => rsx! {
            p { class: "text-gray-500", "Loading group..." }
        },
        Some((Ok(fetched), _)) if fetched.missing_token => rsx! {
            p { class: "text-gray-600",
                "You need to "
                Link { to: Route::Login {}, class: "text-group-green underline", "log in" }
                " to see this group."
            }
        },
        Some((Ok(fetched), birthdays)) => match fetched.body.clone() {
            Some(group) => {
                let birthdays = birthdays
                    .as_ref()
                    .ok()
                    .and_then(|b| b.body.clone());
                rsx! {
                    GroupProfileDetail {
                        key: "{group.id}",
                        group,
                        birthdays,
                        refresh: move |_| flag.flip(),
                    }
                }
            }
            None => rsx! {
                p { class: "text-gray-500", "This group has no data." }
            },
        },
        Some((Err(err), _)) => {
            crate::log_warn!("failed to load group {}: {}", id.peek(), err.detail());
            rsx! {
                p { class: "text-group-red", "The group could not be loaded." }
            }
        }
    };

    rsx! {
        div { class: "max-w-3xl mx-auto", {rendered} }
    }
}

/// Shows one group and, for its admins, the add-member, edit and delete
/// actions.
#[component]
pub fn GroupProfileDetail(
    group: Group,
    birthdays: Option<Vec<String>>,
    #[props(default)] hide_admin_controls: bool,
    refresh: Option<EventHandler<()>>,
) -> Element {
    let ctx = use_screen_context();
    let token = use_view_token();
    let revision = use_signal(|| 0u64);

    let initial = group.clone();
    let detail = use_hook(move || {
        let mut controller = GroupDetailController::new(ctx, initial, token)
            .hide_admin_controls(hide_admin_controls)
            .on_change(Rc::new(move || {
                let mut revision = revision;
                *revision.write() += 1;
            }));
        if let Some(refresh) = refresh {
            controller = controller.with_refresh(Rc::new(move || refresh.call(())));
        }
        Rc::new(controller)
    });

    let open = use_callback({
        let detail = detail.clone();
        move |dialog: DetailDialog| {
            detail.open_dialog(dialog);
        }
    });
    let close = use_callback({
        let detail = detail.clone();
        move |dialog: DetailDialog| {
            detail.close_dialog(dialog);
        }
    });
    let add_member = use_callback({
        let detail = detail.clone();
        move |form: AddMemberForm| {
            let detail = detail.clone();
            spawn(async move { detail.submit_add_member(form).await });
        }
    });
    let edit = use_callback({
        let detail = detail.clone();
        move |form: GroupForm| {
            let detail = detail.clone();
            spawn(async move { detail.submit_edit(form).await });
        }
    });
    let delete = use_callback({
        let detail = detail.clone();
        move |_: ()| {
            let detail = detail.clone();
            spawn(async move { detail.confirm_delete().await });
        }
    });

    detail.sync(&group, birthdays.as_deref());
    // Subscribe to controller changes.
    let _ = revision.read();

    let group = detail.group();
    let admin = detail.shows_admin_controls();
    let age_gap = detail.age_gap_text();
    let edit_form = GroupForm::from(&group);

    let dialog = match detail.active_dialog() {
        Some(DetailDialog::AddMember) => rsx! {
            Modal {
                title: "Add member",
                on_close: move |_| close.call(DetailDialog::AddMember),
                AddMemberFormView { on_submit: add_member }
            }
        },
        Some(DetailDialog::Edit) => rsx! {
            Modal {
                title: "Edit group",
                on_close: move |_| close.call(DetailDialog::Edit),
                GroupFormView {
                    initial: edit_form,
                    submit_label: "Save",
                    on_submit: edit,
                }
            }
        },
        Some(DetailDialog::Delete) => rsx! {
            ConfirmDialog {
                title: "Delete group",
                message: "Do you want to delete this group?",
                confirm_label: "Delete",
                on_cancel: move |_| close.call(DetailDialog::Delete),
                on_confirm: delete,
            }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "bg-white border border-group-green rounded-md shadow-lg p-6 space-y-4",
            div { class: "flex items-center gap-3",
                h1 { class: "flex-1 text-3xl font-bold", "{group.name}" }
                MembersCount { members: group.members.clone() }
            }
            div { class: "flex flex-wrap gap-6 text-sm text-gray-700",
                span { "Age: {age_gap}" }
                if !group.location.is_empty() {
                    span { "Location: {group.location}" }
                }
                if let Some(date) = group.date.as_ref() {
                    span { "Date: {date}" }
                }
            }
            div { class: "flex flex-wrap gap-2",
                for interest in group.interests.iter() {
                    InterestBadge { key: "{interest.name}", interest: interest.clone() }
                }
            }
            if !group.quote.is_empty() {
                blockquote { class: "italic text-gray-600 border-l-4 border-group-green pl-3",
                    "\"{group.quote}\""
                }
            }
            p { class: "whitespace-pre-line", "{group.description}" }

            div { class: "flex flex-wrap gap-3 pt-4",
                AdminOnlyButton {
                    group_admin: admin,
                    label: "Add member",
                    disabled: detail.is_submitting(DetailDialog::AddMember),
                    onclick: move |_| open.call(DetailDialog::AddMember),
                }
                AdminOnlyButton {
                    group_admin: admin,
                    label: "Edit group",
                    disabled: detail.is_submitting(DetailDialog::Edit),
                    onclick: move |_| open.call(DetailDialog::Edit),
                }
                AdminOnlyButton {
                    group_admin: admin,
                    label: "Delete group",
                    variant: ButtonVariant::Danger,
                    disabled: detail.is_submitting(DetailDialog::Delete),
                    onclick: move |_| open.call(DetailDialog::Delete),
                }
            }
        }

        {dialog}
    }
}
