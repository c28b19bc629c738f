//! Group-specific components.

mod add_member_form;
mod confirm_dialog;
mod group_card;
mod group_form;

pub use add_member_form::AddMemberFormView;
pub use confirm_dialog::ConfirmDialog;
pub use group_card::{AdminOnlyButton, GroupCard, InterestBadge, MembersCount};
pub use group_form::GroupFormView;
