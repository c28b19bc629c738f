use dioxus::prelude::*;
use groupmatch_shared::{Group, Interest};

use crate::components::ui::{Button, ButtonVariant};
use crate::Route;

#[component]
pub fn InterestBadge(interest: Interest) -> Element {
    rsx! {
        span {
            class: "px-2 py-0.5 text-sm border border-group-green rounded-md shadow-sm",
            title: "{interest.description}",
            "{interest.name}"
        }
    }
}

#[component]
pub fn MembersCount(members: Vec<String>) -> Element {
    let count = members.len();
    rsx! {
        span { class: "inline-flex items-center gap-1 px-2 border border-group-green rounded-md shadow-sm",
            "{count}"
            span { class: "text-group-green", "👤" }
        }
    }
}

/// Button rendered only for group admins.
#[component]
pub fn AdminOnlyButton(
    group_admin: bool,
    label: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<()>,
) -> Element {
    if !group_admin {
        return rsx! {};
    }
    rsx! {
        Button {
            class: "w-48",
            variant,
            disabled,
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

/// Summary of one group in the list, linking to its profile.
#[component]
pub fn GroupCard(group: Group) -> Element {
    rsx! {
        Link {
            to: Route::GroupProfile { id: group.id.0 },
            class: "block w-[370px] bg-white border border-group-green rounded-md shadow-lg p-2 hover:shadow-xl transition-shadow",
            div { class: "flex items-center gap-3",
                div { class: "w-10 h-10 rounded-full bg-group-green text-white flex items-center justify-center font-bold",
                    {group.name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                }
                div { class: "flex-1 font-bold truncate", "{group.name}" }
                MembersCount { members: group.members.clone() }
            }
            div { class: "flex flex-wrap gap-2 mt-2",
                for interest in group.interests.iter() {
                    InterestBadge { key: "{interest.name}", interest: interest.clone() }
                }
            }
        }
    }
}
