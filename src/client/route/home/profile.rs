use dioxus::prelude::*;

use crate::{
    client::{
        format::{format_balance, format_date},
        model::auth::AuthContext,
    },
    model::staff::StaffDto,
};

use super::{ActionPanel, HistoryTab, LoaToggle, ProfileEditModal, StatsCard};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Overview,
    History,
}

#[component]
pub fn MemberProfile(member: StaffDto) -> Element {
    let auth = use_context::<AuthContext>();
    let is_admin = auth.read().is_admin();
    let mut tab = use_signal(|| ProfileTab::Overview);
    let mut show_edit = use_signal(|| false);

    let tab_class = move |t: ProfileTab| if tab() == t { "tab tab-active" } else { "tab" };
    let warn_class = match member.warn_count {
        0 => "",
        1 | 2 => "text-warning",
        _ => "text-error",
    };

    rsx! {
        div {
            class: "card bg-base-200 overflow-hidden",
            if let Some(banner) = member.banner_url.clone() {
                img { src: "{banner}", alt: "", class: "w-full h-32 object-cover" }
            } else {
                div { class: "w-full h-32 bg-base-300" }
            }
            div {
                class: "card-body gap-4",
                div {
                    class: "flex flex-wrap items-end gap-4",
                    img {
                        src: "{member.avatar_url}",
                        alt: "{member.display_name}",
                        class: "w-20 h-20 rounded-full -mt-14 border-4 border-base-200",
                    }
                    div {
                        class: "flex-1 min-w-0",
                        div {
                            class: "flex flex-wrap items-center gap-2",
                            h2 { class: "card-title", "{member.display_name}" }
                            span { class: "badge badge-primary", "{member.rank_name}" }
                            if let Some(loa) = member.loa.clone() {
                                span {
                                    class: "badge badge-warning",
                                    title: loa.reason.clone().unwrap_or_default(),
                                    "LOA until {format_date(&loa.until)}"
                                }
                            }
                        }
                        p { class: "opacity-70", "@{member.username}" }
                    }
                    if member.is_current_user {
                        button {
                            class: "btn btn-sm btn-outline",
                            onclick: move |_| show_edit.set(true),
                            "Edit profile"
                        }
                    }
                }

                div {
                    class: "stats stats-vertical md:stats-horizontal bg-base-100",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Warnings" }
                        div { class: "stat-value {warn_class}", "{member.warn_count}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Balance" }
                        div { class: "stat-value", "{format_balance(member.balance)}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Minecraft" }
                        div {
                            class: "stat-value text-lg",
                            {member.minecraft_nick.clone().unwrap_or_else(|| "not linked".to_string())}
                        }
                    }
                }

                div {
                    role: "tablist",
                    class: "tabs tabs-border",
                    a {
                        role: "tab",
                        class: tab_class(ProfileTab::Overview),
                        onclick: move |_| tab.set(ProfileTab::Overview),
                        "Overview"
                    }
                    a {
                        role: "tab",
                        class: tab_class(ProfileTab::History),
                        onclick: move |_| tab.set(ProfileTab::History),
                        "History"
                    }
                }

                match tab() {
                    ProfileTab::Overview => rsx! {
                        div {
                            class: "flex flex-col gap-4",
                            if member.is_current_user {
                                LoaToggle { loa: member.loa.clone() }
                            }
                            if let Some(nick) = member.minecraft_nick.clone() {
                                StatsCard { nick }
                            }
                            if is_admin {
                                ActionPanel { member: member.clone() }
                            }
                        }
                    },
                    ProfileTab::History => rsx! {
                        HistoryTab { member_id: member.id, is_current_user: member.is_current_user }
                    },
                }
            }
        }
        if member.is_current_user {
            ProfileEditModal { show: show_edit, member: member.clone() }
        }
    }
}
