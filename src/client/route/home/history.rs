use dioxus::prelude::*;

use crate::{
    client::{
        format::{action_label, format_datetime},
        model::error::ApiError,
    },
    model::log::ActionLogDto,
};

use super::AppealModal;

#[cfg(feature = "web")]
use crate::client::{api::staff::get_logs, model::refresh::RefreshContext};

/// Action log of one member. Members can appeal their own warnings from here.
#[component]
pub fn HistoryTab(member_id: u64, is_current_user: bool) -> Element {
    let mut logs = use_signal(|| None::<Result<Vec<ActionLogDto>, ApiError>>);
    let mut appeal_target = use_signal(|| None::<ActionLogDto>);
    let mut show_appeal = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let RefreshContext {
            logs: logs_refresh, ..
        } = use_context();

        let future = use_resource(use_reactive!(|member_id| async move {
            let _ = logs_refresh();
            get_logs(member_id).await
        }));

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                logs.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        match logs() {
            None => rsx! {
                div { class: "flex justify-center p-6", span { class: "loading loading-spinner" } }
            },
            Some(Err(err)) => rsx! {
                div { class: "alert alert-error", "{err}" }
            },
            Some(Ok(entries)) if entries.is_empty() => rsx! {
                p { class: "opacity-70 p-4", "No actions recorded." }
            },
            Some(Ok(entries)) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-sm",
                        thead {
                            tr {
                                th { "When" }
                                th { "Action" }
                                th { "Reason" }
                                th { "Details" }
                                if is_current_user { th {} }
                            }
                        }
                        tbody {
                            for entry in entries {
                                {
                                    let appealable = is_current_user && entry.action == "warn";
                                    let target = entry.clone();
                                    rsx! {
                                        tr {
                                            key: "{entry.id}",
                                            td { class: "whitespace-nowrap", "{format_datetime(&entry.created_at)}" }
                                            td {
                                                span { class: "badge badge-outline", "{action_label(&entry.action)}" }
                                                if let Some(level) = entry.warn_level {
                                                    span { class: "badge badge-warning badge-sm ml-1", "L{level}" }
                                                }
                                            }
                                            td { "{entry.reason}" }
                                            td { class: "opacity-70", {entry.detail.clone().unwrap_or_default()} }
                                            if is_current_user {
                                                td {
                                                    if appealable {
                                                        button {
                                                            class: "btn btn-xs btn-outline",
                                                            onclick: move |_| {
                                                                appeal_target.set(Some(target.clone()));
                                                                show_appeal.set(true);
                                                            },
                                                            "Appeal"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
        AppealModal { show: show_appeal, warning: appeal_target() }
    }
}
