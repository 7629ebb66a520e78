use dioxus::prelude::*;

use crate::{
    client::{
        format::{format_datetime, format_playtime},
        model::error::ApiError,
    },
    model::stats::ModerationStatsDto,
};

#[cfg(feature = "web")]
use crate::client::api::stats::get_stats;

/// LiteBans and check counters for a Minecraft nick.
#[component]
pub fn StatsCard(nick: String) -> Element {
    let mut stats = use_signal(|| None::<Result<ModerationStatsDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|nick| async move { get_stats(&nick).await }));

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                stats.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        div {
            class: "card bg-base-100",
            div {
                class: "card-body p-4",
                h3 { class: "font-semibold", "Moderation stats for {nick}" }
                match stats() {
                    None => rsx! { span { class: "loading loading-dots loading-sm" } },
                    Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                    Some(Ok(stats)) => rsx! {
                        div {
                            class: "grid grid-cols-2 md:grid-cols-4 gap-2",
                            StatCell { label: "Bans", value: stats.bans.to_string() }
                            StatCell { label: "Mutes", value: stats.mutes.to_string() }
                            StatCell { label: "Checks", value: stats.checks.to_string() }
                            StatCell { label: "Playtime", value: format_playtime(stats.playtime_seconds) }
                        }
                        if !stats.history.is_empty() {
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table table-sm",
                                    thead {
                                        tr {
                                            th { "Type" }
                                            th { "Player" }
                                            th { "Reason" }
                                            th { "When" }
                                        }
                                    }
                                    tbody {
                                        for (i, entry) in stats.history.iter().enumerate() {
                                            tr {
                                                key: "{i}",
                                                td { span { class: "badge badge-outline", "{entry.kind}" } }
                                                td { class: "font-mono text-xs", "{entry.target}" }
                                                td { {entry.reason.clone().unwrap_or_default()} }
                                                td {
                                                    {chrono::DateTime::from_timestamp_millis(entry.time)
                                                        .map(|at| format_datetime(&at))
                                                        .unwrap_or_default()}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn StatCell(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "rounded-box bg-base-200 p-3",
            div { class: "text-xs opacity-70", "{label}" }
            div { class: "text-xl font-bold", "{value}" }
        }
    }
}
