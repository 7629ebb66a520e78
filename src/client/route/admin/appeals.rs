use dioxus::prelude::*;

use crate::{
    client::{
        component::ConfirmationModal,
        format::format_datetime,
        model::{error::ApiError, refresh::RefreshContext, toast::ToastContext},
    },
    model::appeal::AppealDto,
};

use super::Review;

#[cfg(feature = "web")]
use crate::client::api::appeal::{approve_appeal, get_appeals, reject_appeal};

#[component]
pub fn AppealQueue() -> Element {
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();
    let mut appeals = use_signal(|| None::<Result<Vec<AppealDto>, ApiError>>);
    let mut pending = use_signal(|| None::<(AppealDto, Review)>);
    let mut show_confirm = use_signal(|| false);
    let mut processing = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let appeals_refresh = refresh.appeals;
        let future = use_resource(move || async move {
            let _ = appeals_refresh();
            get_appeals().await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                appeals.set(Some(result.clone()));
            }
        });
    }

    let confirm = move |_| {
        let Some((appeal, review)) = pending() else {
            return;
        };
        processing.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                let result = match review {
                    Review::Approve => approve_appeal(appeal.id).await,
                    Review::Reject => reject_appeal(appeal.id).await,
                };
                match result {
                    Ok(_) => {
                        toasts.success(format!("Appeal {}", review.past_tense()));
                        RefreshContext::bump(refresh.appeals);
                        RefreshContext::bump(refresh.staff);
                        RefreshContext::bump(refresh.logs);
                    }
                    Err(err) => toasts.error(err.message),
                }
                show_confirm.set(false);
                processing.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (appeal, review, toasts, refresh);
    };

    let (title, confirm_text, confirm_class, approve_note) = match pending() {
        Some((appeal, review)) => (
            format!(
                "{} appeal from {}?",
                review.label(),
                appeal.display_name.unwrap_or_else(|| appeal.discord_id.to_string())
            ),
            review.label(),
            review.button_class(),
            review == Review::Approve,
        ),
        None => (String::new(), "", "", false),
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Warning appeals" }
                match appeals() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err}" } },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "opacity-70", "No pending appeals." }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "flex flex-col gap-3",
                            for appeal in list {
                                {
                                    let name = appeal
                                        .display_name
                                        .clone()
                                        .unwrap_or_else(|| appeal.discord_id.to_string());
                                    let level = appeal.warning.warn_level.unwrap_or(1);
                                    let approve = appeal.clone();
                                    let reject = appeal.clone();
                                    rsx! {
                                        div {
                                            key: "{appeal.id}",
                                            class: "rounded-box bg-base-100 p-4 flex flex-col gap-2",
                                            div {
                                                class: "flex flex-wrap items-center gap-2",
                                                span { class: "font-semibold", "{name}" }
                                                span { class: "badge badge-warning badge-sm", "Warning L{level}" }
                                                span { class: "text-xs opacity-60 ml-auto", "{format_datetime(&appeal.created_at)}" }
                                            }
                                            p { class: "text-sm opacity-70", "Warned for: {appeal.warning.reason}" }
                                            p { class: "whitespace-pre-wrap", "{appeal.text}" }
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-success",
                                                    onclick: move |_| {
                                                        pending.set(Some((approve.clone(), Review::Approve)));
                                                        show_confirm.set(true);
                                                    },
                                                    "Approve"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error btn-outline",
                                                    onclick: move |_| {
                                                        pending.set(Some((reject.clone(), Review::Reject)));
                                                        show_confirm.set(true);
                                                    },
                                                    "Reject"
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
        ConfirmationModal {
            show: show_confirm,
            title,
            message: rsx! {
                if approve_note {
                    p { "Approving removes the warning's weight from the member's count." }
                } else {
                    p { "The warning stays on record." }
                }
            },
            confirm_text,
            confirm_class,
            is_processing: processing(),
            on_confirm: confirm,
        }
    }
}
