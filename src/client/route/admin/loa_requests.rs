use dioxus::prelude::*;

use crate::{
    client::{
        component::ConfirmationModal,
        format::format_datetime,
        model::{error::ApiError, refresh::RefreshContext, toast::ToastContext},
    },
    model::loa::LoaRequestDto,
};

use super::Review;

#[cfg(feature = "web")]
use crate::client::api::loa::{approve_loa_request, get_loa_requests, reject_loa_request};

#[component]
pub fn LoaRequestQueue() -> Element {
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();
    let mut requests = use_signal(|| None::<Result<Vec<LoaRequestDto>, ApiError>>);
    let mut pending = use_signal(|| None::<(LoaRequestDto, Review)>);
    let mut show_confirm = use_signal(|| false);
    let mut processing = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let loa_refresh = refresh.loa_requests;
        let future = use_resource(move || async move {
            let _ = loa_refresh();
            get_loa_requests().await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                requests.set(Some(result.clone()));
            }
        });
    }

    let confirm = move |_| {
        let Some((request, review)) = pending() else {
            return;
        };
        processing.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                let result = match review {
                    Review::Approve => approve_loa_request(request.id).await,
                    Review::Reject => reject_loa_request(request.id).await,
                };
                match result {
                    Ok(_) => {
                        toasts.success(format!("LOA request {}", review.past_tense()));
                        RefreshContext::bump(refresh.loa_requests);
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
        let _ = (request, review, toasts, refresh);
    };

    let (title, confirm_text, confirm_class) = match pending() {
        Some((request, review)) => (
            format!(
                "{} {} days of leave for {}?",
                review.label(),
                request.days,
                request.display_name.unwrap_or_else(|| request.discord_id.to_string())
            ),
            review.label(),
            review.button_class(),
        ),
        None => (String::new(), "", ""),
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "LOA requests" }
                match requests() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err}" } },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "opacity-70", "No pending requests." }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table",
                                thead {
                                    tr {
                                        th { "Member" }
                                        th { "Days" }
                                        th { "Reason" }
                                        th { "Filed" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for request in list {
                                        {
                                            let name = request
                                                .display_name
                                                .clone()
                                                .unwrap_or_else(|| request.discord_id.to_string());
                                            let approve = request.clone();
                                            let reject = request.clone();
                                            rsx! {
                                                tr {
                                                    key: "{request.id}",
                                                    td { "{name}" }
                                                    td { "{request.days}" }
                                                    td { "{request.reason}" }
                                                    td { class: "whitespace-nowrap", "{format_datetime(&request.created_at)}" }
                                                    td {
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
                            }
                        }
                    },
                }
            }
        }
        ConfirmationModal {
            show: show_confirm,
            title,
            message: rsx! { p { "The decision is posted to the staff log channel." } },
            confirm_text,
            confirm_class,
            is_processing: processing(),
            on_confirm: confirm,
        }
    }
}
