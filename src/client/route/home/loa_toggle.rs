use dioxus::prelude::*;

use crate::{
    client::{
        constant::{DEFAULT_LOA_DAYS, MAX_LOA_DAYS},
        format::format_datetime,
        model::{refresh::RefreshContext, toast::ToastContext},
    },
    model::{loa::LoaToggleDto, staff::LoaStatusDto},
};

#[cfg(feature = "web")]
use crate::client::api::loa::toggle_loa;

/// The signed-in member's leave controls. Requests go to the admin queue; ending a
/// leave takes effect at once.
#[component]
pub fn LoaToggle(loa: Option<LoaStatusDto>) -> Element {
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();
    let mut days = use_signal(|| DEFAULT_LOA_DAYS);
    let mut reason = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let mut send = move |payload: LoaToggleDto| {
        submitting.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                let ending = !payload.active;
                match toggle_loa(payload).await {
                    Ok(_) if ending => {
                        toasts.success("Welcome back, your leave has ended");
                        RefreshContext::bump(refresh.staff);
                    }
                    Ok(_) => {
                        toasts.success("LOA request sent for review");
                        reason.set(String::new());
                        RefreshContext::bump(refresh.loa_requests);
                    }
                    Err(err) => toasts.error(err.message),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (payload, toasts, refresh);
    };

    rsx! {
        div {
            class: "card bg-base-100",
            div {
                class: "card-body p-4 gap-3",
                h3 { class: "font-semibold", "Leave of absence" }
                if let Some(loa) = loa {
                    p {
                        "You are on leave until {format_datetime(&loa.until)}"
                        if let Some(reason) = loa.reason {
                            span { class: "opacity-70", " ({reason})" }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-outline self-start",
                        disabled: submitting(),
                        onclick: move |_| send(LoaToggleDto {
                            active: false,
                            days: None,
                            reason: None,
                        }),
                        "End leave"
                    }
                } else {
                    form {
                        class: "flex flex-wrap gap-2 items-center",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            let reason = reason().trim().to_string();
                            send(LoaToggleDto {
                                active: true,
                                days: Some(days()),
                                reason: (!reason.is_empty()).then_some(reason),
                            });
                        },
                        input {
                            r#type: "number",
                            class: "input input-bordered input-sm w-24",
                            min: "1",
                            max: "{MAX_LOA_DAYS}",
                            value: "{days}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<u32>() {
                                    days.set(value.clamp(1, MAX_LOA_DAYS));
                                }
                            },
                        }
                        span { class: "text-sm", "days" }
                        input {
                            class: "input input-bordered input-sm flex-1",
                            placeholder: "Reason",
                            value: "{reason}",
                            oninput: move |evt| reason.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-sm btn-warning",
                            disabled: submitting(),
                            "Request LOA"
                        }
                    }
                }
            }
        }
    }
}
