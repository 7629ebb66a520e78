use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        constant::MAX_APPEAL_LENGTH,
        format::format_datetime,
        model::{refresh::RefreshContext, toast::ToastContext},
    },
    model::{appeal::CreateAppealDto, log::ActionLogDto},
};

#[cfg(feature = "web")]
use crate::client::api::appeal::create_appeal;

#[component]
pub fn AppealModal(show: Signal<bool>, warning: Option<ActionLogDto>) -> Element {
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();
    let mut text = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let Some(warning) = warning else {
        return rsx! {};
    };

    let warning_id = warning.id;
    let length = text().chars().count();
    let too_long = length > MAX_APPEAL_LENGTH;
    let blank = text().trim().is_empty();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = CreateAppealDto {
            action_log_id: warning_id,
            text: text(),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                match create_appeal(payload).await {
                    Ok(()) => {
                        toasts.success("Appeal submitted");
                        text.set(String::new());
                        show.set(false);
                        RefreshContext::bump(refresh.appeals);
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
        Modal {
            show,
            title: "Appeal warning",
            prevent_close: submitting(),
            div {
                class: "rounded-box bg-base-200 p-3 mb-3 text-sm",
                p { class: "opacity-70", "{format_datetime(&warning.created_at)}" }
                p { "{warning.reason}" }
            }
            form {
                class: "flex flex-col gap-2",
                onsubmit: submit,
                textarea {
                    class: "textarea textarea-bordered w-full h-32",
                    placeholder: "Why should this warning be lifted?",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                }
                p {
                    class: if too_long { "text-xs text-error text-right" } else { "text-xs opacity-60 text-right" },
                    "{length}/{MAX_APPEAL_LENGTH}"
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting() || too_long || blank,
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Submit appeal"
                    }
                }
            }
        }
    }
}
