use dioxus::prelude::*;

use crate::client::model::toast::ToastContext;

/// Bottom-right stack of the toasts in [`ToastContext`].
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_context::<ToastContext>();

    rsx!(div {
        class: "toast toast-end z-50",
        for toast in toasts.toasts() {
            div {
                key: "{toast.id}",
                class: "alert {toast.kind.alert_class()} shadow-lg cursor-pointer",
                onclick: move |_| toasts.dismiss(toast.id),
                span { "{toast.message}" }
            }
        }
    })
}
