use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        model::{refresh::RefreshContext, toast::ToastContext},
    },
    model::staff::{StaffDto, UpdateProfileDto},
};

#[cfg(feature = "web")]
use crate::client::api::staff::update_profile;

/// Blank inputs clear the field.
fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn ProfileEditModal(show: Signal<bool>, member: StaffDto) -> Element {
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();
    let mut nick = use_signal(|| member.minecraft_nick.clone().unwrap_or_default());
    let mut banner = use_signal(|| member.banner_url.clone().unwrap_or_default());
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = UpdateProfileDto {
            minecraft_nick: optional(nick()),
            banner_url: optional(banner()),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                match update_profile(payload).await {
                    Ok(_) => {
                        toasts.success("Profile updated");
                        show.set(false);
                        RefreshContext::bump(refresh.staff);
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
            title: "Edit profile",
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: submit,
                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Minecraft nick" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "3-16 letters, digits or _",
                        maxlength: "16",
                        value: "{nick}",
                        oninput: move |evt| nick.set(evt.value()),
                    }
                }
                label {
                    class: "form-control w-full",
                    span { class: "label-text mb-1", "Banner image URL" }
                    input {
                        r#type: "url",
                        class: "input input-bordered w-full",
                        placeholder: "https://",
                        value: "{banner}",
                        oninput: move |evt| banner.set(evt.value()),
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Save"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_cleared() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" Steve_42 ".to_string()), Some("Steve_42".to_string()));
    }
}
