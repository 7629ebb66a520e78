use dioxus::prelude::*;

use crate::{
    client::{
        component::ConfirmationModal,
        constant::MAX_WARN_LEVEL,
        model::{refresh::RefreshContext, toast::ToastContext},
    },
    model::{
        economy::AdjustBalanceDto,
        staff::{StaffActionDto, StaffActionKind, StaffDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{economy::adjust_balance, staff::perform_action};

const ACTIONS: [(StaffActionKind, &str); 4] = [
    (StaffActionKind::Warn, "Warn"),
    (StaffActionKind::Promote, "Promote"),
    (StaffActionKind::Demote, "Demote"),
    (StaffActionKind::Kick, "Kick"),
];

fn parse_action(value: &str) -> StaffActionKind {
    ACTIONS
        .iter()
        .find(|(kind, _)| kind.as_str() == value)
        .map(|(kind, _)| *kind)
        .unwrap_or(StaffActionKind::Warn)
}

/// Admin controls for one roster entry: rank changes, warnings, kicks and balance
/// adjustments.
#[component]
pub fn ActionPanel(member: StaffDto) -> Element {
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();

    let mut action = use_signal(|| StaffActionKind::Warn);
    let mut reason = use_signal(String::new);
    let mut warn_level = use_signal(|| 1u8);
    let mut submitting = use_signal(|| false);
    let mut show_kick_confirm = use_signal(|| false);

    let mut amount = use_signal(String::new);
    let mut adjust_reason = use_signal(String::new);
    let mut adjusting = use_signal(|| false);

    let member_id = member.id;
    let kick_title = format!("Kick {}?", member.display_name);

    let mut submit_action = move || {
        let payload = StaffActionDto {
            action: action(),
            reason: reason(),
            target_role_id: None,
            warn_level: (action() == StaffActionKind::Warn).then(|| warn_level()),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                match perform_action(member_id, payload).await {
                    Ok(result) => {
                        let verb = action().as_str();
                        match result.log.detail {
                            Some(detail) => toasts.success(format!("{}: {}", verb, detail)),
                            None => toasts.success(format!("{} applied", verb)),
                        }
                        reason.set(String::new());
                        RefreshContext::bump(refresh.staff);
                        RefreshContext::bump(refresh.logs);
                    }
                    Err(err) => toasts.error(err.message),
                }
                show_kick_confirm.set(false);
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (payload, toasts, refresh);
    };

    let mut submit_adjust = move || {
        let Ok(value) = amount().trim().parse::<i64>() else {
            let mut toasts = toasts;
            toasts.error("Amount must be a whole number");
            return;
        };
        let payload = AdjustBalanceDto {
            amount: value,
            reason: adjust_reason(),
        };
        adjusting.set(true);

        #[cfg(feature = "web")]
        {
            let mut toasts = toasts;
            spawn(async move {
                match adjust_balance(member_id, payload).await {
                    Ok(wallet) => {
                        toasts.success(format!("Balance is now {}", wallet.balance));
                        amount.set(String::new());
                        adjust_reason.set(String::new());
                        RefreshContext::bump(refresh.staff);
                        RefreshContext::bump(refresh.logs);
                    }
                    Err(err) => toasts.error(err.message),
                }
                adjusting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        div {
            class: "card bg-base-100",
            div {
                class: "card-body p-4 gap-3",
                h3 { class: "font-semibold", "Staff actions" }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if action() == StaffActionKind::Kick {
                            show_kick_confirm.set(true);
                        } else {
                            submit_action();
                        }
                    },
                    div {
                        class: "flex flex-wrap gap-2",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| action.set(parse_action(&evt.value())),
                            for (kind, label) in ACTIONS {
                                option {
                                    value: kind.as_str(),
                                    selected: action() == kind,
                                    "{label}"
                                }
                            }
                        }
                        if action() == StaffActionKind::Warn {
                            select {
                                class: "select select-bordered select-sm",
                                onchange: move |evt| {
                                    if let Ok(level) = evt.value().parse::<u8>() {
                                        warn_level.set(level);
                                    }
                                },
                                for level in 1..=MAX_WARN_LEVEL {
                                    option {
                                        value: "{level}",
                                        selected: warn_level() == level,
                                        "Level {level}"
                                    }
                                }
                            }
                        }
                    }
                    input {
                        class: "input input-bordered input-sm w-full",
                        placeholder: "Reason",
                        value: "{reason}",
                        oninput: move |evt| reason.set(evt.value()),
                    }
                    if matches!(action(), StaffActionKind::Promote | StaffActionKind::Demote) {
                        p { class: "text-xs opacity-70", "Moves the member one rank along the ladder." }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-sm btn-primary self-start",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-xs" }
                        }
                        "Apply"
                    }
                }

                div { class: "divider my-0" }

                form {
                    class: "flex flex-wrap gap-2 items-center",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit_adjust();
                    },
                    input {
                        r#type: "number",
                        class: "input input-bordered input-sm w-32",
                        placeholder: "+/- amount",
                        value: "{amount}",
                        oninput: move |evt| amount.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered input-sm flex-1",
                        placeholder: "Adjustment reason",
                        value: "{adjust_reason}",
                        oninput: move |evt| adjust_reason.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-sm btn-outline",
                        disabled: adjusting(),
                        "Adjust balance"
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_kick_confirm,
            title: kick_title,
            message: rsx! {
                p { "This removes the member from the staff team and strips their staff roles." }
            },
            confirm_text: "Kick",
            confirm_class: "btn-error",
            is_processing: submitting(),
            on_confirm: move |_| submit_action(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_map_back_to_actions() {
        assert_eq!(parse_action("kick"), StaffActionKind::Kick);
        assert_eq!(parse_action("promote"), StaffActionKind::Promote);
        assert_eq!(parse_action("bogus"), StaffActionKind::Warn);
    }
}
