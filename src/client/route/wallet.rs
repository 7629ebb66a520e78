use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        format::{format_balance, format_datetime, format_remaining},
        model::{auth::AuthContext, error::ApiError, refresh::RefreshContext, toast::ToastContext},
    },
    model::{
        appeal::AppealDto,
        economy::WalletDto,
        loa::RequestStatusDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    appeal::get_my_appeals,
    economy::{get_wallet, withdraw},
};

/// Text for the withdraw button: the remaining cooldown, or `None` when a withdrawal
/// is open.
pub fn cooldown_label(next_withdraw_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<String> {
    next_withdraw_at
        .filter(|at| *at > now)
        .map(|at| format!("Available in {}", format_remaining(at - now)))
}

fn status_badge(status: RequestStatusDto) -> (&'static str, &'static str) {
    match status {
        RequestStatusDto::Pending => ("badge-info", "Pending"),
        RequestStatusDto::Approved => ("badge-success", "Approved"),
        RequestStatusDto::Rejected => ("badge-error", "Rejected"),
        RequestStatusDto::Cancelled => ("badge-ghost", "Cancelled"),
    }
}

#[component]
pub fn Wallet() -> Element {
    let auth = use_context::<AuthContext>();
    let toasts = use_context::<ToastContext>();
    let refresh = use_context::<RefreshContext>();
    let mut wallet = use_signal(|| None::<Result<WalletDto, ApiError>>);
    let mut appeals = use_signal(|| None::<Vec<AppealDto>>);
    let mut amount = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut wallet_refresh = use_signal(|| 0u32);

    let user_id = auth.read().user_id();

    #[cfg(feature = "web")]
    {
        let staff_refresh = refresh.staff;
        let appeals_refresh = refresh.appeals;

        let wallet_future = use_resource(move || async move {
            let _ = (wallet_refresh(), staff_refresh());
            match user_id {
                Some(id) => Some(get_wallet(id).await),
                None => None,
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = wallet_future.read_unchecked().as_ref() {
                wallet.set(Some(result.clone()));
            }
        });

        let appeals_future = use_resource(move || async move {
            let _ = appeals_refresh();
            get_my_appeals().await
        });

        use_effect(move || {
            if let Some(result) = appeals_future.read_unchecked().as_ref() {
                match result {
                    Ok(list) => appeals.set(Some(list.clone())),
                    Err(err) => dioxus_logger::tracing::warn!("Failed to fetch appeals: {}", err),
                }
            }
        });
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut toasts = toasts;
        let value = match amount().trim().parse::<i64>() {
            Ok(value) if value > 0 => value,
            _ => {
                toasts.error("Enter a positive amount");
                return;
            }
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match withdraw(value).await {
                Ok(updated) => {
                    toasts.success(format!("Withdrew {}", format_balance(value)));
                    amount.set(String::new());
                    wallet.set(Some(Ok(updated)));
                    RefreshContext::bump(refresh.staff);
                }
                Err(err) if err.is_rate_limited() => {
                    toasts.error(err.message);
                    wallet_refresh += 1;
                }
                Err(err) => toasts.error(err.message),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (value, refresh);
    };

    let now = Utc::now();

    rsx! {
        Title { "Wallet | {SITE_NAME}" }
        match wallet() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Some(Ok(data)) => {
                let cooldown = cooldown_label(data.next_withdraw_at, now);
                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full",
                        div {
                            class: "w-full max-w-4xl flex flex-col gap-6",
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body gap-4",
                                    div {
                                        class: "stat p-0",
                                        div { class: "stat-title", "Balance" }
                                        div { class: "stat-value", "{format_balance(data.balance)}" }
                                        if let Some(last) = data.last_withdraw {
                                            div { class: "stat-desc", "Last withdrawal {format_datetime(&last)}" }
                                        }
                                    }
                                    form {
                                        class: "flex flex-wrap gap-2 items-center",
                                        onsubmit: submit,
                                        input {
                                            r#type: "number",
                                            min: "1",
                                            class: "input input-bordered input-sm w-40",
                                            placeholder: "Amount",
                                            value: "{amount}",
                                            disabled: cooldown.is_some(),
                                            oninput: move |evt| amount.set(evt.value()),
                                        }
                                        button {
                                            r#type: "submit",
                                            class: "btn btn-sm btn-primary",
                                            disabled: submitting() || cooldown.is_some(),
                                            "Withdraw"
                                        }
                                        if let Some(label) = cooldown.clone() {
                                            span { class: "text-sm opacity-70", "{label}" }
                                        }
                                    }
                                }
                            }

                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body",
                                    h2 { class: "card-title", "Transactions" }
                                    if data.logs.is_empty() {
                                        p { class: "opacity-70", "No transactions yet." }
                                    } else {
                                        div {
                                            class: "overflow-x-auto",
                                            table {
                                                class: "table table-sm",
                                                thead {
                                                    tr {
                                                        th { "When" }
                                                        th { "Type" }
                                                        th { class: "text-right", "Amount" }
                                                        th { "Note" }
                                                    }
                                                }
                                                tbody {
                                                    for entry in data.logs.clone() {
                                                        tr {
                                                            key: "{entry.id}",
                                                            td { class: "whitespace-nowrap", "{format_datetime(&entry.created_at)}" }
                                                            td { "{entry.kind}" }
                                                            td {
                                                                class: if entry.amount < 0 { "text-right text-error" } else { "text-right text-success" },
                                                                "{format_balance(entry.amount)}"
                                                            }
                                                            td { class: "opacity-70", {entry.note.clone().unwrap_or_default()} }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            if let Some(list) = appeals() {
                                div {
                                    class: "card bg-base-200",
                                    div {
                                        class: "card-body",
                                        h2 { class: "card-title", "My appeals" }
                                        if list.is_empty() {
                                            p { class: "opacity-70", "You have not appealed any warnings." }
                                        }
                                        for appeal in list {
                                            {
                                                let (badge, label) = status_badge(appeal.status);
                                                rsx! {
                                                    div {
                                                        key: "{appeal.id}",
                                                        class: "flex flex-wrap items-center gap-2 py-1",
                                                        span { class: "badge {badge}", "{label}" }
                                                        span { class: "truncate flex-1", "{appeal.warning.reason}" }
                                                        span { class: "text-xs opacity-60", "{format_datetime(&appeal.created_at)}" }
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
        }
    }
}
