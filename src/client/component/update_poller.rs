use dioxus::prelude::*;

use crate::model::updates::UpdateDiff;

#[cfg(feature = "web")]
use crate::{
    client::{
        api::updates::get_updates,
        model::{auth::AuthContext, refresh::RefreshContext, toast::ToastContext},
    },
    model::updates::{UpdateTracker, UPDATE_POLL_INTERVAL_MS},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Polls `/api/updates` while someone is signed in, raising toasts for new activity
/// and refreshing the views that show it.
#[component]
pub fn UpdatePoller() -> Element {
    #[cfg(feature = "web")]
    {
        let auth = use_context::<AuthContext>();
        let mut toasts = use_context::<ToastContext>();
        let refresh = use_context::<RefreshContext>();

        use_future(move || async move {
            let mut tracker = UpdateTracker::new();

            loop {
                let (signed_in, is_admin) = {
                    let state = auth.read();
                    (state.is_authenticated(), state.is_admin())
                };

                if signed_in {
                    match get_updates().await {
                        Ok(counts) => {
                            let diff = tracker.observe(counts);

                            if diff.new_logs > 0 {
                                RefreshContext::bump(refresh.logs);
                                RefreshContext::bump(refresh.staff);
                            }
                            if diff.new_appeals > 0 {
                                RefreshContext::bump(refresh.appeals);
                            }
                            if diff.new_loa_requests > 0 {
                                RefreshContext::bump(refresh.loa_requests);
                            }

                            for message in notifications(&diff, is_admin) {
                                toasts.info(message);
                            }
                        }
                        Err(err) => tracing::warn!("Failed to poll updates: {}", err),
                    }
                }

                gloo_timers::future::TimeoutFuture::new(UPDATE_POLL_INTERVAL_MS).await;
            }
        });
    }

    rsx! {}
}

/// Toast texts for a poll diff. Review queues only concern admins.
pub fn notifications(diff: &UpdateDiff, is_admin: bool) -> Vec<String> {
    let mut messages = Vec::new();

    if diff.new_logs > 0 {
        messages.push(plural(diff.new_logs, "new log entry", "new log entries"));
    }
    if is_admin && diff.new_appeals > 0 {
        messages.push(plural(diff.new_appeals, "new appeal", "new appeals"));
    }
    if is_admin && diff.new_loa_requests > 0 {
        messages.push(plural(
            diff.new_loa_requests,
            "new LOA request",
            "new LOA requests",
        ));
    }

    messages
}

fn plural(count: u64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_only_hear_about_logs() {
        let diff = UpdateDiff {
            new_logs: 1,
            new_appeals: 2,
            new_loa_requests: 1,
        };

        assert_eq!(notifications(&diff, false), vec!["1 new log entry"]);
        assert_eq!(
            notifications(&diff, true),
            vec!["1 new log entry", "2 new appeals", "1 new LOA request"]
        );
    }

    #[test]
    fn empty_diff_is_silent() {
        assert!(notifications(&UpdateDiff::default(), true).is_empty());
    }
}
