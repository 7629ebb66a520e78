mod action_panel;
mod appeal_modal;
mod history;
mod loa_toggle;
mod profile;
mod profile_edit;
mod roster;
mod stats_card;

pub use action_panel::ActionPanel;
pub use appeal_modal::AppealModal;
pub use history::HistoryTab;
pub use loa_toggle::LoaToggle;
pub use profile::MemberProfile;
pub use profile_edit::ProfileEditModal;
pub use roster::RosterSidebar;
pub use stats_card::StatsCard;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
    },
    model::staff::StaffDto,
};

#[cfg(feature = "web")]
use crate::client::{api::staff::get_staff, model::refresh::RefreshContext};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Roster with the signed-in member's own profile opened.
#[component]
pub fn Home() -> Element {
    rsx! { Dashboard { member_id: None } }
}

#[component]
pub fn Member(id: u64) -> Element {
    rsx! { Dashboard { member_id: Some(id) } }
}

#[component]
fn Dashboard(member_id: Option<u64>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut roster = use_signal(|| None::<Vec<StaffDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let RefreshContext {
            staff: staff_refresh,
            ..
        } = use_context();

        let future = use_resource(move || async move {
            let _ = staff_refresh();
            get_staff().await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(staff) => {
                        roster.set(Some(staff.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch staff roster: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    let selected_id = member_id.or_else(|| auth.read().user_id());

    rsx! {
        Title { "Roster | {SITE_NAME}" }
        if let Some(staff) = roster() {
            Page {
                class: "w-full",
                div {
                    class: "flex flex-col lg:flex-row gap-4 max-w-7xl mx-auto",
                    RosterSidebar { staff: staff.clone(), selected: selected_id }
                    div {
                        class: "flex-1 min-w-0",
                        if let Some(member) = selected_id.and_then(|id| staff.iter().find(|m| m.id == id).cloned()) {
                            MemberProfile { member }
                        } else {
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body items-center text-center opacity-70",
                                    "Pick a staff member from the roster."
                                }
                            }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}
