mod appeals;
mod loa_requests;

pub use appeals::AppealQueue;
pub use loa_requests::LoaRequestQueue;

use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

/// Pending LOA requests and warning appeals awaiting an admin decision.
#[component]
pub fn AdminQueue() -> Element {
    rsx! {
        Title { "Review queue | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Review queue" }
                LoaRequestQueue {}
                AppealQueue {}
            }
        }
    }
}

/// Which decision an admin clicked.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Review {
    Approve,
    Reject,
}

impl Review {
    pub fn label(&self) -> &'static str {
        match self {
            Review::Approve => "Approve",
            Review::Reject => "Reject",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Review::Approve => "approved",
            Review::Reject => "rejected",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            Review::Approve => "btn-success",
            Review::Reject => "btn-error",
        }
    }
}
