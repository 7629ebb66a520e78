use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            p { class: "text-4xl font-bold", "404" }
            p { class: "opacity-70", "Nothing lives at /{path}" }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to the roster"
            }
        }
    }
}
