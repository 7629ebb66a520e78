use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Header over every page, login included.
#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "min-h-screen bg-base-100",
        Header {  }
        main {
            Outlet::<Route> {}
        }
    })
}
