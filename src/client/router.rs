use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{AdminQueue, Home, Login, Member, NotFound, Wallet};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Home {},

            #[route("/staff/:id")]
            Member { id: u64 },

            #[route("/wallet")]
            Wallet {},
        #[end_layout]

        #[layout(RequiresAdmin)]
            #[route("/admin")]
            AdminQueue {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
