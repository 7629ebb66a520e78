use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{fa_brands_icons::FaDiscord, fa_solid_icons::FaShieldHalved},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();

    let state = auth.read();
    let resolved = state.is_resolved();
    let logged_in = state.is_authenticated();
    let is_admin = state.is_admin();
    let name = state.user().map(|u| u.name.clone()).unwrap_or_default();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaShieldHalved
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if resolved && logged_in {
                span {
                    class: "hidden md:inline opacity-70 mr-2",
                    "{name}"
                }
                Link {
                    to: Route::Wallet {},
                    class: "btn btn-ghost",
                    "Wallet"
                }
                if is_admin {
                    Link {
                        to: Route::AdminQueue {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if resolved {
                a {
                    href: "/api/auth/login",
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon {
                        width: 22,
                        height: 22,
                        icon: FaDiscord
                    }
                    "Login"
                }
            }
        }
    })
}
