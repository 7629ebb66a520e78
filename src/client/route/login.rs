use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{fa_brands_icons::FaDiscord, fa_solid_icons::FaShieldHalved},
    Icon,
};

use crate::client::{
    component::{LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::Home {});
        }
    });

    let state = auth.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        Icon {
                            width: 96,
                            height: 96,
                            icon: FaShieldHalved
                        }
                        p {
                            class: "text-2xl",
                            {SITE_NAME}
                        }
                        p {
                            class: "opacity-70",
                            "Sign in with the Discord account you use on the staff server."
                        }
                    }
                    a {
                        href: "/api/auth/login",
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaDiscord
                        }
                        "Login with Discord"
                    }
                }
            }
        }
    }
}
