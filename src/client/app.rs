use dioxus::prelude::*;

use crate::client::{
    component::{ToastStack, UpdatePoller},
    constant::SITE_NAME,
    model::{auth::AuthContext, refresh::RefreshContext, toast::ToastContext},
    router::Route,
};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(AuthContext::new);
    use_context_provider(ToastContext::new);
    use_context_provider(RefreshContext::new);

    #[cfg(feature = "web")]
    auth.fetch_user();

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Staff roster, leave and discipline dashboard for the Discord staff team"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        Router::<Route> {}
        ToastStack {}
        UpdatePoller {}
    }
}
