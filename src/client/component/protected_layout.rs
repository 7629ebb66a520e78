use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(state: &AuthState, required_permissions: &[Permission]) -> bool {
    state.is_authenticated()
        && required_permissions.iter().all(|perm| match perm {
            Permission::LoggedIn => true,
            Permission::Admin => state.is_admin(),
        })
}

/// Renders the nested route once the session satisfies `permissions`; anonymous
/// visitors are sent to the login page.
#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Login {});
        }
    });

    let state = auth.read().clone();
    let allowed = check_permissions(&state, &permissions);

    rsx! {
        match state {
            AuthState::Initializing | AuthState::NotLoggedIn => rsx! { LoadingPage {} },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            AuthState::Authenticated(_) => {
                if allowed {
                    rsx! { Outlet::<Route> {} }
                } else {
                    rsx! {
                        ErrorPage { status: 403, message: "You don't have permission to view this page" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserDto;

    fn signed_in(admin: bool) -> AuthState {
        AuthState::Authenticated(UserDto {
            discord_id: 7,
            name: "Bob".to_string(),
            admin,
        })
    }

    #[test]
    fn admin_pages_need_admin_flag() {
        assert!(check_permissions(&signed_in(true), &[Permission::Admin]));
        assert!(!check_permissions(&signed_in(false), &[Permission::Admin]));
        assert!(check_permissions(&signed_in(false), &[Permission::LoggedIn]));
    }

    #[test]
    fn anonymous_visitors_have_no_permissions() {
        assert!(!check_permissions(&AuthState::NotLoggedIn, &[]));
        assert!(!check_permissions(&AuthState::Initializing, &[Permission::LoggedIn]));
    }
}
