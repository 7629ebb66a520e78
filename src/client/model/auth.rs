use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;

/// Shared handle to the session state, provided once by `App`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    /// Resolves the session through `/api/auth/user`. Must be called as a hook.
    #[cfg(feature = "web")]
    pub fn fetch_user(&self) {
        let future = use_resource(get_user);
        let mut inner = self.inner;

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                inner.set(match result {
                    Ok(user) => AuthState::from(user.clone()),
                    Err(e) => AuthState::Error(e.clone()),
                });
            }
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.admin)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user().map(|u| u.discord_id)
    }
}
