pub mod auth;
pub mod error;
pub mod refresh;
pub mod toast;
