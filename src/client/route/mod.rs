pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod wallet;

pub use admin::AdminQueue;
pub use home::{Home, Member};
pub use login::Login;
pub use not_found::NotFound;
pub use wallet::Wallet;
