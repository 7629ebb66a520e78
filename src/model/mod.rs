//! Data transfer objects shared between the web client and the server API.
//!
//! Discord snowflakes are carried as `u64` in Rust and serialized as strings on the
//! wire, since JavaScript numbers cannot represent them exactly.

pub mod api;
pub mod appeal;
pub mod economy;
pub mod loa;
pub mod log;
pub mod snowflake;
pub mod staff;
pub mod stats;
pub mod updates;
pub mod user;
