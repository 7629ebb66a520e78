//! Browser-side wrappers around the `/api` endpoints.

pub mod appeal;
pub mod economy;
pub mod helper;
pub mod loa;
pub mod staff;
pub mod stats;
pub mod updates;
pub mod user;
