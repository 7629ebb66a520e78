//! SeaORM entities for the staffboard application database.

pub mod prelude;

pub mod action_log;
pub mod appeal;
pub mod loa_request;
pub mod staff_member;
pub mod staff_member_role;
pub mod user;
pub mod wallet_transaction;
