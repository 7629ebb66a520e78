//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod action;
pub mod action_log;
pub mod appeal;
pub mod loa;
pub mod rank;
pub mod request;
pub mod staff;
pub mod stats;
pub mod user;
pub mod wallet;
