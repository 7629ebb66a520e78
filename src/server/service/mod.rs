//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the staff rules (rank ladder, review states, wallet limits)
//! - **Orchestration**: Coordinating repository calls with Discord role edits and messages
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod action;
pub mod appeal;
pub mod auth;
pub mod loa;
pub mod notification;
pub mod staff;
pub mod stats;
pub mod updates;
pub mod wallet;

#[cfg(test)]
mod test;
