//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod action_log;
pub mod appeal;
pub mod loa;
pub mod staff;
pub mod stats;
pub mod user;
pub mod wallet;

#[cfg(test)]
mod test;
