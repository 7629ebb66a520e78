//! Staffboard Test Utils
//!
//! Shared testing utilities for the staffboard server. Tests build an in-memory SQLite
//! database containing only the tables they need, optionally with a session, and
//! populate it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//! - **serenity**: Serenity model fixtures deserialized from Discord-shaped JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::staff_member::StaffMemberFactory};
//!
//! #[tokio::test]
//! async fn roster_lists_active_staff() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_staff_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     StaffMemberFactory::new(db).roles(vec![10]).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
