//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories do not create
//! parent rows: insert the staff member or action log a row depends on first.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::staff_member::StaffMemberFactory::new(&db)
//!     .roles(vec![TRAINEE_ROLE])
//!     .warn_count(1)
//!     .build()
//!     .await?;
//! let warning = factory::create_warning(&db, member.discord_id.parse().unwrap()).await?;
//! let appeal = factory::create_appeal(&db, &warning).await?;
//! ```

pub mod action_log;
pub mod appeal;
pub mod helpers;
pub mod loa_request;
pub mod staff_member;
pub mod user;
pub mod wallet_transaction;

pub use action_log::create_warning;
pub use appeal::create_appeal;
pub use loa_request::create_loa_request;
pub use staff_member::create_staff_member;
pub use user::create_user;
pub use wallet_transaction::create_transaction;
