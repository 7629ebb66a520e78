//! Serenity model fixtures.
//!
//! Serenity structs are built by deserializing JSON shaped like Discord's API
//! responses, so tests exercise the same field handling as gateway events.
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! let member = create_test_member(123456789, 987654321, "alice", Some("Alice"), &[10, 20]);
//! ```

pub mod member;

pub use member::create_test_member;
