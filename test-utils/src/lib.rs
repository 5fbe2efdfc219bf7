//! Starboard Test Utils
//!
//! Provides shared testing utilities for the starboard bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for ledger
//! records, and Serenity model fixtures built from Discord-shaped JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::StarMessage;
//!
//! #[tokio::test]
//! async fn test_ledger_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(StarMessage)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
