//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the values
//! they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let record = factory::create_star_message(&db).await?;
//!
//! // Customize with the builder
//! let record = factory::star_message::StarMessageFactory::new(&db)
//!     .original_id(111)
//!     .reposted_id(222)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod star_message;

pub use star_message::create_star_message;
