//! Serenity model fixtures.
//!
//! Serenity models are `#[non_exhaustive]`, so fixtures are built by deserializing JSON in
//! the same shape Discord's API returns.

pub mod message;
