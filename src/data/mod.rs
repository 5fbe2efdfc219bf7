//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, so snowflake
//! text columns are parsed once at this boundary.

pub mod star_message;
