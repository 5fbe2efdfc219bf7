//! SeaORM entities for the starboard database.

pub mod prelude;

pub mod star_message;
