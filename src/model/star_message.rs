//! Domain model for repost ledger records.

use std::num::NonZeroU64;

use crate::error::ledger::LedgerError;

/// Ledger record mapping an original message to its repost in the starboard channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarMessage {
    /// Discord message ID of the starred message.
    pub original_id: u64,
    /// Discord message ID of the most recent repost.
    pub reposted_id: u64,
}

impl StarMessage {
    /// Converts an entity model to a star message domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(StarMessage)` - The converted domain model
    /// - `Err(LedgerError::InvalidId)` - A stored id is not a non-zero snowflake
    pub fn from_entity(entity: entity::star_message::Model) -> Result<Self, LedgerError> {
        Ok(Self {
            original_id: parse_snowflake(entity.original_id)?,
            reposted_id: parse_snowflake(entity.reposted_id)?,
        })
    }
}

/// Parses a snowflake stored as text. Zero is rejected since Discord ids are never zero.
fn parse_snowflake(value: String) -> Result<u64, LedgerError> {
    match value.parse::<NonZeroU64>() {
        Ok(id) => Ok(id.get()),
        Err(source) => Err(LedgerError::InvalidId { value, source }),
    }
}
