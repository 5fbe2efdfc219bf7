//! Domain models shared by the ledger, the reconciliation handler and the bot adapter.

pub mod star_message;
pub mod starboard;
