//! Business logic layer.
//!
//! Services orchestrate the repository layer and the chat platform. The starboard service is
//! the only one: it turns reaction events into repost operations.

pub mod starboard;
