//! Shared helper utilities for factory methods.

/// Base keeping generated ids above `i64::MAX`.
const SNOWFLAKE_BASE: u64 = 10_000_000_000_000_000_000;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique snowflake-like id for test data.
///
/// # Returns
/// - `u64` - Next unique id, always above `i64::MAX`
pub fn next_id() -> u64 {
    SNOWFLAKE_BASE + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
