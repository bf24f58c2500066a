//! Constants for the forecast engine.

/// Horizon used when the caller does not choose one.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Fewest distinct observation days that determine a line.
pub const MIN_DISTINCT_DAYS: usize = 2;
