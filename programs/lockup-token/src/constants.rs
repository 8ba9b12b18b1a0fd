//! Program-wide constants.

/// Seconds per day (UTC). Vesting decays in whole-day steps.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Denominator for `perc_unlocked_at_time_unlock` (basis points, 10000 = 100%).
pub const BPS_DENOMINATOR: u16 = 10_000;
