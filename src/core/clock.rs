//! Synthetic simulation time.
//!
//! Timestamps inside the core advance with the tick counter, never with the
//! wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Seconds since the Unix epoch of 2024-01-01T00:00:00Z, tick zero.
pub const SYNTHETIC_EPOCH_SECS: i64 = 1_704_067_200;

/// The instant of tick zero.
pub fn synthetic_epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(SYNTHETIC_EPOCH_SECS, 0)
        .single()
        .unwrap_or_default()
}

/// Timestamp of `tick_index` when every tick lasts `tick_duration_secs`.
pub fn synthetic_time(tick_index: u64, tick_duration_secs: i64) -> DateTime<Utc> {
    let ticks = i64::try_from(tick_index).unwrap_or(i64::MAX);
    let offset = ticks.saturating_mul(tick_duration_secs.max(1));
    synthetic_epoch()
        .checked_add_signed(Duration::seconds(offset.min(i64::MAX / 1_000)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
