//! Timeframe labels and their monitoring lookback windows.
//!
//! Timeframes are provider-style strings ("15m", "1h", "4h", "1d", ...).
//! Each maps to the number of calendar days of history a monitoring check
//! requests for that resolution.

/// Lookback for intraday minute resolutions.
pub const INTRADAY_LOOKBACK_DAYS: u32 = 7;
/// Lookback for hourly resolutions.
pub const HOURLY_LOOKBACK_DAYS: u32 = 14;
/// Lookback for daily and coarser resolutions.
pub const DAILY_LOOKBACK_DAYS: u32 = 30;

/// Map a timeframe label to the lookback window used when checking it.
///
/// Unrecognized labels fall back to the hourly window rather than failing;
/// a monitoring check must never die on a config typo.
pub fn lookback_days(timeframe: &str) -> u32 {
    match timeframe.trim().chars().last() {
        Some('m') | Some('M') => INTRADAY_LOOKBACK_DAYS,
        Some('h') | Some('H') => HOURLY_LOOKBACK_DAYS,
        Some('d') | Some('D') | Some('w') | Some('W') => DAILY_LOOKBACK_DAYS,
        _ => HOURLY_LOOKBACK_DAYS,
    }
}
