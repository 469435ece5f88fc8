//! Shared market-data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar as produced by the market-data provider.
///
/// Immutable once produced. A series is a `Vec<PricePoint>`; chronological
/// ordering is an invariant consumers enforce themselves (the analyzer sorts
/// its own copy defensively before use).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Sort a series ascending by bar timestamp.
///
/// Stable, so duplicate timestamps keep their input order and repeated calls
/// on identical input produce identical output.
pub fn sort_chronological(series: &mut [PricePoint]) {
    series.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}
