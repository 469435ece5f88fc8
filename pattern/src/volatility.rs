//! Volatility contraction across shrinking lookbacks.
//!
//! Annualized close-to-close return volatility is measured over 20-, 10- and
//! 5-bar lookbacks. Contraction compares the shortest window against the
//! longest; the trend label compares each adjacent pair.

use market::types::PricePoint;
use market::window::{pct_returns, std_dev};

use crate::result::TrendDirection;

pub const LOOKBACKS: [usize; 3] = [20, 10, 5];
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
/// Each shorter window at or below this fraction of the next longer one
/// counts as contracting.
pub const CONTRACTING_RATIO: f64 = 0.8;
/// Each shorter window at or above this fraction counts as expanding.
pub const EXPANDING_RATIO: f64 = 1.2;

#[derive(Debug, Clone, Copy)]
pub struct VolatilityContraction {
    /// (1 - shortVol / longVol) * 100, floored at 0.
    pub contraction_pct: f64,
    pub trend: TrendDirection,
    pub long_vol: f64,
    pub short_vol: f64,
}

fn annualized_vol(bars: &[PricePoint], lookback: usize) -> f64 {
    if bars.len() < lookback + 1 {
        return 0.0;
    }
    let tail = &bars[bars.len() - lookback - 1..];
    std_dev(&pct_returns(tail)) * TRADING_DAYS_PER_YEAR.sqrt()
}

pub fn measure_contraction(bars: &[PricePoint]) -> VolatilityContraction {
    let vols: Vec<f64> = LOOKBACKS.iter().map(|&n| annualized_vol(bars, n)).collect();
    let long_vol = vols[0];
    let short_vol = vols[vols.len() - 1];

    let contraction_pct = if long_vol > 0.0 {
        ((1.0 - short_vol / long_vol) * 100.0).max(0.0)
    } else {
        0.0
    };

    // A zero volatility anywhere makes the ratio comparisons degenerate.
    let trend = if vols.iter().any(|v| *v <= 0.0) {
        TrendDirection::Stable
    } else if vols.windows(2).all(|w| w[1] <= w[0] * CONTRACTING_RATIO) {
        TrendDirection::Decreasing
    } else if vols.windows(2).all(|w| w[1] >= w[0] * EXPANDING_RATIO) {
        TrendDirection::Increasing
    } else {
        TrendDirection::Stable
    };

    VolatilityContraction {
        contraction_pct,
        trend,
        long_vol,
        short_vol,
    }
}
