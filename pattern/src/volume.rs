//! Volume dry-up check.
//!
//! Compares mean volume of the last 20 bars against the 20 bars before them.
//! The 0.7 dry-up threshold is a heuristic carried over as-is, not derived.

use market::types::PricePoint;
use market::window::mean_volume;

use crate::result::TrendDirection;

pub const WINDOW: usize = 20;
pub const DRY_UP_RATIO: f64 = 0.7;
pub const SURGE_RATIO: f64 = 1.3;

#[derive(Debug, Clone, Copy)]
pub struct VolumeDryUp {
    /// Recent mean volume / prior mean volume.
    pub ratio: f64,
    pub dry_up: bool,
    pub trend: TrendDirection,
}

pub fn assess_volume(bars: &[PricePoint]) -> VolumeDryUp {
    let n = bars.len();
    if n < 2 * WINDOW {
        return VolumeDryUp {
            ratio: 1.0,
            dry_up: false,
            trend: TrendDirection::Stable,
        };
    }

    let recent = mean_volume(&bars[n - WINDOW..]);
    let prior = mean_volume(&bars[n - 2 * WINDOW..n - WINDOW]);

    if prior <= 0.0 {
        return VolumeDryUp {
            ratio: 1.0,
            dry_up: false,
            trend: TrendDirection::Stable,
        };
    }

    let ratio = recent / prior;
    let (dry_up, trend) = if ratio < DRY_UP_RATIO {
        (true, TrendDirection::Decreasing)
    } else if ratio > SURGE_RATIO {
        (false, TrendDirection::Increasing)
    } else {
        (false, TrendDirection::Stable)
    };

    VolumeDryUp {
        ratio,
        dry_up,
        trend,
    }
}
