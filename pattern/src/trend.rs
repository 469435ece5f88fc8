//! Prior-uptrend check.
//!
//! A contraction pattern only matters after a meaningful advance: the recent
//! mean close must sit at least [`MIN_RISE_PCT`] above the mean close of the
//! 30-50-bars-back baseline window.

use market::types::PricePoint;
use market::window::mean_close;

pub const RECENT_BARS: usize = 20;
pub const BASELINE_START_BACK: usize = 50;
pub const BASELINE_END_BACK: usize = 30;
pub const MIN_RISE_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
pub struct UptrendCheck {
    pub is_uptrend: bool,
    /// Recent mean close vs baseline mean close, in percent.
    pub change_pct: f64,
}

pub fn check_uptrend(bars: &[PricePoint]) -> UptrendCheck {
    let n = bars.len();
    if n < BASELINE_START_BACK {
        return UptrendCheck {
            is_uptrend: false,
            change_pct: 0.0,
        };
    }

    let recent = mean_close(&bars[n - RECENT_BARS..]);
    let baseline = mean_close(&bars[n - BASELINE_START_BACK..n - BASELINE_END_BACK]);

    if baseline <= 0.0 {
        return UptrendCheck {
            is_uptrend: false,
            change_pct: 0.0,
        };
    }

    let change_pct = (recent - baseline) / baseline * 100.0;

    UptrendCheck {
        is_uptrend: change_pct >= MIN_RISE_PCT,
        change_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bars_with_closes(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint {
                timestamp: Utc.timestamp_opt(i as i64 * 60, 0).unwrap(),
                open: c,
                high: c,
                low: c,
                close: c,
                volume: 0.0,
            })
            .collect()
    }

    #[test]
    fn too_short_series_is_not_an_uptrend() {
        let bars = bars_with_closes(&vec![100.0; 40]);
        assert!(!check_uptrend(&bars).is_uptrend);
    }

    #[test]
    fn flat_series_is_not_an_uptrend() {
        let bars = bars_with_closes(&vec![100.0; 60]);
        let check = check_uptrend(&bars);
        assert!(!check.is_uptrend);
        assert!(check.change_pct.abs() < 1e-9);
    }

    #[test]
    fn ten_percent_step_is_an_uptrend() {
        // Baseline window (bars 10..30 of 60) at 100, recent 20 at 110.
        let mut closes = vec![100.0; 40];
        closes.extend(vec![110.0; 20]);
        let check = check_uptrend(&bars_with_closes(&closes));
        assert!(check.is_uptrend);
        assert!((check.change_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rise_below_threshold_fails() {
        let mut closes = vec![100.0; 40];
        closes.extend(vec![103.0; 20]);
        let check = check_uptrend(&bars_with_closes(&closes));
        assert!(!check.is_uptrend);
        assert!((check.change_pct - 3.0).abs() < 1e-9);
    }
}
