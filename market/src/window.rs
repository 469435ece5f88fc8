//! Small window math helpers shared by the analyzer and the strategies.
//!
//! All helpers are total: empty or degenerate input yields a neutral value
//! (0.0) instead of NaN, so callers can gate on their own minimum-length
//! checks without re-guarding every arithmetic step.

use crate::types::PricePoint;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

pub fn max_high(bars: &[PricePoint]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max)
}

pub fn min_low(bars: &[PricePoint]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min)
}

pub fn mean_close(bars: &[PricePoint]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter().map(|b| b.close).sum::<f64>() / bars.len() as f64
}

pub fn mean_volume(bars: &[PricePoint]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter().map(|b| b.volume).sum::<f64>() / bars.len() as f64
}

/// Simple moving average of the last `n` closes, or `None` below `n` bars.
pub fn sma(bars: &[PricePoint], n: usize) -> Option<f64> {
    if n == 0 || bars.len() < n {
        return None;
    }
    Some(mean_close(&bars[bars.len() - n..]))
}

/// Close-to-close simple returns. Bars with a non-positive previous close
/// contribute nothing.
pub fn pct_returns(bars: &[PricePoint]) -> Vec<f64> {
    bars.windows(2)
        .filter(|w| w[0].close > 0.0)
        .map(|w| w[1].close / w[0].close - 1.0)
        .collect()
}
