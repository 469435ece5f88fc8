//! Breakout potential near the top of the recent range.
//!
//! Resistance and support are taken from the last 10 bars excluding the
//! current one; the current close's position inside that range and its
//! distance to resistance drive the banded score.

use market::types::PricePoint;
use market::window::{max_high, min_low};

pub const WINDOW: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct BreakoutPotential {
    pub resistance: f64,
    pub support: f64,
    /// Where the current close sits in [support, resistance], 0..1.
    pub position: f64,
    /// Percent distance from close up to resistance (negative once above it).
    pub distance_to_resistance_pct: f64,
    pub score: f64,
}

pub fn assess_breakout(bars: &[PricePoint]) -> BreakoutPotential {
    let n = bars.len();
    if n < WINDOW {
        return BreakoutPotential {
            resistance: 0.0,
            support: 0.0,
            position: 0.0,
            distance_to_resistance_pct: 0.0,
            score: 30.0,
        };
    }

    let window = &bars[n - WINDOW..];
    let (history, current) = window.split_at(WINDOW - 1);
    let close = current[0].close;

    let resistance = max_high(history);
    let support = min_low(history);

    if close <= 0.0 || resistance <= support {
        return BreakoutPotential {
            resistance,
            support,
            position: 0.5,
            distance_to_resistance_pct: 0.0,
            score: 30.0,
        };
    }

    let position = (close - support) / (resistance - support);
    let distance_to_resistance_pct = (resistance - close) / close * 100.0;

    let score = if distance_to_resistance_pct < 2.0 && position > 0.7 {
        85.0
    } else if distance_to_resistance_pct < 5.0 && position > 0.6 {
        70.0
    } else if position > 0.5 {
        50.0
    } else {
        30.0
    };

    BreakoutPotential {
        resistance,
        support,
        position,
        distance_to_resistance_pct,
        score,
    }
}
