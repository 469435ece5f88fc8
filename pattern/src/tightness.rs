//! Price tightness over the most recent bars.

use market::types::PricePoint;
use market::window::{max_high, mean_close, min_low};

pub const WINDOW: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct PriceTightness {
    /// (1 - range / mean close) * 100 over the window.
    pub tightness_pct: f64,
    /// Banded 0-90 score.
    pub score: f64,
    pub label: &'static str,
}

pub fn measure_tightness(bars: &[PricePoint]) -> PriceTightness {
    let n = bars.len();
    if n < WINDOW {
        return PriceTightness {
            tightness_pct: 0.0,
            score: 25.0,
            label: "Wide price range",
        };
    }

    let window = &bars[n - WINDOW..];
    let mc = mean_close(window);
    if mc <= 0.0 {
        return PriceTightness {
            tightness_pct: 0.0,
            score: 25.0,
            label: "Wide price range",
        };
    }

    let range = max_high(window) - min_low(window);
    let tightness_pct = (1.0 - range / mc) * 100.0;

    let (score, label) = if tightness_pct > 85.0 {
        (90.0, "Very tight price action")
    } else if tightness_pct > 70.0 {
        (75.0, "Tight price action")
    } else if tightness_pct > 50.0 {
        (50.0, "Moderate price range")
    } else {
        (25.0, "Wide price range")
    };

    PriceTightness {
        tightness_pct,
        score,
        label,
    }
}
