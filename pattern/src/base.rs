//! Consolidation base detection.
//!
//! A base is a 20-bar window whose full high-low range is small relative to
//! its mean close. Windows slide one bar at a time, so bases may overlap;
//! no merging is performed.

use market::types::PricePoint;
use market::window::{max_high, mean_close, min_low};

pub const HALF_WINDOW: usize = 10;
pub const MAX_DEPTH_RATIO: f64 = 0.08;

/// A detected consolidation window. Derived per call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Base {
    pub start_index: usize,
    pub end_index: usize,
    /// (max high - min low) / mean close over the window.
    pub depth_ratio: f64,
    pub duration_bars: usize,
}

pub fn detect_bases(bars: &[PricePoint]) -> Vec<Base> {
    let mut bases = Vec::new();
    if bars.len() < 2 * HALF_WINDOW {
        return bases;
    }

    for i in HALF_WINDOW..=bars.len() - HALF_WINDOW {
        let start = i - HALF_WINDOW;
        let end = i + HALF_WINDOW;
        let window = &bars[start..end];
        let mc = mean_close(window);
        if mc <= 0.0 {
            continue;
        }

        let depth_ratio = (max_high(window) - min_low(window)) / mc;
        if depth_ratio < MAX_DEPTH_RATIO {
            bases.push(Base {
                start_index: start,
                end_index: end - 1,
                depth_ratio,
                duration_bars: 2 * HALF_WINDOW,
            });
        }
    }

    bases
}
