//! Volatility-contraction pattern analyzer.
//!
//! `analyze` is a pure function over a price series: it sorts its own copy
//! chronologically, measures the individual pattern components, and folds
//! them into a 0-100 composite score. It never fails; series below
//! [`MIN_POINTS`] yield a zero-confidence result instead of an error.

use market::types::{PricePoint, sort_chronological};

use crate::base::detect_bases;
use crate::breakout::assess_breakout;
use crate::entry::entry_points;
use crate::result::{PatternResult, TrendDirection};
use crate::tightness::measure_tightness;
use crate::trend::check_uptrend;
use crate::volatility::measure_contraction;
use crate::volume::assess_volume;

/// Minimum series length the analyzer will work with.
pub const MIN_POINTS: usize = 50;
/// Only the most recent bars are analyzed.
pub const ANALYSIS_WINDOW: usize = 100;
/// Composite scores above this count as a detected pattern.
pub const PATTERN_THRESHOLD: f64 = 60.0;

const UPTREND_SCORE: f64 = 20.0;
const BASE_SCORE_PER_BASE: f64 = 8.0;
const BASE_SCORE_CAP: f64 = 25.0;
const CONTRACTION_WEIGHT: f64 = 0.4;
const CONTRACTION_SCORE_CAP: f64 = 20.0;
const TIGHTNESS_WEIGHT: f64 = 0.15;
const DRY_UP_SCORE: f64 = 10.0;
const BREAKOUT_WEIGHT: f64 = 0.1;

pub fn analyze(series: &[PricePoint]) -> PatternResult {
    if series.len() < MIN_POINTS {
        return PatternResult::insufficient();
    }

    let mut sorted = series.to_vec();
    sort_chronological(&mut sorted);
    let start = sorted.len().saturating_sub(ANALYSIS_WINDOW);
    let bars = &sorted[start..];

    let uptrend = check_uptrend(bars);
    let bases = detect_bases(bars);
    let contraction = measure_contraction(bars);
    let tightness = measure_tightness(bars);
    let volume = assess_volume(bars);
    let breakout = assess_breakout(bars);

    let current_price = bars[bars.len() - 1].close;
    let entries = entry_points(&breakout, current_price);

    let mut score = 0.0;
    if uptrend.is_uptrend {
        score += UPTREND_SCORE;
    }
    score += (bases.len() as f64 * BASE_SCORE_PER_BASE).min(BASE_SCORE_CAP);
    score += (contraction.contraction_pct * CONTRACTION_WEIGHT).min(CONTRACTION_SCORE_CAP);
    score += tightness.score * TIGHTNESS_WEIGHT;
    if volume.dry_up {
        score += DRY_UP_SCORE;
    }
    score += breakout.score * BREAKOUT_WEIGHT;

    let score = score.round().clamp(0.0, 100.0);

    let description = describe(
        &uptrend,
        bases.len(),
        contraction.contraction_pct,
        contraction.trend,
        tightness.label,
        volume.ratio,
        volume.trend,
        breakout.score,
    );

    PatternResult {
        has_pattern: score > PATTERN_THRESHOLD,
        score,
        base_count: bases.len(),
        volatility_contraction_pct: contraction.contraction_pct,
        price_tightness_score: tightness.score,
        volume_dry_up: volume.dry_up,
        breakout_potential_score: breakout.score,
        entry_points: entries,
        description,
    }
}

#[allow(clippy::too_many_arguments)]
fn describe(
    uptrend: &crate::trend::UptrendCheck,
    base_count: usize,
    contraction_pct: f64,
    contraction_trend: TrendDirection,
    tightness_label: &str,
    volume_ratio: f64,
    volume_trend: TrendDirection,
    breakout_score: f64,
) -> String {
    let uptrend_part = if uptrend.is_uptrend {
        format!("Uptrend {:+.1}% into the base", uptrend.change_pct)
    } else {
        format!("No prior uptrend ({:+.1}%)", uptrend.change_pct)
    };

    let volume_part = match volume_trend {
        TrendDirection::Decreasing => format!("volume drying up (ratio {volume_ratio:.2})"),
        TrendDirection::Increasing => format!("volume expanding (ratio {volume_ratio:.2})"),
        TrendDirection::Stable => format!("volume steady (ratio {volume_ratio:.2})"),
    };

    [
        uptrend_part,
        format!("{base_count} consolidation base(s)"),
        format!(
            "volatility contraction {:.1}% ({})",
            contraction_pct,
            contraction_trend.as_str()
        ),
        tightness_label.to_string(),
        volume_part,
        format!("breakout potential {breakout_score:.0}/100"),
    ]
    .join("; ")
}
