//! Analyzer output types.

use serde::{Deserialize, Serialize};

/// Direction of a measured series (volatility, volume) across windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Decreasing,
    Stable,
    Increasing,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
            TrendDirection::Increasing => "increasing",
        }
    }
}

/// Where a candidate entry sits relative to the consolidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Breakout,
    Pivot,
    Support,
}

/// A candidate entry price with a heuristic confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub kind: EntryKind,
    pub price: f64,
    pub confidence: f64,
    pub description: String,
}

/// Full result of one analyzer pass over a series.
///
/// Produced fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    pub has_pattern: bool,
    /// Composite score, rounded and clamped to [0, 100].
    pub score: f64,
    pub base_count: usize,
    pub volatility_contraction_pct: f64,
    pub price_tightness_score: f64,
    pub volume_dry_up: bool,
    pub breakout_potential_score: f64,
    /// Sorted by confidence, descending.
    pub entry_points: Vec<EntryPoint>,
    pub description: String,
}

impl PatternResult {
    /// Zero-confidence result for series below the analyzable minimum.
    pub fn insufficient() -> Self {
        Self {
            has_pattern: false,
            score: 0.0,
            base_count: 0,
            volatility_contraction_pct: 0.0,
            price_tightness_score: 0.0,
            volume_dry_up: false,
            breakout_potential_score: 0.0,
            entry_points: Vec::new(),
            description: "Insufficient data for analysis".to_string(),
        }
    }
}
