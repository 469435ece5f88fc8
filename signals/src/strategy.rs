//! The closed set of entry-signal strategies.
//!
//! Every strategy evaluates the same input shape and returns an optional
//! candidate signal; the dispatch lives here so adding a strategy means
//! adding a variant, not editing the callers.

use market::types::PricePoint;
use uuid::Uuid;

use crate::signal::{EntrySignal, StrategyKind};
use crate::{breakout, ma_alignment, pivot, support_bounce, volume_spike};

/// What a strategy sees: the watched instrument and a recent, chronologically
/// ordered window of bars for one timeframe.
#[derive(Debug, Clone, Copy)]
pub struct StrategyInput<'a> {
    pub instrument_id: Uuid,
    pub window: &'a [PricePoint],
    pub timeframe: &'a str,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Breakout,
        StrategyKind::PivotPoint,
        StrategyKind::SupportBounce,
        StrategyKind::VolumeSpike,
        StrategyKind::MaAlignment,
    ];

    /// Bars required before this strategy will evaluate at all.
    pub fn min_window(&self) -> usize {
        match self {
            StrategyKind::Breakout => breakout::MIN_WINDOW,
            StrategyKind::PivotPoint => pivot::MIN_WINDOW,
            StrategyKind::SupportBounce => support_bounce::MIN_WINDOW,
            StrategyKind::VolumeSpike => volume_spike::MIN_WINDOW,
            StrategyKind::MaAlignment => ma_alignment::MIN_WINDOW,
        }
    }

    /// Evaluate this strategy against the window.
    ///
    /// Windows below the strategy minimum yield `None`, never an error.
    pub fn evaluate(&self, input: &StrategyInput<'_>) -> Option<EntrySignal> {
        if input.window.len() < self.min_window() {
            return None;
        }
        match self {
            StrategyKind::Breakout => breakout::evaluate(input),
            StrategyKind::PivotPoint => pivot::evaluate(input),
            StrategyKind::SupportBounce => support_bounce::evaluate(input),
            StrategyKind::VolumeSpike => volume_spike::evaluate(input),
            StrategyKind::MaAlignment => ma_alignment::evaluate(input),
        }
    }
}

/// Run every strategy and keep the highest-confidence candidate.
pub fn best_signal(input: &StrategyInput<'_>) -> Option<EntrySignal> {
    StrategyKind::ALL
        .iter()
        .filter_map(|s| s.evaluate(input))
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
}
