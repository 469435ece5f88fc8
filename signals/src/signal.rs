//! Entry-signal types shared by all strategies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which strategy produced a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Breakout,
    PivotPoint,
    SupportBounce,
    VolumeSpike,
    MaAlignment,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Breakout => "breakout",
            StrategyKind::PivotPoint => "pivot_point",
            StrategyKind::SupportBounce => "support_bounce",
            StrategyKind::VolumeSpike => "volume_spike",
            StrategyKind::MaAlignment => "ma_alignment",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate entry produced by one strategy for one timeframe.
///
/// Ephemeral: produced by a strategy, consumed immediately by the monitor,
/// persisted only through the scan-result collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySignal {
    pub instrument_id: Uuid,
    pub strategy: StrategyKind,
    /// 0-100.
    pub confidence: f64,
    pub current_price: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    pub risk_reward_ratio: f64,
    pub timeframe: String,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

/// Reward-to-risk for a long setup. Non-positive risk yields 0.
pub(crate) fn long_risk_reward(current: f64, target: f64, stop: f64) -> f64 {
    let risk = current - stop;
    if risk <= 0.0 {
        return 0.0;
    }
    (target - current) / risk
}

/// Mirrored reward-to-risk for a short setup.
pub(crate) fn short_risk_reward(current: f64, target: f64, stop: f64) -> f64 {
    let risk = stop - current;
    if risk <= 0.0 {
        return 0.0;
    }
    (current - target) / risk
}
