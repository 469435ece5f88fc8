//! Breakout above recent resistance, confirmed by volume.

use chrono::Utc;
use market::window::{max_high, mean_volume};

use crate::signal::{EntrySignal, StrategyKind, long_risk_reward};
use crate::strategy::StrategyInput;

pub(crate) const MIN_WINDOW: usize = 10;

/// Bars of prior history defining resistance.
const LOOKBACK: usize = 9;
/// Close must clear resistance by this factor.
const BREAKOUT_MARGIN: f64 = 1.01;

const BASE_CONFIDENCE: f64 = 70.0;
const MAX_CONFIDENCE: f64 = 95.0;
const STRONG_VOLUME_RATIO: f64 = 1.5;
const ELEVATED_VOLUME_RATIO: f64 = 1.2;

const TARGET_GAIN: f64 = 1.08;
const STOP_BELOW_RESISTANCE: f64 = 0.98;

pub(crate) fn evaluate(input: &StrategyInput<'_>) -> Option<EntrySignal> {
    let window = input.window;
    let n = window.len();
    let current = &window[n - 1];
    let history = &window[n - 1 - LOOKBACK..n - 1];

    let resistance = max_high(history);
    if resistance <= 0.0 || current.close < resistance * BREAKOUT_MARGIN {
        return None;
    }

    let avg_volume = mean_volume(history);
    let volume_ratio = if avg_volume > 0.0 {
        current.volume / avg_volume
    } else {
        0.0
    };
    let volume_bonus = if volume_ratio > STRONG_VOLUME_RATIO {
        15.0
    } else if volume_ratio > ELEVATED_VOLUME_RATIO {
        10.0
    } else {
        5.0
    };

    let confidence = (BASE_CONFIDENCE + volume_bonus).min(MAX_CONFIDENCE);
    let target_price = current.close * TARGET_GAIN;
    let stop_loss = resistance * STOP_BELOW_RESISTANCE;

    Some(EntrySignal {
        instrument_id: input.instrument_id,
        strategy: StrategyKind::Breakout,
        confidence,
        current_price: current.close,
        target_price,
        stop_loss,
        risk_reward_ratio: long_risk_reward(current.close, target_price, stop_loss),
        timeframe: input.timeframe.to_string(),
        reason: format!(
            "Close {:.2} cleared {LOOKBACK}-bar resistance {:.2} on {:.1}x volume",
            current.close, resistance, volume_ratio
        ),
        timestamp: Utc::now(),
    })
}
