//! Bounce off a recent support shelf.

use chrono::Utc;
use market::window::min_low;

use crate::signal::{EntrySignal, StrategyKind, long_risk_reward};
use crate::strategy::StrategyInput;

pub(crate) const MIN_WINDOW: usize = 15;

/// Support is the lowest low of bars 15 to 5 back (exclusive of the most
/// recent stretch, so the bounce itself does not define the level).
const ZONE_START_BACK: usize = 15;
const ZONE_END_BACK: usize = 5;
/// Close must sit within this fraction above support.
const PROXIMITY: f64 = 0.02;

const BASE_CONFIDENCE: f64 = 60.0;
const CLOSENESS_BONUS: f64 = 20.0;
const MAX_CONFIDENCE: f64 = 80.0;

const TARGET_ABOVE_SUPPORT: f64 = 1.06;
const STOP_BELOW_SUPPORT: f64 = 0.97;

pub(crate) fn evaluate(input: &StrategyInput<'_>) -> Option<EntrySignal> {
    let window = input.window;
    let n = window.len();
    let zone = &window[n - ZONE_START_BACK..n - ZONE_END_BACK];

    let support = min_low(zone);
    if support <= 0.0 {
        return None;
    }

    let close = window[n - 1].close;
    let previous_close = window[n - 2].close;
    if close <= previous_close {
        return None;
    }

    let distance = (close - support) / support;
    if !(0.0..=PROXIMITY).contains(&distance) {
        return None;
    }

    let closeness = 1.0 - distance / PROXIMITY;
    let confidence = (BASE_CONFIDENCE + closeness * CLOSENESS_BONUS).min(MAX_CONFIDENCE);

    let target_price = support * TARGET_ABOVE_SUPPORT;
    let stop_loss = support * STOP_BELOW_SUPPORT;

    Some(EntrySignal {
        instrument_id: input.instrument_id,
        strategy: StrategyKind::SupportBounce,
        confidence,
        current_price: close,
        target_price,
        stop_loss,
        risk_reward_ratio: long_risk_reward(close, target_price, stop_loss),
        timeframe: input.timeframe.to_string(),
        reason: format!(
            "Close {close:.2} turning up {:.2}% above support {support:.2}",
            distance * 100.0
        ),
        timestamp: Utc::now(),
    })
}
