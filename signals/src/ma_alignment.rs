//! Bullish moving-average stack (price above MA20 above MA50).

use chrono::Utc;
use market::window::sma;

use crate::signal::{EntrySignal, StrategyKind, long_risk_reward};
use crate::strategy::StrategyInput;

pub(crate) const MIN_WINDOW: usize = 50;

const FAST_PERIOD: usize = 20;
const SLOW_PERIOD: usize = 50;

const BASE_CONFIDENCE: f64 = 65.0;
const MAX_CONFIDENCE: f64 = 80.0;
/// Fixed bonuses; each is a heuristic carried over as-is.
const SEPARATION_BONUS: f64 = 5.0;
const PULLBACK_BONUS: f64 = 5.0;
const RISING_FAST_BONUS: f64 = 5.0;

const TARGET_GAIN: f64 = 1.06;
const STOP_BELOW_MA: f64 = 0.98;

pub(crate) fn evaluate(input: &StrategyInput<'_>) -> Option<EntrySignal> {
    let window = input.window;
    let n = window.len();
    let close = window[n - 1].close;

    let fast = sma(window, FAST_PERIOD)?;
    let slow = sma(window, SLOW_PERIOD)?;

    if !(close > fast && close > slow && fast > slow) {
        return None;
    }

    let mut bonus = 0.0;
    // Clear daylight between the averages.
    if fast > slow * 1.01 {
        bonus += SEPARATION_BONUS;
    }
    // Price has not run far from the fast average.
    if close <= fast * 1.03 {
        bonus += PULLBACK_BONUS;
    }
    // Fast average itself is rising.
    if let Some(fast_earlier) = sma(&window[..n - 5], FAST_PERIOD) {
        if fast > fast_earlier {
            bonus += RISING_FAST_BONUS;
        }
    }

    let confidence = (BASE_CONFIDENCE + bonus).min(MAX_CONFIDENCE);
    let target_price = close * TARGET_GAIN;
    let stop_loss = fast.min(slow) * STOP_BELOW_MA;

    Some(EntrySignal {
        instrument_id: input.instrument_id,
        strategy: StrategyKind::MaAlignment,
        confidence,
        current_price: close,
        target_price,
        stop_loss,
        risk_reward_ratio: long_risk_reward(close, target_price, stop_loss),
        timeframe: input.timeframe.to_string(),
        reason: format!(
            "Close {close:.2} above MA{FAST_PERIOD} {fast:.2} above MA{SLOW_PERIOD} {slow:.2}"
        ),
        timestamp: Utc::now(),
    })
}
