//! Volume spike with a decisive one-bar move.

use chrono::Utc;
use market::window::mean_volume;

use crate::signal::{EntrySignal, StrategyKind, long_risk_reward, short_risk_reward};
use crate::strategy::StrategyInput;

pub(crate) const MIN_WINDOW: usize = 10;

/// Bars of prior history defining the volume baseline.
const LOOKBACK: usize = 9;
/// Current volume must exceed the baseline by this factor.
const SPIKE_RATIO: f64 = 2.0;
/// And price must have moved by more than this percent in one bar.
const MIN_MOVE_PCT: f64 = 1.0;

const BASE_CONFIDENCE: f64 = 70.0;
const RATIO_BONUS_CAP: f64 = 20.0;

const TARGET_PCT: f64 = 0.05;
const STOP_PCT: f64 = 0.03;

pub(crate) fn evaluate(input: &StrategyInput<'_>) -> Option<EntrySignal> {
    let window = input.window;
    let n = window.len();
    let current = &window[n - 1];
    let history = &window[n - 1 - LOOKBACK..n - 1];

    let avg_volume = mean_volume(history);
    if avg_volume <= 0.0 {
        return None;
    }
    let ratio = current.volume / avg_volume;
    if ratio <= SPIKE_RATIO {
        return None;
    }

    let previous_close = window[n - 2].close;
    if previous_close <= 0.0 {
        return None;
    }
    let change_pct = (current.close - previous_close) / previous_close * 100.0;
    if change_pct.abs() <= MIN_MOVE_PCT {
        return None;
    }

    let confidence = BASE_CONFIDENCE + ((ratio - SPIKE_RATIO) * 10.0).min(RATIO_BONUS_CAP);

    let bullish = change_pct > 0.0;
    let close = current.close;
    let (target_price, stop_loss, risk_reward_ratio) = if bullish {
        let target = close * (1.0 + TARGET_PCT);
        let stop = close * (1.0 - STOP_PCT);
        (target, stop, long_risk_reward(close, target, stop))
    } else {
        let target = close * (1.0 - TARGET_PCT);
        let stop = close * (1.0 + STOP_PCT);
        (target, stop, short_risk_reward(close, target, stop))
    };

    let direction = if bullish { "bullish" } else { "bearish" };

    Some(EntrySignal {
        instrument_id: input.instrument_id,
        strategy: StrategyKind::VolumeSpike,
        confidence,
        current_price: close,
        target_price,
        stop_loss,
        risk_reward_ratio,
        timeframe: input.timeframe.to_string(),
        reason: format!(
            "{direction} {:.1}x volume spike with a {change_pct:+.1}% move",
            ratio
        ),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use market::types::PricePoint;
    use uuid::Uuid;

    fn bar(i: usize, close: f64, volume: f64) -> PricePoint {
        PricePoint {
            timestamp: Utc.timestamp_opt(i as i64 * 3_600, 0).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }

    fn window_with_last(close: f64, volume: f64) -> Vec<PricePoint> {
        let mut bars: Vec<_> = (0..9).map(|i| bar(i, 100.0, 1000.0)).collect();
        bars.push(bar(9, close, volume));
        bars
    }

    fn input(window: &[PricePoint]) -> StrategyInput<'_> {
        StrategyInput {
            instrument_id: Uuid::new_v4(),
            window,
            timeframe: "1h",
        }
    }

    #[test]
    fn bullish_spike_fires_long() {
        // 3x volume, +2% move: confidence 70 + 10.
        let window = window_with_last(102.0, 3000.0);
        let signal = StrategyKind::VolumeSpike.evaluate(&input(&window)).unwrap();
        assert!((signal.confidence - 80.0).abs() < 1e-9);
        assert!(signal.target_price > signal.current_price);
        assert!(signal.stop_loss < signal.current_price);
        assert!(signal.reason.contains("bullish"));
    }

    #[test]
    fn bearish_spike_fires_short_with_mirrored_levels() {
        let window = window_with_last(98.0, 3000.0);
        let signal = StrategyKind::VolumeSpike.evaluate(&input(&window)).unwrap();
        assert!(signal.target_price < signal.current_price);
        assert!(signal.stop_loss > signal.current_price);
        assert!(signal.risk_reward_ratio > 0.0);
        assert!(signal.reason.contains("bearish"));
    }

    #[test]
    fn ratio_bonus_is_capped_at_20() {
        // 10x volume would be +80 uncapped.
        let window = window_with_last(102.0, 10_000.0);
        let signal = StrategyKind::VolumeSpike.evaluate(&input(&window)).unwrap();
        assert_eq!(signal.confidence, 90.0);
    }

    #[test]
    fn spike_without_price_move_does_not_fire() {
        let window = window_with_last(100.5, 3000.0);
        assert!(StrategyKind::VolumeSpike.evaluate(&input(&window)).is_none());
    }

    #[test]
    fn move_without_volume_does_not_fire() {
        let window = window_with_last(102.0, 1500.0);
        assert!(StrategyKind::VolumeSpike.evaluate(&input(&window)).is_none());
    }
}
