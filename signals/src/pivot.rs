//! Classic pivot-point hold just above the pivot.

use chrono::Utc;
use market::window::{max_high, min_low};

use crate::signal::{EntrySignal, StrategyKind, long_risk_reward};
use crate::strategy::StrategyInput;

pub(crate) const MIN_WINDOW: usize = 10;

/// Bars folded into the pivot calculation.
const PIVOT_BARS: usize = 8;
/// Close must sit within this fraction above the pivot.
const PROXIMITY: f64 = 0.01;

const BASE_CONFIDENCE: f64 = 65.0;
const CLOSENESS_BONUS: f64 = 20.0;
const MAX_CONFIDENCE: f64 = 85.0;

pub(crate) fn evaluate(input: &StrategyInput<'_>) -> Option<EntrySignal> {
    let window = input.window;
    let n = window.len();
    let recent = &window[n - PIVOT_BARS..];
    let close = window[n - 1].close;

    let high = max_high(recent);
    let low = min_low(recent);
    let pivot = (high + low + close) / 3.0;
    if pivot <= 0.0 || close <= pivot {
        return None;
    }

    let distance = (close - pivot) / pivot;
    if distance > PROXIMITY {
        return None;
    }

    // Closer to the pivot scores higher.
    let closeness = 1.0 - distance / PROXIMITY;
    let confidence = (BASE_CONFIDENCE + closeness * CLOSENESS_BONUS).min(MAX_CONFIDENCE);

    // Standard pivot-point levels.
    let resistance1 = 2.0 * pivot - low;
    let support1 = 2.0 * pivot - high;

    Some(EntrySignal {
        instrument_id: input.instrument_id,
        strategy: StrategyKind::PivotPoint,
        confidence,
        current_price: close,
        target_price: resistance1,
        stop_loss: support1,
        risk_reward_ratio: long_risk_reward(close, resistance1, support1),
        timeframe: input.timeframe.to_string(),
        reason: format!("Close {close:.2} holding {:.2}% above pivot {pivot:.2}", distance * 100.0),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use market::types::PricePoint;
    use uuid::Uuid;

    fn bar(i: usize, close: f64, high: f64, low: f64) -> PricePoint {
        PricePoint {
            timestamp: Utc.timestamp_opt(i as i64 * 3_600, 0).unwrap(),
            open: close,
            high,
            low,
            close,
            volume: 1000.0,
        }
    }

    /// Eight-bar range 98..102 plus a controllable last close.
    fn window_with_last(close: f64) -> Vec<PricePoint> {
        let mut bars: Vec<_> = (0..9).map(|i| bar(i, 100.0, 102.0, 98.0)).collect();
        bars.push(bar(9, close, close, close));
        bars
    }

    fn input(window: &[PricePoint]) -> StrategyInput<'_> {
        StrategyInput {
            instrument_id: Uuid::new_v4(),
            window,
            timeframe: "4h",
        }
    }

    #[test]
    fn close_just_above_pivot_fires() {
        // pivot = (102 + 98 + 100.2) / 3 = 100.0667; close 0.13% above.
        let window = window_with_last(100.2);
        let signal = StrategyKind::PivotPoint.evaluate(&input(&window)).unwrap();
        assert!(signal.confidence > 80.0 && signal.confidence <= 85.0);
        assert!(signal.target_price > signal.current_price);
        assert!(signal.stop_loss < signal.current_price);
    }

    #[test]
    fn close_below_pivot_does_not_fire() {
        let window = window_with_last(99.0);
        assert!(StrategyKind::PivotPoint.evaluate(&input(&window)).is_none());
    }

    #[test]
    fn close_too_far_above_pivot_does_not_fire() {
        // pivot ~ (102 + 98 + 102) / 3 = 100.67; close 1.3% above.
        let window = window_with_last(102.0);
        assert!(StrategyKind::PivotPoint.evaluate(&input(&window)).is_none());
    }

    #[test]
    fn confidence_decays_with_distance() {
        let near = StrategyKind::PivotPoint
            .evaluate(&input(&window_with_last(100.2)))
            .unwrap();
        let far = StrategyKind::PivotPoint
            .evaluate(&input(&window_with_last(100.9)))
            .unwrap();
        assert!(near.confidence > far.confidence);
    }
}
