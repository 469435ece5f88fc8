//! Candidate entry prices derived from the breakout assessment.

use crate::breakout::BreakoutPotential;
use crate::result::{EntryKind, EntryPoint};

const BREAKOUT_CONFIDENCE: f64 = 75.0;
const PIVOT_CONFIDENCE: f64 = 60.0;
const SUPPORT_CONFIDENCE: f64 = 45.0;

/// Entry offset above a breakout or support level.
const LEVEL_MARGIN: f64 = 1.01;
/// Resistance must clear the current price by this factor to be worth
/// waiting for.
const RESISTANCE_GAP: f64 = 1.01;
/// Support must sit at least this far below the current price to offer a
/// bounce.
const SUPPORT_GAP: f64 = 0.98;

/// Build the candidate entries for the current price, sorted by confidence
/// descending. The pivot candidate at the current price is always present.
pub fn entry_points(breakout: &BreakoutPotential, price: f64) -> Vec<EntryPoint> {
    let mut points = Vec::with_capacity(3);

    if breakout.resistance > price * RESISTANCE_GAP {
        points.push(EntryPoint {
            kind: EntryKind::Breakout,
            price: breakout.resistance * LEVEL_MARGIN,
            confidence: BREAKOUT_CONFIDENCE,
            description: format!(
                "Buy a confirmed break above resistance {:.2}",
                breakout.resistance
            ),
        });
    }

    points.push(EntryPoint {
        kind: EntryKind::Pivot,
        price,
        confidence: PIVOT_CONFIDENCE,
        description: "Enter at the current pivot area".to_string(),
    });

    if breakout.support > 0.0 && breakout.support < price * SUPPORT_GAP {
        points.push(EntryPoint {
            kind: EntryKind::Support,
            price: breakout.support * LEVEL_MARGIN,
            confidence: SUPPORT_CONFIDENCE,
            description: format!("Buy a bounce off support {:.2}", breakout.support),
        });
    }

    points.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    points
}
