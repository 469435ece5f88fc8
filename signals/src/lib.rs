mod breakout;
mod ma_alignment;
mod pivot;
pub mod signal;
pub mod strategy;
mod support_bounce;
mod volume_spike;

pub use signal::{EntrySignal, StrategyKind};
pub use strategy::{StrategyInput, best_signal};
