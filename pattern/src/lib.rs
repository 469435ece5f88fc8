pub mod analyzer;
pub mod base;
pub mod breakout;
pub mod entry;
pub mod result;
pub mod tightness;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use analyzer::{MIN_POINTS, analyze};
pub use result::{EntryKind, EntryPoint, PatternResult, TrendDirection};
