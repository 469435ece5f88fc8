pub mod alert;
pub mod config;
pub mod counters;
pub mod engine;
pub mod error;
pub mod registry;
pub mod store;

pub use alert::AlertDispatcher;
pub use config::{ConfigPatch, MonitoringConfig};
pub use engine::SignalMonitor;
pub use error::MonitorError;
pub use registry::WatchStatus;
pub use store::{ScanRecord, ScanResultStore};

/// Stateless pattern analysis, exposed alongside the monitor operations.
pub use pattern::analyze as analyze_pattern;
