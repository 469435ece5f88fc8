use std::sync::Arc;
use std::sync::atomic::AtomicU64;

/// Minimal counters for operational visibility.
///
/// Cloning shares the underlying counters.
#[derive(Clone, Default)]
pub struct Counters {
    pub ticks: Arc<AtomicU64>,
    pub ticks_empty: Arc<AtomicU64>,
    pub signals_fired: Arc<AtomicU64>,

    pub data_unavailable: Arc<AtomicU64>,
    pub store_failures: Arc<AtomicU64>,
    pub notify_failures: Arc<AtomicU64>,
}
