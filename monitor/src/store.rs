use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use signals::EntrySignal;

/// Store-side view of a scanned instrument.
///
/// Read for monitoring eligibility, written back once a signal fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub instrument_id: Uuid,
    pub symbol: String,
    pub has_pattern: bool,
    pub pattern_score: f64,
    pub last_price: f64,
    pub signal_fired_at: Option<DateTime<Utc>>,
}

/// Persistence collaborator for scan results.
///
/// Implementations live outside the core. A `fetch` returning `Ok(None)`
/// means the record no longer exists; the monitor stops watching that
/// instrument silently.
#[async_trait]
pub trait ScanResultStore: Send + Sync {
    async fn fetch(&self, instrument_id: Uuid) -> Result<Option<ScanRecord>>;

    /// Record a fired signal against the instrument (last price, fired-at).
    async fn record_signal(&self, instrument_id: Uuid, signal: &EntrySignal) -> Result<()>;
}
