use anyhow::Result;
use async_trait::async_trait;

use signals::EntrySignal;

use crate::store::ScanRecord;

/// Outbound alert collaborator.
///
/// Formatting and transport live outside the core. Dispatch failures are
/// non-fatal to the monitor: logged, counted, and not retried within the
/// same watch lifecycle.
#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    async fn dispatch(&self, record: &ScanRecord, signal: &EntrySignal) -> Result<()>;
}
