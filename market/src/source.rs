use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::types::PricePoint;

/// Provider of historical price series.
///
/// Implementations live outside the core (exchange adapters, cached feeds,
/// test replays). An empty series and an `Err` are both legitimate "no data
/// right now" answers; callers treat them as a skipped check, never as fatal.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn series(
        &self,
        instrument_id: Uuid,
        timeframe: &str,
        lookback_days: u32,
    ) -> Result<Vec<PricePoint>>;
}
