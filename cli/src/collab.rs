//! Self-contained collaborator implementations for the demo commands.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use market::source::MarketDataSource;
use market::types::PricePoint;
use monitor::AlertDispatcher;
use monitor::store::{ScanRecord, ScanResultStore};
use signals::EntrySignal;

/// Serves one fixed series for every timeframe.
pub struct ReplayMarket {
    bars: Vec<PricePoint>,
}

impl ReplayMarket {
    pub fn new(bars: Vec<PricePoint>) -> Self {
        Self { bars }
    }
}

#[async_trait]
impl MarketDataSource for ReplayMarket {
    async fn series(
        &self,
        _instrument_id: Uuid,
        _timeframe: &str,
        _lookback_days: u32,
    ) -> anyhow::Result<Vec<PricePoint>> {
        Ok(self.bars.clone())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<Uuid, ScanRecord>>,
}

impl MemoryStore {
    pub fn insert(&self, record: ScanRecord) {
        self.records.lock().insert(record.instrument_id, record);
    }
}

#[async_trait]
impl ScanResultStore for MemoryStore {
    async fn fetch(&self, instrument_id: Uuid) -> anyhow::Result<Option<ScanRecord>> {
        Ok(self.records.lock().get(&instrument_id).cloned())
    }

    async fn record_signal(
        &self,
        instrument_id: Uuid,
        signal: &EntrySignal,
    ) -> anyhow::Result<()> {
        if let Some(record) = self.records.lock().get_mut(&instrument_id) {
            record.last_price = signal.current_price;
            record.signal_fired_at = Some(signal.timestamp);
        }
        Ok(())
    }
}

/// Prints fired alerts; stands in for a real notification channel.
pub struct LogAlerts;

#[async_trait]
impl AlertDispatcher for LogAlerts {
    async fn dispatch(&self, record: &ScanRecord, signal: &EntrySignal) -> anyhow::Result<()> {
        info!(symbol = %record.symbol, strategy = %signal.strategy, "alert dispatched");
        println!(
            "ALERT {} [{}] {} @ {:.2} -> target {:.2}, stop {:.2} (r/r {:.2}, confidence {:.0})",
            record.symbol,
            signal.timeframe,
            signal.strategy,
            signal.current_price,
            signal.target_price,
            signal.stop_loss,
            signal.risk_reward_ratio,
            signal.confidence,
        );
        println!("  {}", signal.reason);
        Ok(())
    }
}
