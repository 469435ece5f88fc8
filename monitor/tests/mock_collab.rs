//! In-memory collaborators for monitor tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use market::source::MarketDataSource;
use market::types::PricePoint;
use monitor::store::{ScanRecord, ScanResultStore};
use monitor::{AlertDispatcher, SignalMonitor};
use signals::EntrySignal;

// -----------------------
// Collaborator mocks
// -----------------------

#[derive(Default)]
pub struct MockMarket {
    series: Mutex<HashMap<(Uuid, String), Vec<PricePoint>>>,
    failing: AtomicBool,
}

impl MockMarket {
    pub fn set(&self, instrument_id: Uuid, timeframe: &str, bars: Vec<PricePoint>) {
        self.series
            .lock()
            .insert((instrument_id, timeframe.to_string()), bars);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl MarketDataSource for MockMarket {
    async fn series(
        &self,
        instrument_id: Uuid,
        timeframe: &str,
        _lookback_days: u32,
    ) -> anyhow::Result<Vec<PricePoint>> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("feed offline");
        }
        Ok(self
            .series
            .lock()
            .get(&(instrument_id, timeframe.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockStore {
    records: Mutex<HashMap<Uuid, ScanRecord>>,
    signals: Mutex<Vec<EntrySignal>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockStore {
    pub fn insert_record(&self, record: ScanRecord) {
        self.records.lock().insert(record.instrument_id, record);
    }

    pub fn remove_record(&self, instrument_id: Uuid) {
        self.records.lock().remove(&instrument_id);
    }

    pub fn get(&self, instrument_id: Uuid) -> Option<ScanRecord> {
        self.records.lock().get(&instrument_id).cloned()
    }

    pub fn signals(&self) -> Vec<EntrySignal> {
        self.signals.lock().clone()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ScanResultStore for MockStore {
    async fn fetch(&self, instrument_id: Uuid) -> anyhow::Result<Option<ScanRecord>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("store offline");
        }
        Ok(self.records.lock().get(&instrument_id).cloned())
    }

    async fn record_signal(
        &self,
        instrument_id: Uuid,
        signal: &EntrySignal,
    ) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("store write rejected");
        }
        if let Some(record) = self.records.lock().get_mut(&instrument_id) {
            record.last_price = signal.current_price;
            record.signal_fired_at = Some(signal.timestamp);
        }
        self.signals.lock().push(signal.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockAlerts {
    sent: Mutex<Vec<(String, EntrySignal)>>,
    failing: AtomicBool,
}

impl MockAlerts {
    pub fn sent(&self) -> Vec<(String, EntrySignal)> {
        self.sent.lock().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl AlertDispatcher for MockAlerts {
    async fn dispatch(&self, record: &ScanRecord, signal: &EntrySignal) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("webhook down");
        }
        self.sent.lock().push((record.symbol.clone(), signal.clone()));
        Ok(())
    }
}

// -----------------------
// Fixtures
// -----------------------

pub struct Harness {
    pub market: Arc<MockMarket>,
    pub store: Arc<MockStore>,
    pub alerts: Arc<MockAlerts>,
    pub monitor: SignalMonitor,
}

pub fn harness(config: monitor::MonitoringConfig) -> Harness {
    let market = Arc::new(MockMarket::default());
    let store = Arc::new(MockStore::default());
    let alerts = Arc::new(MockAlerts::default());
    let monitor = SignalMonitor::new(
        market.clone(),
        store.clone(),
        alerts.clone(),
        config,
    );
    Harness {
        market,
        store,
        alerts,
        monitor,
    }
}

pub fn record(instrument_id: Uuid, symbol: &str, has_pattern: bool) -> ScanRecord {
    ScanRecord {
        instrument_id,
        symbol: symbol.to_string(),
        has_pattern,
        pattern_score: if has_pattern { 78.0 } else { 35.0 },
        last_price: 100.0,
        signal_fired_at: None,
    }
}

pub fn bar(i: usize, close: f64, high: f64, low: f64, volume: f64) -> PricePoint {
    PricePoint {
        timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 3_600, 0).unwrap(),
        open: close,
        high,
        low,
        close,
        volume,
    }
}

/// Twenty quiet bars; no strategy fires on these.
pub fn flat_bars() -> Vec<PricePoint> {
    (0..20).map(|i| bar(i, 100.0, 100.0, 100.0, 1000.0)).collect()
}

/// Nine bars capped at 101, then a 103 close on triple volume: a clean
/// breakout at confidence 85.
pub fn breakout_bars() -> Vec<PricePoint> {
    let mut bars: Vec<_> = (0..9)
        .map(|i| bar(i, 100.0, 101.0, 99.0, 1000.0))
        .collect();
    bars.push(bar(9, 103.0, 103.5, 100.0, 3000.0));
    bars
}
