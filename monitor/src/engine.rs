//! The signal monitor.
//!
//! Owns one recurring check per watched instrument. Each check pulls a fresh
//! series per configured timeframe, runs every strategy, and fires at most
//! one alert per watch lifecycle before standing the watch down.
//!
//! Concurrency model: timers fire independently across instruments, but a
//! single task owns each instrument's checks, so per-instrument checks are
//! strictly sequential. All registry mutation goes through token-checked
//! operations, so a stop racing an in-flight check always wins.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use market::source::MarketDataSource;
use market::timeframe::lookback_days;
use market::types::PricePoint;
use signals::{EntrySignal, StrategyInput, best_signal};

use crate::alert::AlertDispatcher;
use crate::config::{ConfigPatch, MonitoringConfig};
use crate::counters::Counters;
use crate::error::MonitorError;
use crate::registry::{WatchEntry, WatchRegistry, WatchStatus, WatchToken};
use crate::store::{ScanRecord, ScanResultStore};

/// Outcome of one per-instrument check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickOutcome {
    KeepWatching,
    SignalFired,
    Stopped,
}

struct MonitorInner {
    market: Arc<dyn MarketDataSource>,
    store: Arc<dyn ScanResultStore>,
    alerts: Arc<dyn AlertDispatcher>,
    config: RwLock<MonitoringConfig>,
    registry: WatchRegistry,
    counters: Counters,
}

/// Cheap-to-clone handle over the shared monitor state; watch tasks hold
/// their own clone.
#[derive(Clone)]
pub struct SignalMonitor {
    inner: Arc<MonitorInner>,
}

impl SignalMonitor {
    pub fn new(
        market: Arc<dyn MarketDataSource>,
        store: Arc<dyn ScanResultStore>,
        alerts: Arc<dyn AlertDispatcher>,
        config: MonitoringConfig,
    ) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                market,
                store,
                alerts,
                config: RwLock::new(config),
                registry: WatchRegistry::default(),
                counters: Counters::default(),
            }),
        }
    }

    pub fn config(&self) -> MonitoringConfig {
        self.inner.config.read().clone()
    }

    /// Shared-handle counters; cloning is cheap.
    pub fn counters(&self) -> Counters {
        self.inner.counters.clone()
    }

    /// Snapshot of every active watch.
    pub fn status(&self) -> Vec<WatchStatus> {
        self.inner.registry.statuses()
    }

    /// Begin watching an instrument.
    ///
    /// Requires a recorded pattern match; replaces any existing watch for the
    /// same instrument. One check runs before this returns, so a signal that
    /// is already ripe fires immediately.
    #[instrument(skip(self), target = "monitor", fields(instrument_id = %instrument_id))]
    pub async fn start_monitoring(&self, instrument_id: Uuid) -> Result<(), MonitorError> {
        let record = self
            .inner
            .store
            .fetch(instrument_id)
            .await
            .map_err(MonitorError::Persistence)?
            .filter(|r| r.has_pattern)
            .ok_or(MonitorError::NotEligible(instrument_id))?;

        // Idempotent replace of any previous watch.
        self.stop_monitoring(instrument_id);

        let interval = self.inner.config.read().interval();
        let token = self.inner.registry.issue_token();
        if let Some(displaced) = self.inner.registry.insert(
            instrument_id,
            WatchEntry {
                symbol: record.symbol.clone(),
                interval,
                token,
                handle: None,
            },
        ) {
            cancel_entry(displaced);
        }

        info!(
            symbol = %record.symbol,
            interval_minutes = interval.as_secs() / 60,
            "monitoring started"
        );

        let outcome = self.run_check(instrument_id, token).await;
        if outcome == TickOutcome::KeepWatching {
            self.spawn_watch_task(instrument_id, token, interval);
        }

        Ok(())
    }

    /// Stop watching an instrument. No-op when it is not being watched.
    #[instrument(skip(self), target = "monitor", fields(instrument_id = %instrument_id))]
    pub fn stop_monitoring(&self, instrument_id: Uuid) -> bool {
        match self.inner.registry.remove(instrument_id) {
            Some(entry) => {
                cancel_entry(entry);
                info!("monitoring stopped");
                true
            }
            None => false,
        }
    }

    /// Stop every active watch.
    pub fn stop_all_monitoring(&self) {
        let drained = self.inner.registry.drain();
        let count = drained.len();
        for (_, entry) in drained {
            cancel_entry(entry);
        }
        info!(count, "all monitoring stopped");
    }

    /// Merge a partial config update and re-arm every active watch at the
    /// resulting interval. Watching instruments stay watching; no immediate
    /// check and no eligibility re-read happens here.
    pub fn update_config(&self, patch: ConfigPatch) -> MonitoringConfig {
        let updated = {
            let mut config = self.inner.config.write();
            config.apply(patch);
            config.clone()
        };
        info!(
            interval_minutes = updated.check_interval_minutes,
            min_confidence = updated.min_confidence,
            alerts_enabled = updated.alerts_enabled,
            "monitoring config updated"
        );

        let interval = updated.interval();
        for status in self.inner.registry.statuses() {
            let id = status.instrument_id;
            // Skip entries that fired or were stopped while iterating.
            if !self.stop_monitoring(id) {
                continue;
            }
            let token = self.inner.registry.issue_token();
            if let Some(displaced) = self.inner.registry.insert(
                id,
                WatchEntry {
                    symbol: status.symbol,
                    interval,
                    token,
                    handle: None,
                },
            ) {
                cancel_entry(displaced);
            }
            self.spawn_watch_task(id, token, interval);
        }

        updated
    }

    fn spawn_watch_task(&self, instrument_id: Uuid, token: WatchToken, period: Duration) {
        let monitor = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !monitor.inner.registry.is_current(instrument_id, token) {
                    break;
                }
                if monitor.run_check(instrument_id, token).await != TickOutcome::KeepWatching {
                    break;
                }
            }
        });

        if let Some(rejected) = self.inner.registry.attach_handle(instrument_id, token, handle) {
            // The watch disappeared between insert and spawn.
            rejected.abort();
        }
    }

    /// One check. Any failure is caught here, logged, and degraded to "no
    /// qualifying signal" so the schedule keeps running.
    async fn run_check(&self, instrument_id: Uuid, token: WatchToken) -> TickOutcome {
        self.inner.counters.ticks.fetch_add(1, Ordering::Relaxed);
        match self.check_once(instrument_id, token).await {
            Ok(outcome) => outcome,
            Err(error) => {
                if matches!(error, MonitorError::Persistence(_)) {
                    self.inner
                        .counters
                        .store_failures
                        .fetch_add(1, Ordering::Relaxed);
                }
                warn!(instrument_id = %instrument_id, error = ?error, "check failed; retrying on next tick");
                TickOutcome::KeepWatching
            }
        }
    }

    async fn check_once(
        &self,
        instrument_id: Uuid,
        token: WatchToken,
    ) -> Result<TickOutcome, MonitorError> {
        let record = match self
            .inner
            .store
            .fetch(instrument_id)
            .await
            .map_err(MonitorError::Persistence)?
        {
            Some(record) => record,
            None => {
                // Backing record is gone; stand the watch down silently.
                let _ = self.inner.registry.claim(instrument_id, token);
                debug!(instrument_id = %instrument_id, "scan record disappeared; monitoring stopped");
                return Ok(TickOutcome::Stopped);
            }
        };

        let config = self.inner.config.read().clone();

        for timeframe in &config.timeframes {
            let window = match self.fetch_window(instrument_id, timeframe).await {
                Ok(window) => window,
                Err(error) => {
                    self.inner
                        .counters
                        .data_unavailable
                        .fetch_add(1, Ordering::Relaxed);
                    debug!(error = ?error, "no market data this tick");
                    continue;
                }
            };

            let input = StrategyInput {
                instrument_id,
                window: &window,
                timeframe,
            };
            let Some(best) = best_signal(&input) else {
                continue;
            };

            debug!(
                strategy = %best.strategy,
                confidence = best.confidence,
                timeframe = %timeframe,
                "best candidate"
            );

            if best.confidence >= config.min_confidence {
                return Ok(self
                    .fire_signal(instrument_id, token, &record, best, &config)
                    .await);
            }
        }

        self.inner.counters.ticks_empty.fetch_add(1, Ordering::Relaxed);
        Ok(TickOutcome::KeepWatching)
    }

    async fn fetch_window(
        &self,
        instrument_id: Uuid,
        timeframe: &str,
    ) -> Result<Vec<PricePoint>, MonitorError> {
        let days = lookback_days(timeframe);
        let window = self
            .inner
            .market
            .series(instrument_id, timeframe, days)
            .await
            .map_err(|source| MonitorError::DataUnavailable {
                instrument: instrument_id,
                timeframe: timeframe.to_string(),
                source,
            })?;

        if window.is_empty() {
            return Err(MonitorError::DataUnavailable {
                instrument: instrument_id,
                timeframe: timeframe.to_string(),
                source: anyhow::anyhow!("empty series"),
            });
        }

        Ok(window)
    }

    /// Persist and dispatch a qualifying signal, then stand the watch down.
    ///
    /// The watch is claimed before any side effect: if a concurrent stop or
    /// restart already took the entry, the signal is suppressed entirely.
    async fn fire_signal(
        &self,
        instrument_id: Uuid,
        token: WatchToken,
        record: &ScanRecord,
        signal: EntrySignal,
        config: &MonitoringConfig,
    ) -> TickOutcome {
        let Some(_entry) = self.inner.registry.claim(instrument_id, token) else {
            debug!(instrument_id = %instrument_id, "watch cancelled mid-check; signal suppressed");
            return TickOutcome::Stopped;
        };

        self.inner
            .counters
            .signals_fired
            .fetch_add(1, Ordering::Relaxed);
        info!(
            symbol = %record.symbol,
            strategy = %signal.strategy,
            confidence = signal.confidence,
            timeframe = %signal.timeframe,
            price = signal.current_price,
            max_risk_pct = config.max_risk_per_trade_pct,
            "entry signal fired; monitoring stopped"
        );

        if let Err(error) = self
            .inner
            .store
            .record_signal(instrument_id, &signal)
            .await
            .map_err(MonitorError::Persistence)
        {
            self.inner
                .counters
                .store_failures
                .fetch_add(1, Ordering::Relaxed);
            warn!(error = ?error, "failed to persist fired signal");
        }

        if config.alerts_enabled {
            if let Err(error) = self
                .inner
                .alerts
                .dispatch(record, &signal)
                .await
                .map_err(MonitorError::Notify)
            {
                self.inner
                    .counters
                    .notify_failures
                    .fetch_add(1, Ordering::Relaxed);
                warn!(error = ?error, "alert dispatch failed");
            }
        } else {
            debug!("alerts disabled; dispatch skipped");
        }

        TickOutcome::SignalFired
    }
}

fn cancel_entry(entry: WatchEntry) {
    if let Some(handle) = entry.handle {
        handle.abort();
    }
}
