//! Registry of active watches.
//!
//! This is the only mutable shared state in the core. Every watch carries an
//! epoch token issued at registration; an in-flight check may only act on the
//! registry while its token is still the one on record. A stop or restart
//! bumps the token, so a stale check can neither fire a signal nor re-arm a
//! timer it no longer owns.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Epoch token tying a spawned watch task to its registry entry.
pub type WatchToken = u64;

/// Per-instrument monitoring state. Exists only while Watching.
pub struct WatchEntry {
    pub symbol: String,
    pub interval: Duration,
    pub token: WatchToken,
    /// Handle of the recurring task; `None` until the task is spawned and
    /// for the short window during which the immediate check runs.
    pub(crate) handle: Option<JoinHandle<()>>,
}

/// Public snapshot of one active watch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WatchStatus {
    pub instrument_id: Uuid,
    pub symbol: String,
    pub interval_minutes: u64,
}

#[derive(Default)]
pub struct WatchRegistry {
    entries: Mutex<HashMap<Uuid, WatchEntry>>,
    next_token: AtomicU64,
}

impl WatchRegistry {
    pub fn issue_token(&self) -> WatchToken {
        self.next_token.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Insert a watch, returning any displaced entry so the caller can
    /// cancel its task.
    pub fn insert(&self, instrument_id: Uuid, entry: WatchEntry) -> Option<WatchEntry> {
        self.entries.lock().insert(instrument_id, entry)
    }

    /// Attach the spawned task handle, unless the watch was replaced or
    /// removed in the meantime; then the handle is handed back for cancel.
    pub fn attach_handle(
        &self,
        instrument_id: Uuid,
        token: WatchToken,
        handle: JoinHandle<()>,
    ) -> Option<JoinHandle<()>> {
        let mut entries = self.entries.lock();
        match entries.get_mut(&instrument_id) {
            Some(entry) if entry.token == token => {
                entry.handle = Some(handle);
                None
            }
            _ => Some(handle),
        }
    }

    pub fn remove(&self, instrument_id: Uuid) -> Option<WatchEntry> {
        self.entries.lock().remove(&instrument_id)
    }

    /// Remove the watch only if `token` is still current. `None` means a
    /// newer registration (or a stop) won the race.
    pub fn claim(&self, instrument_id: Uuid, token: WatchToken) -> Option<WatchEntry> {
        let mut entries = self.entries.lock();
        match entries.get(&instrument_id) {
            Some(entry) if entry.token == token => entries.remove(&instrument_id),
            _ => None,
        }
    }

    pub fn is_current(&self, instrument_id: Uuid, token: WatchToken) -> bool {
        self.entries
            .lock()
            .get(&instrument_id)
            .is_some_and(|e| e.token == token)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn statuses(&self) -> Vec<WatchStatus> {
        self.entries
            .lock()
            .iter()
            .map(|(id, e)| WatchStatus {
                instrument_id: *id,
                symbol: e.symbol.clone(),
                interval_minutes: e.interval.as_secs() / 60,
            })
            .collect()
    }

    /// Remove and return every entry.
    pub fn drain(&self) -> Vec<(Uuid, WatchEntry)> {
        self.entries.lock().drain().collect()
    }
}
