use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Process-wide monitoring configuration.
///
/// Replaceable at runtime through [`ConfigPatch`]; replacing it re-arms every
/// active watch at the new interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Cadence of the recurring per-instrument check.
    pub check_interval_minutes: u64,

    /// Timeframes checked in order; the first one producing a qualifying
    /// signal wins.
    pub timeframes: Vec<String>,

    /// Minimum strategy confidence (0-100) before a signal fires.
    pub min_confidence: f64,

    /// Risk budget hint carried through to alert consumers.
    pub max_risk_per_trade_pct: f64,

    /// When false, qualifying signals are persisted but never dispatched.
    pub alerts_enabled: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            check_interval_minutes: 60,
            timeframes: vec!["1h".to_string(), "4h".to_string(), "1d".to_string()],
            min_confidence: 75.0,
            max_risk_per_trade_pct: 2.0,
            alerts_enabled: true,
        }
    }
}

impl MonitoringConfig {
    pub fn interval(&self) -> Duration {
        // Clamp so a zero-minute config cannot produce a busy loop.
        Duration::from_secs(self.check_interval_minutes.max(1) * 60)
    }

    /// Merge a partial update into this config.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.check_interval_minutes {
            self.check_interval_minutes = v;
        }
        if let Some(v) = patch.timeframes {
            self.timeframes = v;
        }
        if let Some(v) = patch.min_confidence {
            self.min_confidence = v.clamp(0.0, 100.0);
        }
        if let Some(v) = patch.max_risk_per_trade_pct {
            self.max_risk_per_trade_pct = v;
        }
        if let Some(v) = patch.alerts_enabled {
            self.alerts_enabled = v;
        }
    }
}

/// Partial [`MonitoringConfig`] update; `None` fields keep their value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub check_interval_minutes: Option<u64>,
    pub timeframes: Option<Vec<String>>,
    pub min_confidence: Option<f64>,
    pub max_risk_per_trade_pct: Option<f64>,
    pub alerts_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_changes_nothing() {
        let mut cfg = MonitoringConfig::default();
        let before = cfg.clone();
        cfg.apply(ConfigPatch::default());
        assert_eq!(cfg, before);
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut cfg = MonitoringConfig::default();
        cfg.apply(ConfigPatch {
            check_interval_minutes: Some(5),
            min_confidence: Some(80.0),
            ..Default::default()
        });
        assert_eq!(cfg.check_interval_minutes, 5);
        assert_eq!(cfg.min_confidence, 80.0);
        assert_eq!(cfg.timeframes, MonitoringConfig::default().timeframes);
        assert!(cfg.alerts_enabled);
    }

    #[test]
    fn min_confidence_is_clamped() {
        let mut cfg = MonitoringConfig::default();
        cfg.apply(ConfigPatch {
            min_confidence: Some(140.0),
            ..Default::default()
        });
        assert_eq!(cfg.min_confidence, 100.0);
    }

    #[test]
    fn zero_interval_still_yields_a_positive_duration() {
        let cfg = MonitoringConfig {
            check_interval_minutes: 0,
            ..Default::default()
        };
        assert_eq!(cfg.interval(), Duration::from_secs(60));
    }
}
