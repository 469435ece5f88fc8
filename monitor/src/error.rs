use thiserror::Error;
use uuid::Uuid;

/// Failures the monitor distinguishes.
///
/// `NotEligible` and `Persistence` can surface to the caller of
/// `start_monitoring`; everything occurring inside a background check is
/// caught at the tick boundary, logged, and degraded to "no signal this
/// tick". Insufficient analyzer input is a result field, never an error.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("instrument {0} has no qualifying pattern on record")]
    NotEligible(Uuid),

    #[error("market data unavailable for {instrument} on {timeframe}")]
    DataUnavailable {
        instrument: Uuid,
        timeframe: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("result store failure")]
    Persistence(#[source] anyhow::Error),

    #[error("alert dispatch failure")]
    Notify(#[source] anyhow::Error),
}
