//! Metrics record written at the end of a run.

use crate::config::{JobConfig, PolicyKind};
use crate::error::JobError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the headline metric carried in `value`.
pub const SIGNAL_RATE_METRIC: &str = "signal_rate";

/// Version reported when the config never loaded.
pub const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Error,
}

/// Summary of a successful run.
///
/// Field order is the serialized order. Wall-clock fields are only present
/// when timing was requested, so the default output is reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub version: String,
    pub rows_processed: usize,
    pub metric: String,
    /// Signal rate rounded to four decimals; `None` when no signal is defined.
    pub value: Option<f64>,
    pub seed: i64,
    pub status: RunStatus,
    pub window: usize,
    pub policy: PolicyKind,
    pub defined_signals: usize,
    pub long_signals: usize,
    pub missing_prices: usize,
    pub final_signal: Option<u8>,
    pub mean_close: Option<f64>,
    pub last_rolling_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Per-run figures the signal stage hands to the reporter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunFigures {
    pub rows_processed: usize,
    pub missing_prices: usize,
    pub defined_signals: usize,
    pub long_signals: usize,
    pub signal_rate: Option<f64>,
    pub final_signal: Option<u8>,
    pub mean_close: Option<f64>,
    pub last_rolling_mean: Option<f64>,
}

impl MetricsRecord {
    #[must_use]
    pub fn success(config: &JobConfig, figures: RunFigures) -> Self {
        Self {
            version: config.version.clone(),
            rows_processed: figures.rows_processed,
            metric: SIGNAL_RATE_METRIC.to_string(),
            value: figures.signal_rate.map(|rate| round_to(rate, 4)),
            seed: config.seed,
            status: RunStatus::Success,
            window: config.window,
            policy: config.signal.policy,
            defined_signals: figures.defined_signals,
            long_signals: figures.long_signals,
            missing_prices: figures.missing_prices,
            final_signal: figures.final_signal,
            mean_close: figures.mean_close.map(|mean| round_to(mean, 4)),
            last_rolling_mean: figures.last_rolling_mean.map(|mean| round_to(mean, 4)),
            latency_ms: None,
            generated_at: None,
        }
    }

    /// Stamps run duration and completion time onto the record.
    #[must_use]
    pub fn with_timing(mut self, latency_ms: u64, generated_at: DateTime<Utc>) -> Self {
        self.latency_ms = Some(latency_ms);
        self.generated_at = Some(generated_at);
        self
    }
}

/// Payload reported for a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub version: String,
    pub status: RunStatus,
    pub error_message: String,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(version: Option<&str>, error: &JobError) -> Self {
        Self::from_message(version, error.to_string())
    }

    /// Record for a failure raised outside the job itself, such as logging setup.
    #[must_use]
    pub fn from_message(version: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            version: version.unwrap_or(UNKNOWN_VERSION).to_string(),
            status: RunStatus::Error,
            error_message: message.into(),
        }
    }
}

/// Rounds half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
