use crate::engine::SignalRun;
use crate::policy::Signal;
use rollsig_core::RunFigures;

/// Scalar statistics over a [`SignalRun`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSummary {
    pub rows_processed: usize,
    pub missing_prices: usize,
    pub defined_signals: usize,
    pub long_signals: usize,
    /// Share of defined signals that are long.
    pub signal_rate: Option<f64>,
    /// Last defined signal in the series.
    pub final_signal: Option<Signal>,
    pub mean_close: Option<f64>,
    pub last_rolling_mean: Option<f64>,
}

impl SignalSummary {
    #[must_use]
    pub fn from_run(run: &SignalRun<'_>) -> Self {
        let defined_signals = run.signals.iter().flatten().count();
        let long_signals = run
            .signals
            .iter()
            .flatten()
            .filter(|s| **s == Signal::Long)
            .count();

        #[allow(clippy::cast_precision_loss)]
        let signal_rate =
            (defined_signals > 0).then(|| long_signals as f64 / defined_signals as f64);

        Self {
            rows_processed: run.prices.len(),
            missing_prices: run.prices.missing_count(),
            defined_signals,
            long_signals,
            signal_rate,
            final_signal: run.signals.iter().rev().find_map(|s| *s),
            mean_close: run.prices.mean(),
            last_rolling_mean: run.rolling_mean.iter().rev().find_map(|m| *m),
        }
    }

    /// Figures consumed by the metrics record.
    #[must_use]
    pub fn figures(&self) -> RunFigures {
        RunFigures {
            rows_processed: self.rows_processed,
            missing_prices: self.missing_prices,
            defined_signals: self.defined_signals,
            long_signals: self.long_signals,
            signal_rate: self.signal_rate,
            final_signal: self.final_signal.map(Signal::as_u8),
            mean_close: self.mean_close,
            last_rolling_mean: self.last_rolling_mean,
        }
    }
}
