use crate::error::SignalError;
use crate::policy::{Signal, SignalPolicy};
use crate::rolling::rolling_mean;
use rollsig_core::PriceSeries;
use tracing::debug;

/// Computes the rolling mean and signal series for a price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalEngine {
    window: usize,
    policy: SignalPolicy,
}

/// Output of one engine run. All three series have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRun<'a> {
    pub prices: &'a PriceSeries,
    pub rolling_mean: Vec<Option<f64>>,
    pub signals: Vec<Option<Signal>>,
}

impl SignalEngine {
    #[must_use]
    pub const fn new(window: usize, policy: SignalPolicy) -> Self {
        Self { window, policy }
    }

    /// # Errors
    ///
    /// Returns [`SignalError::EmptySeries`] for an empty series and
    /// [`SignalError::InvalidWindow`] if the window does not fit the series.
    pub fn run<'a>(&self, prices: &'a PriceSeries) -> Result<SignalRun<'a>, SignalError> {
        let rolling_mean = rolling_mean(prices.values(), self.window)?;

        let signals: Vec<Option<Signal>> = prices
            .values()
            .iter()
            .zip(&rolling_mean)
            .map(|(&price, &mean)| self.policy.evaluate(price, mean))
            .collect();

        debug!(
            rows = prices.len(),
            window = self.window,
            policy = self.policy.kind().as_str(),
            defined = signals.iter().flatten().count(),
            "Signal series computed"
        );

        Ok(SignalRun {
            prices,
            rolling_mean,
            signals,
        })
    }
}
