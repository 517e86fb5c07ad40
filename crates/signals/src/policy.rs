use crate::error::SignalError;
use rollsig_core::{JobConfig, PolicyKind};

/// Binary trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Flat = 0,
    Long = 1,
}

impl Signal {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Rule turning a price and its rolling mean into a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalPolicy {
    /// Long when price > rolling mean.
    RollingMean,
    /// Long when price > the fixed level.
    Threshold(f64),
}

impl SignalPolicy {
    /// Builds the policy selected by `signal.policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::MissingThreshold`] if the threshold policy is
    /// selected without a threshold.
    pub fn from_config(config: &JobConfig) -> Result<Self, SignalError> {
        match config.signal.policy {
            PolicyKind::RollingMean => Ok(Self::RollingMean),
            PolicyKind::Threshold => config
                .threshold
                .map(Self::Threshold)
                .ok_or(SignalError::MissingThreshold),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::RollingMean => PolicyKind::RollingMean,
            Self::Threshold(_) => PolicyKind::Threshold,
        }
    }

    /// Signal for one row. Undefined whenever the rolling mean or the price
    /// is undefined, regardless of policy, so that no signal is emitted
    /// without a full window of history.
    #[must_use]
    pub fn evaluate(&self, price: Option<f64>, rolling_mean: Option<f64>) -> Option<Signal> {
        let mean = rolling_mean?;
        let price = price?;

        let reference = match self {
            Self::RollingMean => mean,
            Self::Threshold(level) => *level,
        };

        Some(if price > reference {
            Signal::Long
        } else {
            Signal::Flat
        })
    }
}
