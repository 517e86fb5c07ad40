use rollsig_core::JobError;
use thiserror::Error;

/// Errors from the signal engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// Window is zero or longer than the series.
    #[error("Invalid window {window} for series of length {len}")]
    InvalidWindow { window: usize, len: usize },

    /// No prices to process.
    #[error("No data: price series is empty")]
    EmptySeries,

    /// Threshold policy selected without a threshold value.
    #[error("Threshold policy requires a threshold")]
    MissingThreshold,
}

impl From<SignalError> for JobError {
    fn from(err: SignalError) -> Self {
        match err {
            SignalError::InvalidWindow { .. } => Self::Computation(err.to_string()),
            SignalError::EmptySeries => Self::Input(err.to_string()),
            SignalError::MissingThreshold => Self::Config(err.to_string()),
        }
    }
}
