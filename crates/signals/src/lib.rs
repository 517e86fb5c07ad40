//! Signal engine for the rolling signal job.
//!
//! Turns a [`rollsig_core::PriceSeries`] into a trailing rolling mean and a
//! binary signal series, then summarises the result.
//!
//! # Example
//! ```
//! use rollsig_core::PriceSeries;
//! use rollsig_signals::{Signal, SignalEngine, SignalPolicy, SignalSummary};
//!
//! let prices = PriceSeries::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let run = SignalEngine::new(3, SignalPolicy::RollingMean).run(&prices).unwrap();
//!
//! assert_eq!(run.rolling_mean, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! assert_eq!(SignalSummary::from_run(&run).final_signal, Some(Signal::Long));
//! ```

pub mod engine;
pub mod error;
pub mod policy;
pub mod rolling;
pub mod summary;

pub use engine::{SignalEngine, SignalRun};
pub use error::SignalError;
pub use policy::{Signal, SignalPolicy};
pub use rolling::rolling_mean;
pub use summary::SignalSummary;
