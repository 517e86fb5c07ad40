//! File input and output for the rolling signal job.
//!
//! This crate provides:
//! - CSV reading of a single price column
//! - Atomic JSON writing of the metrics record

pub mod csv_storage;
pub mod error;
pub mod metrics_store;

pub use csv_storage::CsvStorage;
pub use error::StorageError;
pub use metrics_store::MetricsStore;
