pub mod config;
pub mod config_loader;
pub mod error;
pub mod metrics;
pub mod metrics_formatter;
pub mod series;

pub use config::{InputConfig, JobConfig, PathsConfig, PolicyKind, ReportConfig, SignalConfig};
pub use config_loader::ConfigLoader;
pub use error::JobError;
pub use metrics::{ErrorRecord, MetricsRecord, RunFigures, RunStatus};
pub use metrics_formatter::MetricsFormatter;
pub use series::PriceSeries;
