//! One end-to-end run: prices in, signal metrics out.

use chrono::Utc;
use rollsig_core::{JobConfig, JobError, MetricsFormatter, MetricsRecord, PathsConfig};
use rollsig_data::{CsvStorage, MetricsStore};
use rollsig_signals::{SignalEngine, SignalPolicy, SignalSummary};
use std::time::Instant;
use tracing::info;

/// Runs the job for an already loaded config.
///
/// `paths` must carry the input, output and log paths, already merged with
/// any command-line overrides. The metrics file is only written once every
/// stage has succeeded.
///
/// # Errors
///
/// Returns the first [`JobError`] raised by path resolution, the CSV reader,
/// the signal engine or the metrics writer.
pub fn run(config: &JobConfig, paths: &PathsConfig, started: Instant) -> Result<MetricsRecord, JobError> {
    let input = paths.require_input()?;
    let output = paths.require_output()?;
    paths.require_log()?;

    let policy = SignalPolicy::from_config(config)?;
    info!(
        seed = config.seed,
        window = config.window,
        version = %config.version,
        policy = policy.kind().as_str(),
        "Config validated"
    );

    let prices = CsvStorage::read_column(input, &config.input.column)?;
    info!(
        rows = prices.len(),
        missing = prices.missing_count(),
        input = %input.display(),
        "Rows loaded"
    );

    let signal_run = SignalEngine::new(config.window, policy).run(&prices)?;
    info!(window = config.window, "Rolling mean computed");

    let summary = SignalSummary::from_run(&signal_run);
    let mut record = MetricsRecord::success(config, summary.figures());
    if config.report.include_timing {
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        record = record.with_timing(latency_ms, Utc::now());
    }

    MetricsStore::write(output, &record)?;
    info!(
        output = %output.display(),
        "Metrics summary: {}",
        MetricsFormatter::summary(&record)
    );

    Ok(record)
}
