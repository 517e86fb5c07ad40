use anyhow::Context;
use clap::Parser;
use rollsig_cli::{job, logging};
use rollsig_core::{ConfigLoader, ErrorRecord, PathsConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "rollsig")]
#[command(about = "Rolling-mean signal over a single price column", long_about = None)]
struct Cli {
    /// Input CSV file (overrides paths.input)
    #[arg(long)]
    input: Option<PathBuf>,
    /// YAML config file path
    #[arg(long, env = "ROLLSIG_CONFIG")]
    config: PathBuf,
    /// Metrics JSON output path (overrides paths.output)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Log file path, appended to (overrides paths.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Same code as an I/O failure inside the job.
const LOGGING_EXIT_CODE: u8 = 1;

fn main() -> anyhow::Result<ExitCode> {
    let started = Instant::now();
    let cli = Cli::parse();

    // Config is read before logging so that paths.log can name the log file.
    let loaded = ConfigLoader::load(&cli.config);
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| loaded.as_ref().ok().and_then(|c| c.paths.log.clone()));
    let version = loaded.as_ref().ok().map(|c| c.version.clone());

    if let Err(e) = logging::init(log_path.as_deref()) {
        let payload = ErrorRecord::from_message(version.as_deref(), format!("{e:#}"));
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("Failed to render error")?
        );
        return Ok(ExitCode::from(LOGGING_EXIT_CODE));
    }

    tracing::info!(config = %cli.config.display(), "Job started");

    let overrides = PathsConfig {
        input: cli.input,
        output: cli.output,
        log: cli.log_file,
    };
    let outcome = loaded.and_then(|config| {
        let paths = config.paths.overridden_by(overrides);
        job::run(&config, &paths, started)
    });

    match outcome {
        Ok(record) => {
            tracing::info!("Job completed successfully");
            println!(
                "{}",
                serde_json::to_string_pretty(&record).context("Failed to render metrics")?
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, exit_code = e.exit_code(), "Job failed");
            let payload = ErrorRecord::new(version.as_deref(), &e);
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("Failed to render error")?
            );
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
