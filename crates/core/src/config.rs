use crate::error::JobError;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Parameters for a single job run. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Free-form label copied into the metrics record. Numeric values such as
    /// `version: 1` are kept as their text.
    #[serde(deserialize_with = "version_label")]
    pub version: String,
    pub seed: i64,
    /// Rolling mean window, in rows.
    pub window: usize,
    /// Fixed comparison level, required by the `threshold` policy.
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Long when the price is above its rolling mean.
    #[default]
    RollingMean,
    /// Long when the price is above the configured threshold.
    Threshold,
}

impl PolicyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RollingMean => "rolling_mean",
            Self::Threshold => "threshold",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalConfig {
    #[serde(default)]
    pub policy: PolicyKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Header name of the price column.
    #[serde(default = "default_column")]
    pub column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
        }
    }
}

fn version_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(text) => text,
        Label::Unsigned(n) => n.to_string(),
        Label::Signed(n) => n.to_string(),
        Label::Float(n) => format!("{n:?}"),
        Label::Bool(b) => b.to_string(),
    })
}

fn default_column() -> String {
    "close".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Adds `latency_ms` and `generated_at` to the metrics record. Off by
    /// default so repeated runs produce identical files.
    #[serde(default)]
    pub include_timing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub log: Option<PathBuf>,
}

impl PathsConfig {
    /// Returns a copy where every path set in `overrides` replaces ours.
    #[must_use]
    pub fn overridden_by(&self, overrides: Self) -> Self {
        Self {
            input: overrides.input.or_else(|| self.input.clone()),
            output: overrides.output.or_else(|| self.output.clone()),
            log: overrides.log.or_else(|| self.log.clone()),
        }
    }

    /// # Errors
    ///
    /// Returns a config error if no input path was given.
    pub fn require_input(&self) -> Result<&Path, JobError> {
        require(self.input.as_deref(), "input")
    }

    /// # Errors
    ///
    /// Returns a config error if no output path was given.
    pub fn require_output(&self) -> Result<&Path, JobError> {
        require(self.output.as_deref(), "output")
    }

    /// # Errors
    ///
    /// Returns a config error if no log path was given.
    pub fn require_log(&self) -> Result<&Path, JobError> {
        require(self.log.as_deref(), "log")
    }
}

fn require<'a>(path: Option<&'a Path>, name: &str) -> Result<&'a Path, JobError> {
    path.ok_or_else(|| JobError::Config(format!("Missing {name} path (set paths.{name} or pass it on the command line)")))
}

impl JobConfig {
    /// Checks constraints that deserialization alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Config`] when the window is zero, or when the
    /// threshold policy is selected without a finite threshold.
    pub fn validate(&self) -> Result<(), JobError> {
        if self.window == 0 {
            return Err(JobError::Config("window must be a positive integer".to_string()));
        }

        if self.input.column.trim().is_empty() {
            return Err(JobError::Config("input.column must not be empty".to_string()));
        }

        match (self.signal.policy, self.threshold) {
            (PolicyKind::Threshold, None) => Err(JobError::Config(
                "threshold is required when signal.policy is threshold".to_string(),
            )),
            (_, Some(t)) if !t.is_finite() => {
                Err(JobError::Config(format!("threshold must be finite, got {t}")))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> JobConfig {
        JobConfig {
            version: "v1".to_string(),
            seed: 42,
            window: 5,
            threshold: None,
            signal: SignalConfig::default(),
            input: InputConfig::default(),
            report: ReportConfig::default(),
            paths: PathsConfig::default(),
        }
    }

    #[test]
    fn valid_default_config_passes() {
        assert!(base().validate().is_ok());
        assert_eq!(base().input.column, "close");
        assert_eq!(base().signal.policy, PolicyKind::RollingMean);
    }

    #[test]
    fn zero_window_is_rejected() {
        let config = JobConfig { window: 0, ..base() };
        assert!(matches!(config.validate(), Err(JobError::Config(_))));
    }

    #[test]
    fn threshold_policy_requires_threshold() {
        let mut config = base();
        config.signal.policy = PolicyKind::Threshold;
        assert!(matches!(config.validate(), Err(JobError::Config(_))));

        config.threshold = Some(100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let config = JobConfig {
            threshold: Some(f64::INFINITY),
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_win_over_config_paths() {
        let paths = PathsConfig {
            input: Some(PathBuf::from("data.csv")),
            output: Some(PathBuf::from("metrics.json")),
            log: None,
        };
        let merged = paths.overridden_by(PathsConfig {
            input: Some(PathBuf::from("other.csv")),
            output: None,
            log: Some(PathBuf::from("run.log")),
        });

        assert_eq!(merged.require_input().unwrap(), Path::new("other.csv"));
        assert_eq!(merged.require_output().unwrap(), Path::new("metrics.json"));
        assert_eq!(merged.require_log().unwrap(), Path::new("run.log"));
    }

    #[test]
    fn missing_path_is_config_error() {
        let err = PathsConfig::default().require_output().unwrap_err();
        assert!(matches!(err, JobError::Config(_)));
        assert!(err.to_string().contains("output"));
    }
}
