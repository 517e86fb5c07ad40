use crate::config::JobConfig;
use crate::error::JobError;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Prefix for environment overrides, e.g. `ROLLSIG_WINDOW=10` or
    /// `ROLLSIG_SIGNAL__POLICY=threshold`.
    pub const ENV_PREFIX: &'static str = "ROLLSIG_";

    /// `ROLLSIG_CONFIG` names the config file itself and is not a setting.
    const PATH_ENV_KEY: &'static str = "config";

    /// Loads the job configuration from a YAML file merged with environment
    /// overrides, then validates it.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Config`] if the file is missing, cannot be parsed,
    /// lacks a required key, or fails validation.
    pub fn load(path: &Path) -> Result<JobConfig, JobError> {
        if !path.exists() {
            return Err(JobError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let config: JobConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(
                Env::prefixed(Self::ENV_PREFIX)
                    .split("__")
                    .ignore(&[Self::PATH_ENV_KEY]),
            )
            .extract()?;

        config.validate()?;

        tracing::debug!(path = %path.display(), "Config file parsed");
        Ok(config)
    }
}
