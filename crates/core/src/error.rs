use thiserror::Error;

/// Fatal job failures. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum JobError {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing file, missing column, empty or malformed data.
    #[error("Input error: {0}")]
    Input(String),

    /// Window incompatible with the loaded data.
    #[error("Computation error: {0}")]
    Computation(String),

    /// Failure while writing outputs.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JobError {
    /// Process exit code reported for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::Config(_) => 2,
            Self::Input(_) => 3,
            Self::Computation(_) => 4,
        }
    }
}

impl From<figment::Error> for JobError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for JobError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.into())
    }
}
