use thiserror::Error;

/// Errors that stop the CLI before or after the per-record import loop.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Source file missing or unreadable
    #[error("{0}")]
    Load(#[from] workout_catalog::LoadError),

    /// Database open or query failed
    #[error("Database error: {0}")]
    Database(String),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
