use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Failed to open output file {0}: {1}")]
    OutputOpenError(String, String),

    #[error("Failed to write output file {0}: {1}")]
    OutputWriteError(String, String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(String, String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Pattern error: {0}")]
    PatternError(String),
}

impl From<glob::PatternError> for CollectError {
    fn from(err: glob::PatternError) -> Self {
        CollectError::PatternError(err.to_string())
    }
}
