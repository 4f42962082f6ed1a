use thiserror::Error;

/// Failure categories of the external connection-management capability.
///
/// The first three kinds are recoverable: the caller may retry and succeed
/// once the config store heals or the request is rescheduled. `Unexpected`
/// is everything else and must not be blindly retried.
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("stored connection config failed validation: {message}")]
    Validation { message: String },

    #[error("connection config not found: {connection_id}")]
    NotFound { connection_id: String },

    #[error("config store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// What an activity raises back to the orchestration engine.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// Uniform retryable signal: the engine's retry policy may reschedule
    /// this activity. Carries the original helper failure as the cause.
    #[error("retryable activity failure: {source}")]
    Retryable {
        #[source]
        source: HelperError,
    },

    /// The activity payload could not be deserialized. Redelivering the same
    /// payload cannot succeed, so this is never retryable.
    #[error("malformed activity input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Unexpected helper failure, propagated through unwrapped.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ActivityError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ActivityError::Retryable { .. })
    }
}

/// Configuration loading and validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("config file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
