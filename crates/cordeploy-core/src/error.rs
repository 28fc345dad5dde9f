//! Error types for deploy cycles

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// A reconciliation step was attempted out of order
    #[error("invalid reconcile state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// The configured platform has no known build output location
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),

    /// A delegated filesystem operation failed
    #[error("{operation} failed for {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external packaging tool could not be run or reported failure
    #[error("packaging tool failed: {0}")]
    ExternalTool(String),

    /// The build finished but left nothing in its output directory
    #[error("no build artifacts captured in {}", .0.display())]
    NoArtifactsCaptured(PathBuf),

    /// The ambient log level could not be detected
    #[error("could not detect ambient log level")]
    AmbientLevelUndetectable,

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl DeployError {
    /// Build an [`DeployError::Io`] for `operation` on `path`
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts the current deploy cycle
    ///
    /// Unsupported platforms, empty build output and an undetectable log
    /// level are reported but never abort a cycle.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            DeployError::UnsupportedPlatform(_)
                | DeployError::NoArtifactsCaptured(_)
                | DeployError::AmbientLevelUndetectable
        )
    }

    /// Returns a stable numeric code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            DeployError::InvalidState { .. } => 1,
            DeployError::UnsupportedPlatform(_) => 2,
            DeployError::Io { .. } => 3,
            DeployError::ExternalTool(_) => 4,
            DeployError::NoArtifactsCaptured(_) => 5,
            DeployError::AmbientLevelUndetectable => 6,
            DeployError::ConfigError(_) => 7,
            DeployError::SerializationError(_) => 8,
            DeployError::Internal(_) => 9,
        }
    }
}

impl From<serde_json::Error> for DeployError {
    fn from(err: serde_json::Error) -> Self {
        DeployError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for DeployError {
    fn from(err: toml::de::Error) -> Self {
        DeployError::ConfigError(err.to_string())
    }
}
