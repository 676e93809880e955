use thiserror::Error;

/// Unified error type for define-versions operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid bump type : {0}. Allowed values are major, minor, patch, none.")]
    InvalidBumpType(String),

    #[error("Invalid platform : {0}. Allowed values are android, ios.")]
    InvalidPlatform(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in define-versions
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        VersionError::Output(msg.into())
    }

    /// Whether the error was caused by user-supplied configuration
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VersionError::Config(_)
                | VersionError::InvalidBumpType(_)
                | VersionError::InvalidPlatform(_)
        )
    }
}

impl From<toml::de::Error> for VersionError {
    fn from(err: toml::de::Error) -> Self {
        VersionError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for VersionError {
    fn from(err: toml::ser::Error) -> Self {
        VersionError::Output(err.to_string())
    }
}
