use thiserror::Error;

/// Errors raised by network construction, evaluation, training, and
/// configuration loading.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// The architecture is inconsistent (bad sizes, bad learning rate, ...).
    /// Raised when a network is built, before any weights exist.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input, target, or class does not fit the network it is fed to.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;

impl PlaygroundError {
    pub fn config(msg: impl Into<String>) -> Self {
        PlaygroundError::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        PlaygroundError::Validation(msg.into())
    }
}
