/// Convenience result type used across Scrollyte.
pub type ScrollyteResult<T> = Result<T, ScrollyteError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollyteError {
    /// Invalid user-provided curve, partition, or driver data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or compiling a scene definition.
    #[error("scene error: {0}")]
    Scene(String),

    /// Required delivery configuration is absent or incomplete.
    #[error("configuration error: {0}")]
    Config(String),

    /// External message delivery was attempted and rejected.
    #[error("send error: {0}")]
    Send(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollyteError {
    /// Build a [`ScrollyteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollyteError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ScrollyteError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollyteError::Send`] value.
    pub fn send(msg: impl Into<String>) -> Self {
        Self::Send(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
