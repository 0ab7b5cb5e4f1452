/// Convenience result type used across the crate.
pub type StageResult<T> = Result<T, StageError>;

/// Top-level error taxonomy used by the public API.
///
/// Mapping passes themselves are total; errors only arise when a
/// choreography is structurally invalid or fails to (de)serialize.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    /// Invalid user-provided choreography data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing a choreography.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    /// Build a [`StageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
