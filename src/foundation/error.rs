/// Convenience result type used across the crate.
pub type KaraokeResult<T> = Result<T, KaraokeError>;

/// Top-level error taxonomy.
///
/// Layout and animation never fail on valid input; errors surface only while constructing
/// renderers, measurers or options.
#[derive(thiserror::Error, Debug)]
pub enum KaraokeError {
    /// Invalid user-provided options or line data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Text measurement backend could not be set up.
    #[error("measurement error: {0}")]
    Measure(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KaraokeError {
    /// Build a [`KaraokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KaraokeError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`KaraokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KaraokeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
