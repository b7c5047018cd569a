/// Convenience result type used across the engine.
pub type PictographResult<T> = Result<T, PictographError>;

/// Top-level error taxonomy used at the engine's construction and loading boundaries.
///
/// Geometry computation itself never fails; these errors only surface while building
/// domain values or loading placement tables.
#[derive(thiserror::Error, Debug)]
pub enum PictographError {
    /// Invalid domain value (negative turns, unknown location, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Placement configuration could not be loaded or has the wrong shape.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PictographError {
    /// Build a [`PictographError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PictographError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PictographError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
