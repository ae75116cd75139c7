/// Convenience result type used across Kinetext.
pub type KinetextResult<T> = Result<T, KinetextError>;

/// Top-level error taxonomy used at the engine's configuration boundary.
///
/// Per-frame calculation never fails; only loading, validating and planning do.
#[derive(thiserror::Error, Debug)]
pub enum KinetextError {
    /// Invalid user-provided overlay data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while planning or evaluating frames.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinetextError {
    /// Build a [`KinetextError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinetextError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`KinetextError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KinetextError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
