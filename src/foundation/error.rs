/// Convenience result type used across pigmix.
pub type PigmixResult<T> = Result<T, PigmixError>;

/// Error taxonomy for the fallible boundary APIs.
///
/// The per-pixel engine and the spectral mixer never fail; only buffer drivers,
/// parameter parsing and mode lookup return these.
#[derive(thiserror::Error, Debug)]
pub enum PigmixError {
    /// Invalid user-provided compositing parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel buffers that do not match the expected layout or length.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// A blend-mode identifier that names no known mode.
    #[error("unknown blend mode: {0}")]
    UnknownMode(String),

    /// Errors when serializing or deserializing parameters.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl PigmixError {
    /// Build a [`PigmixError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PigmixError::Buffer`] value.
    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }

    /// Build a [`PigmixError::UnknownMode`] value.
    pub fn unknown_mode(id: impl Into<String>) -> Self {
        Self::UnknownMode(id.into())
    }

    /// Build a [`PigmixError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PigmixError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
