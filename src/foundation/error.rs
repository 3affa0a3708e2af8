/// Convenience result type used across vstudio.
pub type StudioResult<T> = Result<T, StudioError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// Caller-contract violation (out-of-range index, unknown pattern id, empty canvas).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid user-provided configuration or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A replayed command script failed at `step` (0-based).
    #[error("script step {step} failed: {source}")]
    Script {
        /// Index of the failing command.
        step: usize,
        /// Error raised by the command.
        #[source]
        source: Box<StudioError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`StudioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Wrap `self` as the failure of script step `step`.
    pub fn at_step(self, step: usize) -> Self {
        Self::Script {
            step,
            source: Box::new(self),
        }
    }

    /// True for caller-contract violations, looking through script wrappers.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument(_) => true,
            Self::Script { source, .. } => source.is_invalid_argument(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
