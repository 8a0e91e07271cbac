/// Convenience result type used across frameview.
pub type FrameviewResult<T> = Result<T, FrameviewError>;

/// Top-level error taxonomy used by the crate's fallible APIs.
///
/// Display-level load failures are not errors in this sense: they surface as
/// [`DisplayEvent::ImageError`](crate::DisplayEvent::ImageError) and never abort anything.
#[derive(thiserror::Error, Debug)]
pub enum FrameviewError {
    /// Invalid caller-provided data (unknown image kind, zero worker threads, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame could not be read or decoded.
    #[error("load failure for '{source_ref}': {reason}")]
    Load {
        /// The frame reference that failed.
        source_ref: String,
        /// Human-readable failure description.
        reason: String,
    },

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameviewError {
    /// Build a [`FrameviewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrameviewError::Load`] value.
    pub fn load(source_ref: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            source_ref: source_ref.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`FrameviewError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
