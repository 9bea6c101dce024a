//! Document-level import failures.

use thiserror::Error;

/// Errors returned when a raw document cannot be turned into a graph.
///
/// Element-level problems never surface here: an element that cannot be
/// classified or resolved is dropped and only reflected in lower counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The top-level document could not be decoded into the expected shape.
    #[error("malformed input document: {message}")]
    MalformedInput {
        /// Decoder diagnostic describing the mismatch.
        message: String,
    },
}

impl ImportError {
    /// Build a [`ImportError::MalformedInput`] from any displayable cause.
    pub fn malformed(cause: impl std::fmt::Display) -> Self {
        Self::MalformedInput {
            message: cause.to_string(),
        }
    }
}
