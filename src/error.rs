//! Error type shared by every stage of the edge pipeline.
use thiserror::Error;

/// Failures reported by the edge detection core.
///
/// Both variants are raised before any output grid is produced, so a caller
/// never observes a partially processed image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdgeError {
    /// A parameter (blur size, sigma, thresholds, kernel shape, buffer length)
    /// is outside its admissible domain. Fixable by the caller.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The input has no dynamic range to work with (flat or empty grid).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl EdgeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EdgeError>;
