//! Error types for spectral-line extraction.

use thiserror::Error;

/// Invalid arguments rejected before any numerical work starts.
///
/// Numerical non-convergence is never reported through this type: an
/// iteration that finds no spectral line yields
/// [`SpectralPeak::NotFound`](crate::SpectralPeak::NotFound) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaffError {
    /// `num_harmonics` was zero.
    #[error("number of harmonics must be at least 1")]
    NoHarmonicsRequested,

    /// The signal has no samples.
    #[error("signal is empty")]
    EmptySignal,

    /// Turns ending before turn 0, so the window period `max(N) + 1` is not positive.
    #[error("window needs non-negative turn numbers, last turn is {0}")]
    NegativeTurns(i64),

    /// Window order below 1.
    #[error("window order must be at least 1, got {0}")]
    InvalidWindowOrder(u32),

    /// Window name that does not match any [`WindowType`](crate::WindowType).
    #[error("unknown window type: {0}")]
    UnknownWindow(String),

    /// Two sequences that must be paired have different lengths.
    #[error("length mismatch: {what} has {found} samples, expected {expected}")]
    LengthMismatch {
        /// Which input was too short or too long.
        what: &'static str,
        /// Length that was required.
        expected: usize,
        /// Length that was supplied.
        found: usize,
    },

    /// Forced FFT length of zero.
    #[error("FFT length must be non-zero")]
    InvalidFftLength,
}

impl NaffError {
    /// Create a length mismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        NaffError::LengthMismatch {
            what,
            expected,
            found,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NaffError>;
