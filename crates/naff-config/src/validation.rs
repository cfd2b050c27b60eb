//! Profile validation.
//!
//! Every field is checked and all problems are reported together, so a
//! hand-edited profile can be fixed in one pass.
//!
//! # Example
//!
//! ```rust
//! use naff_config::{AnalysisProfile, ValidationError, validate_profile};
//!
//! let mut profile = AnalysisProfile::new("broken");
//! profile.window_order = 0;
//! profile.macro_steps = 0;
//!
//! match validate_profile(&profile) {
//!     Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use naff_core::WindowType;
use thiserror::Error;

use crate::AnalysisProfile;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Profile name is empty or blank.
    #[error("profile name must not be empty")]
    EmptyName,

    /// Window name not recognised.
    #[error("unknown window type: {0}")]
    UnknownWindow(String),

    /// Window order below 1.
    #[error("window order must be at least 1, got {0}")]
    WindowOrder(u32),

    /// Zero harmonics requested.
    #[error("num_harmonics must be at least 1")]
    NumHarmonics,

    /// Root search tolerance not a positive finite number.
    #[error("tolerance must be positive and finite, got {0}")]
    Tolerance(f64),

    /// Macro scan without steps.
    #[error("macro_steps must be at least 1")]
    MacroSteps,

    /// Forced FFT length of zero.
    #[error("fft_length must be non-zero")]
    FftLength,

    /// Conjugate tolerance negative or not finite.
    #[error("conjugate_tolerance must be non-negative and finite, got {0}")]
    ConjugateTolerance(f64),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check every field of `profile`.
///
/// A single problem is returned as is; several are wrapped in
/// [`ValidationError::Multiple`] in field order. `micro_steps = 0` is
/// accepted: brackets are then reported at their lower edge.
pub fn validate_profile(profile: &AnalysisProfile) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if profile.window.parse::<WindowType>().is_err() {
        errors.push(ValidationError::UnknownWindow(profile.window.clone()));
    }
    if profile.window_order < 1 {
        errors.push(ValidationError::WindowOrder(profile.window_order));
    }
    if profile.num_harmonics < 1 {
        errors.push(ValidationError::NumHarmonics);
    }
    if !(profile.tolerance.is_finite() && profile.tolerance > 0.0) {
        errors.push(ValidationError::Tolerance(profile.tolerance));
    }
    if profile.macro_steps < 1 {
        errors.push(ValidationError::MacroSteps);
    }
    if profile.fft_length == Some(0) {
        errors.push(ValidationError::FftLength);
    }
    if !(profile.conjugate_tolerance.is_finite() && profile.conjugate_tolerance >= 0.0) {
        errors.push(ValidationError::ConjugateTolerance(
            profile.conjugate_tolerance,
        ));
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert_eq!(validate_profile(&AnalysisProfile::default()), Ok(()));
    }

    #[test]
    fn single_error_is_not_wrapped() {
        let profile = AnalysisProfile::new("x").with_num_harmonics(0);
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::NumHarmonics)
        );
    }

    #[test]
    fn all_errors_collected_in_field_order() {
        let mut profile = AnalysisProfile::new(" ");
        profile.window = "kaiser".into();
        profile.window_order = 0;
        profile.tolerance = f64::NAN;
        profile.fft_length = Some(0);
        profile.conjugate_tolerance = -1.0;

        let Err(ValidationError::Multiple(errors)) = validate_profile(&profile) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[0], ValidationError::EmptyName);
        assert_eq!(errors[1], ValidationError::UnknownWindow("kaiser".into()));
        assert_eq!(errors[2], ValidationError::WindowOrder(0));
        assert!(matches!(errors[3], ValidationError::Tolerance(t) if t.is_nan()));
        assert_eq!(errors[4], ValidationError::FftLength);
        assert_eq!(errors[5], ValidationError::ConjugateTolerance(-1.0));
    }

    #[test]
    fn window_name_is_case_insensitive() {
        let mut profile = AnalysisProfile::new("x");
        profile.window = "HANN".into();
        assert_eq!(validate_profile(&profile), Ok(()));
    }

    #[test]
    fn zero_micro_steps_allowed() {
        let mut profile = AnalysisProfile::new("x");
        profile.micro_steps = 0;
        assert_eq!(validate_profile(&profile), Ok(()));
    }

    #[test]
    fn multiple_display_joins_messages() {
        let err = ValidationError::Multiple(vec![
            ValidationError::MacroSteps,
            ValidationError::FftLength,
        ]);
        assert_eq!(
            err.to_string(),
            "multiple validation errors: macro_steps must be at least 1; fft_length must be non-zero"
        );
    }
}
