//! Input signals and turn numbering.

use rustfft::num_complex::Complex64;

use crate::error::{NaffError, Result};

/// Turn-by-turn input, tagged once at the call boundary.
///
/// A [`Signal::Real`] carries the position only (`px` is implicitly zero) and
/// is analysed with conjugate-pair merging; a [`Signal::Complex`] carries the
/// normalised phase-space signal `z = x - i·px` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Position-only samples.
    Real(Vec<f64>),
    /// Complex samples `x - i·px`.
    Complex(Vec<Complex64>),
}

impl Signal {
    /// Real signal from position samples.
    pub fn real(x: impl Into<Vec<f64>>) -> Self {
        Signal::Real(x.into())
    }

    /// Complex signal from ready-made samples.
    pub fn complex(z: impl Into<Vec<Complex64>>) -> Self {
        Signal::Complex(z.into())
    }

    /// Build `z[n] = x[n] - i·px[n]` from position and momentum.
    pub fn from_phase_space(x: &[f64], px: &[f64]) -> Result<Self> {
        if x.len() != px.len() {
            return Err(NaffError::length_mismatch("px", x.len(), px.len()));
        }
        Ok(Signal::Complex(
            x.iter()
                .zip(px)
                .map(|(&x, &px)| Complex64::new(x, -px))
                .collect(),
        ))
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Signal::Real(x) => x.len(),
            Signal::Complex(z) => z.len(),
        }
    }

    /// Whether the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this is the position-only variant.
    pub fn is_real(&self) -> bool {
        matches!(self, Signal::Real(_))
    }

    /// Complex view of the samples (`px = 0` for real signals).
    pub fn to_complex(&self) -> Vec<Complex64> {
        match self {
            Signal::Real(x) => x.iter().map(|&x| Complex64::new(x, 0.0)).collect(),
            Signal::Complex(z) => z.clone(),
        }
    }
}

/// Consecutive turn numbers `first, first + 1, ..., first + len - 1`.
///
/// This is the index sequence `N` that both the window and the Laskar
/// transform are evaluated on. A non-zero `first` analyses a sub-segment
/// while keeping the original turn numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turns {
    first: i64,
    len: usize,
}

impl Turns {
    /// Turns `first..first + len`.
    pub fn new(first: i64, len: usize) -> Self {
        Self { first, len }
    }

    /// Turns `0..len`.
    pub fn from_zero(len: usize) -> Self {
        Self::new(0, len)
    }

    /// First turn number.
    pub fn first(&self) -> i64 {
        self.first
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last turn number, `None` when empty.
    pub fn last(&self) -> Option<i64> {
        (self.len > 0).then(|| self.first + self.len as i64 - 1)
    }

    /// Turn numbers as floating point values.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |k| (self.first + k as i64) as f64)
    }
}

/// Total energy `Σ |z[n]|²` of a complex sequence.
pub fn energy(z: &[Complex64]) -> f64 {
    z.iter().map(|c| c.norm_sqr()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_space_sign_convention() {
        let signal = Signal::from_phase_space(&[1.0, 2.0], &[0.5, -0.25]).unwrap();
        assert_eq!(
            signal,
            Signal::Complex(vec![Complex64::new(1.0, -0.5), Complex64::new(2.0, 0.25)])
        );
    }

    #[test]
    fn phase_space_rejects_mismatch() {
        let err = Signal::from_phase_space(&[1.0, 2.0], &[0.5]).unwrap_err();
        assert_eq!(err, NaffError::length_mismatch("px", 2, 1));
    }

    #[test]
    fn real_signal_has_zero_imaginary_part() {
        let z = Signal::real(vec![1.0, -3.0]).to_complex();
        assert!(z.iter().all(|c| c.im == 0.0));
        assert_eq!(z[1].re, -3.0);
    }

    #[test]
    fn turns_with_offset() {
        let turns = Turns::new(100, 4);
        let values: Vec<f64> = turns.iter().collect();
        assert_eq!(values, vec![100.0, 101.0, 102.0, 103.0]);
        assert_eq!(turns.last(), Some(103));
        assert_eq!(Turns::from_zero(0).last(), None);
    }

    #[test]
    fn energy_sums_squared_magnitudes() {
        let z = [Complex64::new(3.0, 4.0), Complex64::new(0.0, 1.0)];
        assert!((energy(&z) - 26.0).abs() < 1e-12);
    }
}
