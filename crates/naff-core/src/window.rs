//! Tapering windows applied before spectral analysis.
//!
//! The Hann window of order `p` is
//!
//! ```text
//! w[n] = (2^p · p!² / (2p)!) · (1 + cos(2π(n − center)/Nt))^p
//! ```
//!
//! with `center = Nt/2 − 1` for even `Nt` and `Nt/2` for odd `Nt`. The
//! normalisation makes the mean of the window over one full period equal to
//! one, so amplitudes measured on the windowed signal are the amplitudes of
//! the raw signal. Higher orders narrow the leakage skirts at the cost of a
//! wider main lobe.
//!
//! `Nt` is inferred as `max(N) + 1`, the number of turns of a sequence
//! starting at turn 0. Use [`hann_with_length`] to pass it explicitly.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use rustfft::num_complex::Complex64;

use crate::error::{NaffError, Result};
use crate::signal::Turns;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Hann window (raised cosine) of arbitrary integer order
    #[default]
    Hann,
}

impl WindowType {
    /// Window weights over `turns`.
    pub fn weights(&self, turns: &Turns, order: u32) -> Result<Vec<f64>> {
        match self {
            WindowType::Hann => hann(turns, order),
        }
    }

    /// Windowed copy of `z`, sample `k` weighted by the window at turn `k` of `turns`.
    pub fn apply(&self, z: &[Complex64], turns: &Turns, order: u32) -> Result<Vec<Complex64>> {
        if z.len() != turns.len() {
            return Err(NaffError::length_mismatch("turns", z.len(), turns.len()));
        }
        let weights = self.weights(turns, order)?;
        Ok(z.iter().zip(&weights).map(|(&s, &w)| s * w).collect())
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Hann => "hann",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowType {
    type Err = NaffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hann" => Ok(WindowType::Hann),
            _ => Err(NaffError::UnknownWindow(s.to_string())),
        }
    }
}

/// Normalisation `2^p · p!² / (2p)!` of the order-`p` Hann window; the peak
/// weight is `2^p` times this.
///
/// Evaluated as `Π k/(2k − 1)` so large orders do not overflow.
pub fn hann_normalization(order: u32) -> f64 {
    (1..=order)
        .map(|k| f64::from(k) / f64::from(2 * k - 1))
        .product()
}

/// Hann window over `turns`, with `Nt = max(N) + 1`.
pub fn hann(turns: &Turns, order: u32) -> Result<Vec<f64>> {
    let last = turns.last().ok_or(NaffError::EmptySignal)?;
    if last < 0 {
        return Err(NaffError::NegativeTurns(last));
    }
    hann_with_length(turns, (last + 1) as usize, order)
}

/// Hann window over `turns` with an explicit period `nt`.
pub fn hann_with_length(turns: &Turns, nt: usize, order: u32) -> Result<Vec<f64>> {
    if order < 1 {
        return Err(NaffError::InvalidWindowOrder(order));
    }
    if nt == 0 {
        return Err(NaffError::EmptySignal);
    }

    let center = if nt % 2 == 0 { nt / 2 - 1 } else { nt / 2 } as f64;
    let norm = hann_normalization(order);
    let period = nt as f64;
    let exponent = order as i32;

    Ok(turns
        .iter()
        .map(|n| norm * (1.0 + (2.0 * PI * (n - center) / period).cos()).powi(exponent))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_matches_factorial_form() {
        fn factorial(n: u32) -> f64 {
            (1..=n).map(f64::from).product()
        }
        for p in 1..=8 {
            let expected = 2f64.powi(p as i32) * factorial(p).powi(2) / factorial(2 * p);
            assert!(
                (hann_normalization(p) - expected).abs() < 1e-12,
                "order {p}"
            );
        }
        assert_eq!(hann_normalization(1), 1.0);
        assert!((hann_normalization(2) - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn peak_at_center_even_length() {
        let w = hann(&Turns::from_zero(100), 1).unwrap();
        // Nt = 100 -> center 49, value 2 * norm
        assert!((w[49] - 2.0).abs() < 1e-12);
        assert!(w.iter().all(|&v| v <= w[49] + 1e-12));
        // last turn sits half a period from the centre
        assert!(w[99].abs() < 1e-12);
    }

    #[test]
    fn peak_at_center_odd_length() {
        let w = hann(&Turns::from_zero(101), 3).unwrap();
        let peak = hann_normalization(3) * 8.0;
        assert!((w[50] - peak).abs() < 1e-12);
        for k in 0..50 {
            assert!((w[50 - k] - w[50 + k]).abs() < 1e-12, "asymmetric at {k}");
        }
    }

    #[test]
    fn unit_mean_over_full_period() {
        for order in 1..=5 {
            let w = hann(&Turns::from_zero(512), order).unwrap();
            let mean = w.iter().sum::<f64>() / w.len() as f64;
            assert!((mean - 1.0).abs() < 1e-12, "order {order}: mean {mean}");
        }
    }

    #[test]
    fn explicit_length_overrides_inferred() {
        let turns = Turns::from_zero(10);
        assert_eq!(
            hann(&turns, 2).unwrap(),
            hann_with_length(&turns, 10, 2).unwrap()
        );
        assert_ne!(
            hann(&turns, 2).unwrap(),
            hann_with_length(&turns, 9, 2).unwrap()
        );
    }

    #[test]
    fn order_zero_rejected() {
        let err = hann(&Turns::from_zero(16), 0).unwrap_err();
        assert_eq!(err, NaffError::InvalidWindowOrder(0));
    }

    #[test]
    fn empty_turns_rejected() {
        assert_eq!(
            hann(&Turns::from_zero(0), 1).unwrap_err(),
            NaffError::EmptySignal
        );
    }

    #[test]
    fn negative_turns_rejected() {
        assert_eq!(
            hann(&Turns::new(-10, 5), 2).unwrap_err(),
            NaffError::NegativeTurns(-6)
        );
        // ending at turn 0 still gives a one-turn period
        assert_eq!(hann(&Turns::new(-2, 3), 1).unwrap().len(), 3);
    }

    #[test]
    fn parse_window_names() {
        assert_eq!("hann".parse::<WindowType>().unwrap(), WindowType::Hann);
        assert_eq!("HANN".parse::<WindowType>().unwrap(), WindowType::Hann);
        assert!(matches!(
            "blackman".parse::<WindowType>(),
            Err(NaffError::UnknownWindow(name)) if name == "blackman"
        ));
        assert_eq!(WindowType::Hann.to_string(), "hann");
    }

    #[test]
    fn apply_checks_lengths() {
        let z = vec![Complex64::new(1.0, 0.0); 8];
        let err = WindowType::Hann
            .apply(&z, &Turns::from_zero(7), 1)
            .unwrap_err();
        assert!(matches!(err, NaffError::LengthMismatch { .. }));

        let windowed = WindowType::Hann.apply(&z, &Turns::from_zero(8), 1).unwrap();
        let weights = hann(&Turns::from_zero(8), 1).unwrap();
        for (s, w) in windowed.iter().zip(&weights) {
            assert_eq!(s.re, *w);
        }
    }
}
