//! Continuous-frequency discrete Fourier transform.
//!
//! ```text
//! DFT(f)  = (1/Nt) · Σ_n exp(−2πi·f·n) · z[n]
//! DFT'(f) = Σ_n (i·n) · [(1/Nt) · exp(−2πi·f·n) · z[n]]
//! ```
//!
//! Unlike an FFT, `f` is not restricted to the bin grid `m/Nt`. `DFT'` is
//! the derivative up to the constant factor `−2π`, which does not move its
//! zeros. The exponential is advanced with a per-turn rotor instead of
//! calling `exp` for every sample.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use crate::signal::Turns;

/// Transform value and derivative at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaskarValue {
    /// `DFT(f)`, the complex amplitude of the component at `f`.
    pub value: Complex64,
    /// `DFT'(f)`.
    pub derivative: Complex64,
}

impl LaskarValue {
    /// `Re(DFT)·Re(DFT') + Im(DFT)·Im(DFT')`.
    ///
    /// Proportional to `−d|DFT|²/df`: it crosses zero from below to above at
    /// a local maximum of `|DFT|`.
    pub fn objective(&self) -> f64 {
        self.value.re * self.derivative.re + self.value.im * self.derivative.im
    }

    /// `|DFT(f)|`.
    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }
}

/// Evaluate the transform and its derivative of `z` at `freq`.
///
/// `turns` supplies the turn number of each sample; only the first
/// `min(z.len(), turns.len())` samples contribute, and `Nt` is `z.len()`.
pub fn laskar_dft(freq: f64, turns: &Turns, z: &[Complex64]) -> LaskarValue {
    let scale = 1.0 / z.len().max(1) as f64;
    let step = Complex64::from_polar(1.0, -2.0 * PI * freq);
    let mut rotor = Complex64::from_polar(scale, -2.0 * PI * freq * turns.first() as f64);

    let mut value = Complex64::new(0.0, 0.0);
    let mut weighted = Complex64::new(0.0, 0.0);
    for (&sample, n) in z.iter().zip(turns.iter()) {
        let term = rotor * sample;
        value += term;
        weighted += term * n;
        rotor *= step;
    }

    LaskarValue {
        value,
        derivative: Complex64::i() * weighted,
    }
}

/// Subtract the component `amplitude · exp(2πi·freq·n)` from `z` in place.
pub fn subtract_line(z: &mut [Complex64], turns: &Turns, amplitude: Complex64, freq: f64) {
    let step = Complex64::from_polar(1.0, 2.0 * PI * freq);
    let mut rotor = amplitude * Complex64::from_polar(1.0, 2.0 * PI * freq * turns.first() as f64);
    for sample in z.iter_mut().take(turns.len()) {
        *sample -= rotor;
        rotor *= step;
    }
}
