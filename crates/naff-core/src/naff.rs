//! Harmonic extraction loop.
//!
//! Each iteration windows the residual, takes a coarse FFT estimate, refines
//! it with [`refine`] and subtracts the found component
//! `amplitude · exp(2πi·frequency·n)` from the residual. The loop runs
//! exactly `num_harmonics` times; there is no stopping criterion on the
//! residual energy.

use rustfft::num_complex::Complex64;

use crate::error::{NaffError, Result};
use crate::fft::{Fft, coarse_estimate_with, fft_length};
use crate::laskar::subtract_line;
use crate::real::merge_conjugates;
use crate::refine::{RefineConfig, SpectralPeak, refine};
use crate::signal::{Signal, Turns, energy};
use crate::window::WindowType;

/// Analysis parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaffConfig {
    /// Window family.
    pub window: WindowType,
    /// Window order `p ≥ 1`.
    pub window_order: u32,
    /// Forced FFT length for the coarse estimate; `None` crops to a power of two.
    pub fft_length: Option<usize>,
    /// Root search bounds.
    pub refine: RefineConfig,
    /// Largest `||Q_i| − |Q_j||` for two lines of a real signal to be merged.
    pub conjugate_tolerance: f64,
}

impl Default for NaffConfig {
    fn default() -> Self {
        Self {
            window: WindowType::Hann,
            window_order: 1,
            fft_length: None,
            refine: RefineConfig::default(),
            conjugate_tolerance: 1e-10,
        }
    }
}

impl NaffConfig {
    /// Set the window order.
    pub fn with_window_order(mut self, order: u32) -> Self {
        self.window_order = order;
        self
    }

    /// Set the window family.
    pub fn with_window(mut self, window: WindowType) -> Self {
        self.window = window;
        self
    }

    /// Force the coarse FFT length.
    pub fn with_fft_length(mut self, len: usize) -> Self {
        self.fft_length = Some(len);
        self
    }

    /// Set the root search bounds.
    pub fn with_refine(mut self, refine: RefineConfig) -> Self {
        self.refine = refine;
        self
    }

    /// Check the parameters that can be checked without a signal.
    pub fn validate(&self) -> Result<()> {
        if self.window_order < 1 {
            return Err(NaffError::InvalidWindowOrder(self.window_order));
        }
        if self.fft_length == Some(0) {
            return Err(NaffError::InvalidFftLength);
        }
        Ok(())
    }
}

/// Result of [`Naff::extract`]: the lines and what is left of the signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Lines in discovery order, one per iteration.
    pub lines: Vec<SpectralPeak>,
    /// Input minus every found line.
    pub residual: Vec<Complex64>,
}

impl Extraction {
    /// `Σ |residual|²`.
    pub fn residual_energy(&self) -> f64 {
        energy(&self.residual)
    }
}

/// NAFF analyser.
///
/// # Example
///
/// ```rust
/// use naff_core::{Naff, NaffConfig};
/// use rustfft::num_complex::Complex64;
/// use std::f64::consts::PI;
///
/// let z: Vec<Complex64> = (0..2048)
///     .map(|n| Complex64::from_polar(0.5, 2.0 * PI * 0.31 * n as f64))
///     .collect();
///
/// let naff = Naff::new(NaffConfig::default()).unwrap();
/// let lines = naff.extract_harmonics(&z, 1).unwrap();
/// let line = lines[0].line().unwrap();
/// assert!((line.frequency - 0.31).abs() < 1e-10);
/// assert!((line.magnitude() - 0.5).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Naff {
    config: NaffConfig,
}

impl Naff {
    /// Create an analyser; rejects invalid parameters.
    pub fn new(config: NaffConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Analyser with the given window and default search bounds.
    pub fn with_window(window_order: u32, window: WindowType) -> Result<Self> {
        Self::new(
            NaffConfig::default()
                .with_window_order(window_order)
                .with_window(window),
        )
    }

    /// Analysis parameters.
    pub fn config(&self) -> &NaffConfig {
        &self.config
    }

    /// Strongest spectral line of `z`.
    ///
    /// `turns` defaults to `0..z.len()`.
    pub fn fundamental_frequency(&self, z: &[Complex64], turns: Option<&Turns>) -> Result<SpectralPeak> {
        if z.is_empty() {
            return Err(NaffError::EmptySignal);
        }
        let turns = turns.copied().unwrap_or_else(|| Turns::from_zero(z.len()));
        let windowed = self
            .config
            .window
            .apply(z, &turns, self.config.window_order)?;
        let fft = Fft::new(fft_length(z.len(), self.config.fft_length)?);
        Ok(self.refine_windowed(&fft, &windowed, &turns))
    }

    /// Coarse estimate and refinement of an already windowed signal.
    fn refine_windowed(&self, fft: &Fft, windowed: &[Complex64], turns: &Turns) -> SpectralPeak {
        let estimate = coarse_estimate_with(fft, windowed).centered();
        refine(
            windowed,
            turns,
            estimate.tune - estimate.resolution,
            estimate.resolution,
            &self.config.refine,
        )
    }

    /// Extract `num_harmonics` lines and keep the residual.
    pub fn extract(&self, z: &[Complex64], num_harmonics: usize) -> Result<Extraction> {
        if num_harmonics < 1 {
            return Err(NaffError::NoHarmonicsRequested);
        }
        if z.is_empty() {
            return Err(NaffError::EmptySignal);
        }

        let turns = Turns::from_zero(z.len());
        let weights = self
            .config
            .window
            .weights(&turns, self.config.window_order)?;
        let fft = Fft::new(fft_length(z.len(), self.config.fft_length)?);

        let mut residual = z.to_vec();
        let mut windowed = vec![Complex64::new(0.0, 0.0); z.len()];
        let mut lines = Vec::with_capacity(num_harmonics);

        for _harmonic in 0..num_harmonics {
            for ((out, &sample), &w) in windowed.iter_mut().zip(&residual).zip(&weights) {
                *out = sample * w;
            }

            let peak = self.refine_windowed(&fft, &windowed, &turns);
            match peak {
                SpectralPeak::Found(line) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        harmonic = _harmonic,
                        frequency = line.frequency,
                        magnitude = line.magnitude(),
                        "line extracted"
                    );
                    subtract_line(&mut residual, &turns, line.amplitude, line.frequency);
                }
                SpectralPeak::NotFound => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(harmonic = _harmonic, "no spectral line found");
                }
            }
            lines.push(peak);
        }

        Ok(Extraction { lines, residual })
    }

    /// Extract `num_harmonics` lines from a complex signal.
    pub fn extract_harmonics(&self, z: &[Complex64], num_harmonics: usize) -> Result<Vec<SpectralPeak>> {
        Ok(self.extract(z, num_harmonics)?.lines)
    }

    /// `|frequency|` of the strongest line; `None` when no line was found.
    pub fn tune(&self, signal: &Signal) -> Result<Option<f64>> {
        let peak = self.fundamental_frequency(&signal.to_complex(), None)?;
        Ok(peak.frequency().map(f64::abs))
    }

    /// Spectral lines of a real or complex signal.
    ///
    /// A [`Signal::Real`] is searched for `2 · num_harmonics` lines, whose
    /// conjugate pairs are then merged into one line each at a non-negative
    /// frequency; see [`merge_conjugates`].
    pub fn harmonics(&self, signal: &Signal, num_harmonics: usize) -> Result<Vec<SpectralPeak>> {
        if num_harmonics < 1 {
            return Err(NaffError::NoHarmonicsRequested);
        }
        match signal {
            Signal::Complex(z) => self.extract_harmonics(z, num_harmonics),
            Signal::Real(_) => {
                let lines = self.extract_harmonics(&signal.to_complex(), 2 * num_harmonics)?;
                Ok(merge_conjugates(&lines, self.config.conjugate_tolerance))
            }
        }
    }
}

/// One-shot [`Naff::fundamental_frequency`].
pub fn fundamental_frequency(
    z: &[Complex64],
    turns: Option<&Turns>,
    window_order: u32,
    window: WindowType,
) -> Result<SpectralPeak> {
    Naff::with_window(window_order, window)?.fundamental_frequency(z, turns)
}

/// One-shot [`Naff::extract_harmonics`].
pub fn extract_harmonics(
    z: &[Complex64],
    num_harmonics: usize,
    window_order: u32,
    window: WindowType,
) -> Result<Vec<SpectralPeak>> {
    Naff::with_window(window_order, window)?.extract_harmonics(z, num_harmonics)
}

/// One-shot [`Naff::tune`].
pub fn tune(signal: &Signal, window_order: u32, window: WindowType) -> Result<Option<f64>> {
    Naff::with_window(window_order, window)?.tune(signal)
}

/// One-shot [`Naff::harmonics`].
pub fn harmonics(
    signal: &Signal,
    num_harmonics: usize,
    window_order: u32,
    window: WindowType,
) -> Result<Vec<SpectralPeak>> {
    Naff::with_window(window_order, window)?.harmonics(signal, num_harmonics)
}
