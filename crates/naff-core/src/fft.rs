//! FFT-based coarse frequency estimate.
//!
//! The windowed signal is transformed at a power-of-two length (the largest
//! one not exceeding the signal, unless a length is forced) and the bin of
//! largest magnitude gives a first guess of the dominant frequency, good to
//! one bin width. [`crate::refine`] takes it from there.

use std::sync::Arc;

use rustfft::{FftPlanner, num_complex::Complex64};

use crate::error::{NaffError, Result};

/// FFT processor with a cached forward plan.
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(size);
        Self { fft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward transform of `input`, truncated or zero-padded to the FFT size.
    pub fn forward(&self, input: &[Complex64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input.iter().take(self.size).copied().collect();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.fft.process(&mut buffer);
        buffer
    }
}

/// First guess of the dominant frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoarseEstimate {
    /// Frequency of the strongest bin, in `[0, 1)` cycles per sample.
    pub tune: f64,
    /// Bin width `1/len` of the transform.
    pub resolution: f64,
}

impl CoarseEstimate {
    /// Estimate with bins at or above Nyquist mapped to negative frequencies,
    /// so the tune lies in `[-0.5, 0.5)`.
    pub fn centered(self) -> Self {
        let tune = if self.tune >= 0.5 {
            self.tune - 1.0
        } else {
            self.tune
        };
        Self { tune, ..self }
    }
}

/// Largest power of two not exceeding `len` (`len > 0`).
pub fn power_of_two_floor(len: usize) -> usize {
    1 << len.ilog2()
}

/// FFT length used for a signal of `len` samples.
pub fn fft_length(len: usize, forced: Option<usize>) -> Result<usize> {
    match forced {
        Some(0) => Err(NaffError::InvalidFftLength),
        Some(n) => Ok(n),
        None if len == 0 => Err(NaffError::EmptySignal),
        None => Ok(power_of_two_floor(len)),
    }
}

/// Index of the bin with the largest magnitude (first one on ties).
fn peak_bin(spectrum: &[Complex64]) -> usize {
    let mut best = 0;
    let mut best_mag = f64::NEG_INFINITY;
    for (i, c) in spectrum.iter().enumerate() {
        let mag = c.norm_sqr();
        if mag > best_mag {
            best = i;
            best_mag = mag;
        }
    }
    best
}

/// Coarse estimate with an existing processor; its size is the FFT length.
pub fn coarse_estimate_with(fft: &Fft, windowed: &[Complex64]) -> CoarseEstimate {
    let spectrum = fft.forward(windowed);
    let len = fft.size() as f64;
    CoarseEstimate {
        tune: peak_bin(&spectrum) as f64 / len,
        resolution: 1.0 / len,
    }
}

/// Coarse estimate of the dominant frequency of a windowed signal.
///
/// Without `forced_len` the signal is cropped to the closest lower power of
/// two; a forced length longer than the signal zero-pads it.
pub fn coarse_estimate(windowed: &[Complex64], forced_len: Option<usize>) -> Result<CoarseEstimate> {
    if windowed.is_empty() {
        return Err(NaffError::EmptySignal);
    }
    let fft = Fft::new(fft_length(windowed.len(), forced_len)?);
    Ok(coarse_estimate_with(&fft, windowed))
}
