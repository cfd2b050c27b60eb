//! Bracket-and-refine search for the spectral peak.
//!
//! # Algorithm
//!
//! The search objective is [`LaskarValue::objective`], which crosses zero
//! from below to above at each local maximum of `|DFT(f)|`.
//!
//! 1. Macro scan: starting at the coarse estimate, step by a fifth of the
//!    coarse resolution up to `macro_steps` times. Every step where the
//!    objective goes from `≤ 0` to `≥ 0` opens a [`Bracket`].
//! 2. Micro refinement: each bracket is narrowed by regula falsi for up to
//!    `micro_steps` iterations, until its width drops to `tolerance` or an
//!    endpoint stops moving.
//! 3. Every bracket gives one candidate; the one with the largest `|DFT|`
//!    wins and its amplitude is re-evaluated.
//!
//! A scan without any sign change yields [`SpectralPeak::NotFound`].

use rustfft::num_complex::Complex64;

use crate::laskar::{LaskarValue, laskar_dft};
use crate::signal::Turns;

/// ScanPoint points per coarse bin in the macro scan.
pub const POINTS_PER_BIN: f64 = 5.0;

/// Tuning of the root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineConfig {
    /// Bracket width at which the micro refinement stops.
    pub tolerance: f64,
    /// Number of macro-scan steps.
    pub macro_steps: usize,
    /// Maximum regula falsi iterations per bracket.
    pub micro_steps: usize,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            macro_steps: 10,
            micro_steps: 100,
        }
    }
}

/// One extracted component: complex amplitude at a frequency in cycles per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralLine {
    /// Complex amplitude (magnitude and phase).
    pub amplitude: Complex64,
    /// Frequency in cycles per sample.
    pub frequency: f64,
}

impl SpectralLine {
    /// Create a line.
    pub fn new(amplitude: Complex64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// `|amplitude|`.
    pub fn magnitude(&self) -> f64 {
        self.amplitude.norm()
    }

    /// Phase of the amplitude in radians.
    pub fn phase(&self) -> f64 {
        self.amplitude.arg()
    }
}

/// Outcome of one refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpectralPeak {
    /// A local maximum was bracketed and refined.
    Found(SpectralLine),
    /// The macro scan never saw the objective change sign.
    NotFound,
}

impl SpectralPeak {
    /// The line, if one was found.
    pub fn line(&self) -> Option<&SpectralLine> {
        match self {
            SpectralPeak::Found(line) => Some(line),
            SpectralPeak::NotFound => None,
        }
    }

    /// Whether a line was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SpectralPeak::Found(_))
    }

    /// Frequency, if found.
    pub fn frequency(&self) -> Option<f64> {
        self.line().map(|line| line.frequency)
    }

    /// `(amplitude, frequency)` with `NaN` standing in for a missing line.
    pub fn to_nan_pair(&self) -> (Complex64, f64) {
        match self {
            SpectralPeak::Found(line) => (line.amplitude, line.frequency),
            SpectralPeak::NotFound => (Complex64::new(f64::NAN, f64::NAN), f64::NAN),
        }
    }
}

/// A frequency and the objective evaluated there.
#[derive(Debug, Clone, Copy)]
struct ScanPoint {
    freq: f64,
    objective: f64,
}

/// Two scan points straddling a sign change of the objective, `lo.objective ≤ 0 ≤ hi.objective`.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    lo: ScanPoint,
    hi: ScanPoint,
}

impl Bracket {
    /// Bracket between consecutive scan points, if they straddle a maximum.
    fn between(a: ScanPoint, b: ScanPoint) -> Option<Self> {
        (a.objective <= 0.0 && b.objective >= 0.0).then_some(Self { lo: a, hi: b })
    }

    /// False-position point between the endpoints.
    fn secant(&self) -> f64 {
        let ratio = if self.hi.objective.abs() > 0.0 {
            -self.lo.objective / self.hi.objective
        } else {
            0.0
        };
        (self.lo.freq + ratio * self.hi.freq) / (1.0 + ratio)
    }

    /// Narrow the bracket by regula falsi; returns the last evaluated point,
    /// or the lower edge when no iteration runs.
    fn refine(mut self, turns: &Turns, z: &[Complex64], config: &RefineConfig) -> (f64, LaskarValue) {
        let mut last = None;

        for _ in 0..config.micro_steps {
            let freq = self.secant();
            let eval = laskar_dft(freq, turns, z);
            last = Some((freq, eval));
            let point = ScanPoint {
                freq,
                objective: eval.objective(),
            };

            if point.objective <= 0.0 {
                if self.lo.freq == freq {
                    break;
                }
                self.lo = point;
            } else {
                if self.hi.freq == freq {
                    break;
                }
                self.hi = point;
            }

            if (self.hi.freq - self.lo.freq).abs() <= config.tolerance {
                break;
            }
        }
        last.unwrap_or_else(|| (self.lo.freq, laskar_dft(self.lo.freq, turns, z)))
    }
}

/// Refine a coarse estimate to the strongest nearby spectral line.
///
/// `z` must already be windowed. The scan starts at `estimate` and moves
/// upwards by `resolution / 5`, so callers usually start one resolution
/// below the FFT bin.
pub fn refine(
    z: &[Complex64],
    turns: &Turns,
    estimate: f64,
    resolution: f64,
    config: &RefineConfig,
) -> SpectralPeak {
    let step = resolution / POINTS_PER_BIN;
    let point = |freq: f64| ScanPoint {
        freq,
        objective: laskar_dft(freq, turns, z).objective(),
    };

    let mut best: Option<(f64, f64)> = None;
    let mut previous = point(estimate);

    for _ in 0..config.macro_steps {
        let current = point(previous.freq + step);

        if let Some(bracket) = Bracket::between(previous, current) {
            let (freq, eval) = bracket.refine(turns, z, config);
            let magnitude = eval.magnitude();

            #[cfg(feature = "tracing")]
            tracing::debug!(
                lo = bracket.lo.freq,
                hi = bracket.hi.freq,
                freq,
                magnitude,
                "bracket refined"
            );

            // strict comparison keeps the earliest candidate on ties
            if best.is_none_or(|(_, m)| magnitude > m) {
                best = Some((freq, magnitude));
            }
        }
        previous = current;
    }

    match best {
        Some((frequency, _)) => SpectralPeak::Found(SpectralLine::new(
            laskar_dft(frequency, turns, z).value,
            frequency,
        )),
        None => SpectralPeak::NotFound,
    }
}
