//! NAFF Core - Numerical Analysis of Fundamental Frequencies
//!
//! This crate extracts the spectral lines (frequency + complex amplitude) of
//! quasi-periodic signals such as turn-by-turn accelerator orbit data, with a
//! frequency resolution far below the bin width of a plain DFT.
//!
//! - [`window`] - Hann windows of arbitrary order
//! - [`fft`] - Power-of-two FFT coarse estimate
//! - [`laskar`] - Continuous-frequency transform and its derivative
//! - [`refine`] - Bracket scan and regula falsi root search
//! - [`naff`] - Harmonic extraction loop and the [`Naff`] analyser
//! - [`real`] - Conjugate-pair merging for real signals
//! - [`batch`] - Tunes of many trajectories (parallel with the `parallel` feature)
//!
//! ## Example
//!
//! ```rust
//! use naff_core::{Naff, NaffConfig, Signal};
//! use std::f64::consts::PI;
//!
//! // x = 0.8 cos(2π·0.27·n)
//! let x: Vec<f64> = (0..4096)
//!     .map(|n| 0.8 * (2.0 * PI * 0.27 * n as f64).cos())
//!     .collect();
//!
//! let naff = Naff::new(NaffConfig::default().with_window_order(2)).unwrap();
//! let lines = naff.harmonics(&Signal::real(x), 1).unwrap();
//! let line = lines[0].line().unwrap();
//! assert!((line.frequency - 0.27).abs() < 1e-10);
//! assert!((line.magnitude() - 0.8).abs() < 1e-6);
//! ```
//!
//! ## Features
//!
//! - `tracing` - debug events per bracket and per extracted line
//! - `parallel` - rayon-backed [`Naff::tunes`] and [`Naff::harmonics_batch`]

pub mod batch;
pub mod error;
pub mod fft;
pub mod laskar;
pub mod naff;
pub mod real;
pub mod refine;
pub mod signal;
pub mod window;

// Re-export main types
pub use error::{NaffError, Result};
pub use fft::{CoarseEstimate, Fft, coarse_estimate};
pub use laskar::{LaskarValue, laskar_dft, subtract_line};
pub use naff::{Extraction, Naff, NaffConfig, extract_harmonics, fundamental_frequency, harmonics, tune};
pub use real::merge_conjugates;
pub use refine::{RefineConfig, SpectralLine, SpectralPeak, refine};
pub use signal::{Signal, Turns, energy};
pub use window::{WindowType, hann, hann_normalization, hann_with_length};

/// Complex sample type used throughout the crate.
pub use rustfft::num_complex::Complex64;
