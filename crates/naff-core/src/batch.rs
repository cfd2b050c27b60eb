//! Tunes of many independent trajectories.
//!
//! Trajectories share nothing, so with the `parallel` feature the work is
//! spread over rayon's thread pool. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::naff::Naff;
use crate::refine::SpectralPeak;
use crate::signal::Signal;

impl Naff {
    /// [`Naff::tune`] of every signal.
    pub fn tunes(&self, signals: &[Signal]) -> Vec<Result<Option<f64>>> {
        self.tunes_with_progress(signals, || {})
    }

    /// [`Naff::tunes`], calling `on_done` once after each signal is analysed.
    ///
    /// With the `parallel` feature `on_done` runs on worker threads, in
    /// completion order.
    pub fn tunes_with_progress<F>(
        &self,
        signals: &[Signal],
        on_done: F,
    ) -> Vec<Result<Option<f64>>>
    where
        F: Fn() + Sync,
    {
        let tune = |s: &Signal| {
            let result = self.tune(s);
            on_done();
            result
        };
        #[cfg(feature = "parallel")]
        {
            signals.par_iter().map(tune).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            signals.iter().map(tune).collect()
        }
    }

    /// [`Naff::harmonics`] of every signal.
    pub fn harmonics_batch(
        &self,
        signals: &[Signal],
        num_harmonics: usize,
    ) -> Vec<Result<Vec<SpectralPeak>>> {
        #[cfg(feature = "parallel")]
        {
            signals
                .par_iter()
                .map(|s| self.harmonics(s, num_harmonics))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            signals
                .iter()
                .map(|s| self.harmonics(s, num_harmonics))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NaffError;
    use rustfft::num_complex::Complex64;
    use std::f64::consts::PI;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tone(freq: f64, len: usize) -> Signal {
        Signal::complex(
            (0..len)
                .map(|n| Complex64::from_polar(1.0, 2.0 * PI * freq * n as f64))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn tunes_keep_input_order() {
        let freqs = [0.11, -0.27, 0.33, 0.05];
        let signals: Vec<Signal> = freqs.iter().map(|&f| tone(f, 1024)).collect();
        let tunes = Naff::default().tunes(&signals);
        assert_eq!(tunes.len(), freqs.len());
        for (tune, f) in tunes.iter().zip(freqs) {
            let q = tune.as_ref().unwrap().unwrap();
            assert!((q - f64::abs(f)).abs() < 1e-10, "{q} vs {f}");
        }
    }

    #[test]
    fn one_bad_signal_does_not_spoil_the_batch() {
        let signals = vec![tone(0.2, 512), Signal::real(Vec::new()), tone(0.3, 512)];
        let tunes = Naff::default().tunes(&signals);
        assert!(tunes[0].is_ok());
        assert_eq!(tunes[1], Err(NaffError::EmptySignal));
        assert!(tunes[2].is_ok());
    }

    #[test]
    fn progress_reported_once_per_signal() {
        let signals = vec![tone(0.2, 512), Signal::real(Vec::new()), tone(0.3, 512)];
        let done = AtomicUsize::new(0);
        let naff = Naff::default();
        let tunes = naff.tunes_with_progress(&signals, || {
            done.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(done.load(Ordering::Relaxed), signals.len());
        assert_eq!(tunes, naff.tunes(&signals));
    }

    #[test]
    fn harmonics_batch_matches_single_calls() {
        let signals = vec![tone(0.21, 1024), tone(-0.4, 1024)];
        let naff = Naff::default();
        let batch = naff.harmonics_batch(&signals, 2);
        for (result, signal) in batch.iter().zip(&signals) {
            assert_eq!(result, &naff.harmonics(signal, 2));
        }
    }
}
