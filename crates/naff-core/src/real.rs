//! Conjugate-pair merging for real signals.
//!
//! A real oscillation `a·cos(2πfn + φ)` shows up in the complex plane as two
//! lines `(a/2)e^{iφ}` at `+f` and `(a/2)e^{−iφ}` at `−f`. Their phasors
//! `A·exp(2πiQ)` add up to a real number, which is how partners are matched.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use crate::refine::{SpectralLine, SpectralPeak};

/// Sign of `x` with zero mapped to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn phasor(line: &SpectralLine) -> Complex64 {
    line.amplitude * Complex64::from_polar(1.0, 2.0 * PI * line.frequency)
}

/// Merge the complex-plane lines of a real signal into physical lines.
///
/// For every found line the partner is the found line `j` (itself included)
/// minimising `|Im(phasor_i + phasor_j)|`.
///
/// - If `||Q_i| − |Q_j||` exceeds `tolerance` the line is kept as it is.
/// - A line paired with itself (equal frequencies, e.g. a DC offset) is kept
///   once with amplitude `mean(Re) + i·mean(|Im|)`.
/// - A conjugate pair becomes one line at `mean(|Q|)` with amplitude
///   `2·(mean(Re) + s·i·mean(|Im|))`, `s` being the sign of the imaginary
///   part of the member at non-negative frequency. Only the first member of
///   a pair produces output.
///
/// The last found line is only used as a partner: if no earlier line
/// claimed it, it is the unmatched half of a pair that was cut off by the
/// line count and is dropped.
///
/// [`SpectralPeak::NotFound`] entries are carried over in place.
pub fn merge_conjugates(lines: &[SpectralPeak], tolerance: f64) -> Vec<SpectralPeak> {
    let found: Vec<SpectralLine> = lines.iter().filter_map(|p| p.line().copied()).collect();
    let phasors: Vec<Complex64> = found.iter().map(phasor).collect();

    let mut merged: Vec<SpectralPeak> = Vec::with_capacity(lines.len());
    let mut index = 0;

    for peak in lines {
        let SpectralPeak::Found(line) = peak else {
            merged.push(SpectralPeak::NotFound);
            continue;
        };
        let i = index;
        index += 1;
        if i + 1 == found.len() {
            continue;
        }

        let mut j = i;
        let mut best = f64::INFINITY;
        for (k, p) in phasors.iter().enumerate() {
            let imag = (phasors[i] + p).im.abs();
            if imag < best {
                best = imag;
                j = k;
            }
        }
        let partner = found[j];

        if (line.frequency.abs() - partner.frequency.abs()).abs() > tolerance {
            merged.push(*peak);
            continue;
        }

        let re = (line.amplitude.re + partner.amplitude.re) / 2.0;
        let im = (line.amplitude.im.abs() + partner.amplitude.im.abs()) / 2.0;

        if line.frequency == partner.frequency {
            merged.push(SpectralPeak::Found(SpectralLine::new(
                Complex64::new(re, im),
                line.frequency,
            )));
            continue;
        }

        let s = if line.frequency >= 0.0 {
            sign(line.amplitude.im)
        } else if partner.frequency >= 0.0 {
            sign(partner.amplitude.im)
        } else {
            // two distinct negative frequencies closer than the tolerance
            merged.push(*peak);
            continue;
        };

        let frequency = (line.frequency.abs() + partner.frequency.abs()) / 2.0;
        let seen = merged
            .iter()
            .any(|p| p.frequency().is_some_and(|f| f == frequency));
        if !seen {
            merged.push(SpectralPeak::Found(SpectralLine::new(
                2.0 * Complex64::new(re, s * im),
                frequency,
            )));
        }
    }

    merged
}
