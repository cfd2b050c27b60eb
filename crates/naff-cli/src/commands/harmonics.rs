//! `naff harmonics` - table of the strongest spectral lines.

use clap::Args;
use naff_core::SpectralPeak;
use serde::Serialize;
use std::path::PathBuf;

use super::common::{AnalysisArgs, format_value};
use crate::input::read_signal;

#[derive(Args)]
pub struct HarmonicsArgs {
    /// Signal file (`x` or `x px` columns)
    file: PathBuf,

    /// Number of lines (defaults to the profile's `num_harmonics`)
    #[arg(short, long)]
    num: Option<usize>,

    /// Write the lines as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

/// One row of the table; all fields `None` when no line was found.
#[derive(Debug, Serialize, PartialEq)]
struct LineRecord {
    index: usize,
    frequency: Option<f64>,
    magnitude: Option<f64>,
    phase: Option<f64>,
    re: Option<f64>,
    im: Option<f64>,
}

impl LineRecord {
    fn new(index: usize, peak: &SpectralPeak) -> Self {
        let line = peak.line();
        Self {
            index,
            frequency: line.map(|l| l.frequency),
            magnitude: line.map(|l| l.magnitude()),
            phase: line.map(|l| l.phase()),
            re: line.map(|l| l.amplitude.re),
            im: line.map(|l| l.amplitude.im),
        }
    }
}

#[derive(Serialize)]
struct HarmonicsReport<'a> {
    file: String,
    profile: &'a str,
    window: &'a str,
    window_order: u32,
    signal: &'static str,
    samples: usize,
    lines: &'a [LineRecord],
}

pub fn run(args: HarmonicsArgs) -> anyhow::Result<()> {
    let (naff, profile) = args.analysis.analyser()?;
    let num = args.num.unwrap_or(profile.num_harmonics);
    let signal = read_signal(&args.file, args.analysis.x_only)?;

    let peaks = naff.harmonics(&signal, num)?;
    let records: Vec<LineRecord> = peaks
        .iter()
        .enumerate()
        .map(|(i, peak)| LineRecord::new(i, peak))
        .collect();

    println!(
        "{:>4}  {:>16}  {:>16}  {:>16}  {:>16}  {:>16}",
        "#", "frequency", "|A|", "phase", "Re", "Im"
    );
    for r in &records {
        println!(
            "{:>4}  {:>16}  {:>16}  {:>16}  {:>16}  {:>16}",
            r.index,
            format_value(r.frequency),
            format_value(r.magnitude),
            format_value(r.phase),
            format_value(r.re),
            format_value(r.im),
        );
    }

    if let Some(output_path) = args.json {
        let report = HarmonicsReport {
            file: args.file.to_string_lossy().into_owned(),
            profile: &profile.name,
            window: &profile.window,
            window_order: naff.config().window_order,
            signal: if signal.is_real() { "real" } else { "complex" },
            samples: signal.len(),
            lines: &records,
        };
        std::fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
        eprintln!("Wrote {} lines to {}", records.len(), output_path.display());
    }

    Ok(())
}
