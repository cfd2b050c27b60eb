//! `naff batch` - tunes of many signal files.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;

use super::common::AnalysisArgs;
use crate::input::read_signal;

#[derive(Args)]
pub struct BatchArgs {
    /// Signal files (`x` or `x px` columns)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Write the tunes as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

#[derive(Debug, Serialize)]
struct TuneRecord {
    file: String,
    tune: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let (naff, _) = args.analysis.analyser()?;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    // read sequentially, then analyse the readable files in one parallel batch
    let mut records = Vec::with_capacity(args.files.len());
    let mut signals = Vec::new();
    let mut slots = Vec::new();
    for path in &args.files {
        pb.set_message(path.display().to_string());
        let mut record = TuneRecord {
            file: path.to_string_lossy().into_owned(),
            tune: None,
            error: None,
        };
        match read_signal(path, args.analysis.x_only) {
            Ok(signal) => {
                slots.push(records.len());
                signals.push(signal);
            }
            Err(e) => record.error = Some(format!("{:#}", e)),
        }
        records.push(record);
        pb.inc(1);
    }
    pb.set_length((args.files.len() + signals.len()) as u64);
    pb.set_message("analysing");
    let tunes = naff.tunes_with_progress(&signals, || pb.inc(1));

    for (slot, result) in slots.into_iter().zip(tunes) {
        match result {
            Ok(tune) => records[slot].tune = tune,
            Err(e) => records[slot].error = Some(e.to_string()),
        }
    }
    pb.finish_and_clear();

    for record in &records {
        match (&record.error, record.tune) {
            (Some(error), _) => println!("{}\terror: {}", record.file, error),
            (None, Some(tune)) => println!("{}\t{}", record.file, tune),
            (None, None) => println!("{}\tnan", record.file),
        }
    }

    if let Some(output_path) = args.json {
        std::fs::write(&output_path, serde_json::to_string_pretty(&records)?)?;
        eprintln!("Wrote {} tunes to {}", records.len(), output_path.display());
    }

    let failed = records.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} files failed", failed, records.len());
    }
    Ok(())
}
