//! `naff tune` - fundamental frequency of one signal.

use clap::Args;
use std::path::PathBuf;

use super::common::AnalysisArgs;
use crate::input::read_signal;

#[derive(Args)]
pub struct TuneArgs {
    /// Signal file (`x` or `x px` columns)
    file: PathBuf,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

pub fn run(args: TuneArgs) -> anyhow::Result<()> {
    let (naff, _) = args.analysis.analyser()?;
    let signal = read_signal(&args.file, args.analysis.x_only)?;

    match naff.tune(&signal)? {
        Some(tune) => println!("{}", tune),
        None => {
            tracing::warn!(path = %args.file.display(), "no spectral line found");
            println!("nan");
        }
    }
    Ok(())
}
