//! NAFF CLI - tunes and spectral lines of turn-by-turn data.

mod commands;
mod input;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "naff")]
#[command(author, version, about = "Numerical Analysis of Fundamental Frequencies", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tune of a signal
    Tune(commands::tune::TuneArgs),

    /// Extract and tabulate spectral lines
    Harmonics(commands::harmonics::HarmonicsArgs),

    /// Tunes of many signal files
    Batch(commands::batch::BatchArgs),

    /// List and show analysis profiles
    Profiles(commands::profiles::ProfilesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Tune(args) => commands::tune::run(args),
        Commands::Harmonics(args) => commands::harmonics::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Profiles(args) => commands::profiles::run(args),
    }
}
