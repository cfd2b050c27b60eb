//! Shared CLI helpers used across multiple commands.

use clap::Args;
use naff_config::{AnalysisProfile, find_profile, get_factory_profile};
use naff_core::Naff;

/// Options selecting the analysis parameters.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Profile name or path to a profile TOML file
    #[arg(short, long, default_value = "default")]
    pub profile: String,

    /// Window order (overrides the profile)
    #[arg(long)]
    pub order: Option<u32>,

    /// Window type (overrides the profile)
    #[arg(long)]
    pub window: Option<String>,

    /// Analyse only the first column as a real signal
    #[arg(long)]
    pub x_only: bool,
}

impl AnalysisArgs {
    /// Profile with the command-line overrides applied.
    pub fn profile(&self) -> anyhow::Result<AnalysisProfile> {
        let mut profile = load_profile(&self.profile)?;
        if let Some(order) = self.order {
            profile.window_order = order;
        }
        if let Some(window) = &self.window {
            profile.window.clone_from(window);
        }
        Ok(profile)
    }

    /// Analyser for the resolved profile.
    pub fn analyser(&self) -> anyhow::Result<(Naff, AnalysisProfile)> {
        let profile = self.profile()?;
        let config = profile.to_naff_config()?;
        tracing::debug!(
            profile = %profile.name,
            window = %config.window,
            order = config.window_order,
            "analysis parameters"
        );
        Ok((Naff::new(config)?, profile))
    }
}

/// Load a profile by name or path.
///
/// Searches in this order:
/// 1. Factory profiles (by name)
/// 2. File path or user profiles directory
pub fn load_profile(name: &str) -> anyhow::Result<AnalysisProfile> {
    if let Some(profile) = get_factory_profile(name) {
        return Ok(profile);
    }

    if let Some(path) = find_profile(name) {
        return Ok(AnalysisProfile::load(&path)?);
    }

    anyhow::bail!(
        "Profile '{}' not found. Use 'naff profiles list' to see available profiles.",
        name
    )
}

/// `f64` formatted for tables, `-` when absent.
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.12}", v))
}
