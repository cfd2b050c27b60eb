//! Profile file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use naff_core::{NaffConfig, RefineConfig, WindowType};

use crate::error::ConfigError;

/// Named set of analysis parameters.
///
/// Every field but `name` falls back to the analyser defaults, so a profile
/// only needs to spell out what it changes.
///
/// # TOML Format
///
/// ```toml
/// name = "coarse"
/// description = "Fast survey of many particles"
/// window = "hann"
/// window_order = 1
/// num_harmonics = 3
/// tolerance = 1e-8
/// macro_steps = 10
/// micro_steps = 40
/// fft_length = 1024
/// conjugate_tolerance = 1e-10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisProfile {
    /// Name of the profile.
    pub name: String,

    /// Optional description of the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Window family name (`"hann"`).
    #[serde(default = "default_window")]
    pub window: String,

    /// Window order `p ≥ 1`.
    #[serde(default = "default_window_order")]
    pub window_order: u32,

    /// Lines to extract when the caller does not say.
    #[serde(default = "default_num_harmonics")]
    pub num_harmonics: usize,

    /// Bracket width at which the root search stops.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Macro-scan steps per line.
    #[serde(default = "default_macro_steps")]
    pub macro_steps: usize,

    /// Regula falsi iterations per bracket.
    #[serde(default = "default_micro_steps")]
    pub micro_steps: usize,

    /// Forced FFT length; absent means the largest power of two that fits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fft_length: Option<usize>,

    /// Frequency tolerance for merging conjugate pairs of real signals.
    #[serde(default = "default_conjugate_tolerance")]
    pub conjugate_tolerance: f64,
}

fn default_window() -> String {
    WindowType::default().name().to_string()
}

fn default_window_order() -> u32 {
    NaffConfig::default().window_order
}

fn default_num_harmonics() -> usize {
    1
}

fn default_tolerance() -> f64 {
    RefineConfig::default().tolerance
}

fn default_macro_steps() -> usize {
    RefineConfig::default().macro_steps
}

fn default_micro_steps() -> usize {
    RefineConfig::default().micro_steps
}

fn default_conjugate_tolerance() -> f64 {
    NaffConfig::default().conjugate_tolerance
}

impl AnalysisProfile {
    /// Create a profile with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            window: default_window(),
            window_order: default_window_order(),
            num_harmonics: default_num_harmonics(),
            tolerance: default_tolerance(),
            macro_steps: default_macro_steps(),
            micro_steps: default_micro_steps(),
            fft_length: None,
            conjugate_tolerance: default_conjugate_tolerance(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the window order.
    pub fn with_window_order(mut self, order: u32) -> Self {
        self.window_order = order;
        self
    }

    /// Set the default number of harmonics.
    pub fn with_num_harmonics(mut self, num_harmonics: usize) -> Self {
        self.num_harmonics = num_harmonics;
        self
    }

    /// Set the root search tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Load a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a profile from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the profile to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the profile to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the profile and build the analyser configuration.
    pub fn to_naff_config(&self) -> Result<NaffConfig, ConfigError> {
        crate::validation::validate_profile(self)?;

        let config = NaffConfig {
            window: self.window.parse()?,
            window_order: self.window_order,
            fft_length: self.fft_length,
            refine: RefineConfig {
                tolerance: self.tolerance,
                macro_steps: self.macro_steps,
                micro_steps: self.micro_steps,
            },
            conjugate_tolerance: self.conjugate_tolerance,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self::new("default")
    }
}
