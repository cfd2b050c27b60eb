//! Error types for profile operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or applying a profile.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No factory or user profile with this name
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// Profile fields out of range
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// Profile accepted by validation but rejected by the analyser
    #[error("invalid analysis parameters: {0}")]
    Analysis(#[from] naff_core::NaffError),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_display_and_source() {
        let err = ConfigError::read_file("/some/path.toml", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path.toml"))
        );
        assert_eq!(
            err.to_string(),
            "failed to read file '/some/path.toml': mock"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn create_dir_display() {
        let err = ConfigError::create_dir("/profiles", mock_io_err());
        assert!(err.to_string().starts_with("failed to create directory '/profiles'"));
    }

    #[test]
    fn profile_not_found_display() {
        let err = ConfigError::ProfileNotFound("fast".into());
        assert_eq!(err.to_string(), "profile not found: fast");
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_converts() {
        let err: ConfigError = ValidationError::MacroSteps.into();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().starts_with("validation failed: "));
    }

    #[test]
    fn analysis_converts() {
        let err: ConfigError = naff_core::NaffError::InvalidFftLength.into();
        assert_eq!(
            err.to_string(),
            "invalid analysis parameters: FFT length must be non-zero"
        );
    }
}
