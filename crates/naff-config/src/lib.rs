//! Analysis profiles for NAFF spectral-line extraction.
//!
//! A profile is a named TOML file holding the window, the root-search bounds
//! and the default number of lines. Profiles are validated as a whole and
//! turned into a [`naff_core::NaffConfig`].
//!
//! # Example
//!
//! ```rust
//! use naff_config::{AnalysisProfile, get_factory_profile};
//! use naff_core::Naff;
//!
//! let profile = get_factory_profile("legacy").unwrap();
//! let naff = Naff::new(profile.to_naff_config().unwrap()).unwrap();
//! assert_eq!(naff.config().window_order, 2);
//!
//! let custom = AnalysisProfile::from_toml("name = \"coarse\"\nmicro_steps = 20").unwrap();
//! assert_eq!(custom.to_naff_config().unwrap().refine.micro_steps, 20);
//! ```

mod error;
mod profile;

/// Profile validation.
pub mod validation;

/// Factory profiles bundled with the library.
pub mod factory_profiles;

/// Platform-specific profile directories.
#[cfg(feature = "paths")]
pub mod paths;

pub use error::ConfigError;
pub use factory_profiles::{factory_profile_names, factory_profiles, get_factory_profile};
#[cfg(feature = "paths")]
pub use paths::{
    ensure_user_profiles_dir, find_profile, list_user_profiles, profile_name_from_path,
    user_profiles_dir,
};
pub use profile::AnalysisProfile;
pub use validation::{ValidationError, ValidationResult, validate_profile};
