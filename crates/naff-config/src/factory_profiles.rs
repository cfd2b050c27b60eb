//! Factory profiles bundled with the library.
//!
//! Always available without any file on disk.

use crate::AnalysisProfile;

/// TOML content for factory profiles, keyed by name.
static FACTORY_PROFILES_TOML: &[(&str, &str)] = &[
    ("default", DEFAULT_PROFILE),
    ("legacy", LEGACY_PROFILE),
    ("precise", PRECISE_PROFILE),
];

const DEFAULT_PROFILE: &str = r#"
name = "default"
description = "Order-1 Hann window, one line"
window = "hann"
window_order = 1
num_harmonics = 1
"#;

const LEGACY_PROFILE: &str = r#"
name = "legacy"
description = "Order-2 Hann window as used by the classic tune routine"
window = "hann"
window_order = 2
num_harmonics = 1
"#;

const PRECISE_PROFILE: &str = r#"
name = "precise"
description = "Order-4 Hann window and tight root search for long, clean signals"
window = "hann"
window_order = 4
num_harmonics = 10
tolerance = 1e-12
micro_steps = 200
"#;

/// All factory profiles.
pub fn factory_profiles() -> Vec<AnalysisProfile> {
    FACTORY_PROFILES_TOML
        .iter()
        .filter_map(|(_, toml)| AnalysisProfile::from_toml(toml).ok())
        .collect()
}

/// Factory profile by name, case-insensitive.
pub fn get_factory_profile(name: &str) -> Option<AnalysisProfile> {
    let name_lower = name.to_lowercase();
    FACTORY_PROFILES_TOML
        .iter()
        .find(|(profile_name, _)| *profile_name == name_lower)
        .and_then(|(_, toml)| AnalysisProfile::from_toml(toml).ok())
}

/// Names of all factory profiles.
pub fn factory_profile_names() -> Vec<&'static str> {
    FACTORY_PROFILES_TOML.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_profile;

    #[test]
    fn all_factory_profiles_parse_and_validate() {
        for (name, toml) in FACTORY_PROFILES_TOML {
            let profile = AnalysisProfile::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory profile '{name}' should parse: {e}"));
            assert_eq!(profile.name, *name);
            assert!(profile.description.is_some());
            assert_eq!(validate_profile(&profile), Ok(()), "profile '{name}'");
        }
        assert_eq!(factory_profiles().len(), FACTORY_PROFILES_TOML.len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let precise = get_factory_profile("PRECISE").unwrap();
        assert_eq!(precise.window_order, 4);
        assert_eq!(precise.tolerance, 1e-12);
        assert!(get_factory_profile("nonexistent").is_none());
    }

    #[test]
    fn legacy_uses_order_two() {
        assert_eq!(get_factory_profile("legacy").unwrap().window_order, 2);
    }

    #[test]
    fn default_matches_analyser_defaults() {
        let config = get_factory_profile("default")
            .unwrap()
            .to_naff_config()
            .unwrap();
        assert_eq!(config, naff_core::NaffConfig::default());
    }

    #[test]
    fn names_listed() {
        assert_eq!(factory_profile_names(), vec!["default", "legacy", "precise"]);
    }
}
