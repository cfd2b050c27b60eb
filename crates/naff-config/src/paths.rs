//! Platform-specific location of user profiles.
//!
//! - Linux: `~/.config/naff/profiles/`
//! - macOS: `~/Library/Application Support/naff/profiles/`
//! - Windows: `%APPDATA%\naff\profiles\`

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "naff";

/// Subdirectory name for profiles.
const PROFILES_SUBDIR: &str = "profiles";

/// Returns the user profiles directory.
///
/// Falls back to `./naff/profiles` if the config directory cannot be determined.
pub fn user_profiles_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PROFILES_SUBDIR)
}

/// Ensure the user profiles directory exists.
pub fn ensure_user_profiles_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_profiles_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// Find a profile file by path or by name.
///
/// `name` is tried as a path first, then as `<name>.toml` (extension
/// optional) in the user profiles directory.
pub fn find_profile(name: &str) -> Option<PathBuf> {
    find_profile_in(name, &user_profiles_dir())
}

fn find_profile_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{}.toml", name)
    };

    let user_path = dir.join(filename);
    user_path.is_file().then_some(user_path)
}

/// List all profile files in the user profiles directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_profiles() -> Vec<PathBuf> {
    list_profiles_in_dir(&user_profiles_dir())
}

fn list_profiles_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut profiles: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    profiles.sort();
    profiles
}

/// Profile name from a file path (the file stem).
///
/// # Example
///
/// ```rust
/// use naff_config::profile_name_from_path;
/// use std::path::Path;
///
/// let name = profile_name_from_path(Path::new("/path/to/coarse.toml"));
/// assert_eq!(name, Some("coarse".to_string()));
/// ```
pub fn profile_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
