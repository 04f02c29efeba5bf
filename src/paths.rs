//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations.

use std::path::PathBuf;

const APP_DIR: &str = "auto-translate";

/// Returns the configuration directory for auto-translate.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/auto-translate` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/auto-translate` otherwise
///
/// Returns `None` when neither is available.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| dirs::home_dir().map(|home| home.join(".config").join(APP_DIR)),
        |xdg| Some(PathBuf::from(xdg).join(APP_DIR)),
    )
}
