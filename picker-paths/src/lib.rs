//! XDG Base Directory paths for random-picker.
//!
//! The group registry lives under the config directory and per-group pick
//! history under the cache directory, so wiping caches only forgets history.

use std::path::PathBuf;

/// Directory name used under every XDG base directory.
pub const APP_DIR: &str = "random-picker";

/// Name of the group registry file inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Get the random-picker config directory.
///
/// Returns `$XDG_CONFIG_HOME/random-picker` if set, otherwise
/// `~/.config/random-picker`.
///
/// # Examples
///
/// ```
/// use picker_paths::{config_dir, CONFIG_FILE};
///
/// let config_file = config_dir().join(CONFIG_FILE);
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Get the random-picker cache directory.
///
/// Returns `$XDG_CACHE_HOME/random-picker` if set, otherwise
/// `~/.cache/random-picker`. Pick history files are stored here.
pub fn cache_dir() -> PathBuf {
    xdg_dir("XDG_CACHE_HOME", ".cache")
}

/// Path of the group registry file.
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

fn xdg_dir(env_var: &str, home_fallback: &str) -> PathBuf {
    match std::env::var(env_var) {
        Ok(base) if !base.is_empty() => PathBuf::from(base).join(APP_DIR),
        _ => match dirs::home_dir() {
            Some(home) => home.join(home_fallback).join(APP_DIR),
            None => PathBuf::from(home_fallback).join(APP_DIR),
        },
    }
}
