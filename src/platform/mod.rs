// urlview platform abstraction
// Resolves the per-user configuration directory on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for urlview.
///
/// - **Linux**: `~/.config/urlview` (or `$XDG_CONFIG_HOME/urlview`)
/// - **macOS**: `~/Library/Application Support/UrlView`
/// - **Windows**: `%APPDATA%/UrlView`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Path of the settings file inside the config directory.
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}
