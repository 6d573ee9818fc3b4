// urlview config path on Linux: $XDG_CONFIG_HOME/urlview or ~/.config/urlview

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for urlview on Linux.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("urlview"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("urlview")
        }
    }
}
