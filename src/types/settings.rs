use serde::{Deserialize, Serialize};

/// Top-level viewer settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewerSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub shortcuts: ShortcutSettings,
}

/// General viewer behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub placeholder_text: String,
    /// URL shown at startup, as if submitted by the user.
    pub initial_url: Option<String>,
    pub start_fullscreen: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            placeholder_text: "Enter an image URL to display it".to_string(),
            initial_url: None,
            start_fullscreen: false,
        }
    }
}

/// Main window geometry and chrome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub background: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Image Viewer".to_string(),
            width: 1024.0,
            height: 768.0,
            background: "#000000".to_string(),
        }
    }
}

/// Keyboard bindings handled by the page, in `KeyboardEvent.key` names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortcutSettings {
    pub toggle_fullscreen: String,
    pub exit_fullscreen: String,
}

impl Default for ShortcutSettings {
    fn default() -> Self {
        Self {
            toggle_fullscreen: "F11".to_string(),
            exit_fullscreen: "Escape".to_string(),
        }
    }
}
