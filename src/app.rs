//! App Core for urlview.
//!
//! Central struct holding the settings, the view registry and the page
//! controller, and applying launch options at startup.

use std::path::PathBuf;

use log::{info, warn};

use crate::cli::LaunchOptions;
use crate::managers::page_controller::{PageController, PageControllerTrait};
use crate::managers::view_registry::ViewRegistry;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::settings::ViewerSettings;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub view_registry: ViewRegistry,
    pub page_controller: PageController,
    start_fullscreen: bool,
}

impl App {
    /// Creates the app, loading settings from `config_path` (or the platform
    /// default). A missing or malformed settings file falls back to defaults.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            warn!(
                "Could not load {}: {}; using defaults",
                settings_engine.get_config_path().display(),
                e
            );
        }

        let settings = settings_engine.get_settings();
        let page_controller = PageController::new(&settings.general.placeholder_text);
        let start_fullscreen = settings.general.start_fullscreen;

        Self {
            settings_engine,
            view_registry: ViewRegistry::with_image_viewer(),
            page_controller,
            start_fullscreen,
        }
    }

    pub fn settings(&self) -> &ViewerSettings {
        self.settings_engine.get_settings()
    }

    /// Startup sequence: apply CLI overrides, then submit the initial URL.
    ///
    /// Overrides are session-only and never written back to the settings file.
    pub fn startup(&mut self, options: &LaunchOptions) {
        self.start_fullscreen = self.start_fullscreen || options.fullscreen;

        let initial = options
            .url
            .clone()
            .or_else(|| self.settings().general.initial_url.clone());
        if let Some(url) = initial {
            self.page_controller.submit_url(&url);
        }
        info!(
            "Started (image: {}, fullscreen: {})",
            self.page_controller.image_source().unwrap_or("none"),
            self.start_fullscreen
        );
    }

    pub fn start_fullscreen(&self) -> bool {
        self.start_fullscreen
    }
}
