//! IPC handler for urlview.
//!
//! Decodes the JSON messages the page posts through `window.ipc.postMessage`
//! and turns them into controller calls. Work that needs the window (script
//! evaluation, fullscreen changes) is returned as [`UserEvent`]s for the event
//! loop to perform on the main thread.

use std::sync::{Mutex, MutexGuard};

use log::{debug, error, info, warn};
use serde::Deserialize;

use crate::app::App;
use crate::managers::element_host::{ElementHost, ScriptedElementHost};
use crate::managers::page_controller::PageControllerTrait;
use crate::page::page_config;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::element::NativeElement;
use crate::types::errors::{IpcError, SettingsError};
use crate::types::viewer::{Display, FullscreenRequest, IMAGE_VIEWER_VIEW_TYPE};

/// Commands posted by the page script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcCommand {
    /// The page finished loading (first load or reload).
    UiReady,
    SubmitUrl { url: String },
    /// An embedded element is in the page tree and can be looked up.
    ViewMounted { view_type: String, view_id: String },
    ToggleFullscreen,
    EnterFullscreen,
    ExitFullscreen,
    /// Updates one persisted setting by dot path, e.g. `shortcuts.toggle_fullscreen`.
    SetSetting { key: String, value: serde_json::Value },
    ResetSettings,
}

impl IpcCommand {
    pub fn parse(message: &str) -> Result<Self, IpcError> {
        Ok(serde_json::from_str(message)?)
    }
}

/// Work for the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    EvalScript(String),
    Fullscreen(FullscreenRequest),
}

/// Everything the IPC handler mutates.
pub struct ViewerSession {
    pub app: App,
    pub host: ScriptedElementHost,
    /// Element rendered into the page but not yet reported mounted.
    pending: Option<NativeElement>,
}

impl ViewerSession {
    pub fn new(app: App) -> Self {
        Self {
            app,
            host: ScriptedElementHost::new(),
            pending: None,
        }
    }

    /// Builds the current display and the script that renders it.
    fn render_display(&mut self) -> Option<UserEvent> {
        let display = match self.app.page_controller.build_display(&self.app.view_registry) {
            Ok(display) => display,
            Err(e) => {
                error!("Cannot build display: {}", e);
                return None;
            }
        };
        let html = display.to_html();
        self.pending = match display {
            Display::Embedded { element } => Some(element),
            Display::Placeholder { .. } => None,
        };
        Some(UserEvent::EvalScript(format!(
            "window.__uv_render({})",
            serde_json::Value::from(html)
        )))
    }

    /// Pushes changed settings into the running page: the shortcut config,
    /// and the placeholder text if the placeholder is what is showing.
    fn settings_changed(&mut self, result: Result<(), SettingsError>) -> Vec<UserEvent> {
        if let Err(e) = result {
            warn!("Settings change rejected: {}", e);
            return Vec::new();
        }
        let settings = self.app.settings().clone();
        info!("Settings saved to {}", self.app.settings_engine.get_config_path().display());
        self.app
            .page_controller
            .set_placeholder_text(&settings.general.placeholder_text);

        let mut events = vec![UserEvent::EvalScript(format!(
            "window.__uv_applyConfig({})",
            page_config(&settings)
        ))];
        if self.app.page_controller.image_source().is_none() {
            events.extend(self.render_display());
        }
        events
    }

    fn drain_host_scripts(&mut self) -> Vec<UserEvent> {
        self.host
            .drain_scripts()
            .into_iter()
            .map(UserEvent::EvalScript)
            .collect()
    }
}

/// Locks the session for `purpose`, logging instead of panicking when a
/// previous holder panicked.
pub fn lock_session<'a>(
    session: &'a Mutex<ViewerSession>,
    purpose: &str,
) -> Option<MutexGuard<'a, ViewerSession>> {
    match session.lock() {
        Ok(guard) => Some(guard),
        Err(_) => {
            warn!("Viewer session lock poisoned; dropping {}", purpose);
            None
        }
    }
}

/// Handles one raw IPC message. Malformed messages are logged and ignored.
pub fn handle_ipc(session: &mut ViewerSession, message: &str) -> Vec<UserEvent> {
    match IpcCommand::parse(message) {
        Ok(command) => handle_command(session, command),
        Err(e) => {
            debug!("Ignoring IPC message: {}", e);
            Vec::new()
        }
    }
}

pub fn handle_command(session: &mut ViewerSession, command: IpcCommand) -> Vec<UserEvent> {
    debug!("IPC {:?}", command);
    match command {
        IpcCommand::UiReady => {
            // The page was (re)built; nothing from before is mounted anymore.
            session.host.unmount_all();
            session.pending = None;
            session.render_display().into_iter().collect()
        }

        IpcCommand::SubmitUrl { url } => {
            if !session.app.page_controller.submit_url(&url) {
                return Vec::new();
            }
            if session.host.is_mounted(IMAGE_VIEWER_VIEW_TYPE) {
                let controller = &session.app.page_controller;
                if let Some(src) = controller.image_source() {
                    controller.update_displayed_source(&mut session.host, src);
                }
                session.drain_host_scripts()
            } else {
                session.render_display().into_iter().collect()
            }
        }

        IpcCommand::ViewMounted { view_type, view_id } => {
            let element = match session.pending.take() {
                Some(el) if el.view_type == view_type && el.view_id == view_id => el,
                other => {
                    debug!("Stale mount report for {} ({})", view_type, view_id);
                    session.pending = other;
                    return Vec::new();
                }
            };
            session.host.mount(element);
            session
                .app
                .page_controller
                .view_mounted(&mut session.host, &view_type);
            session.drain_host_scripts()
        }

        IpcCommand::ToggleFullscreen => vec![UserEvent::Fullscreen(FullscreenRequest::Toggle)],
        IpcCommand::EnterFullscreen => vec![UserEvent::Fullscreen(FullscreenRequest::Enter)],
        IpcCommand::ExitFullscreen => vec![UserEvent::Fullscreen(FullscreenRequest::Exit)],

        IpcCommand::SetSetting { key, value } => {
            let result = session.app.settings_engine.set_value(&key, value);
            session.settings_changed(result)
        }

        IpcCommand::ResetSettings => {
            let result = session.app.settings_engine.reset();
            session.settings_changed(result)
        }
    }
}
