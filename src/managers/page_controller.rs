//! Page Controller for urlview.
//!
//! Owns the viewer state, forwards the submitted URL to the embedded image
//! element, and drives fullscreen transitions through the host document.

use log::{debug, info, warn};

use crate::managers::element_host::ElementHost;
use crate::managers::view_registry::ViewRegistryTrait;
use crate::services::document::DocumentController;
use crate::types::errors::ViewError;
use crate::types::viewer::{
    Display, FullscreenAction, FullscreenRequest, ViewerState, IMAGE_VIEWER_VIEW_TYPE,
};

/// Trait defining the page controller interface.
pub trait PageControllerTrait {
    fn submit_url(&mut self, text: &str) -> bool;
    fn update_displayed_source(&self, host: &mut dyn ElementHost, url: &str) -> bool;
    fn view_mounted(&self, host: &mut dyn ElementHost, view_type: &str) -> bool;
    fn toggle_fullscreen(&self, document: &dyn DocumentController) -> FullscreenAction;
    fn enter_fullscreen(&self, document: &dyn DocumentController);
    fn exit_fullscreen(&self, document: &dyn DocumentController);
    fn build_display(&self, registry: &dyn ViewRegistryTrait) -> Result<Display, ViewError>;
    fn image_source(&self) -> Option<&str>;
}

/// Single-page controller. Holds the image source and nothing else.
pub struct PageController {
    state: ViewerState,
    placeholder_text: String,
}

impl PageController {
    pub fn new(placeholder_text: &str) -> Self {
        Self {
            state: ViewerState::new(),
            placeholder_text: placeholder_text.to_string(),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn set_placeholder_text(&mut self, text: &str) {
        self.placeholder_text = text.to_string();
    }

    /// Dispatches one of the user-facing fullscreen requests.
    pub fn handle_fullscreen(
        &self,
        request: FullscreenRequest,
        document: &dyn DocumentController,
    ) {
        match request {
            FullscreenRequest::Toggle => {
                self.toggle_fullscreen(document);
            }
            FullscreenRequest::Enter => self.enter_fullscreen(document),
            FullscreenRequest::Exit => self.exit_fullscreen(document),
        }
    }

    fn apply(&self, action: FullscreenAction, document: &dyn DocumentController) {
        let result = match action {
            FullscreenAction::Enter => document.request_fullscreen(),
            FullscreenAction::Exit => document.exit_fullscreen(),
        };
        match result {
            Ok(()) => debug!("Fullscreen {:?} requested", action),
            Err(e) => warn!("Fullscreen {:?} failed: {}", action, e),
        }
    }
}

impl PageControllerTrait for PageController {
    /// Stores `text` as the image source, unchanged. Empty input is ignored.
    ///
    /// The element source is delivered separately: immediately through
    /// [`update_displayed_source`](Self::update_displayed_source) when the
    /// element is mounted, otherwise when the page reports the mount.
    fn submit_url(&mut self, text: &str) -> bool {
        match self.state.submit(text) {
            Some(next) => {
                info!("Displaying {}", next.image_source.as_deref().unwrap_or_default());
                self.state = next;
                true
            }
            None => {
                debug!("Ignoring empty URL submission");
                false
            }
        }
    }

    /// Sets `src` on the mounted `image-viewer` element, if there is one.
    fn update_displayed_source(&self, host: &mut dyn ElementHost, url: &str) -> bool {
        let updated = host.set_source(IMAGE_VIEWER_VIEW_TYPE, url);
        if !updated {
            debug!("'{}' not mounted, source update dropped", IMAGE_VIEWER_VIEW_TYPE);
        }
        updated
    }

    /// Readiness signal from the page: delivers the current source to the
    /// freshly mounted element.
    fn view_mounted(&self, host: &mut dyn ElementHost, view_type: &str) -> bool {
        if view_type != IMAGE_VIEWER_VIEW_TYPE {
            return false;
        }
        match self.state.image_source.as_deref() {
            Some(url) => self.update_displayed_source(host, url),
            None => false,
        }
    }

    /// Exits fullscreen if the document reports one, enters otherwise.
    fn toggle_fullscreen(&self, document: &dyn DocumentController) -> FullscreenAction {
        let action = FullscreenAction::toggle_from(document.is_fullscreen());
        self.apply(action, document);
        action
    }

    fn enter_fullscreen(&self, document: &dyn DocumentController) {
        self.apply(FullscreenAction::Enter, document);
    }

    fn exit_fullscreen(&self, document: &dyn DocumentController) {
        self.apply(FullscreenAction::Exit, document);
    }

    fn build_display(&self, registry: &dyn ViewRegistryTrait) -> Result<Display, ViewError> {
        if !self.state.has_image() {
            return Ok(Display::Placeholder {
                message: self.placeholder_text.clone(),
            });
        }
        let element = registry.create_view(IMAGE_VIEWER_VIEW_TYPE)?;
        Ok(Display::Embedded { element })
    }

    fn image_source(&self) -> Option<&str> {
        self.state.image_source.as_deref()
    }
}
