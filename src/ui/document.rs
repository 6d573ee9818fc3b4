//! `DocumentController` backed by the native window.

use log::debug;
use tao::window::{Fullscreen, Window};

use crate::services::document::DocumentController;
use crate::types::errors::FullscreenError;

/// Fullscreen primitives on a `tao` window. State is always read from the
/// window itself.
pub struct WindowDocument<'a> {
    window: &'a Window,
}

impl<'a> WindowDocument<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl DocumentController for WindowDocument<'_> {
    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn request_fullscreen(&self) -> Result<(), FullscreenError> {
        // `None` lets tao pick the monitor the window is currently on.
        debug!("Entering borderless fullscreen");
        self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        Ok(())
    }

    fn exit_fullscreen(&self) -> Result<(), FullscreenError> {
        self.window.set_fullscreen(None);
        Ok(())
    }
}
