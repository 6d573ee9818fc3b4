// urlview host document capability
// The page controller reaches fullscreen state only through this trait, so a
// window, a browser document, or a test fake can stand behind it.

use crate::types::errors::FullscreenError;

/// The three fullscreen primitives of the host document.
///
/// Implementations report the host's real state at call time and never cache it.
pub trait DocumentController {
    /// Whether some element (or the window) currently occupies fullscreen.
    fn is_fullscreen(&self) -> bool;
    /// Asks the host to make the document root fullscreen.
    fn request_fullscreen(&self) -> Result<(), FullscreenError>;
    /// Asks the host to leave fullscreen.
    fn exit_fullscreen(&self) -> Result<(), FullscreenError>;
}
