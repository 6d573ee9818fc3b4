use serde::{Deserialize, Serialize};

use super::element::NativeElement;

/// Logical name under which the image element factory is registered.
pub const IMAGE_VIEWER_VIEW_TYPE: &str = "image-viewer";

/// UI state owned by the page controller.
///
/// Fullscreen is deliberately absent: it is read from the host document
/// every time it is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerState {
    pub image_source: Option<String>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State after the user submits `text` in the URL field.
    ///
    /// The text is stored exactly as given. Returns `None` only for empty
    /// input, meaning no transition happens.
    pub fn submit(&self, text: &str) -> Option<ViewerState> {
        if text.is_empty() {
            return None;
        }
        Some(ViewerState {
            image_source: Some(text.to_string()),
        })
    }

    pub fn has_image(&self) -> bool {
        self.image_source.is_some()
    }
}

/// What the display area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// No URL has been submitted yet.
    Placeholder { message: String },
    /// A freshly created embedded element. Its source is delivered after
    /// the page reports it mounted.
    Embedded { element: NativeElement },
}

impl Display {
    pub fn to_html(&self) -> String {
        match self {
            Display::Placeholder { message } => format!(
                "<p class=\"placeholder\">{}</p>",
                super::element::escape_attr(message)
            ),
            Display::Embedded { element } => element.to_html(),
        }
    }
}

/// A fullscreen change requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenRequest {
    Toggle,
    Enter,
    Exit,
}

/// The document call actually issued for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenAction {
    Enter,
    Exit,
}

impl FullscreenAction {
    /// Toggle decision for the currently reported fullscreen state.
    pub fn toggle_from(is_fullscreen: bool) -> Self {
        if is_fullscreen {
            FullscreenAction::Exit
        } else {
            FullscreenAction::Enter
        }
    }
}
