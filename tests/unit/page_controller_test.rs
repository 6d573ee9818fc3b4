//! Integration-level unit tests for the PageController.
//!
//! The host document and the element tree are replaced by in-memory fakes, so
//! these tests cover URL submission, source delivery and fullscreen toggling
//! without a window.

use std::cell::Cell;

use urlview::managers::element_host::{ElementHost, ElementTree};
use urlview::managers::page_controller::{PageController, PageControllerTrait};
use urlview::managers::view_registry::{image_viewer_factory, ViewRegistry};
use urlview::services::document::DocumentController;
use urlview::types::errors::FullscreenError;
use urlview::types::viewer::{Display, FullscreenAction, FullscreenRequest, IMAGE_VIEWER_VIEW_TYPE};

/// Document fake that counts calls and, unless told to fail, flips its
/// reported state the way a browser would.
#[derive(Default)]
struct FakeDocument {
    fullscreen: Cell<bool>,
    enters: Cell<usize>,
    exits: Cell<usize>,
    deny: bool,
}

impl FakeDocument {
    fn in_fullscreen() -> Self {
        let doc = Self::default();
        doc.fullscreen.set(true);
        doc
    }

    fn denying() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }
}

impl DocumentController for FakeDocument {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn request_fullscreen(&self) -> Result<(), FullscreenError> {
        self.enters.set(self.enters.get() + 1);
        if self.deny {
            return Err(FullscreenError::Denied("no user gesture".into()));
        }
        self.fullscreen.set(true);
        Ok(())
    }

    fn exit_fullscreen(&self) -> Result<(), FullscreenError> {
        self.exits.set(self.exits.get() + 1);
        if self.deny {
            return Err(FullscreenError::Denied("no user gesture".into()));
        }
        self.fullscreen.set(false);
        Ok(())
    }
}

fn controller() -> PageController {
    PageController::new("No image")
}

// ---------------------------------------------------------------------------
// Submit URL / Build Display
// ---------------------------------------------------------------------------

/// Scenario: submitting a URL replaces the placeholder with the embedded
/// element, and once the element reports mounted its source is the URL.
#[test]
fn test_submit_url_then_mount_delivers_source() {
    let mut controller = controller();
    let registry = ViewRegistry::with_image_viewer();
    let mut tree = ElementTree::new();

    assert_eq!(
        controller.build_display(&registry).unwrap(),
        Display::Placeholder {
            message: "No image".into()
        }
    );

    assert!(controller.submit_url("https://example.com/a.png"));

    let element = match controller.build_display(&registry).unwrap() {
        Display::Embedded { element } => element,
        other => panic!("expected embedded element, got {:?}", other),
    };
    assert_eq!(element.view_type, IMAGE_VIEWER_VIEW_TYPE);

    tree.mount(element);
    assert!(controller.view_mounted(&mut tree, IMAGE_VIEWER_VIEW_TYPE));
    assert_eq!(
        tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap().source(),
        Some("https://example.com/a.png")
    );
}

/// Empty submissions change neither the stored source nor the element.
#[test]
fn test_empty_submit_is_noop() {
    let mut controller = controller();
    let mut tree = ElementTree::new();
    tree.mount(image_viewer_factory("v1"));

    assert!(controller.submit_url("https://example.com/a.png"));
    controller.update_displayed_source(&mut tree, "https://example.com/a.png");

    assert!(!controller.submit_url(""));
    assert_eq!(controller.image_source(), Some("https://example.com/a.png"));
    assert_eq!(
        tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap().source(),
        Some("https://example.com/a.png")
    );
}

/// Malformed URLs are passed through untouched.
#[test]
fn test_malformed_url_is_not_validated() {
    let mut controller = controller();
    assert!(controller.submit_url("not a url at all"));
    assert_eq!(controller.image_source(), Some("not a url at all"));
}

/// Surrounding whitespace is part of the submitted text and reaches the
/// element as-is; only the empty string is a no-op.
#[test]
fn test_submitted_text_reaches_element_unchanged() {
    let mut controller = controller();
    let mut tree = ElementTree::new();
    tree.mount(image_viewer_factory("v1"));

    assert!(controller.submit_url(" https://example.com/a.png "));
    assert!(controller.view_mounted(&mut tree, IMAGE_VIEWER_VIEW_TYPE));
    assert_eq!(
        tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap().source(),
        Some(" https://example.com/a.png ")
    );

    assert!(controller.submit_url("   "));
    assert_eq!(controller.image_source(), Some("   "));
}

/// A second submission while mounted retargets the same element.
#[test]
fn test_resubmit_updates_mounted_element() {
    let mut controller = controller();
    let mut tree = ElementTree::new();
    tree.mount(image_viewer_factory("v1"));

    controller.submit_url("https://example.com/a.png");
    controller.update_displayed_source(&mut tree, controller.image_source().unwrap());
    controller.submit_url("https://example.com/b.png");
    controller.update_displayed_source(&mut tree, controller.image_source().unwrap());

    let el = tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap();
    assert_eq!(el.view_id, "v1");
    assert_eq!(el.source(), Some("https://example.com/b.png"));
}

// ---------------------------------------------------------------------------
// Update Displayed Source
// ---------------------------------------------------------------------------

/// With no element mounted the update is dropped: no panic, no state change,
/// and nothing is delivered later.
#[test]
fn test_update_without_element_is_dropped() {
    let mut controller = controller();
    controller.submit_url("https://example.com/a.png");
    let mut tree = ElementTree::new();

    assert!(!controller.update_displayed_source(&mut tree, "https://example.com/other.png"));
    assert_eq!(controller.image_source(), Some("https://example.com/a.png"));
    assert!(tree.is_empty());

    // A later mount delivers the controller's own source, not the dropped one.
    tree.mount(image_viewer_factory("v1"));
    assert_eq!(tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap().source(), None);
    controller.view_mounted(&mut tree, IMAGE_VIEWER_VIEW_TYPE);
    assert_eq!(
        tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap().source(),
        Some("https://example.com/a.png")
    );
}

/// Mount before any submission leaves the element without a source.
#[test]
fn test_mount_without_source() {
    let controller = controller();
    let mut tree = ElementTree::new();
    tree.mount(image_viewer_factory("v1"));
    assert!(!controller.view_mounted(&mut tree, IMAGE_VIEWER_VIEW_TYPE));
    assert_eq!(tree.get(IMAGE_VIEWER_VIEW_TYPE).unwrap().source(), None);
}

// ---------------------------------------------------------------------------
// Fullscreen
// ---------------------------------------------------------------------------

/// Scenario: double-tap while windowed issues exactly one enter request.
#[test]
fn test_toggle_while_windowed_enters_once() {
    let doc = FakeDocument::default();
    let action = controller().toggle_fullscreen(&doc);
    assert_eq!(action, FullscreenAction::Enter);
    assert_eq!(doc.enters.get(), 1);
    assert_eq!(doc.exits.get(), 0);
}

/// Scenario: with the document in fullscreen, toggle exits and never enters.
#[test]
fn test_toggle_while_fullscreen_exits_once() {
    let doc = FakeDocument::in_fullscreen();
    let action = controller().toggle_fullscreen(&doc);
    assert_eq!(action, FullscreenAction::Exit);
    assert_eq!(doc.exits.get(), 1);
    assert_eq!(doc.enters.get(), 0);
}

/// Two toggles in a row alternate because the state is re-read each time.
#[test]
fn test_toggle_twice_alternates() {
    let doc = FakeDocument::default();
    let controller = controller();
    assert_eq!(controller.toggle_fullscreen(&doc), FullscreenAction::Enter);
    assert_eq!(controller.toggle_fullscreen(&doc), FullscreenAction::Exit);
    assert_eq!((doc.enters.get(), doc.exits.get()), (1, 1));
}

/// A denied request is swallowed and not retried.
#[test]
fn test_denied_request_is_not_retried() {
    let doc = FakeDocument::denying();
    let controller = controller();
    assert_eq!(controller.toggle_fullscreen(&doc), FullscreenAction::Enter);
    assert_eq!(doc.enters.get(), 1);
    // Still windowed, so the next toggle tries to enter again.
    assert_eq!(controller.toggle_fullscreen(&doc), FullscreenAction::Enter);
    assert_eq!(doc.enters.get(), 2);
    assert_eq!(doc.exits.get(), 0);
}

/// The floating control's explicit actions map straight to document calls.
#[test]
fn test_explicit_enter_and_exit() {
    let doc = FakeDocument::default();
    let controller = controller();
    controller.handle_fullscreen(FullscreenRequest::Enter, &doc);
    controller.handle_fullscreen(FullscreenRequest::Enter, &doc);
    controller.handle_fullscreen(FullscreenRequest::Exit, &doc);
    assert_eq!((doc.enters.get(), doc.exits.get()), (2, 1));
    assert!(!doc.is_fullscreen());
}
