//! Unit tests for the ViewRegistry public API.

use std::collections::HashSet;

use urlview::managers::view_registry::{image_viewer_factory, ViewRegistry, ViewRegistryTrait};
use urlview::types::element::NativeElement;
use urlview::types::errors::ViewError;
use urlview::types::viewer::IMAGE_VIEWER_VIEW_TYPE;

/// Registering the same view type twice fails and keeps the first factory.
#[test]
fn test_duplicate_registration_keeps_first_factory() {
    let mut registry = ViewRegistry::with_image_viewer();

    let result = registry.register_view_factory(
        IMAGE_VIEWER_VIEW_TYPE,
        Box::new(|id: &str| NativeElement::new("video", IMAGE_VIEWER_VIEW_TYPE, id)),
    );

    assert_eq!(
        result,
        Err(ViewError::AlreadyRegistered(IMAGE_VIEWER_VIEW_TYPE.to_string()))
    );
    assert_eq!(registry.create_view(IMAGE_VIEWER_VIEW_TYPE).unwrap().tag, "img");
}

/// The factory runs once per instance and each instance gets its own id.
#[test]
fn test_each_view_gets_a_fresh_id() {
    let registry = ViewRegistry::with_image_viewer();
    let ids: HashSet<String> = (0..20)
        .map(|_| registry.create_view(IMAGE_VIEWER_VIEW_TYPE).unwrap().view_id)
        .collect();
    assert_eq!(ids.len(), 20);
}

/// Custom factories receive the generated instance id.
#[test]
fn test_custom_factory_receives_instance_id() {
    let mut registry = ViewRegistry::new();
    registry
        .register_view_factory(
            "caption",
            Box::new(|id: &str| NativeElement::new("span", "caption", id).with_attribute("title", id)),
        )
        .unwrap();

    let el = registry.create_view("caption").unwrap();
    assert_eq!(el.attribute("title"), Some(el.view_id.as_str()));
}

/// The image element scales to fit: fills the container, letterboxes content.
#[test]
fn test_image_viewer_html() {
    let html = image_viewer_factory("abc").to_html();
    assert!(html.starts_with("<img data-view-type=\"image-viewer\" data-view-id=\"abc\""));
    assert!(html.contains("style=\"width:100%;height:100%;object-fit:contain;display:block\""));
    assert!(!html.contains("src="));
}
