//! View Registry for urlview.
//!
//! Maps logical view types to factories that build the native elements the
//! page embeds in its display area.

use std::collections::HashMap;

use log::{debug, warn};
use uuid::Uuid;

use crate::types::element::NativeElement;
use crate::types::errors::ViewError;
use crate::types::viewer::IMAGE_VIEWER_VIEW_TYPE;

/// Builds one element instance. Receives the opaque per-instance id.
pub type ViewFactory = Box<dyn Fn(&str) -> NativeElement + Send + Sync>;

/// Trait defining the view registration interface.
pub trait ViewRegistryTrait {
    fn register_view_factory(&mut self, view_type: &str, factory: ViewFactory)
        -> Result<(), ViewError>;
    fn create_view(&self, view_type: &str) -> Result<NativeElement, ViewError>;
    fn is_registered(&self, view_type: &str) -> bool;
}

/// In-memory registry of view factories.
pub struct ViewRegistry {
    factories: HashMap<String, ViewFactory>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry with the `image-viewer` factory already registered.
    pub fn with_image_viewer() -> Self {
        let mut registry = Self::new();
        // A fresh registry cannot already hold the name.
        let _ = registry.register_view_factory(IMAGE_VIEWER_VIEW_TYPE, Box::new(image_viewer_factory));
        registry
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistryTrait for ViewRegistry {
    /// Registers `factory` under `view_type`. The first registration wins.
    fn register_view_factory(
        &mut self,
        view_type: &str,
        factory: ViewFactory,
    ) -> Result<(), ViewError> {
        if self.factories.contains_key(view_type) {
            warn!("View type '{}' is already registered", view_type);
            return Err(ViewError::AlreadyRegistered(view_type.to_string()));
        }
        debug!("Registered view factory '{}'", view_type);
        self.factories.insert(view_type.to_string(), factory);
        Ok(())
    }

    /// Creates a new element instance with a fresh per-instance id.
    fn create_view(&self, view_type: &str) -> Result<NativeElement, ViewError> {
        let factory = self
            .factories
            .get(view_type)
            .ok_or_else(|| ViewError::UnknownViewType(view_type.to_string()))?;
        let view_id = Uuid::new_v4().to_string();
        Ok(factory(&view_id))
    }

    fn is_registered(&self, view_type: &str) -> bool {
        self.factories.contains_key(view_type)
    }
}

/// Factory for the `image-viewer` element: an `<img>` that fills its
/// container and scales its content to fit without cropping or distortion.
pub fn image_viewer_factory(view_id: &str) -> NativeElement {
    NativeElement::new("img", IMAGE_VIEWER_VIEW_TYPE, view_id)
        .with_attribute("alt", "")
        .with_style("width", "100%")
        .with_style("height", "100%")
        .with_style("object-fit", "contain")
        .with_style("display", "block")
}
