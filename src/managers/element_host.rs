//! Element Host for urlview.
//!
//! Tracks which embedded elements are mounted in the page and applies
//! attribute changes to them by logical name.

use std::collections::HashMap;

use log::debug;

use crate::types::element::NativeElement;

/// Trait defining how the controller reaches mounted elements.
pub trait ElementHost {
    /// Records `element` as mounted, replacing any earlier instance of the same view type.
    fn mount(&mut self, element: NativeElement);
    /// Forgets every mounted element, e.g. after the page was rebuilt.
    fn unmount_all(&mut self);
    fn is_mounted(&self, view_type: &str) -> bool;
    /// Sets `src` on the element mounted under `view_type`.
    ///
    /// Returns `false` without side effects when nothing is mounted there.
    fn set_source(&mut self, view_type: &str, url: &str) -> bool;
}

/// In-memory element tree keyed by view type.
#[derive(Debug, Default)]
pub struct ElementTree {
    mounted: HashMap<String, NativeElement>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, view_type: &str) -> Option<&NativeElement> {
        self.mounted.get(view_type)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}

impl ElementHost for ElementTree {
    fn mount(&mut self, element: NativeElement) {
        debug!("Mounted '{}' ({})", element.view_type, element.view_id);
        self.mounted.insert(element.view_type.clone(), element);
    }

    fn unmount_all(&mut self) {
        self.mounted.clear();
    }

    fn is_mounted(&self, view_type: &str) -> bool {
        self.mounted.contains_key(view_type)
    }

    fn set_source(&mut self, view_type: &str, url: &str) -> bool {
        match self.mounted.get_mut(view_type) {
            Some(element) => {
                element.set_attribute("src", url);
                true
            }
            None => false,
        }
    }
}

/// Element host backed by the WebView page.
///
/// Mirrors the page's mounted elements in an [`ElementTree`] and records one
/// script per source change for the event loop to evaluate.
#[derive(Debug, Default)]
pub struct ScriptedElementHost {
    tree: ElementTree,
    outbox: Vec<String>,
}

impl ScriptedElementHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Takes all scripts recorded since the last call.
    pub fn drain_scripts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }
}

impl ElementHost for ScriptedElementHost {
    fn mount(&mut self, element: NativeElement) {
        self.tree.mount(element);
    }

    fn unmount_all(&mut self) {
        self.tree.unmount_all();
    }

    fn is_mounted(&self, view_type: &str) -> bool {
        self.tree.is_mounted(view_type)
    }

    fn set_source(&mut self, view_type: &str, url: &str) -> bool {
        if !self.tree.set_source(view_type, url) {
            return false;
        }
        // serde_json string encoding doubles as a JS string literal.
        let script = format!(
            "window.__uv_setSource({}, {})",
            serde_json::Value::from(view_type),
            serde_json::Value::from(url)
        );
        self.outbox.push(script);
        true
    }
}
