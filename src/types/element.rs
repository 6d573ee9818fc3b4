use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A platform-rendered element hosted inside the page's display area.
///
/// The element is described on the Rust side and rendered into the WebView as
/// an HTML fragment. `view_type` is the logical name used to find it again once
/// it is mounted; `view_id` identifies one instance and has no behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NativeElement {
    pub view_type: String,
    pub view_id: String,
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub style: Vec<(String, String)>,
}

impl NativeElement {
    pub fn new(tag: &str, view_type: &str, view_id: &str) -> Self {
        Self {
            view_type: view_type.to_string(),
            view_id: view_id.to_string(),
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            style: Vec::new(),
        }
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.style.push((property.to_string(), value.to_string()));
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// Current `src` attribute, if one has been assigned.
    pub fn source(&self) -> Option<&str> {
        self.attribute("src")
    }

    /// Inline CSS declaration list, e.g. `width:100%;height:100%`.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Renders the element as an HTML fragment.
    ///
    /// The logical name and instance id are emitted as `data-view-type` and
    /// `data-view-id` so the page can look the element up and report its mount.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(128);
        html.push('<');
        html.push_str(&self.tag);
        push_attr(&mut html, "data-view-type", &self.view_type);
        push_attr(&mut html, "data-view-id", &self.view_id);
        for (name, value) in &self.attributes {
            push_attr(&mut html, name, value);
        }
        if !self.style.is_empty() {
            push_attr(&mut html, "style", &self.style_text());
        }
        if is_void_element(&self.tag) {
            html.push('>');
        } else {
            html.push_str("></");
            html.push_str(&self.tag);
            html.push('>');
        }
        html
    }
}

fn push_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attr(value));
    html.push('"');
}

fn is_void_element(tag: &str) -> bool {
    matches!(tag, "img" | "input" | "br" | "hr" | "source")
}

/// Escapes a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
