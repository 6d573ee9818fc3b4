//! Viewer page assembly.
//!
//! The whole UI is one HTML document: a URL bar, the display area, and a
//! floating fullscreen control. Styles and script are inlined so the page can
//! be served without a custom protocol.

use serde_json::json;

use crate::app::App;
use crate::managers::element_host::{ElementHost, ElementTree};
use crate::managers::page_controller::PageControllerTrait;
use crate::types::element::escape_attr;
use crate::types::errors::ViewError;
use crate::types::settings::ViewerSettings;
use crate::types::viewer::Display;

const VIEWER_CSS: &str = include_str!("../resources/ui/viewer.css");
const VIEWER_JS: &str = include_str!("../resources/ui/viewer.js");

/// Configuration the page script reads from `window.__uv_config`.
pub fn page_config(settings: &ViewerSettings) -> serde_json::Value {
    json!({
        "shortcuts": {
            "toggle_fullscreen": settings.shortcuts.toggle_fullscreen,
            "exit_fullscreen": settings.shortcuts.exit_fullscreen,
        }
    })
}

/// Serializes `value` for embedding inside a `<script>` element.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Builds the complete viewer page with `display_html` as the initial
/// content of the display area.
pub fn build_page(settings: &ViewerSettings, display_html: &str) -> String {
    let title = escape_attr(&settings.window.title);
    let background = escape_attr(&settings.window.background);
    let config = script_json(&page_config(settings));

    let mut html = String::with_capacity(
        VIEWER_CSS.len() + VIEWER_JS.len() + display_html.len() + config.len() + 1500,
    );
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">");
    html.push_str("<title>");
    html.push_str(&title);
    html.push_str("</title><style>:root{--bg:");
    html.push_str(&background);
    html.push_str("}");
    html.push_str(VIEWER_CSS);
    html.push_str("</style></head><body>");
    html.push_str(
        "<form id=\"url-form\" class=\"url-bar\" autocomplete=\"off\">\
         <input id=\"url-input\" type=\"text\" placeholder=\"https://example.com/image.png\" autofocus>\
         <button type=\"submit\">Load</button></form>",
    );
    html.push_str("<div id=\"display\">");
    html.push_str(display_html);
    html.push_str("</div>");
    html.push_str(
        "<div id=\"fab\" class=\"fab\">\
         <button id=\"fab-main\" class=\"fab-main\" title=\"Fullscreen\">+</button>\
         <button id=\"fab-enter\" class=\"fab-action\">Enter fullscreen</button>\
         <button id=\"fab-exit\" class=\"fab-action\">Exit fullscreen</button></div>",
    );
    html.push_str("<script>window.__uv_config=");
    html.push_str(&config);
    html.push_str(";</script><script>");
    html.push_str(VIEWER_JS);
    html.push_str("</script></body></html>");
    html
}

/// Renders the display area as it looks once the embedded element is
/// mounted and has received its source. Used for headless output.
pub fn render_static_display(app: &App) -> Result<String, ViewError> {
    let controller = &app.page_controller;
    match controller.build_display(&app.view_registry)? {
        Display::Embedded { element } => {
            let view_type = element.view_type.clone();
            let mut tree = ElementTree::new();
            tree.mount(element);
            controller.view_mounted(&mut tree, &view_type);
            Ok(tree.get(&view_type).map(|el| el.to_html()).unwrap_or_default())
        }
        placeholder => Ok(placeholder.to_html()),
    }
}

/// The full page with its display pre-rendered.
pub fn render_static_page(app: &App) -> Result<String, ViewError> {
    Ok(build_page(app.settings(), &render_static_display(app)?))
}
