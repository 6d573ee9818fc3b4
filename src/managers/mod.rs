// urlview state managers
// Managers own the viewer's runtime state: registered views, mounted elements, and the page controller.

pub mod element_host;
pub mod page_controller;
pub mod view_registry;
