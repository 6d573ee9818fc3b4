// urlview services
// Services provide capabilities the managers depend on: settings persistence and the host document.

pub mod document;
pub mod settings_engine;
