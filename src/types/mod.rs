// urlview shared type definitions
// Each submodule defines types used across the application.

pub mod element;
pub mod errors;
pub mod settings;
pub mod viewer;
