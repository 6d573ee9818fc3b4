//! urlview — a single-window image viewer for images loaded by URL.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod cli;
pub mod ipc_handler;
pub mod managers;
pub mod page;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
