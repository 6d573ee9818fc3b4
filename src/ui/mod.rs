//! urlview UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering inside a `tao` window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The viewer page is HTML/CSS/JS inside the WebView. The page talks to the
//! Rust side through wry IPC; fullscreen is applied to the native window.

pub mod document;
pub mod webview_app;
