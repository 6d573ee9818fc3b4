//! WebView-based viewer application using `wry` + `tao`.
//!
//! Architecture:
//! - The viewer page is loaded with `with_html` and renders its display area
//!   on request from Rust (`window.__uv_render`).
//! - IPC from JS → Rust via `window.ipc.postMessage()`, decoded by
//!   [`crate::ipc_handler`].
//! - Scripts and fullscreen changes are posted back through the event loop
//!   proxy and performed on the main thread, where the window lives.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::ipc_handler::{handle_ipc, lock_session, UserEvent, ViewerSession};
use crate::managers::page_controller::PageControllerTrait;
use crate::page::build_page;
use crate::types::viewer::Display;
use crate::ui::document::WindowDocument;

pub fn run(app: App) -> Result<()> {
    let settings = app.settings().clone();
    let start_fullscreen = app.start_fullscreen();

    let placeholder = Display::Placeholder {
        message: settings.general.placeholder_text.clone(),
    };
    let html = build_page(&settings, &placeholder.to_html());

    let session = Arc::new(Mutex::new(ViewerSession::new(app)));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&settings.window.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            settings.window.width,
            settings.window.height,
        ))
        .build(&event_loop)
        .context("Failed to create window")?;

    let ipc_session = session.clone();
    let builder = WebViewBuilder::new()
        .with_html(html)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let preview = body.char_indices().nth(200).map_or(body, |(i, _)| &body[..i]);
            debug!("[IPC] {}", preview);
            let events = match lock_session(&ipc_session, "IPC message") {
                Some(mut s) => handle_ipc(&mut s, body),
                None => return,
            };
            for event in events {
                if proxy.send_event(event).is_err() {
                    debug!("Event loop closed; dropping event");
                }
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| anyhow!("Failed to get GTK vbox"))?;
        builder.build_gtk(vbox).context("Failed to create WebView")?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).context("Failed to create WebView")?;

    if start_fullscreen {
        if let Some(s) = lock_session(&session, "startup fullscreen request") {
            s.app.page_controller.enter_fullscreen(&WindowDocument::new(&window));
        }
    }

    info!("Window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Closing");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!("Script evaluation failed: {}", e);
                }
            }

            Event::UserEvent(UserEvent::Fullscreen(request)) => {
                if let Some(s) = lock_session(&session, "fullscreen request") {
                    s.app
                        .page_controller
                        .handle_fullscreen(request, &WindowDocument::new(&window));
                }
            }

            _ => {}
        }
    })
}
