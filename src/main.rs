//! urlview — view an image from a URL, with fullscreen on double-click.
//!
//! Entry point: opens the viewer window. With `--print-page`, or when built
//! without the `gui` feature, writes the assembled page to stdout instead.

use anyhow::Result;
use log::info;

use urlview::app::App;
use urlview::cli;
use urlview::page;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = cli::parse_args();
    let mut app = App::new(options.config.clone());
    app.startup(&options);

    if options.print_page || !cfg!(feature = "gui") {
        info!("Printing page to stdout");
        println!("{}", page::render_static_page(&app)?);
        return Ok(());
    }

    run_gui(app)
}

#[cfg(feature = "gui")]
fn run_gui(app: App) -> Result<()> {
    urlview::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_app: App) -> Result<()> {
    Ok(())
}
