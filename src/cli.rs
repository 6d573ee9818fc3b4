// Command line interface module
// Parses launch arguments into session-only overrides.

use std::path::PathBuf;

use clap::Parser;

/// urlview - view an image from a URL, fullscreen on double-click
#[derive(Parser, Debug)]
#[command(name = "urlview")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image URL to display at startup
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Start in fullscreen mode
    #[arg(short, long, default_value = "false")]
    pub fullscreen: bool,

    /// Use this settings file instead of the platform default
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the assembled page HTML to stdout and exit
    #[arg(long, default_value = "false")]
    pub print_page: bool,
}

/// Resolved launch options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub url: Option<String>,
    pub fullscreen: bool,
    pub config: Option<PathBuf>,
    pub print_page: bool,
}

impl From<Args> for LaunchOptions {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            fullscreen: args.fullscreen,
            config: args.config,
            print_page: args.print_page,
        }
    }
}

/// Parse the process arguments.
pub fn parse_args() -> LaunchOptions {
    Args::parse().into()
}
