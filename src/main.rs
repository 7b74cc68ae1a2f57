#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{Theme, FORM_RELAY_URL};

const DEFAULT_WINDOW_WIDTH: f64 = 1180.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 860.0;

/// Startup configuration resolved once from command-line arguments.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Theme the page opens with.
    pub theme: Theme,
    /// Logical window width; also decides the cursor overlay gate.
    pub window_width: f64,
    pub window_height: f64,
    /// Form-relay endpoint the contact section posts to.
    pub relay_endpoint: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            relay_endpoint: FORM_RELAY_URL.to_string(),
        }
    }
}

/// Global startup config, set once in main before launch
static STARTUP: OnceLock<StartupConfig> = OnceLock::new();

/// Get the startup configuration (CLI values or defaults).
pub fn startup_config() -> StartupConfig {
    STARTUP.get().cloned().unwrap_or_default()
}

/// Folio - animated single-page portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - an animated single-page portfolio")]
struct Args {
    /// Initial color theme (light or dark)
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,

    /// Override the contact form relay endpoint
    #[arg(long)]
    relay_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let startup = StartupConfig {
        theme: args.theme.unwrap_or_default(),
        window_width: args.width.unwrap_or(DEFAULT_WINDOW_WIDTH),
        window_height: args.height.unwrap_or(DEFAULT_WINDOW_HEIGHT),
        relay_endpoint: args.relay_url.unwrap_or_else(|| FORM_RELAY_URL.to_string()),
    };

    tracing::info!(
        theme = %startup.theme,
        width = startup.window_width,
        height = startup.window_height,
        "Starting Folio"
    );

    let _ = STARTUP.set(startup.clone());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{} - Portfolio", folio_core::content::OWNER_NAME))
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                startup.window_width,
                startup.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
