mod components;
mod config;
mod controller;
mod events;
mod host;
mod state;
mod window;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::Config;
use crate::state::{FileStore, KeyValueStore, ZoomState, ZOOM_LEVEL_KEY};

const VERSION: &str = concat!(
    env!("MDVIEW_BUILD_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// mdview — markdown viewer layout shell
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    long_about = "mdview — markdown viewer layout shell\n\n\
        A page with a collapsible, resizable sidebar and a content zoom\n\
        that is remembered across sessions.",
    after_long_help = "Examples:\n\
        \x20 mdview                          Launch with the default configuration\n\
        \x20 mdview --config ./config.json   Use a specific configuration file\n\
        \x20 mdview --reset-zoom             Forget the remembered zoom level"
)]
struct Cli {
    /// Configuration file (defaults to config.json in the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Clear the remembered zoom level before launching
    #[arg(long)]
    reset_zoom: bool,
}

/// Values handed to the root component through launch context
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub config: Config,
    pub store: FileStore,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() {
    // Parse CLI arguments first (before any other initialization)
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    let config_path = cli.config.unwrap_or_else(Config::path);
    let config = Config::load(&config_path);
    tracing::debug!(path = %config_path.display(), ?config, "Loaded configuration");

    let mut store = FileStore::open(FileStore::default_path());
    if cli.reset_zoom {
        match store.remove(ZOOM_LEVEL_KEY) {
            Ok(()) => tracing::info!(
                path = %store.path().display(),
                "Cleared remembered zoom level"
            ),
            Err(e) => tracing::warn!(%e, "Failed to clear remembered zoom level"),
        }
    }

    // Resolve the restored zoom before the window exists so the first paint uses it
    let initial_zoom =
        ZoomState::from_persisted(store.get(ZOOM_LEVEL_KEY).as_deref(), &config.zoom);
    let window_config = window::create_main_window_config(&config, &initial_zoom);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .with_context(ShellContext { config, store })
        .launch(components::main_app::MainApp);
}

fn init_tracing() {
    let silence_filter = tracing_subscriber::filter::filter_fn(|metadata| {
        // Known dioxus noise: https://github.com/DioxusLabs/dioxus/issues/3872
        metadata.target() != "dioxus_core::properties::__component_called_as_function"
    });

    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(silence_filter);

    tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer)
        .init();
}
