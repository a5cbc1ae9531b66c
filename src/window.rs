pub mod index;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::Config as AppConfig;
use crate::state::ZoomState;

/// Stylesheet embedded into the window head
const MAIN_STYLE: &str = include_str!("../assets/main.css");

/// Create the window config for the layout shell.
///
/// `zoom` is the level restored from storage; it is baked into the initial
/// document so the first paint already uses it.
pub fn create_main_window_config(config: &AppConfig, zoom: &ZoomState) -> Config {
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("mdview")
                .with_inner_size(LogicalSize::new(1000, 800)),
        )
        // Add main style in config. Otherwise the style takes time to load and
        // the window appears unstyled for a brief moment.
        .with_custom_head(indoc::formatdoc! {r#"<style>{MAIN_STYLE}</style>"#})
        .with_custom_index(index::build_custom_index(config, zoom))
}
