use serde::{Deserialize, Serialize};

mod sidebar_config;
mod zoom_config;

pub use sidebar_config::SidebarConfig;
pub use zoom_config::{ZoomConfig, DEFAULT_ZOOM_LEVEL};

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub sidebar: SidebarConfig,
    pub zoom: ZoomConfig,
}
