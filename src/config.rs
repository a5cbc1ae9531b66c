mod app_config;

pub use app_config::{Config, SidebarConfig, ZoomConfig, DEFAULT_ZOOM_LEVEL};

use anyhow::Context as _;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the configuration file path (config.json in the config directory)
    pub fn path() -> PathBuf {
        const FILENAME: &str = "config.json";
        if let Some(mut path) = dirs::config_dir() {
            path.push("mdview");
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".mdview");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing file is not an error. An unreadable or malformed file is
    /// logged and replaced by the default configuration.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => config.normalized(),
            Err(e) => {
                tracing::error!(path = %path.display(), "{e:#}");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Repair inconsistent bounds so the controller can rely on `min <= max`.
    pub fn normalized(mut self) -> Self {
        self.sidebar = self.sidebar.normalized();
        self.zoom = self.zoom.normalized();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "sidebar": { "minWidth": 220.0, "maxWidth": 520.0 } }"#).unwrap();

        let config = Config::load(&path);

        assert_eq!(config.sidebar.min_width, 220.0);
        assert_eq!(config.sidebar.max_width, 520.0);
        assert_eq!(config.sidebar.default_width, 320.0);
        assert_eq!(config.zoom, ZoomConfig::default());
    }

    #[test]
    fn test_load_malformed_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_load_swaps_inverted_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "zoom": { "minZoomLevel": 1.6, "maxZoomLevel": 0.8 } }"#,
        )
        .unwrap();

        let config = Config::load(&path);

        assert_eq!(config.zoom.min_zoom_level, 0.8);
        assert_eq!(config.zoom.max_zoom_level, 1.6);
    }
}
