use serde::{Deserialize, Serialize};

/// Default sidebar width in pixels
pub const DEFAULT_SIDEBAR_WIDTH: f64 = 320.0;

/// Minimum width the sidebar can be dragged to
pub const MIN_SIDEBAR_WIDTH: f64 = 180.0;

/// Maximum width the sidebar can be dragged to
pub const MAX_SIDEBAR_WIDTH: f64 = 500.0;

/// Configuration for sidebar-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidebarConfig {
    /// Whether the sidebar starts collapsed
    pub default_collapsed: bool,
    /// Width used as the drag baseline before the sidebar was ever measured
    pub default_width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_collapsed: false,
            default_width: DEFAULT_SIDEBAR_WIDTH,
            min_width: MIN_SIDEBAR_WIDTH,
            max_width: MAX_SIDEBAR_WIDTH,
        }
    }
}

impl SidebarConfig {
    pub(crate) fn normalized(mut self) -> Self {
        if !self.min_width.is_finite() || !self.max_width.is_finite() {
            tracing::warn!(
                min_width = self.min_width,
                max_width = self.max_width,
                "Non-finite sidebar bounds, using defaults"
            );
            self.min_width = MIN_SIDEBAR_WIDTH;
            self.max_width = MAX_SIDEBAR_WIDTH;
        }
        if self.min_width > self.max_width {
            tracing::warn!(
                min_width = self.min_width,
                max_width = self.max_width,
                "Sidebar minWidth exceeds maxWidth, swapping"
            );
            std::mem::swap(&mut self.min_width, &mut self.max_width);
        }
        if !self.default_width.is_finite() {
            self.default_width = DEFAULT_SIDEBAR_WIDTH;
        }
        self.default_width = self.default_width.clamp(self.min_width, self.max_width);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_clamps_default_width() {
        let config = SidebarConfig {
            default_width: 900.0,
            ..Default::default()
        }
        .normalized();

        assert_eq!(config.default_width, MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_normalized_replaces_non_finite_bounds() {
        let config = SidebarConfig {
            min_width: f64::NAN,
            ..Default::default()
        }
        .normalized();

        assert_eq!(config.min_width, MIN_SIDEBAR_WIDTH);
        assert_eq!(config.max_width, MAX_SIDEBAR_WIDTH);
    }
}
