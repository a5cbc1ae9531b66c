use serde::{Deserialize, Serialize};

/// Zoom level every page starts from and returns to on reset (1.0 = 100%)
pub const DEFAULT_ZOOM_LEVEL: f64 = 1.0;

/// Minimum content zoom level
pub const MIN_ZOOM_LEVEL: f64 = 0.5;

/// Maximum content zoom level
pub const MAX_ZOOM_LEVEL: f64 = 2.0;

/// Zoom step for buttons, shortcuts and wheel gestures (0.1 increments)
pub const ZOOM_STEP: f64 = 0.1;

/// Content font size in pixels at 100% zoom
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Configuration for content zoom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomConfig {
    /// Whether the header renders the A-/A+ buttons and the percentage label
    pub show_controls: bool,
    pub min_zoom_level: f64,
    pub max_zoom_level: f64,
    pub zoom_step: f64,
    pub base_font_size: f64,
}

// Manual Default because f64's default is 0.0
impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            show_controls: true,
            min_zoom_level: MIN_ZOOM_LEVEL,
            max_zoom_level: MAX_ZOOM_LEVEL,
            zoom_step: ZOOM_STEP,
            base_font_size: BASE_FONT_SIZE,
        }
    }
}

impl ZoomConfig {
    pub(crate) fn normalized(mut self) -> Self {
        if !self.min_zoom_level.is_finite() || !self.max_zoom_level.is_finite() {
            tracing::warn!(
                min_zoom_level = self.min_zoom_level,
                max_zoom_level = self.max_zoom_level,
                "Non-finite zoom bounds, using defaults"
            );
            self.min_zoom_level = MIN_ZOOM_LEVEL;
            self.max_zoom_level = MAX_ZOOM_LEVEL;
        }
        if self.min_zoom_level > self.max_zoom_level {
            tracing::warn!(
                min_zoom_level = self.min_zoom_level,
                max_zoom_level = self.max_zoom_level,
                "Zoom minZoomLevel exceeds maxZoomLevel, swapping"
            );
            std::mem::swap(&mut self.min_zoom_level, &mut self.max_zoom_level);
        }
        // Reset must always land inside the range
        if self.min_zoom_level > DEFAULT_ZOOM_LEVEL || self.max_zoom_level < DEFAULT_ZOOM_LEVEL {
            tracing::warn!(
                min_zoom_level = self.min_zoom_level,
                max_zoom_level = self.max_zoom_level,
                "Zoom range excludes 100%, widening"
            );
            self.min_zoom_level = self.min_zoom_level.min(DEFAULT_ZOOM_LEVEL);
            self.max_zoom_level = self.max_zoom_level.max(DEFAULT_ZOOM_LEVEL);
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            self.zoom_step = ZOOM_STEP;
        }
        if !(self.base_font_size.is_finite() && self.base_font_size > 0.0) {
            self.base_font_size = BASE_FONT_SIZE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_rejects_non_positive_step() {
        let config = ZoomConfig {
            zoom_step: -0.1,
            base_font_size: 0.0,
            ..Default::default()
        }
        .normalized();

        assert_eq!(config.zoom_step, ZOOM_STEP);
        assert_eq!(config.base_font_size, BASE_FONT_SIZE);
    }

    #[test]
    fn test_normalized_widens_range_to_include_default() {
        let config = ZoomConfig {
            min_zoom_level: 1.2,
            max_zoom_level: 1.8,
            ..Default::default()
        }
        .normalized();

        assert_eq!(config.min_zoom_level, DEFAULT_ZOOM_LEVEL);
        assert_eq!(config.max_zoom_level, 1.8);
    }
}
