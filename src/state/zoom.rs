use crate::config::{ZoomConfig, DEFAULT_ZOOM_LEVEL};

/// Content zoom multiplier applied to the base font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    level: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM_LEVEL,
        }
    }
}

/// Clamp a zoom level to the configured range and snap it to two decimals.
///
/// Non-finite input maps to 100%. Snapping keeps repeated `+0.1` steps on
/// exact values (1.3 rather than 1.3000000000000003).
fn normalize_zoom_level(level: f64, config: &ZoomConfig) -> f64 {
    if level.is_nan() || level.is_infinite() {
        return DEFAULT_ZOOM_LEVEL;
    }
    let clamped = level.clamp(config.min_zoom_level, config.max_zoom_level);
    let snapped = (clamped * 100.0).round() / 100.0;
    // Snapping may step just outside a bound that is not a multiple of 0.01
    snapped.clamp(config.min_zoom_level, config.max_zoom_level)
}

impl ZoomState {
    pub fn new(level: f64, config: &ZoomConfig) -> Self {
        Self {
            level: normalize_zoom_level(level, config),
        }
    }

    /// Restore the level from its persisted decimal string.
    ///
    /// Absent or unparsable values fall back to 100%.
    pub fn from_persisted(raw: Option<&str>, config: &ZoomConfig) -> Self {
        let level = match raw.map(|s| s.trim().parse::<f64>()) {
            Some(Ok(level)) => level,
            Some(Err(e)) => {
                tracing::warn!(?raw, %e, "Unparsable persisted zoom level, using 100%");
                DEFAULT_ZOOM_LEVEL
            }
            None => DEFAULT_ZOOM_LEVEL,
        };
        Self::new(level, config)
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// Shift the level by `delta` and return the new level.
    pub fn change(&mut self, delta: f64, config: &ZoomConfig) -> f64 {
        self.level = normalize_zoom_level(self.level + delta, config);
        self.level
    }

    pub fn reset(&mut self) {
        self.level = DEFAULT_ZOOM_LEVEL;
    }

    /// Decimal representation written to durable storage
    pub fn to_persisted(&self) -> String {
        self.level.to_string()
    }

    /// Percentage label, e.g. "130%"
    pub fn label(&self) -> String {
        format!("{}%", (self.level * 100.0).round() as i64)
    }

    /// Content font size in pixels for the given base size
    pub fn font_size(&self, base_font_size: f64) -> f64 {
        base_font_size * self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_default() {
        let zoom = ZoomState::default();
        assert_eq!(zoom.level(), 1.0);
        assert_eq!(zoom.label(), "100%");
    }

    #[test]
    fn test_change_three_steps_lands_on_exact_value() {
        let config = ZoomConfig::default();
        let mut zoom = ZoomState::default();

        for _ in 0..3 {
            zoom.change(0.1, &config);
        }

        assert_eq!(zoom.level(), 1.3);
        assert_eq!(zoom.label(), "130%");
    }

    #[test]
    fn test_change_stays_within_bounds() {
        let config = ZoomConfig::default();
        let mut zoom = ZoomState::default();

        for _ in 0..50 {
            zoom.change(0.1, &config);
            assert!(zoom.level() <= config.max_zoom_level);
        }
        assert_eq!(zoom.level(), config.max_zoom_level);

        for _ in 0..50 {
            zoom.change(-0.3, &config);
            assert!(zoom.level() >= config.min_zoom_level);
        }
        assert_eq!(zoom.level(), config.min_zoom_level);
    }

    #[test]
    fn test_reset_returns_to_one() {
        let config = ZoomConfig::default();
        let mut zoom = ZoomState::new(1.7, &config);

        zoom.reset();

        assert_eq!(zoom.level(), 1.0);
    }

    #[test]
    fn test_from_persisted() {
        let config = ZoomConfig::default();

        assert_eq!(ZoomState::from_persisted(Some("1.3"), &config).level(), 1.3);
        assert_eq!(ZoomState::from_persisted(Some(" 0.9\n"), &config).level(), 0.9);
        assert_eq!(ZoomState::from_persisted(None, &config).level(), 1.0);
        assert_eq!(
            ZoomState::from_persisted(Some("not-a-number"), &config).level(),
            1.0
        );
        assert_eq!(ZoomState::from_persisted(Some("NaN"), &config).level(), 1.0);
        assert_eq!(ZoomState::from_persisted(Some("inf"), &config).level(), 1.0);
        // Out of range values are clamped defensively
        assert_eq!(ZoomState::from_persisted(Some("9"), &config).level(), 2.0);
    }

    #[test]
    fn test_persisted_roundtrip() {
        let config = ZoomConfig::default();
        let mut zoom = ZoomState::default();
        zoom.change(-0.2, &config);

        let restored = ZoomState::from_persisted(Some(&zoom.to_persisted()), &config);

        assert_eq!(restored, zoom);
    }

    #[test]
    fn test_font_size() {
        let config = ZoomConfig::default();
        let zoom = ZoomState::new(1.5, &config);
        assert_eq!(zoom.font_size(16.0), 24.0);
    }
}
