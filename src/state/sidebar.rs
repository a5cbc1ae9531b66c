use crate::config::SidebarConfig;

/// Collapse state and remembered width of the sidebar.
///
/// `width_px` starts at the configured default width. When set it always lies
/// within the configured bounds, including while collapsed, so expanding can
/// restore it verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub width_px: Option<f64>,
}

impl SidebarState {
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            collapsed: config.default_collapsed,
            width_px: Some(clamp_width(config.default_width, config)),
        }
    }

    /// Collapse the sidebar, remembering `rendered_width` when available.
    pub fn collapse(&mut self, rendered_width: Option<f64>, config: &SidebarConfig) {
        if let Some(width) = rendered_width.filter(|w| w.is_finite()) {
            self.width_px = Some(clamp_width(width, config));
        }
        self.collapsed = true;
    }

    /// Expand the sidebar and return the width to restore, if any.
    pub fn expand(&mut self) -> Option<f64> {
        self.collapsed = false;
        self.width_px
    }

    /// Store a dragged width and return the clamped value that was stored.
    pub fn set_width(&mut self, width: f64, config: &SidebarConfig) -> f64 {
        let clamped = clamp_width(width, config);
        self.width_px = Some(clamped);
        clamped
    }
}

/// An in-progress divider drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub start_x: f64,
    pub start_width: f64,
}

impl ResizeSession {
    /// Width the sidebar would have with the pointer at `pointer_x`, before clamping
    pub fn candidate_width(&self, pointer_x: f64) -> f64 {
        self.start_width + (pointer_x - self.start_x)
    }
}

pub(crate) fn clamp_width(width: f64, config: &SidebarConfig) -> f64 {
    if width.is_nan() {
        return config.default_width;
    }
    width.clamp(config.min_width, config.max_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_default() {
        let sidebar = SidebarState::default();

        assert!(!sidebar.collapsed);
        assert_eq!(sidebar.width_px, None);
    }

    #[test]
    fn test_new_starts_at_default_width() {
        let config = SidebarConfig {
            default_collapsed: true,
            default_width: 250.0,
            ..Default::default()
        };

        let sidebar = SidebarState::new(&config);

        assert!(sidebar.collapsed);
        assert_eq!(sidebar.width_px, Some(250.0));
    }

    #[test]
    fn test_new_clamps_default_width() {
        let config = SidebarConfig {
            default_width: 900.0,
            ..Default::default()
        };

        assert_eq!(SidebarState::new(&config).width_px, Some(config.max_width));
    }

    #[test]
    fn test_collapse_then_expand_restores_width() {
        let config = SidebarConfig::default();
        let mut sidebar = SidebarState::default();

        sidebar.collapse(Some(320.0), &config);
        assert!(sidebar.collapsed);

        assert_eq!(sidebar.expand(), Some(320.0));
        assert!(!sidebar.collapsed);
    }

    #[test]
    fn test_collapse_without_measurement_keeps_previous_width() {
        let config = SidebarConfig::default();
        let mut sidebar = SidebarState::default();
        sidebar.set_width(250.0, &config);

        sidebar.collapse(None, &config);

        assert_eq!(sidebar.expand(), Some(250.0));
    }

    #[test]
    fn test_collapse_clamps_out_of_range_measurement() {
        let config = SidebarConfig::default();
        let mut sidebar = SidebarState::default();

        sidebar.collapse(Some(2000.0), &config);

        assert_eq!(sidebar.width_px, Some(config.max_width));
    }

    #[test]
    fn test_set_width_clamps_to_bounds() {
        let config = SidebarConfig::default();
        let mut sidebar = SidebarState::default();

        assert_eq!(sidebar.set_width(10.0, &config), 180.0);
        assert_eq!(sidebar.set_width(10_000.0, &config), 500.0);
        assert_eq!(sidebar.set_width(f64::NAN, &config), config.default_width);
        assert_eq!(sidebar.set_width(333.0, &config), 333.0);
        assert_eq!(sidebar.width_px, Some(333.0));
    }

    #[test]
    fn test_resize_session_candidate_width() {
        let session = ResizeSession {
            start_x: 320.0,
            start_width: 320.0,
        };

        assert_eq!(session.candidate_width(400.0), 400.0);
        assert_eq!(session.candidate_width(-180.0), -180.0);
    }
}
