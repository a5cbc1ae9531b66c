//! Boundary between the layout controller and the page it styles.
//!
//! The controller never touches the page directly. It writes custom
//! properties, body classes and element text through a [`StyleHost`], and it
//! addresses elements through [`ElementHandle`]s collected once in
//! [`LayoutElements`].

mod webview;

pub use webview::{zoom_listener_script, WebviewHost};

use std::fmt;
use std::str::FromStr;

/// CSS custom property holding the sidebar width in pixels
pub const SIDEBAR_WIDTH_PROPERTY: &str = "--sidebar-width";
/// CSS custom property holding the bare zoom multiplier
pub const CONTENT_SCALE_PROPERTY: &str = "--content-scale";
/// CSS custom property holding the zoomed content font size in pixels
pub const CONTENT_FONT_SIZE_PROPERTY: &str = "--content-font-size";

/// Body class present while the sidebar is collapsed
pub const COLLAPSED_CLASS: &str = "sidebar-collapsed";
/// Body class present while the divider is being dragged
pub const RESIZING_CLASS: &str = "resizing";

/// Glyph shown on the toggle while the sidebar is collapsed
pub const COLLAPSED_GLYPH: &str = "◀";
/// Glyph shown on the toggle while the sidebar is expanded
pub const EXPANDED_GLYPH: &str = "▶";

/// A CSS selector identifying one element of the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn selector(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction annotated on a zoom button (`data-dir`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zoom direction {0:?}")]
pub struct UnknownZoomDirection(pub String);

impl FromStr for ZoomDirection {
    type Err = UnknownZoomDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(ZoomDirection::In),
            "-" => Ok(ZoomDirection::Out),
            other => Err(UnknownZoomDirection(other.to_string())),
        }
    }
}

/// A zoom button together with its parsed direction.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomButton {
    pub handle: ElementHandle,
    pub direction: ZoomDirection,
}

impl ZoomButton {
    /// Build a button from its `data-dir` attribute.
    ///
    /// Buttons with an unrecognized direction are dropped.
    pub fn from_attr(handle: ElementHandle, dir: &str) -> Option<Self> {
        match dir.parse() {
            Ok(direction) => Some(Self { handle, direction }),
            Err(e) => {
                tracing::warn!(%handle, "{e}, ignoring zoom button");
                None
            }
        }
    }
}

/// The page elements the controller drives. Every affordance is optional and
/// becomes inert when its element is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutElements {
    pub toggle: Option<ElementHandle>,
    pub divider: Option<ElementHandle>,
    pub sidebar: Option<ElementHandle>,
    pub zoom_buttons: Vec<ZoomButton>,
    pub zoom_label: Option<ElementHandle>,
}

/// Write access to the page's visual style.
pub trait StyleHost {
    /// Set a custom property on the document root
    fn set_root_property(&mut self, name: &str, value: &str);

    /// Add or remove a class on the document body
    fn set_body_class(&mut self, class: &str, enabled: bool);

    /// Replace the text content of an element
    fn set_text(&mut self, element: &ElementHandle, text: &str);

    /// Last known rendered width of an element, if it has been measured
    fn rendered_width(&self, element: &ElementHandle) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_direction_parse() {
        assert_eq!("+".parse(), Ok(ZoomDirection::In));
        assert_eq!(" - ".parse(), Ok(ZoomDirection::Out));
        assert_eq!(
            "x".parse::<ZoomDirection>(),
            Err(UnknownZoomDirection("x".to_string()))
        );
    }

    #[test]
    fn test_zoom_button_from_attr() {
        let handle = ElementHandle::new("#zoom-in");
        let button = ZoomButton::from_attr(handle.clone(), "+").unwrap();
        assert_eq!(button.handle, handle);
        assert_eq!(button.direction, ZoomDirection::In);

        assert_eq!(ZoomButton::from_attr(handle, "*"), None);
    }
}
