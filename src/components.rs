pub mod content;
pub mod header;
pub mod main_app;
pub mod sidebar;

use crate::config::Config;
use crate::controller::UiStateController;
use crate::host::{ElementHandle, LayoutElements, WebviewHost, ZoomButton};
use crate::state::FileStore;

/// The controller as it lives inside the webview, shared through context
pub type LayoutController = UiStateController<WebviewHost, FileStore>;

pub const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";
pub const DIVIDER_ID: &str = "divider";
pub const SIDEBAR_CLASS: &str = "sidebar";
pub const ZOOM_LABEL_CLASS: &str = "zoom-label";

/// Zoom buttons rendered by the header: (element id, data-dir, caption)
pub const ZOOM_BUTTONS: [(&str, &str, &str); 2] =
    [("zoom-out", "-", "A-"), ("zoom-in", "+", "A+")];

pub fn sidebar_handle() -> ElementHandle {
    ElementHandle::new(format!(".{SIDEBAR_CLASS}"))
}

pub fn zoom_button_handle(id: &str) -> ElementHandle {
    ElementHandle::new(format!("#{id}"))
}

/// Collect the handles of the elements this shell renders.
///
/// Zoom buttons and the label only exist when the header shows zoom controls.
pub fn layout_elements(config: &Config) -> LayoutElements {
    let (zoom_buttons, zoom_label) = if config.zoom.show_controls {
        let buttons = ZOOM_BUTTONS
            .iter()
            .filter_map(|(id, dir, _)| ZoomButton::from_attr(zoom_button_handle(id), dir))
            .collect();
        let label = ElementHandle::new(format!(".{ZOOM_LABEL_CLASS}"));
        (buttons, Some(label))
    } else {
        (Vec::new(), None)
    };

    LayoutElements {
        toggle: Some(ElementHandle::new(format!("#{SIDEBAR_TOGGLE_ID}"))),
        divider: Some(ElementHandle::new(format!("#{DIVIDER_ID}"))),
        sidebar: Some(sidebar_handle()),
        zoom_buttons,
        zoom_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoomConfig;
    use crate::host::ZoomDirection;

    #[test]
    fn test_layout_elements_with_zoom_controls() {
        let elements = layout_elements(&Config::default());

        assert_eq!(elements.toggle, Some(ElementHandle::new("#sidebar-toggle")));
        assert_eq!(elements.divider, Some(ElementHandle::new("#divider")));
        assert_eq!(elements.sidebar, Some(ElementHandle::new(".sidebar")));
        assert_eq!(elements.zoom_label, Some(ElementHandle::new(".zoom-label")));
        assert_eq!(
            elements
                .zoom_buttons
                .iter()
                .map(|b| (b.handle.selector(), b.direction))
                .collect::<Vec<_>>(),
            vec![("#zoom-out", ZoomDirection::Out), ("#zoom-in", ZoomDirection::In)]
        );
    }

    #[test]
    fn test_layout_elements_without_zoom_controls() {
        let config = Config {
            zoom: ZoomConfig {
                show_controls: false,
                ..Default::default()
            },
            ..Default::default()
        };

        let elements = layout_elements(&config);

        assert!(elements.zoom_buttons.is_empty());
        assert_eq!(elements.zoom_label, None);
        assert!(elements.toggle.is_some());
    }
}
