use crate::config::Config;
use crate::host::{
    COLLAPSED_CLASS, CONTENT_FONT_SIZE_PROPERTY, CONTENT_SCALE_PROPERTY, SIDEBAR_WIDTH_PROPERTY,
};
use crate::state::ZoomState;

/// Build the document the webview starts from.
///
/// Root style and body class mirror what the layout controller will write on
/// startup, so the page never renders at 100% or at the stylesheet width
/// before jumping to the restored zoom level and configured sidebar width.
pub fn build_custom_index(config: &Config, zoom: &ZoomState) -> String {
    let level = zoom.level();
    let font_size = zoom.font_size(config.zoom.base_font_size);
    let sidebar_width = config.sidebar.default_width;
    let body_class = if config.sidebar.default_collapsed {
        COLLAPSED_CLASS
    } else {
        ""
    };
    indoc::formatdoc! {r#"
    <!DOCTYPE html>
    <html style="{CONTENT_SCALE_PROPERTY}: {level}; {CONTENT_FONT_SIZE_PROPERTY}: {font_size}px; {SIDEBAR_WIDTH_PROPERTY}: {sidebar_width}px;">
        <head>
            <title>mdview</title>
            <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
            <!-- CUSTOM HEAD -->
        </head>
        <body class="{body_class}">
            <div id="main"></div>
            <!-- MODULE LOADER -->
        </body>
    </html>
    "#}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SidebarConfig;

    #[test]
    fn test_index_carries_restored_zoom() {
        let config = Config::default();
        let zoom = ZoomState::new(1.5, &config.zoom);

        let html = build_custom_index(&config, &zoom);

        assert!(html.contains(r#"<html style="--content-scale: 1.5; --content-font-size: 24px; --sidebar-width: 320px;">"#));
        assert!(html.contains(r#"<body class="">"#));
        assert!(html.contains("<!-- CUSTOM HEAD -->"));
        assert!(html.contains("<!-- MODULE LOADER -->"));
    }

    #[test]
    fn test_index_starts_collapsed_when_configured() {
        let config = Config {
            sidebar: SidebarConfig {
                default_collapsed: true,
                default_width: 250.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let html = build_custom_index(&config, &ZoomState::default());

        assert!(html.contains(r#"<body class="sidebar-collapsed">"#));
        assert!(html.contains("--sidebar-width: 250px;"));
    }
}
