use dioxus::document;
use std::collections::HashMap;

use super::{ElementHandle, StyleHost};
use crate::events::ZOOM_KEYS;

/// [`StyleHost`] that forwards every write to the webview as a script.
///
/// Widths cannot be read back synchronously from the webview, so components
/// report them through [`WebviewHost::record_width`] (from `onresize`) and
/// the host answers from that cache.
#[derive(Debug, Default)]
pub struct WebviewHost {
    measured_widths: HashMap<ElementHandle, f64>,
}

impl WebviewHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_width(&mut self, element: &ElementHandle, width: f64) {
        self.measured_widths.insert(element.clone(), width);
    }

    fn run(script: &str) {
        tracing::trace!(script, "Evaluating style script");
        let _ = document::eval(script);
    }
}

/// Encode a Rust string as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Script that intercepts zoom shortcuts and modifier+wheel anywhere in the
/// window, before the webview's own zoom sees them.
///
/// Matching events have their default suppressed and are forwarded as
/// [`ZoomInput`](crate::events::ZoomInput) messages. The script never
/// resolves, so the channel stays open for the window's lifetime.
pub fn zoom_listener_script() -> String {
    let keys = serde_json::Value::from(ZOOM_KEYS.to_vec()).to_string();
    indoc::formatdoc! {r#"
        const zoomKeys = new Set({keys});
        window.addEventListener('keydown', (e) => {{
            if (!(e.ctrlKey || e.metaKey) || !zoomKeys.has(e.key)) {{
                return;
            }}
            e.preventDefault();
            dioxus.send({{ type: 'key', key: e.key, ctrl: e.ctrlKey, meta: e.metaKey }});
        }}, {{ capture: true }});
        window.addEventListener('wheel', (e) => {{
            if (!(e.ctrlKey || e.metaKey) || e.deltaY === 0) {{
                return;
            }}
            e.preventDefault();
            dioxus.send({{ type: 'wheel', deltaY: e.deltaY, ctrl: e.ctrlKey, meta: e.metaKey }});
        }}, {{ capture: true, passive: false }});
        await new Promise(() => {{}});
    "#}
}

impl StyleHost for WebviewHost {
    fn set_root_property(&mut self, name: &str, value: &str) {
        Self::run(&format!(
            "document.documentElement.style.setProperty({}, {});",
            js_string(name),
            js_string(value),
        ));
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        Self::run(&format!(
            "document.body.classList.toggle({}, {enabled});",
            js_string(class),
        ));
    }

    fn set_text(&mut self, element: &ElementHandle, text: &str) {
        Self::run(&indoc::formatdoc! {r#"
            (() => {{
                const el = document.querySelector({selector});
                if (el) {{
                    el.textContent = {text};
                }}
            }})();
        "#,
            selector = js_string(element.selector()),
            text = js_string(text),
        });
    }

    fn rendered_width(&self, element: &ElementHandle) -> Option<f64> {
        self.measured_widths.get(element).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("--sidebar-width"), r#""--sidebar-width""#);
        assert_eq!(js_string(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(js_string("◀"), "\"◀\"");
    }

    #[test]
    fn test_zoom_listener_script_filters_shortcut_keys() {
        let script = zoom_listener_script();

        assert!(script.contains(r#"new Set(["+","=","-","_","0"])"#));
        assert!(script.contains("passive: false"));
        assert_eq!(script.matches("e.preventDefault();").count(), 2);
    }

    #[test]
    fn test_record_width() {
        let sidebar = ElementHandle::new(".sidebar");
        let mut host = WebviewHost::new();
        assert_eq!(host.rendered_width(&sidebar), None);

        host.record_width(&sidebar, 312.5);
        assert_eq!(host.rendered_width(&sidebar), Some(312.5));
    }
}
