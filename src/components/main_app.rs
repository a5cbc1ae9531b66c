use dioxus::document;
use dioxus::prelude::*;

use super::content::Content;
use super::header::Header;
use super::sidebar::Sidebar;
use super::{layout_elements, LayoutController};
use crate::controller::UiStateController;
use crate::events::ZoomInput;
use crate::host::{zoom_listener_script, WebviewHost};
use crate::ShellContext;

/// Root component. Owns the layout controller and routes page-wide
/// keyboard and wheel zoom gestures to it.
#[component]
pub fn MainApp() -> Element {
    let shell = use_context::<ShellContext>();

    let mut controller: Signal<LayoutController> = use_context_provider(|| {
        let elements = layout_elements(&shell.config);
        Signal::new(UiStateController::new(
            WebviewHost::new(),
            shell.store.clone(),
            elements,
            shell.config.clone(),
        ))
    });

    // Listen on the window so shortcuts work wherever focus is
    use_future(move || async move {
        let mut eval = document::eval(&zoom_listener_script());

        while let Ok(input) = eval.recv::<ZoomInput>().await {
            let handled = match &input {
                ZoomInput::Key { key, modifiers } => controller.write().handle_key(key, *modifiers),
                ZoomInput::Wheel { delta_y, modifiers } => {
                    controller.write().handle_wheel(*delta_y, *modifiers)
                }
            };
            if !handled {
                tracing::trace!(?input, "Ignoring zoom input");
            }
        }
        tracing::debug!("Zoom listener channel closed");
    });

    rsx! {
        div {
            class: "layout",
            onmounted: move |_| {
                let mut controller = controller.write();
                tracing::debug!(
                    zoom_level = controller.zoom_level(),
                    collapsed = controller.sidebar().collapsed,
                    "Layout mounted, applying state"
                );
                controller.reapply();
            },

            Sidebar {}

            main {
                class: "main",
                Header {}
                Content {}
            }
        }
    }
}
