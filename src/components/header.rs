use dioxus::prelude::*;

use super::{zoom_button_handle, LayoutController, ZOOM_BUTTONS, ZOOM_LABEL_CLASS};

#[component]
pub fn Header() -> Element {
    let mut controller = use_context::<Signal<LayoutController>>();
    let show_zoom_controls = controller.peek().config().zoom.show_controls;

    rsx! {
        div {
            class: "header",

            span { class: "header-title", "Markdown viewer" }

            if show_zoom_controls {
                div {
                    class: "zoom-controls",
                    for (id, dir, caption) in ZOOM_BUTTONS {
                        button {
                            key: "{id}",
                            id: id,
                            class: "zoom-btn",
                            "data-dir": dir,
                            onclick: move |_| {
                                controller.write().activate_zoom_button(&zoom_button_handle(id));
                            },
                            "{caption}"
                        }
                    }
                    // Percentage is written by the controller
                    span { class: ZOOM_LABEL_CLASS }
                }
            }
        }
    }
}
