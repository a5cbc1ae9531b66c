use dioxus::document;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use super::{sidebar_handle, LayoutController, DIVIDER_ID, SIDEBAR_CLASS, SIDEBAR_TOGGLE_ID};

#[component]
pub fn Sidebar() -> Element {
    let mut controller = use_context::<Signal<LayoutController>>();

    rsx! {
        aside {
            class: SIDEBAR_CLASS,
            // The collapsed sidebar reports zero; keep the last real width
            onresize: move |evt| {
                if let Ok(size) = evt.get_border_box_size() {
                    if size.width > 0.0 {
                        controller
                            .write()
                            .host_mut()
                            .record_width(&sidebar_handle(), size.width);
                    }
                }
            },

            div {
                class: "sidebar-header",
                span { class: "sidebar-title", "Files" }
            }
            div {
                class: "sidebar-body",
                p {
                    class: "sidebar-hint",
                    "Drag the divider to resize this panel. Use the round button to collapse it."
                }
            }
        }

        // Glyph is written by the controller
        button {
            id: SIDEBAR_TOGGLE_ID,
            class: "sidebar-toggle",
            title: "Toggle sidebar",
            onclick: move |_| {
                controller.write().toggle_sidebar();
            },
        }

        div {
            id: DIVIDER_ID,
            class: "divider",
            onmousedown: move |evt| {
                if evt.data().trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                evt.prevent_default();
                controller.write().begin_resize(evt.page_coordinates().x);
                if !controller.peek().is_resizing() {
                    return;
                }

                spawn(async move {
                    #[derive(serde::Deserialize)]
                    struct DragMessage {
                        r#type: String,
                        x: Option<f64>,
                    }

                    let mut eval = document::eval(indoc::indoc! {r#"
                        new Promise((resolve) => {
                            const handleMouseMove = (e) => {
                                dioxus.send({ type: 'move', x: e.pageX });
                            };
                            const handleMouseUp = () => {
                                document.removeEventListener('mousemove', handleMouseMove);
                                document.removeEventListener('mouseup', handleMouseUp);
                                dioxus.send({ type: 'end' });
                                resolve();
                            };
                            document.addEventListener('mousemove', handleMouseMove);
                            document.addEventListener('mouseup', handleMouseUp);
                        })
                    "#});

                    while let Ok(msg) = eval.recv::<DragMessage>().await {
                        match (msg.r#type.as_str(), msg.x) {
                            ("move", Some(x)) => controller.write().update_resize(x),
                            ("end", _) => break,
                            _ => {}
                        }
                    }
                    // Also reached when the channel closes mid-drag
                    controller.write().end_resize();
                });
            },
        }
    }
}
