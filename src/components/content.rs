use dioxus::prelude::*;

#[component]
pub fn Content() -> Element {
    // Font size follows --content-font-size, see main.css
    rsx! {
        div {
            class: "content",
            h2 { "Welcome" }
            p {
                "This is a simple Markdown viewer for your "
                code { ".md" }
                " files."
            }
            hr {}
            p {
                "The left side can be collapsed with the round button on its edge. "
                "The A-/A+ buttons adjust only text size, without changing the layout."
            }
            p {
                "Keyboard: Ctrl/Cmd with + or - to zoom, Ctrl/Cmd+0 to reset. "
                "Ctrl/Cmd with the mouse wheel zooms as well."
            }
        }
    }
}
