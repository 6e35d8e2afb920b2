use dioxus::prelude::*;

pub const MINI_PREVIEW_ID: &str = "lover-mini";

/// Small restore affordance shown while the popup is minimized.
#[component]
pub fn MiniPreview(visible: bool, source: String, on_restore: Callback<()>) -> Element {
    let display = if visible { "block" } else { "none" };

    rsx! {
        div {
            id: MINI_PREVIEW_ID,
            class: "lover-mini",
            role: "button",
            tabindex: "0",
            title: "Restore",
            style: "display: {display};",
            onclick: move |_| on_restore.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Enter || e.key() == Key::Character(" ".to_string()) {
                    on_restore.call(());
                }
            },
            img { src: "{source}", alt: "Minimized lover" }
            span { "Lover 🩷" }
        }
    }
}
