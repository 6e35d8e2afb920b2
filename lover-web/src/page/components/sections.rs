use dioxus::prelude::*;

use crate::interop::current_year;

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section {
            id: "about",
            class: "section",
            h2 { "About" }
            p {
                "Every photo here is a small moment worth keeping. Open the Lover window, \
                 drag it wherever you like, and pick a favourite."
            }
        }
    }
}

#[component]
pub fn MomentsSection(moments: Vec<String>) -> Element {
    rsx! {
        section {
            id: "moments",
            class: "section",
            h2 { "Moments" }
            div {
                class: "grid",
                for (index, source) in moments.iter().enumerate() {
                    figure {
                        key: "{index}",
                        class: "moment",
                        img { src: "{source}", alt: "Moment {index}", loading: "lazy" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer {
            class: "footer",
            "Made with 🩷 · "
            span { id: "year", "{year}" }
        }
    }
}
