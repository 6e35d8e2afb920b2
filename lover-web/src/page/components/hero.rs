use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use lover_types::{ImageFit, Typewriter};

use crate::interop;

pub const PROFILE_IMAGE_ID: &str = "profile-img";

#[component]
pub fn Hero(
    hero_text: String,
    typing_step_ms: u32,
    profile_source: String,
    on_open_lover: Callback<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut profile_fit = use_signal(ImageFit::default);

    use_effect(move || {
        let text = hero_text.clone();
        spawn(async move {
            for frame in Typewriter::new(text) {
                title.set(frame);
                TimeoutFuture::new(typing_step_ms).await;
            }
        });
    });

    let fit_style = profile_fit().style();

    rsx! {
        header {
            id: "top",
            class: "hero",
            div {
                class: "hero-inner",
                div {
                    class: "hero-copy",
                    h1 { id: "hero-title", class: "hero-title", "{title}" }
                    p { class: "hero-sub", "A little corner of the internet, just for you." }
                    button {
                        id: "open-lover-cta",
                        class: "cta",
                        onclick: move |_| on_open_lover.call(()),
                        "Open Lover 🩷"
                    }
                }
                img {
                    id: PROFILE_IMAGE_ID,
                    class: "profile",
                    src: "{profile_source}",
                    alt: "Ovi",
                    style: "{fit_style}",
                    onload: move |_| {
                        if let Some((width, height)) = interop::image_natural_size(PROFILE_IMAGE_ID) {
                            profile_fit.set(ImageFit::for_natural_size(width, height));
                        }
                    },
                }
            }
        }
    }
}
