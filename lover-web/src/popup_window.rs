use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use lover_types::{DragController, Gallery, ImageFit, Placement, PopupWidget, Size};

use crate::drag::{DragListenerSlot, PopupDrag};
use crate::interop;
use crate::page::actions;

pub const OVERLAY_ID: &str = "lover-overlay";
pub const POPUP_ID: &str = "lover-gui";
pub const HANDLE_ID: &str = "lover-head";
pub const MAIN_IMAGE_ID: &str = "lover-main";

/// Inline placement for a dragged popup, or nothing when the stylesheet's
/// centered layout applies.
///
/// The stored top-left is converted back to a center point so it composes
/// with the `translate(-50%, -50%)` the popup is laid out with.
pub fn placement_style(placement: Option<Placement>, dragging: bool) -> String {
    let mut style = match placement {
        Some(placement) => {
            let center = placement.center();
            format!(
                "position: fixed; left: {}px; top: {}px; transform: translate(-50%, -50%);",
                center.x, center.y
            )
        }
        None => String::new(),
    };
    if dragging {
        style.push_str(" transition: none;");
    }
    style
}

pub fn main_image_style(opacity: f64, fit: ImageFit) -> String {
    format!("opacity: {opacity}; {}", fit.style())
}

#[component]
pub fn LoverPopup(
    popup: Signal<PopupWidget>,
    gallery: Signal<Gallery>,
    viewport: Signal<Size>,
    drag_margin: f64,
) -> Element {
    let controller = use_signal(|| DragController::new(drag_margin));
    let listeners = use_hook(DragListenerSlot::default);
    let mut main_fit = use_signal(ImageFit::default);

    {
        let listeners = listeners.clone();
        use_drop(move || {
            listeners.release();
        });
    }

    let drag = PopupDrag {
        controller,
        popup,
        viewport,
        listeners,
        target_id: POPUP_ID,
    };
    let drag_for_mouse = drag.clone();
    let drag_for_touch = drag.clone();

    let popup_value = popup.read().clone();
    let gallery_value = gallery.read().clone();
    let main = gallery_value.main().clone();

    let overlay_class = if popup_value.overlay_visible() {
        "lover-overlay show"
    } else {
        "lover-overlay"
    };
    let window_style = placement_style(popup_value.placement(), drag.is_active());
    let image_style = main_image_style(main.opacity, main_fit());

    rsx! {
        div {
            id: OVERLAY_ID,
            class: overlay_class,
            "aria-hidden": popup_value.aria_hidden(),
            onclick: move |e| {
                let on_backdrop = e
                    .data()
                    .try_as_web_event()
                    .map(|event| interop::event_target_has_id(&event, OVERLAY_ID))
                    .unwrap_or(false);
                actions::handle_backdrop_click(popup, on_backdrop);
            },

            div {
                id: POPUP_ID,
                class: "lover",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "Lover gallery",
                style: "{window_style}",

                div {
                    id: HANDLE_ID,
                    class: "lover-head",
                    onmousedown: move |e| {
                        if let Some(event) = e.data().try_as_web_event() {
                            drag_for_mouse.begin(&event);
                        }
                    },
                    ontouchstart: move |e| {
                        if let Some(event) = e.data().try_as_web_event() {
                            drag_for_touch.begin(&event);
                        }
                    },

                    span { class: "lover-title", "🩷 Lover" }
                    div {
                        class: "lover-controls",
                        button {
                            id: "minimize-btn",
                            class: "lover-control",
                            title: "Minimize",
                            onclick: move |_| actions::minimize_popup(popup),
                            "–"
                        }
                        button {
                            id: "close-btn",
                            class: "lover-control",
                            title: "Close",
                            onclick: move |_| actions::close_popup(popup),
                            "×"
                        }
                    }
                }

                div {
                    class: "lover-body",
                    img {
                        id: MAIN_IMAGE_ID,
                        class: "lover-main",
                        src: "{main.source}",
                        alt: "Selected photo",
                        style: "{image_style}",
                        onload: move |_| {
                            if let Some((width, height)) = interop::image_natural_size(MAIN_IMAGE_ID) {
                                main_fit.set(ImageFit::for_natural_size(width, height));
                            }
                        },
                    }

                    div {
                        id: "lover-thumbs",
                        class: "lover-thumbs",
                        for (index, thumb) in gallery_value.thumbnails().iter().enumerate() {
                            button {
                                key: "{index}",
                                class: if thumb.active { "thumb active" } else { "thumb" },
                                "data-src": "{thumb.source}",
                                onclick: move |_| actions::select_thumbnail(gallery, index),
                                img { src: "{thumb.source}", alt: "Thumbnail {index}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lover_types::{Point, Size};

    #[test]
    fn no_placement_leaves_stylesheet_layout() {
        assert_eq!(placement_style(None, false), "");
        assert_eq!(placement_style(None, true), " transition: none;");
    }

    #[test]
    fn placement_is_rendered_as_center_point() {
        let placement = Placement::new(Point::new(8.0, 8.0), Size::new(200.0, 150.0));
        let style = placement_style(Some(placement), false);
        assert_eq!(
            style,
            "position: fixed; left: 108px; top: 83px; transform: translate(-50%, -50%);"
        );
    }

    #[test]
    fn dragging_suspends_transition() {
        let placement = Placement::new(Point::new(10.0, 20.0), Size::new(100.0, 100.0));
        assert!(placement_style(Some(placement), true).ends_with("transition: none;"));
    }

    #[test]
    fn main_image_style_combines_opacity_and_fit() {
        assert_eq!(
            main_image_style(0.0, ImageFit::Cover),
            "opacity: 0; object-fit: cover;"
        );
        assert!(main_image_style(1.0, ImageFit::Contain).starts_with("opacity: 1; object-fit: contain;"));
    }
}
