use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use lover_types::{PopupWidget, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::interop::{current_viewport_size, document};
use crate::page::actions;

/// Elements that fade in once scrolled into view.
const REVEAL_SELECTOR: &str = ".section, .grid, .hero-inner";
const REVEAL_CLASS: &str = "reveal";

pub fn track_viewport(mut viewport: Signal<Size>) {
    if let Some(size) = current_viewport_size() {
        viewport.set(size);
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(size) = current_viewport_size() {
            viewport.set(size);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

/// Pull a dragged popup back inside a shrunken viewport. Only writes when
/// the placement actually moves, so an unchanged popup does not re-render.
pub fn reclamp_on_resize(viewport: Size, mut popup: Signal<PopupWidget>, margin: f64) {
    let stale = popup
        .peek()
        .placement()
        .is_some_and(|placement| placement.clamped_to(viewport, margin) != placement);
    if stale && popup.write().reclamp(viewport, margin) {
        dioxus_logger::tracing::debug!(
            "Re-clamped popup to {}x{} viewport",
            viewport.width,
            viewport.height
        );
    }
}

/// Escape closes the popup from anywhere on the page.
pub fn install_escape_listener(popup: Signal<PopupWidget>) {
    let Some(document) = document() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            actions::handle_key(popup, &key_event.key());
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if document
        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .is_err()
    {
        dioxus_logger::tracing::warn!("Failed to install Escape listener");
        return;
    }

    callback.forget();
}

/// Add the reveal class to sections as they intersect the viewport.
/// Browsers without IntersectionObserver simply never reveal.
pub fn observe_reveal(threshold: f64) {
    let Some(document) = document() else {
        return;
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEAL_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                dioxus_logger::tracing::debug!("Reveal disabled: {:?}", e);
                return;
            }
        };

    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    callback.forget();
}
