use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use lover_types::{Gallery, PopupEffect, PopupWidget, Transition};
use wasm_bindgen_futures::spawn_local;

use crate::interop::focus_first_interactive;
use crate::popup_window::POPUP_ID;

// These run from Dioxus handlers and from raw document listeners alike, so
// deferred work goes through `spawn_local` rather than a component scope.

fn after_transition(transition: Transition) {
    if transition.changed() {
        dioxus_logger::tracing::debug!(
            "popup {:?} -> {:?}",
            transition.from,
            transition.to
        );
    }

    if let Some(PopupEffect::ScheduleFocus { delay_ms }) = transition.effect {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if focus_first_interactive(POPUP_ID).is_none() {
                dioxus_logger::tracing::debug!("Nothing focusable in #{}", POPUP_ID);
            }
        });
    }
}

pub fn open_popup(mut popup: Signal<PopupWidget>) {
    let transition = popup.write().open();
    after_transition(transition);
}

pub fn close_popup(mut popup: Signal<PopupWidget>) {
    let transition = popup.write().close();
    after_transition(transition);
}

pub fn minimize_popup(mut popup: Signal<PopupWidget>) {
    let transition = popup.write().minimize();
    after_transition(transition);
}

pub fn restore_popup(mut popup: Signal<PopupWidget>) {
    let transition = popup.write().restore();
    after_transition(transition);
}

pub fn handle_key(mut popup: Signal<PopupWidget>, key: &str) {
    let transition = popup.write().handle_key(key);
    after_transition(transition);
}

pub fn handle_backdrop_click(mut popup: Signal<PopupWidget>, target_is_backdrop: bool) {
    let transition = popup.write().handle_backdrop_click(target_is_backdrop);
    after_transition(transition);
}

/// Select a thumbnail and finish the main image fade after its delay.
pub fn select_thumbnail(mut gallery: Signal<Gallery>, index: usize) {
    let Some(swap) = gallery.write().select(index) else {
        return;
    };

    spawn_local(async move {
        TimeoutFuture::new(swap.delay_ms).await;
        if !gallery.write().complete_swap(&swap) {
            dioxus_logger::tracing::debug!("Dropped superseded swap to {}", swap.source);
        }
    });
}
