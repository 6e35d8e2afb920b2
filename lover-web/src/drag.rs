use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use lover_types::{DragController, PopupWidget, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Event};

use crate::interop;

const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

type Listener = Closure<dyn FnMut(Event)>;

/// Document-level move/end listeners for one drag session. Removed on drop.
pub struct DocumentDragListeners {
    document: Document,
    on_move: Listener,
    on_end: Listener,
}

impl DocumentDragListeners {
    pub fn attach(document: Document, on_move: Listener, on_end: Listener) -> Result<Self, JsValue> {
        let listeners = Self {
            document,
            on_move,
            on_end,
        };

        // touchmove must be non-passive so the page does not scroll mid-drag.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for name in MOVE_EVENTS {
            listeners
                .document
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    listeners.on_move.as_ref().unchecked_ref(),
                    &options,
                )?;
        }
        for name in END_EVENTS {
            listeners
                .document
                .add_event_listener_with_callback(name, listeners.on_end.as_ref().unchecked_ref())?;
        }

        Ok(listeners)
    }
}

impl Drop for DocumentDragListeners {
    fn drop(&mut self) {
        for name in MOVE_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, self.on_move.as_ref().unchecked_ref());
        }
        for name in END_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, self.on_end.as_ref().unchecked_ref());
        }
    }
}

/// Holds the listeners of the running session, if any.
#[derive(Clone, Default)]
pub struct DragListenerSlot(Rc<RefCell<Option<DocumentDragListeners>>>);

impl DragListenerSlot {
    pub fn install(&self, listeners: DocumentDragListeners) {
        *self.0.borrow_mut() = Some(listeners);
    }

    /// Detach the current listeners. Returns whether any were attached.
    pub fn release(&self) -> bool {
        // Dropping from inside the end handler is fine: wasm-bindgen frees an
        // invoked closure only after its call returns.
        let listeners = self.0.borrow_mut().take();
        listeners.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Binds the drag controller to the popup element and the document.
///
/// Only writes the popup placement; visibility stays with the popup state
/// machine. A session outliving a close keeps moving the hidden popup until
/// its own pointer-up, which still tears the listeners down.
#[derive(Clone)]
pub struct PopupDrag {
    pub controller: Signal<DragController>,
    pub popup: Signal<PopupWidget>,
    pub viewport: Signal<Size>,
    pub listeners: DragListenerSlot,
    pub target_id: &'static str,
}

impl PopupDrag {
    pub fn is_active(&self) -> bool {
        self.controller.read().is_active()
    }

    /// Handle pointer-down on the drag handle.
    pub fn begin(&self, event: &Event) {
        if interop::event_target_is_control(event) {
            return;
        }
        let Some(document) = interop::document() else {
            return;
        };
        let Some(rect) = interop::element_rect(self.target_id) else {
            dioxus_logger::tracing::debug!("Drag target #{} missing", self.target_id);
            return;
        };
        let Some(point) = interop::event_point(event) else {
            return;
        };

        let mut controller = self.controller;
        if !controller.write().begin(point, rect) {
            return;
        }

        let on_move = {
            let drag = self.clone();
            Closure::wrap(Box::new(move |e: Event| drag.follow(&e)) as Box<dyn FnMut(Event)>)
        };
        let on_end = {
            let drag = self.clone();
            Closure::wrap(Box::new(move |_e: Event| drag.end()) as Box<dyn FnMut(Event)>)
        };

        match DocumentDragListeners::attach(document, on_move, on_end) {
            Ok(listeners) => self.listeners.install(listeners),
            Err(e) => {
                dioxus_logger::tracing::warn!("Failed to attach drag listeners: {:?}", e);
                controller.write().end();
            }
        }
    }

    fn follow(&self, event: &Event) {
        if !self.controller.peek().is_active() {
            return;
        }
        event.prevent_default();

        let Some(point) = interop::event_point(event) else {
            return;
        };
        let Some(rect) = interop::element_rect(self.target_id) else {
            return;
        };
        let viewport = *self.viewport.peek();

        let placement = self
            .controller
            .peek()
            .continue_drag(point, rect.size(), viewport);
        if let Some(placement) = placement {
            let mut popup = self.popup;
            popup.write().move_to(placement);
        }
    }

    /// Finish the session. Safe to call with no session running.
    pub fn end(&self) {
        let mut controller = self.controller;
        controller.write().end();
        self.listeners.release();
    }
}
