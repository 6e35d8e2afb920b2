//! Browser tests for the DOM helpers. Run with `wasm-pack test --headless --firefox lover-web`.
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lover_types::{PopupState, PopupWidget};
use lover_web::{
    event_point, event_target_has_id, focus_first_interactive, image_natural_size,
    load_page_config, DocumentDragListeners, DragListenerSlot,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> web_sys::Element {
    let host = document().create_element("div").unwrap();
    host.set_inner_html(html);
    document().body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn mouse_event_point_uses_client_coordinates() {
    let init = MouseEventInit::new();
    init.set_client_x(40);
    init.set_client_y(25);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();

    let point = event_point(&event).unwrap();
    assert_eq!((point.x, point.y), (40.0, 25.0));
}

#[wasm_bindgen_test]
fn backdrop_check_rejects_descendants() {
    let host = mount(r#"<div id="test-backdrop"><div id="test-content"></div></div>"#);
    let hits = Rc::new(Cell::new((false, false)));

    let backdrop = document().get_element_by_id("test-backdrop").unwrap();
    let content = document().get_element_by_id("test-content").unwrap();

    let recorder = {
        let hits = hits.clone();
        Closure::wrap(Box::new(move |e: Event| {
            let on_backdrop = event_target_has_id(&e, "test-backdrop");
            let (first, _) = hits.get();
            hits.set((first || on_backdrop, !on_backdrop));
        }) as Box<dyn FnMut(Event)>)
    };
    backdrop
        .add_event_listener_with_callback("click", recorder.as_ref().unchecked_ref())
        .unwrap();

    content.unchecked_ref::<HtmlElement>().click();
    assert_eq!(hits.get(), (false, true));

    backdrop.unchecked_ref::<HtmlElement>().click();
    assert_eq!(hits.get(), (true, false));

    host.remove();
}

#[wasm_bindgen_test]
fn focus_lands_on_first_thumb() {
    let host = mount(
        r#"<div id="test-popup"><p>title</p><button class="thumb" id="first-thumb">a</button><button>b</button></div>"#,
    );

    assert!(focus_first_interactive("test-popup").is_some());
    let active = document().active_element().unwrap();
    assert_eq!(active.id(), "first-thumb");

    host.remove();
}

#[wasm_bindgen_test]
fn focus_without_candidates_is_silent() {
    let host = mount(r#"<div id="test-empty"><p>nothing here</p></div>"#);
    assert!(focus_first_interactive("test-empty").is_none());
    assert!(focus_first_interactive("does-not-exist").is_none());
    host.remove();
}

#[wasm_bindgen_test]
fn natural_size_needs_an_image() {
    let host = mount(r#"<div id="not-an-image"></div>"#);
    assert!(image_natural_size("not-an-image").is_none());
    assert!(image_natural_size("missing-image").is_none());
    host.remove();
}

#[wasm_bindgen_test]
fn missing_config_element_gives_defaults() {
    let config = load_page_config();
    assert_eq!(config.drag_margin, 8.0);
    assert!(!config.thumbnails.is_empty());
}

fn dispatch(name: &str) {
    document()
        .dispatch_event(&Event::new(name).unwrap())
        .unwrap();
}

fn counter(count: &Rc<Cell<u32>>) -> Closure<dyn FnMut(Event)> {
    let count = count.clone();
    Closure::wrap(Box::new(move |_e: Event| count.set(count.get() + 1)) as Box<dyn FnMut(Event)>)
}

#[wasm_bindgen_test]
fn drag_listeners_detach_on_drop() {
    let moves = Rc::new(Cell::new(0u32));
    let ends = Rc::new(Cell::new(0u32));

    let listeners =
        DocumentDragListeners::attach(document(), counter(&moves), counter(&ends)).unwrap();
    dispatch("mousemove");
    assert_eq!(moves.get(), 1);

    // A cancelled touch gesture ends the session like a lift does.
    dispatch("touchcancel");
    assert_eq!(ends.get(), 1);

    drop(listeners);
    dispatch("mousemove");
    dispatch("touchcancel");
    assert_eq!((moves.get(), ends.get()), (1, 1));
}

#[wasm_bindgen_test]
fn escape_mid_drag_leaves_session_until_pointer_up() {
    let popup = Rc::new(RefCell::new(PopupWidget::default()));
    popup.borrow_mut().open();

    let slot = DragListenerSlot::default();
    let moves = Rc::new(Cell::new(0u32));
    let on_end = {
        let slot = slot.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            slot.release();
        }) as Box<dyn FnMut(Event)>)
    };
    slot.install(DocumentDragListeners::attach(document(), counter(&moves), on_end).unwrap());

    let on_key = {
        let popup = popup.clone();
        Closure::wrap(Box::new(move |e: Event| {
            if let Some(key_event) = e.dyn_ref::<KeyboardEvent>() {
                popup.borrow_mut().handle_key(&key_event.key());
            }
        }) as Box<dyn FnMut(Event)>)
    };
    document()
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .unwrap();

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&escape).unwrap();

    assert_eq!(popup.borrow().state(), PopupState::Closed);
    assert!(slot.is_attached());
    dispatch("mousemove");
    assert_eq!(moves.get(), 1);

    dispatch("mouseup");
    assert!(!slot.is_attached());
    dispatch("mousemove");
    assert_eq!(moves.get(), 1);

    document()
        .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .unwrap();
}
