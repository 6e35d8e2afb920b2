use chrono::Datelike;
use lover_types::{primary_point, PageConfig, Point, Rect, Size};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, MouseEvent, TouchEvent};

/// Inline `<script type="application/json">` element holding page overrides.
pub const PAGE_CONFIG_ELEMENT_ID: &str = "page-config";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Get the browser viewport dimensions in CSS pixels.
pub fn current_viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some(Size::new(width, height));
    }

    let root = window.document()?.document_element()?;
    Some(Size::new(
        root.client_width().max(0) as f64,
        root.client_height().max(0) as f64,
    ))
}

/// Bounding box of the element with `id`, in viewport coordinates.
pub fn element_rect(id: &str) -> Option<Rect> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Client coordinates of a mouse or touch event. Touch events report their
/// first touch; an event without touches (e.g. `touchend`) has no point.
pub fn event_point(event: &web_sys::Event) -> Option<Point> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let list = touch_event.touches();
        let touches: Vec<Point> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
            .collect();
        return primary_point(&touches, None);
    }

    let mouse = event
        .dyn_ref::<MouseEvent>()
        .map(|m| Point::new(m.client_x() as f64, m.client_y() as f64));
    primary_point(&[], mouse)
}

/// True when the event was dispatched on the element with `id` itself, not
/// on one of its descendants.
pub fn event_target_has_id(event: &web_sys::Event, id: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.id() == id)
        .unwrap_or(false)
}

/// True when the event started on a button (window controls inside the handle).
pub fn event_target_is_control(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.closest("button").ok().flatten().is_some())
        .unwrap_or(false)
}

/// Focus the first thumbnail or button inside the container. Does nothing if
/// the container or a focusable child is missing.
pub fn focus_first_interactive(container_id: &str) -> Option<()> {
    let target = element_by_id(container_id)?
        .query_selector(".thumb, button")
        .ok()??;
    target.dyn_into::<HtmlElement>().ok()?.focus().ok()
}

/// Natural pixel size of a loaded `img`. `None` when the element is missing
/// or is not an image.
pub fn image_natural_size(id: &str) -> Option<(u32, u32)> {
    let image = element_by_id(id)?.dyn_into::<HtmlImageElement>().ok()?;
    Some((image.natural_width(), image.natural_height()))
}

/// Page configuration from the optional inline JSON element, falling back to
/// defaults when it is absent or invalid.
pub fn load_page_config() -> PageConfig {
    let Some(raw) = element_by_id(PAGE_CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        dioxus_logger::tracing::debug!("No #{} element, using default page config", PAGE_CONFIG_ELEMENT_ID);
        return PageConfig::default();
    };

    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            dioxus_logger::tracing::warn!("Ignoring page config: {}", e);
            PageConfig::default()
        }
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
