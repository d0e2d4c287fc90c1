use crate::input;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element by id, cast to `T`.
pub fn element<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Optional variant of [`element`]; a missing target is only logged.
pub fn find<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    match element::<T>(document, id) {
        Ok(el) => Some(el),
        Err(e) => {
            log::debug!("[dom] {}", e);
            None
        }
    }
}

/// All matches of `selector` under `root`, in document order.
pub fn select_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn show(el: &web::HtmlElement, visible: bool) {
    set_style(el, "display", if visible { "" } else { "none" });
}

/// Viewport size in CSS pixels.
pub fn viewport(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Largest scroll offset the document allows.
pub fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, vh) = viewport(window);
    (content - vh).max(0.0)
}

/// `(client_top, height)` of an element's bounding box.
pub fn client_box(el: &web::Element) -> (f64, f64) {
    let r = el.get_bounding_client_rect();
    (r.top(), r.height())
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = input::backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        set_style(&body, "cursor", cursor);
    }
}
