use crate::constants::{NAV_LINK_CLASS, WHEEL_LINE_PX, WHEEL_PAGE_FRACTION};
use crate::dom;
use crate::input::{self, TouchState};
use crate::listener::EventListener;
use folio_core::content::Anchor;
use folio_core::scroll::SmoothScroll;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll target for an anchor, or `None` when its section is missing.
pub fn anchor_target(window: &web::Window, document: &web::Document, anchor: Anchor) -> Option<f64> {
    let el = document.get_element_by_id(anchor.id())?;
    let (top, _) = dom::client_box(&el);
    Some(input::anchor_offset(top, dom::scroll_y(window)))
}

/// Wheel, touch and native scroll events feeding the smooth-scroll state.
/// Touch moves are ignored while `board_drag` is set.
pub fn wire_scroll_input(
    window: &web::Window,
    scroll: &Rc<RefCell<SmoothScroll>>,
    board_drag: &Rc<Cell<bool>>,
) -> Vec<EventListener> {
    let target: &web::EventTarget = window.as_ref();
    let mut out = Vec::with_capacity(4);

    let s = scroll.clone();
    let w = window.clone();
    out.push(EventListener::new_active(target, "wheel", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        if ev.ctrl_key() {
            // Pinch zoom.
            return;
        }
        let (_, vh) = dom::viewport(&w);
        let delta = input::wheel_delta_px(
            ev.delta_y(),
            ev.delta_mode(),
            WHEEL_LINE_PX,
            vh * WHEEL_PAGE_FRACTION,
        );
        let mut s = s.borrow_mut();
        if s.is_destroyed() {
            return;
        }
        ev.prevent_default();
        s.on_wheel(delta);
    }));

    let touch = Rc::new(RefCell::new(TouchState::default()));
    let t = touch.clone();
    out.push(EventListener::new(target, "touchstart", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
            t.borrow_mut().last_y = ev.touches().get(0).map(|p| p.client_y() as f64);
        }
    }));

    let s = scroll.clone();
    let t = touch;
    let drag = board_drag.clone();
    out.push(EventListener::new_active(target, "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(y) = ev.touches().get(0).map(|p| p.client_y() as f64) else {
            return;
        };
        let Some(delta) = input::touch_scroll_delta(&mut t.borrow_mut(), y, drag.get()) else {
            return;
        };
        let mut s = s.borrow_mut();
        if s.is_destroyed() {
            return;
        }
        ev.prevent_default();
        s.on_touch(delta);
    }));

    let s = scroll.clone();
    let w = window.clone();
    out.push(EventListener::new(target, "scroll", move |_| {
        if let Ok(mut s) = s.try_borrow_mut() {
            s.sync_native(dom::scroll_y(&w));
        }
    }));
    out
}

/// Delegated click handler: in-page anchors animate instead of jumping.
pub fn wire_anchor_links(
    window: &web::Window,
    document: &web::Document,
    scroll: &Rc<RefCell<SmoothScroll>>,
) -> EventListener {
    let s = scroll.clone();
    let w = window.clone();
    let d = document.clone();
    EventListener::new_active(document.as_ref(), "click", move |ev: web::Event| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        // Menu links schedule their own scroll after the menu closes.
        if link.class_list().contains(NAV_LINK_CLASS) {
            return;
        }
        let Some(anchor) = link.get_attribute("href").and_then(|h| Anchor::from_href(&h)) else {
            return;
        };
        let Some(offset) = anchor_target(&w, &d, anchor) else {
            log::warn!("[scroll] anchor #{} not found", anchor.id());
            return;
        };
        ev.prevent_default();
        log::debug!("[scroll] anchor #{} -> {:.0}", anchor.id(), offset);
        s.borrow_mut().scroll_to(offset);
    })
}
