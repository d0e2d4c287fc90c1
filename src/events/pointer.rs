use crate::gallery::{self, Gallery};
use crate::listener::EventListener;
use crate::skills::SkillsBoard;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trail placement on pointer movement over the gallery container.
pub fn wire_trail_pointer(target: &web::EventTarget, gallery: Weak<RefCell<Gallery>>) -> EventListener {
    EventListener::new(target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(g) = gallery.upgrade() else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        g.borrow_mut()
            .on_pointer_move(client, gallery::event_movement(ev));
    })
}

/// Pointer down/move/up driving the board's drag constraint.
///
/// Only pointer events are handled here. Wheel input over the canvas is left
/// alone so it reaches the page-level smooth scroll like anywhere else;
/// `drag` is held while a capsule is grabbed so touch moves do not scroll.
pub fn wire_board_pointer(
    skills: &Rc<RefCell<SkillsBoard>>,
    drag: &Rc<Cell<bool>>,
) -> Vec<EventListener> {
    let canvas = skills.borrow().canvas.clone();
    let target: &web::EventTarget = canvas.as_ref();
    let mut out = Vec::with_capacity(4);

    let s = Rc::downgrade(skills);
    let held = drag.clone();
    out.push(EventListener::new(target, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(s) = s.upgrade() else {
            return;
        };
        let mut s = s.borrow_mut();
        let p = s.local_point(ev.client_x() as f64, ev.client_y() as f64);
        if let Some(i) = s.board.pointer_down(p) {
            log::debug!("[skills] grab body {}", i);
            _ = s.canvas.set_pointer_capture(ev.pointer_id());
        }
        held.set(s.board.grabbed().is_some());
    }));

    let s = Rc::downgrade(skills);
    out.push(EventListener::new(target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(s) = s.upgrade() else {
            return;
        };
        let mut s = s.borrow_mut();
        if s.board.grabbed().is_some() {
            let p = s.local_point(ev.client_x() as f64, ev.client_y() as f64);
            s.board.pointer_move(p);
        }
    }));

    for kind in ["pointerup", "pointercancel"] {
        let s = Rc::downgrade(skills);
        let held = drag.clone();
        out.push(EventListener::new(target, kind, move |ev: web::Event| {
            held.set(false);
            let Some(s) = s.upgrade() else {
                return;
            };
            let mut s = s.borrow_mut();
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                _ = s.canvas.release_pointer_capture(ev.pointer_id());
            }
            s.board.pointer_up();
        }));
    }
    out
}
