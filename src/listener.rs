//! Handles that tie a browser subscription to a Rust value's lifetime.
//!
//! Dropping a handle removes the listener or clears the timer, so a rebuild
//! only has to drop the previous set.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    /// Passive listener; cannot cancel the event.
    pub fn new<F>(target: &web::EventTarget, kind: &'static str, f: F) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(target, kind, true, f)
    }

    /// Listener that may call `prevent_default`.
    pub fn new_active<F>(target: &web::EventTarget, kind: &'static str, f: F) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(target, kind, false, f)
    }

    fn with_passive<F>(target: &web::EventTarget, kind: &'static str, passive: bool, f: F) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[listener] add {} failed: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// One-shot `setTimeout`.
pub struct Timeout {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(millis: u32, f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let closure = Closure::once(f);
        let id = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis.min(i32::MAX as u32) as i32,
            )
            .ok()
        });
        if id.is_none() {
            log::warn!("[listener] setTimeout({}) failed", millis);
        }
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.id, web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }
}

/// Recurring `setInterval`.
pub struct Interval {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F>(millis: u32, f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = web::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis.min(i32::MAX as u32) as i32,
            )
            .ok()
        });
        if id.is_none() {
            log::warn!("[listener] setInterval({}) failed", millis);
        }
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.id, web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}
