use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::loop_slot::LoopSlot;
use crate::overlay::SideMenu;
use crate::preloader::PreloaderOverlay;
use crate::sections::Sections;
use crate::skills::SkillsBoard;
use folio_core::scroll::SmoothScroll;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything advanced once per animation frame.
pub struct FrameContext {
    pub window: web::Window,
    pub scroll: Rc<RefCell<SmoothScroll>>,
    pub sections: Rc<RefCell<Sections>>,
    pub skills: Option<Rc<RefCell<SkillsBoard>>>,
    pub menu: Option<Rc<RefCell<SideMenu>>>,
    pub preloader: Option<Rc<RefCell<PreloaderOverlay>>>,
    pub epoch: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        scroll: Rc<RefCell<SmoothScroll>>,
        sections: Rc<RefCell<Sections>>,
    ) -> Self {
        let now = Instant::now();
        Self {
            window,
            scroll,
            sections,
            skills: None,
            menu: None,
            preloader: None,
            epoch: now,
            last_instant: now,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let t = (now - self.epoch).as_secs_f64();

        let scroll_y = {
            let mut s = self.scroll.borrow_mut();
            if let Some(y) = s.raf(t) {
                self.window.scroll_to_with_x_and_y(0.0, y);
            }
            s.offset()
        };

        self.sections.borrow_mut().update(scroll_y, dt_sec);

        if let Some(skills) = &self.skills {
            skills.borrow_mut().frame(dt_sec);
        }
        if let Some(menu) = &self.menu {
            let (_, vh) = dom::viewport(&self.window);
            menu.borrow_mut().frame(scroll_y, vh);
        }
        let preloader_gone = match &self.preloader {
            Some(p) => {
                let mut p = p.borrow_mut();
                p.frame();
                !p.is_mounted()
            }
            None => false,
        };
        if preloader_gone {
            self.preloader = None;
        }
    }
}

/// Owns the RAF callback. Dropping it cancels the queued frame and frees
/// the callback along with the `FrameContext` it captured.
pub struct FrameLoop {
    slot: LoopSlot<Closure<dyn FnMut()>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.slot.release()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let slot: LoopSlot<Closure<dyn FnMut()>> = LoopSlot::default();
    let tick_slot = slot.clone();
    slot.set(Closure::wrap(Box::new(move || {
        if !tick_slot.is_running() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        tick_slot.request(request_frame);
    }) as Box<dyn FnMut()>));
    slot.request(request_frame);
    FrameLoop { slot }
}
