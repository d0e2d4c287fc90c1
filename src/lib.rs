#![cfg(target_arch = "wasm32")]
use crate::frame::{FrameContext, FrameLoop};
use crate::gallery::Gallery;
use crate::listener::EventListener;
use crate::overlay::SideMenu;
use crate::preloader::PreloaderOverlay;
use crate::sections::Sections;
use crate::skills::SkillsBoard;
use anyhow::anyhow;
use folio_core::content::SiteContent;
use folio_core::layout::LayoutProfile;
use folio_core::scroll::{SmoothScroll, SmoothScrollConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;
mod listener;
mod loop_slot;
mod overlay;
mod preloader;
mod render;
mod sections;
mod skills;

type GallerySlot = Rc<RefCell<Option<Rc<RefCell<Gallery>>>>>;

/// Layout-dependent parts rebuilt on resize or device-class change.
#[derive(Clone)]
struct LayoutWiring {
    window: web::Window,
    document: web::Document,
    profile: Rc<Cell<LayoutProfile>>,
    scroll: Rc<RefCell<SmoothScroll>>,
    sections: Rc<RefCell<Sections>>,
    gallery: GallerySlot,
    skills: Option<Rc<RefCell<SkillsBoard>>>,
    menu: Option<Rc<RefCell<SideMenu>>>,
}

impl LayoutWiring {
    fn on_resize(&self) {
        let (vw, vh) = dom::viewport(&self.window);
        let profile = LayoutProfile::from_width(vw);
        let previous = self.profile.get();
        if profile != previous {
            log::info!(
                "[mount] layout profile {} -> {}",
                previous.name(),
                profile.name()
            );
            self.profile.set(profile);
            // Old gallery goes first so its interval and listeners are gone
            // before the new variant wires its own.
            if let Some(old) = self.gallery.borrow_mut().take() {
                old.borrow_mut().teardown();
            }
            *self.gallery.borrow_mut() = Gallery::mount(&self.document, profile);
            *self.sections.borrow_mut() = Sections::mount(&self.document, profile);
        }
        let y = dom::scroll_y(&self.window);
        self.sections.borrow_mut().measure(&self.window, y);
        self.scroll
            .borrow_mut()
            .set_limit(dom::scroll_limit(&self.window, &self.document));
        if let Some(s) = &self.skills {
            s.borrow_mut().resize();
        }
        if let Some(m) = &self.menu {
            m.borrow_mut().resize(vh);
        }
    }
}

/// Root-owned state; dropping it releases every subscription.
struct Mount {
    scroll: Rc<RefCell<SmoothScroll>>,
    layout: LayoutWiring,
    preloader: Option<Rc<RefCell<PreloaderOverlay>>>,
    listeners: Vec<EventListener>,
    frame_loop: Option<FrameLoop>,
}

impl Mount {
    fn teardown(mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        if let Some(p) = self.preloader.take() {
            p.borrow_mut().teardown();
        }
        if let Some(m) = &self.layout.menu {
            m.borrow_mut().teardown();
        }
        self.scroll.borrow_mut().destroy();
        if let Some(g) = self.layout.gallery.borrow_mut().take() {
            g.borrow_mut().teardown();
        }
        if let Some(s) = &self.layout.skills {
            s.borrow_mut().teardown();
        }
        log::info!("[mount] torn down");
    }
}

thread_local! {
    static MOUNT: RefCell<Option<Mount>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop and remove every listener and timer.
#[wasm_bindgen]
pub fn teardown() {
    let mount = MOUNT.with(|m| m.borrow_mut().take());
    if let Some(m) = mount {
        m.teardown();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let content = SiteContent::default();

    let (vw, _) = dom::viewport(&window);
    let profile = LayoutProfile::from_width(vw);
    log::info!("[mount] layout profile {} ({}px)", profile.name(), vw);

    let scroll = Rc::new(RefCell::new(SmoothScroll::new(
        SmoothScrollConfig::default(),
        dom::scroll_y(&window),
        dom::scroll_limit(&window, &document),
    )));
    let board_drag = Rc::new(Cell::new(false));
    let mut listeners = events::wire_scroll_input(&window, &scroll, &board_drag);
    listeners.push(events::wire_anchor_links(&window, &document, &scroll));

    let sections = Rc::new(RefCell::new(Sections::mount(&document, profile)));
    let gallery: GallerySlot = Rc::new(RefCell::new(Gallery::mount(&document, profile)));

    let skills = match SkillsBoard::mount(&document, &content) {
        Ok(s) => {
            let s = Rc::new(RefCell::new(s));
            listeners.extend(events::wire_board_pointer(&s, &board_drag));
            Some(s)
        }
        Err(e) => {
            log::warn!("[skills] board disabled: {:#}", e);
            None
        }
    };

    let menu = match SideMenu::mount(&window, &document, &scroll) {
        Ok(m) => {
            listeners.push(events::wire_menu_keys(&window, &m));
            Some(m)
        }
        Err(e) => {
            log::warn!("[menu] disabled: {:#}", e);
            None
        }
    };

    let layout = LayoutWiring {
        window: window.clone(),
        document: document.clone(),
        profile: Rc::new(Cell::new(profile)),
        scroll: scroll.clone(),
        sections: sections.clone(),
        gallery,
        skills: skills.clone(),
        menu: menu.clone(),
    };
    layout.on_resize();
    {
        let layout = layout.clone();
        listeners.push(EventListener::new(window.as_ref(), "resize", move |_| {
            layout.on_resize()
        }));
    }

    let preloader = match PreloaderOverlay::mount(&window, &document, &content.greetings, &scroll)
    {
        Ok(p) => {
            // Scroll was reset to the top; positions measured under the
            // overlay are stale.
            let layout = layout.clone();
            p.borrow_mut().on_done(move || layout.on_resize());
            Some(p)
        }
        Err(e) => {
            log::warn!("[preloader] skipped: {:#}", e);
            None
        }
    };

    let mut ctx = FrameContext::new(window.clone(), scroll.clone(), sections);
    ctx.skills = skills;
    ctx.menu = menu;
    ctx.preloader = preloader.clone();
    let frame_loop = frame::start_loop(Rc::new(RefCell::new(ctx)));

    MOUNT.with(|m| {
        *m.borrow_mut() = Some(Mount {
            scroll,
            layout,
            preloader,
            listeners,
            frame_loop: Some(frame_loop),
        })
    });
    log::info!("[mount] ready");
    Ok(())
}
