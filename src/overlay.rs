// Side menu overlay and the fixed header, both driven by transition tables.
use crate::constants::{
    HEADER_ID, MENU_BUTTON_ID, MENU_FOOTER_LINK_SELECTOR, MENU_OPEN_CLASS, MENU_PANEL_ID,
    NAV_LINK_SELECTOR,
};
use crate::dom;
use crate::events::scroll::anchor_target;
use crate::listener::{EventListener, Timeout};
use folio_core::content::Anchor;
use folio_core::scroll::SmoothScroll;
use folio_core::tween::{TweenRunner, VariantTable};
use folio_core::variants::{
    self, Channel, MenuState, RevealState, LINK_STAGGER_SEC, NAV_SCROLL_DELAY_MS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type Reveal = TweenRunner<RevealState, Channel>;

pub struct SideMenu {
    button: web::HtmlElement,
    panel: web::HtmlElement,
    links: Vec<web::HtmlElement>,
    footer_links: Vec<web::HtmlElement>,
    header: Option<web::HtmlElement>,
    panel_tween: TweenRunner<MenuState, Channel>,
    link_tweens: Vec<Reveal>,
    footer_tweens: Vec<Reveal>,
    header_tween: Reveal,
    open: bool,
    // Set while any tween moved last frame; the settling frame still writes.
    animating: bool,
    epoch: Instant,
    pending_nav: Option<Timeout>,
    listeners: Vec<EventListener>,
}

fn reveal_all(count: usize, table: impl Fn() -> VariantTable<RevealState, Channel>) -> Vec<Reveal> {
    (0..count)
        .map(|_| {
            let mut r = TweenRunner::new(table());
            r.set(RevealState::Hidden);
            r
        })
        .collect()
}

impl SideMenu {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        scroll: &Rc<RefCell<SmoothScroll>>,
    ) -> anyhow::Result<Rc<RefCell<Self>>> {
        let button: web::HtmlElement = dom::element(document, MENU_BUTTON_ID)?;
        let panel: web::HtmlElement = dom::element(document, MENU_PANEL_ID)?;
        let links = dom::select_all(&panel, NAV_LINK_SELECTOR);
        let footer_links = dom::select_all(&panel, MENU_FOOTER_LINK_SELECTOR);
        let header: Option<web::HtmlElement> = dom::find(document, HEADER_ID);

        let (_, vh) = dom::viewport(window);
        let mut panel_tween = TweenRunner::new(variants::menu_panel(vh as f32));
        panel_tween.set(MenuState::Closed);
        let mut header_tween = TweenRunner::new(variants::header());
        header_tween.set(RevealState::Visible);

        let menu = Rc::new(RefCell::new(Self {
            link_tweens: reveal_all(links.len(), variants::nav_link),
            footer_tweens: reveal_all(footer_links.len(), variants::menu_footer_link),
            button,
            panel,
            links,
            footer_links,
            header,
            panel_tween,
            header_tween,
            open: false,
            animating: false,
            epoch: Instant::now(),
            pending_nav: None,
            listeners: Vec::new(),
        }));
        Self::wire(&menu, window, document, scroll);
        menu.borrow_mut().write_styles();
        Ok(menu)
    }

    fn wire(
        this: &Rc<RefCell<Self>>,
        window: &web::Window,
        document: &web::Document,
        scroll: &Rc<RefCell<SmoothScroll>>,
    ) {
        let mut listeners = Vec::new();

        let weak = Rc::downgrade(this);
        let button = this.borrow().button.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            if let Some(m) = weak.upgrade() {
                m.borrow_mut().toggle();
            }
        }));

        let links = this.borrow().links.clone();
        for link in links {
            let Some(anchor) = link.get_attribute("href").and_then(|h| Anchor::from_href(&h)) else {
                continue;
            };
            let weak = Rc::downgrade(this);
            let scroll = scroll.clone();
            let w = window.clone();
            let d = document.clone();
            listeners.push(EventListener::new_active(&link, "click", move |ev: web::Event| {
                ev.prevent_default();
                let Some(m) = weak.upgrade() else {
                    return;
                };
                let mut m = m.borrow_mut();
                m.hide();
                let (scroll, w, d) = (scroll.clone(), w.clone(), d.clone());
                // Replacing a pending scroll cancels it.
                m.pending_nav = Some(Timeout::new(NAV_SCROLL_DELAY_MS, move || {
                    if let Some(offset) = anchor_target(&w, &d, anchor) {
                        log::info!("[menu] scroll to #{}", anchor.id());
                        scroll.borrow_mut().scroll_to(offset);
                    }
                }));
            }));
        }
        this.borrow_mut().listeners = listeners;
    }

    /// Remove every listener and cancel a scheduled anchor scroll.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        self.pending_nav = None;
    }

    #[inline]
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        let now = self.now();
        self.panel_tween.go_to(MenuState::Open, now);
        _ = self.button.class_list().add_1(MENU_OPEN_CLASS);
        for (i, t) in self
            .link_tweens
            .iter_mut()
            .chain(self.footer_tweens.iter_mut())
            .enumerate()
        {
            t.set(RevealState::Hidden);
            t.go_to_staggered(RevealState::Visible, now, i as f32 * LINK_STAGGER_SEC);
        }
        log::debug!("[menu] open");
    }

    pub fn hide(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        let now = self.now();
        self.panel_tween.go_to(MenuState::Closed, now);
        _ = self.button.class_list().remove_1(MENU_OPEN_CLASS);
        for t in self
            .link_tweens
            .iter_mut()
            .chain(self.footer_tweens.iter_mut())
        {
            t.go_to(RevealState::Exit, now);
        }
        log::debug!("[menu] closed");
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn resize(&mut self, viewport_h: f64) {
        self.panel_tween.set_table(variants::menu_panel(viewport_h as f32));
        self.write_styles();
    }

    /// Header visibility follows scroll; tweens advance and styles are written.
    pub fn frame(&mut self, scroll_y: f64, viewport_h: f64) {
        let now = self.now();
        let want = if variants::header_visible(scroll_y, viewport_h) || self.open {
            RevealState::Visible
        } else {
            RevealState::Hidden
        };
        self.header_tween.go_to(want, now);

        let mut moving = self.panel_tween.tick(now);
        moving |= self.header_tween.tick(now);
        for t in self
            .link_tweens
            .iter_mut()
            .chain(self.footer_tweens.iter_mut())
        {
            moving |= t.tick(now);
        }
        if moving || self.animating {
            self.write_styles();
        }
        self.animating = moving;
    }

    fn write_styles(&self) {
        let px = |c: Channel| format!("{}px", self.panel_tween.value(c).unwrap_or(0.0));
        dom::set_style(&self.panel, "width", &px(Channel::Width));
        dom::set_style(&self.panel, "height", &px(Channel::Height));
        dom::set_style(&self.panel, "top", &px(Channel::Top));
        dom::set_style(&self.panel, "right", &px(Channel::Right));

        for (el, t) in self
            .links
            .iter()
            .zip(&self.link_tweens)
            .chain(self.footer_links.iter().zip(&self.footer_tweens))
        {
            write_reveal(el, t);
        }
        if let Some(h) = &self.header {
            write_reveal(h, &self.header_tween);
            dom::set_style(
                h,
                "pointer-events",
                if self.header_tween.state() == Some(RevealState::Hidden) {
                    "none"
                } else {
                    "auto"
                },
            );
        }
    }
}

fn write_reveal(el: &web::HtmlElement, t: &Reveal) {
    let v = |c: Channel| t.value(c).unwrap_or(0.0);
    dom::set_style(el, "opacity", &t.value(Channel::Opacity).unwrap_or(1.0).to_string());
    dom::set_style(
        el,
        "transform",
        &format!(
            "perspective(120px) rotateX({}deg) translate({}px, {}px)",
            v(Channel::RotateX),
            v(Channel::TranslateX),
            v(Channel::TranslateY)
        ),
    );
}
