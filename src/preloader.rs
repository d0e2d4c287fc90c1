use crate::constants::{
    CURSOR_BUSY, CURSOR_DEFAULT, PRELOADER_CURVE_ID, PRELOADER_EXIT_MS, PRELOADER_ID,
    PRELOADER_WORD_ID,
};
use crate::dom;
use crate::listener::Timeout;
use folio_core::preloader::{curve_path, Phase, Preloader, PreloaderConfig};
use folio_core::scroll::SmoothScroll;
use folio_core::tween::TweenRunner;
use folio_core::variants::{self, Channel, PreloaderView, RevealState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Greeting overlay: one-shot timers advance the words, the last one starts
/// the exit, and the exit's end unmounts the overlay.
pub struct PreloaderOverlay {
    window: web::Window,
    document: web::Document,
    root: web::HtmlElement,
    word_el: web::HtmlElement,
    curve: Option<web::Element>,
    sequencer: Preloader,
    curtain: TweenRunner<PreloaderView, Channel>,
    word_fade: TweenRunner<RevealState, Channel>,
    scroll: Rc<RefCell<SmoothScroll>>,
    epoch: Instant,
    timer: Option<Timeout>,
    mounted: bool,
    on_done: Option<Box<dyn FnOnce()>>,
}

impl PreloaderOverlay {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        words: &[&str],
        scroll: &Rc<RefCell<SmoothScroll>>,
    ) -> anyhow::Result<Rc<RefCell<Self>>> {
        let root: web::HtmlElement = dom::element(document, PRELOADER_ID)?;
        let word_el: web::HtmlElement = dom::element(document, PRELOADER_WORD_ID)?;
        let sequencer = Preloader::new(PreloaderConfig::default(), words.iter().copied())?;
        let (_, vh) = dom::viewport(window);

        let mut curtain = TweenRunner::new(variants::preloader_curtain(vh as f32));
        curtain.set(PreloaderView::Shown);
        let mut word_fade = TweenRunner::new(variants::preloader_word());
        word_fade.set(RevealState::Hidden);
        let epoch = Instant::now();
        word_fade.go_to(RevealState::Visible, 0.0);

        word_el.set_text_content(Some(sequencer.word()));
        dom::set_body_cursor(document, CURSOR_BUSY);
        log::info!(
            "[preloader] {} words, reveal after {} ms",
            words.len(),
            sequencer.reveal_after().as_millis()
        );

        let overlay = Rc::new(RefCell::new(Self {
            window: window.clone(),
            document: document.clone(),
            root,
            word_el,
            curve: document.get_element_by_id(PRELOADER_CURVE_ID),
            sequencer,
            curtain,
            word_fade,
            scroll: scroll.clone(),
            epoch,
            timer: None,
            mounted: true,
            on_done: None,
        }));
        overlay.borrow().write_curve(true);
        Self::schedule(&overlay);
        Ok(overlay)
    }

    fn schedule(this: &Rc<RefCell<Self>>) {
        let weak = Rc::downgrade(this);
        let mut me = this.borrow_mut();
        let timer = match me.sequencer.next_delay() {
            Some(delay) => Timeout::new(delay.as_millis() as u32, move || {
                Self::on_word_timer(&weak)
            }),
            None => Timeout::new(me.exit_hold_ms(), move || Self::on_exit_start(&weak)),
        };
        me.timer = Some(timer);
    }

    fn exit_hold_ms(&self) -> u32 {
        let reveal = self.sequencer.reveal_after();
        let terminal = self.sequencer.total_duration();
        (reveal - terminal).as_millis() as u32
    }

    fn on_word_timer(weak: &Weak<RefCell<Self>>) {
        let Some(this) = weak.upgrade() else {
            return;
        };
        {
            let mut me = this.borrow_mut();
            let phase = me.sequencer.advance();
            me.word_el.set_text_content(Some(me.sequencer.word()));
            if phase == Phase::Complete {
                log::info!(
                    "[preloader] last word at {} ms",
                    me.sequencer.elapsed().as_millis()
                );
            }
        }
        Self::schedule(&this);
    }

    fn on_exit_start(weak: &Weak<RefCell<Self>>) {
        let Some(this) = weak.upgrade() else {
            return;
        };
        let mut me = this.borrow_mut();
        let now = me.now();
        me.curtain.go_to(PreloaderView::Leaving, now);
        me.write_curve(false);
        let weak = weak.clone();
        me.timer = Some(Timeout::new(PRELOADER_EXIT_MS, move || {
            if let Some(this) = weak.upgrade() {
                this.borrow_mut().unmount();
            }
        }));
    }

    fn write_curve(&self, bulged: bool) {
        if let Some(curve) = &self.curve {
            let (w, h) = dom::viewport(&self.window);
            _ = curve.set_attribute("d", &curve_path(w, h, bulged));
        }
    }

    #[inline]
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Host hook run once after the overlay is gone.
    pub fn on_done(&mut self, f: impl FnOnce() + 'static) {
        self.on_done = Some(Box::new(f));
    }

    /// Completion: restore the cursor, reset scroll to the top, remove.
    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.timer = None;
        dom::show(&self.root, false);
        dom::set_body_cursor(&self.document, CURSOR_DEFAULT);
        self.scroll.borrow_mut().jump_to(0.0);
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        log::info!("[preloader] done");
        if let Some(f) = self.on_done.take() {
            f();
        }
    }

    /// Host unmount: stop the word timers without running the completion hook.
    pub fn teardown(&mut self) {
        self.timer = None;
        self.on_done = None;
        self.mounted = false;
    }

    pub fn frame(&mut self) {
        if !self.mounted {
            return;
        }
        let now = self.now();
        self.curtain.tick(now);
        self.word_fade.tick(now);
        let top = self.curtain.value(Channel::Top).unwrap_or(0.0);
        dom::set_style(&self.root, "top", &format!("{}px", top));
        let opacity = self.word_fade.value(Channel::Opacity).unwrap_or(1.0);
        dom::set_style(&self.word_el, "opacity", &opacity.to_string());
    }
}
