use crate::constants::{
    CAROUSEL_DOT_ACTIVE_CLASS, CAROUSEL_DOT_SELECTOR, CAROUSEL_SEED, GALLERY_ID,
    GALLERY_IMAGE_SELECTOR,
};
use crate::dom;
use crate::input;
use crate::listener::{EventListener, Interval};
use folio_core::carousel::{Carousel, CarouselConfig};
use folio_core::layout::{GalleryVariant, LayoutProfile};
use folio_core::trail::{MouseTrail, Placement, TrailConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub enum Mode {
    Trail {
        trail: MouseTrail,
        pointer: input::PointerState,
    },
    Carousel {
        carousel: Carousel,
        rng: StdRng,
        dots: Vec<web::HtmlElement>,
    },
}

pub struct Gallery {
    pub container: web::HtmlElement,
    images: Vec<web::HtmlElement>,
    pub mode: Mode,
    // Dropped with the gallery: removes listeners, clears the interval.
    listeners: Vec<EventListener>,
    interval: Option<Interval>,
}

fn hide_all(images: &[web::HtmlElement]) {
    for img in images {
        dom::set_style(img, "visibility", "hidden");
        dom::set_style(img, "opacity", "0");
    }
}

impl Gallery {
    /// Build the variant for `profile`. `None` when the page has no gallery.
    pub fn mount(document: &web::Document, profile: LayoutProfile) -> Option<Rc<RefCell<Self>>> {
        let container: web::HtmlElement = dom::find(document, GALLERY_ID)?;
        let images = dom::select_all(&container, GALLERY_IMAGE_SELECTOR);
        if images.len() < 2 {
            log::warn!("[gallery] needs at least two images, found {}", images.len());
            return None;
        }
        hide_all(&images);

        let variant = profile.gallery();
        let mode = match variant {
            GalleryVariant::MouseTrail => {
                let slots = images.len();
                let config = TrailConfig {
                    slots,
                    max_visible: TrailConfig::default().max_visible.min(slots - 1),
                    ..TrailConfig::default()
                };
                match MouseTrail::new(config) {
                    Ok(trail) => Mode::Trail {
                        trail,
                        pointer: input::PointerState::default(),
                    },
                    Err(e) => {
                        log::warn!("[gallery] trail disabled: {}", e);
                        return None;
                    }
                }
            }
            GalleryVariant::Carousel => {
                let mut rng = StdRng::seed_from_u64(CAROUSEL_SEED);
                let carousel = Carousel::new(CarouselConfig::default(), images.len(), &mut rng);
                Mode::Carousel {
                    carousel,
                    rng,
                    dots: dom::select_all(&container, CAROUSEL_DOT_SELECTOR),
                }
            }
        };
        log::info!("[gallery] {:?} with {} images", variant, images.len());

        let gallery = Rc::new(RefCell::new(Self {
            container,
            images,
            mode,
            listeners: Vec::new(),
            interval: None,
        }));
        Self::wire(&gallery);
        gallery.borrow().render_carousel();
        Some(gallery)
    }

    fn wire(this: &Rc<RefCell<Self>>) {
        let weak = Rc::downgrade(this);
        let mut guard = this.borrow_mut();
        let g = &mut *guard;
        match &g.mode {
            Mode::Trail { .. } => {
                let target: web::EventTarget = g.container.clone().into();
                let l = crate::events::pointer::wire_trail_pointer(&target, weak);
                g.listeners.push(l);
            }
            Mode::Carousel { carousel, dots, .. } => {
                let interval_ms = carousel.interval_ms();
                let tick = weak.clone();
                g.interval = Some(Interval::new(interval_ms, move || {
                    if let Some(g) = tick.upgrade() {
                        g.borrow_mut().advance_carousel();
                    }
                }));
                let dot_listeners: Vec<EventListener> = dots
                    .iter()
                    .enumerate()
                    .map(|(i, dot)| {
                        let w: Weak<RefCell<Gallery>> = weak.clone();
                        EventListener::new(dot, "click", move |_| {
                            if let Some(g) = w.upgrade() {
                                g.borrow_mut().select(i);
                            }
                        })
                    })
                    .collect();
                g.listeners.extend(dot_listeners);
            }
        }
    }

    /// Pointer moved over the container (trail mode).
    pub fn on_pointer_move(&mut self, client: Vec2, movement: Option<Vec2>) {
        let rect = self.container.get_bounding_client_rect();
        let local = input::client_to_local(client, Vec2::new(rect.left() as f32, rect.top() as f32));
        let Mode::Trail { trail, pointer } = &mut self.mode else {
            return;
        };
        let delta = movement.unwrap_or_else(|| input::movement_since(pointer.last, client));
        pointer.last = Some(client);
        if let Some(p) = trail.on_pointer_move(local, delta) {
            let slots = trail.slots().to_vec();
            self.apply_placement(p, &slots);
        }
    }

    fn apply_placement(&self, p: Placement, slots: &[folio_core::trail::TrailSlot]) {
        if let Some(old) = p.evicted.and_then(|i| self.images.get(i)) {
            dom::set_style(old, "visibility", "hidden");
            dom::set_style(old, "opacity", "0");
        }
        if let Some(img) = self.images.get(p.slot) {
            dom::set_style(img, "left", &format!("{}px", p.position.x));
            dom::set_style(img, "top", &format!("{}px", p.position.y));
            dom::set_style(img, "visibility", "visible");
            dom::set_style(img, "opacity", "1");
        }
        for (img, slot) in self.images.iter().zip(slots) {
            dom::set_style(img, "z-index", &slot.z.to_string());
        }
    }

    fn advance_carousel(&mut self) {
        if let Mode::Carousel { carousel, rng, .. } = &mut self.mode {
            carousel.advance(rng);
        }
        self.render_carousel();
    }

    pub fn select(&mut self, index: usize) {
        if let Mode::Carousel { carousel, .. } = &mut self.mode {
            carousel.select(index);
        }
        self.render_carousel();
    }

    fn render_carousel(&self) {
        let Mode::Carousel { carousel, dots, .. } = &self.mode else {
            return;
        };
        for (i, img) in self.images.iter().enumerate() {
            match carousel.frame(i) {
                Some(f) => {
                    dom::set_style(img, "left", &format!("{}%", f.position_pct.x));
                    dom::set_style(img, "top", &format!("{}%", f.position_pct.y));
                    dom::set_style(img, "opacity", &f.opacity.to_string());
                    dom::set_style(
                        img,
                        "transform",
                        &format!("translate(-50%, -50%) scale({})", f.scale),
                    );
                    dom::set_style(img, "z-index", &f.z.to_string());
                    dom::set_style(img, "visibility", "visible");
                }
                None => {
                    dom::set_style(img, "opacity", "0");
                    dom::set_style(img, "visibility", "hidden");
                }
            }
        }
        for (i, dot) in dots.iter().enumerate() {
            let cl = dot.class_list();
            if i == carousel.current() {
                _ = cl.add_1(CAROUSEL_DOT_ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(CAROUSEL_DOT_ACTIVE_CLASS);
            }
        }
    }

    pub fn teardown(&mut self) {
        self.listeners.clear();
        self.interval = None;
        if let Mode::Trail { trail, .. } = &mut self.mode {
            trail.reset();
        }
        hide_all(&self.images);
    }
}

/// `MouseEvent.movementX/Y` are missing on some touch pens; treat zeros on a
/// pointer that moved as absent.
pub fn event_movement(ev: &web::MouseEvent) -> Option<Vec2> {
    let m = Vec2::new(ev.movement_x() as f32, ev.movement_y() as f32);
    (m != Vec2::ZERO).then_some(m)
}
