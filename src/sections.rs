//! Scroll-driven sections bound to their DOM nodes.
//!
//! Each tracked container owns a `ScrollTracker`; the presets subscribe to
//! its progress signal and write styles only when the progress changed.

use crate::constants::{
    ABOUT_ID, CAPTION_ID, CARD_IMAGE_SELECTOR, CARD_SELECTOR, HERO_ABOUT_ID, HERO_ID,
    MILESTONE_SELECTOR, PROJECTS_ID, SKILLS_TRACK_ID, SKILLS_TRACK_SECTION_ID, TEXT_PATH_COPIES,
    TEXT_PATH_COPY_SELECTOR, TEXT_PATH_SECTION_ID, TIMELINE_ID, TIMELINE_LIST_ID,
    TIMELINE_PATH_ID,
};
use crate::dom;
use folio_core::choreography::{card_image_zoom, CardStack, HeroAbout, TextAlongPath, Timeline};
use folio_core::constants::SCRUB_LAG_SEC;
use folio_core::layout::{LayoutProfile, TimelineVariant};
use folio_core::mapper::{Property, TransformSet};
use folio_core::progress::{ScrollOffsets, ScrollTracker, TargetRect};
use folio_core::sticky::{PinController, PinGeometry, PinSpan, PinState, ScrubFollower};
use wasm_bindgen::JsCast;
use web_sys as web;

struct Tracked {
    name: &'static str,
    container: web::Element,
    tracker: ScrollTracker,
}

/// CSS `transform` for the transform-like properties of `set`.
fn css_transform(set: &TransformSet) -> String {
    let mut out = String::new();
    for (prop, v) in set.values() {
        let f = match prop {
            Property::Scale => "scale",
            Property::RotateDeg => "rotate",
            Property::TranslateX => "translateX",
            Property::TranslateY => "translateY",
            _ => continue,
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{}({}{})", f, v, prop.css_unit()));
    }
    out
}

fn write_set(el: &web::Element, set: &TransformSet) {
    let mut style = format!("transform:{};", css_transform(set));
    if let Some(o) = set.value(Property::Opacity) {
        style.push_str(&format!("opacity:{};", o));
    }
    if el.dyn_ref::<web::HtmlElement>().is_none() {
        // SVG nodes scale about their own box.
        style.push_str("transform-box:fill-box;transform-origin:center;");
    }
    _ = el.set_attribute("style", &style);
}

fn select_elements(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Horizontal track pinned while its panels slide past.
struct SkillsTrack {
    section: web::HtmlElement,
    track: web::HtmlElement,
    pin: PinController,
    scrub: ScrubFollower,
}

impl SkillsTrack {
    fn mount(document: &web::Document) -> Option<Self> {
        let section: web::HtmlElement = dom::find(document, SKILLS_TRACK_SECTION_ID)?;
        let track: web::HtmlElement = dom::find(document, SKILLS_TRACK_ID)?;
        Some(Self {
            section,
            track,
            pin: PinController::new(PinSpan::Horizontal { track_len: 0.0 }),
            scrub: ScrubFollower::new(SCRUB_LAG_SEC),
        })
    }

    fn measure(&mut self, scroll_y: f64, viewport_w: f64, viewport_h: f64) {
        let track_len = self.track.scroll_width() as f64;
        self.pin.set_span(PinSpan::Horizontal { track_len });
        let (top, _) = dom::client_box(&self.section);
        let mut geometry = PinGeometry {
            section_doc_top: top + scroll_y,
            section_height: 0.0,
            viewport_w,
            viewport_h,
        };
        self.pin.invalidate(geometry);
        // Pin spacing: the section is one viewport plus the pinned travel.
        let height = viewport_h + self.pin.distance();
        dom::set_style(&self.section, "height", &format!("{}px", height));
        geometry.section_height = height;
        self.pin.invalidate(geometry);
        self.scrub.reset(self.pin.progress_at(scroll_y) as f64 * self.pin.distance());
    }

    fn update(&mut self, scroll_y: f64, dt_sec: f32) {
        let frame = self.pin.update(scroll_y);
        if let Some(state) = frame.transition {
            let cl = self.section.class_list();
            _ = match state {
                PinState::Pinned => cl.add_1("pinned"),
                PinState::Unpinned => cl.remove_1("pinned"),
            };
        }
        let offset = self.scrub.step(frame.track_offset, dt_sec);
        dom::set_style(
            &self.track,
            "transform",
            &format!("translate({}px, {}px)", -offset, frame.pin_offset_y),
        );
    }
}

pub struct Sections {
    tracked: Vec<Tracked>,
    skills_track: Option<SkillsTrack>,
}

impl Sections {
    pub fn mount(document: &web::Document, profile: LayoutProfile) -> Self {
        let mut tracked = Vec::new();
        let mut add = |name, container: Option<web::Element>, tracker: Option<ScrollTracker>| {
            if let (Some(container), Some(tracker)) = (container, tracker) {
                tracked.push(Tracked {
                    name,
                    container,
                    tracker,
                });
            }
        };

        let container = document.get_element_by_id(HERO_ABOUT_ID);
        add("hero-about", container, hero_about(document));

        apply_timeline_variant(document, profile);
        if profile.timeline() == TimelineVariant::Path {
            let container = document.get_element_by_id(TIMELINE_ID);
            let tracker = container.as_ref().and_then(|c| timeline(document, c));
            add("timeline", container, tracker);
        }

        let container = document.get_element_by_id(TEXT_PATH_SECTION_ID);
        let tracker = container.as_ref().and_then(|c| text_path(document, c));
        add("text-path", container, tracker);

        if let Some(projects) = document.get_element_by_id(PROJECTS_ID) {
            let cards = select_elements(&projects, CARD_SELECTOR);
            add("cards", Some(projects.clone()), card_stack(&cards));
            for card in cards {
                let tracker = card_zoom(&card);
                add("card-image", Some(card), tracker);
            }
        }

        log::info!("[sections] {} tracked containers", tracked.len());
        Self {
            tracked,
            skills_track: SkillsTrack::mount(document),
        }
    }

    /// Layout changed: re-measure every container and the pin.
    pub fn measure(&mut self, window: &web::Window, scroll_y: f64) {
        let (vw, vh) = dom::viewport(window);
        if let Some(t) = self.skills_track.as_mut() {
            t.measure(scroll_y, vw, vh);
        }
        for t in &mut self.tracked {
            let (top, height) = dom::client_box(&t.container);
            t.tracker
                .measure(TargetRect::from_client(top, height, scroll_y), vh);
            log::debug!("[sections] {} top={:.0} h={:.0}", t.name, top + scroll_y, height);
            t.tracker.update(scroll_y);
            t.tracker.signal_mut().notify();
        }
        if let Some(t) = self.skills_track.as_mut() {
            t.update(scroll_y, 0.0);
        }
    }

    pub fn update(&mut self, scroll_y: f64, dt_sec: f32) {
        for t in &mut self.tracked {
            t.tracker.update(scroll_y);
        }
        if let Some(t) = self.skills_track.as_mut() {
            t.update(scroll_y, dt_sec);
        }
    }
}

/// Shows the path or the list timeline for `profile`.
pub fn apply_timeline_variant(document: &web::Document, profile: LayoutProfile) {
    let path = profile.timeline() == TimelineVariant::Path;
    if let Some(el) = document
        .get_element_by_id(TIMELINE_PATH_ID)
        .and_then(|p| p.closest("svg").ok().flatten())
    {
        _ = el.set_attribute("display", if path { "inline" } else { "none" });
    }
    if let Some(list) = dom::find::<web::HtmlElement>(document, TIMELINE_LIST_ID) {
        dom::show(&list, !path);
    }
}

fn hero_about(document: &web::Document) -> Option<ScrollTracker> {
    let hero = document.get_element_by_id(HERO_ID)?;
    let about = document.get_element_by_id(ABOUT_ID)?;
    let mut preset = HeroAbout::new()
        .map_err(|e| log::warn!("[sections] hero/about disabled: {}", e))
        .ok()?;
    let mut tracker = ScrollTracker::new(ScrollOffsets::CONTAIN);
    tracker.signal_mut().subscribe(move |p| {
        if preset.apply(p) {
            write_set(&hero, &preset.hero);
            write_set(&about, &preset.about);
        }
    });
    Some(tracker)
}

fn timeline(document: &web::Document, container: &web::Element) -> Option<ScrollTracker> {
    let path = document.get_element_by_id(TIMELINE_PATH_ID)?;
    _ = path.set_attribute("pathLength", "1");
    _ = path.set_attribute("stroke-dasharray", "1");
    let milestones = select_elements(container, MILESTONE_SELECTOR);
    let mut preset = Timeline::new()
        .map_err(|e| log::warn!("[sections] timeline disabled: {}", e))
        .ok()?;
    let mut tracker = ScrollTracker::new(ScrollOffsets::CONTAIN);
    let mut revealed = 0;
    tracker.signal_mut().subscribe(move |p| {
        if !preset.apply(p) {
            return;
        }
        let len = preset.path.value(Property::PathLength).unwrap_or(0.0);
        _ = path.set_attribute("stroke-dashoffset", &(1.0 - len).to_string());
        for (el, set) in milestones.iter().zip(&preset.milestones) {
            write_set(el, set);
        }
        let now = preset.revealed();
        if now != revealed {
            log::debug!("[timeline] {} milestones revealed", now);
            revealed = now;
        }
    });
    Some(tracker)
}

fn text_path(document: &web::Document, container: &web::Element) -> Option<ScrollTracker> {
    let copies = select_elements(container, TEXT_PATH_COPY_SELECTOR);
    let caption = document.get_element_by_id(CAPTION_ID);
    let n = if copies.is_empty() {
        TEXT_PATH_COPIES
    } else {
        copies.len()
    };
    let mut preset = TextAlongPath::new(n)
        .map_err(|e| log::warn!("[sections] text path disabled: {}", e))
        .ok()?;
    let mut tracker = ScrollTracker::new(ScrollOffsets::ENTER);
    tracker.signal_mut().subscribe(move |p| {
        for (el, offset) in copies.iter().zip(preset.offsets(p)) {
            _ = el.set_attribute(
                "startOffset",
                &format!("{}{}", offset, Property::StartOffsetPct.css_unit()),
            );
        }
        if let Some(c) = &caption {
            if preset.caption.apply(p) {
                write_set(c, &preset.caption);
            }
        }
    });
    Some(tracker)
}

fn card_stack(cards: &[web::Element]) -> Option<ScrollTracker> {
    if cards.is_empty() {
        return None;
    }
    let cards = cards.to_vec();
    let mut preset = CardStack::new(cards.len())
        .map_err(|e| log::warn!("[sections] card stack disabled: {}", e))
        .ok()?;
    let mut tracker = ScrollTracker::new(ScrollOffsets::CONTAIN);
    tracker.signal_mut().subscribe(move |p| {
        if preset.apply(p) {
            for (el, set) in cards.iter().zip(&preset.cards) {
                write_set(el, set);
            }
        }
    });
    Some(tracker)
}

fn card_zoom(card: &web::Element) -> Option<ScrollTracker> {
    let image = card.query_selector(CARD_IMAGE_SELECTOR).ok().flatten()?;
    let mut zoom = card_image_zoom()
        .map_err(|e| log::warn!("[sections] card zoom disabled: {}", e))
        .ok()?;
    let mut tracker = ScrollTracker::new(ScrollOffsets::APPROACH);
    tracker.signal_mut().subscribe(move |p| {
        if zoom.apply(p) {
            write_set(&image, &zoom);
        }
    });
    Some(tracker)
}
