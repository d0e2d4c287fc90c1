// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as core_constants;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_and_wheel_tuning_is_sane() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(WHEEL_PAGE_FRACTION > 0.0 && WHEEL_PAGE_FRACTION <= 1.0);
    assert!(PRELOADER_EXIT_MS > 0);
}

#[test]
fn selectors_match_their_class_names() {
    assert_eq!(NAV_LINK_SELECTOR, format!(".{}", NAV_LINK_CLASS));
    for sel in [
        NAV_LINK_SELECTOR,
        MENU_FOOTER_LINK_SELECTOR,
        MILESTONE_SELECTOR,
        TEXT_PATH_COPY_SELECTOR,
        CARD_SELECTOR,
        CARD_IMAGE_SELECTOR,
        GALLERY_IMAGE_SELECTOR,
        CAROUSEL_DOT_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{} is not a class selector", sel);
    }
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        PRELOADER_ID,
        PRELOADER_WORD_ID,
        PRELOADER_CURVE_ID,
        HEADER_ID,
        MENU_BUTTON_ID,
        MENU_PANEL_ID,
        HERO_ABOUT_ID,
        HERO_ID,
        ABOUT_ID,
        TIMELINE_ID,
        TIMELINE_PATH_ID,
        TIMELINE_LIST_ID,
        TEXT_PATH_SECTION_ID,
        CAPTION_ID,
        PROJECTS_ID,
        SKILLS_TRACK_SECTION_ID,
        SKILLS_TRACK_ID,
        GALLERY_ID,
        SKILLS_CANVAS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn anchor_sections_use_content_ids() {
    use folio_core::content::Anchor;
    assert_eq!(ABOUT_ID, Anchor::About.id());
    assert_eq!(TIMELINE_ID, Anchor::Journey.id());
    assert_eq!(PROJECTS_ID, Anchor::Projects.id());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    // Trail window must leave a free slot to recycle.
    assert!(core_constants::TRAIL_MAX_VISIBLE < core_constants::TRAIL_SLOT_COUNT);
    assert!(core_constants::TRAIL_STEP_PX > 0.0);
    assert!(core_constants::CAROUSEL_VISIBLE_DEPTH <= folio_core::content::GALLERY_IMAGES.len());
    assert!(core_constants::CAROUSEL_POS_MIN_PCT + core_constants::CAROUSEL_POS_SPAN_PCT <= 100.0);

    // Default physics tuning passes its own validation.
    assert!(folio_core::physics::PhysicsConfig::default().validate().is_ok());

    assert!(core_constants::PHONE_MAX_WIDTH < core_constants::MOBILE_MAX_WIDTH);
    assert!(core_constants::MOBILE_MAX_WIDTH < core_constants::TABLET_MAX_WIDTH);
    assert!(core_constants::ANCHOR_DURATION_SEC >= core_constants::SCROLL_DURATION_SEC);
    assert!(core_constants::PRELOADER_FIRST_DELAY_MS > core_constants::PRELOADER_STEP_DELAY_MS);
}
