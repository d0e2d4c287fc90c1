// Host-side tests for the mouse-trail ring and the handheld carousel.

use folio_core::carousel::{Carousel, CarouselConfig};
use folio_core::error::FolioError;
use folio_core::trail::{MouseTrail, TrailConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STEP: Vec2 = Vec2::new(120.0, 0.0);

fn newest_is_on_top(trail: &MouseTrail, newest: usize) {
    let top = trail.slots()[newest].z;
    assert_eq!(top as usize, trail.visible_count());
    for (i, s) in trail.slots().iter().enumerate() {
        if i != newest && s.visible {
            assert!(s.z < top);
        }
    }
}

#[test]
fn trail_config_is_validated() {
    let full_window = TrailConfig {
        slots: 4,
        max_visible: 4,
        ..TrailConfig::default()
    };
    assert_eq!(
        MouseTrail::new(full_window).unwrap_err(),
        FolioError::InvalidTrail {
            slots: 4,
            max_visible: 4
        }
    );
    let no_step = TrailConfig {
        step_px: 0.0,
        ..TrailConfig::default()
    };
    assert_eq!(
        MouseTrail::new(no_step).unwrap_err(),
        FolioError::InvalidTrailStep(0.0)
    );
}

#[test]
fn first_move_places_and_small_moves_do_not() {
    let mut trail = MouseTrail::new(TrailConfig::default()).unwrap();
    let first = trail.on_pointer_move(Vec2::new(10.0, 20.0), Vec2::ZERO).unwrap();
    assert_eq!(first.slot, 0);
    assert_eq!(first.evicted, None);
    assert_eq!(trail.slots()[0].position, Vec2::new(10.0, 20.0));

    assert!(trail
        .on_pointer_move(Vec2::new(60.0, 20.0), Vec2::new(50.0, 0.0))
        .is_none());
    // Travel is Manhattan: 50 + 40 + 30 crosses the 120 px step.
    let p = trail
        .on_pointer_move(Vec2::new(100.0, 50.0), Vec2::new(40.0, 30.0))
        .unwrap();
    assert_eq!(p.slot, 1);
}

#[test]
fn window_never_exceeds_max_visible() {
    let mut trail = MouseTrail::new(TrailConfig::default()).unwrap();
    let mut pos = Vec2::ZERO;
    trail.on_pointer_move(pos, Vec2::ZERO);
    for _ in 0..23 {
        pos += STEP;
        let p = trail.on_pointer_move(pos, STEP).expect("each full step places");
        assert!(trail.visible_count() <= 4);
        assert!(trail.slots()[p.slot].visible);
        newest_is_on_top(&trail, p.slot);
    }
    assert_eq!(trail.visible_count(), 4);
}

#[test]
fn uneven_moves_keep_the_window_and_stacking() {
    let mut rng = StdRng::seed_from_u64(0x7a11);
    let mut trail = MouseTrail::new(TrailConfig::default()).unwrap();
    let mut pos = Vec2::new(400.0, 300.0);
    let mut newest = trail.on_pointer_move(pos, Vec2::ZERO).unwrap().slot;
    let mut placed = 1;
    for _ in 0..2000 {
        let step = Vec2::new(rng.gen_range(-90.0..90.0), rng.gen_range(-90.0..90.0));
        pos += step;
        let before = trail.visible_count();
        match trail.on_pointer_move(pos, step) {
            Some(p) => {
                assert_eq!(trail.slots()[p.slot].position, pos);
                newest = p.slot;
                placed += 1;
            }
            None => assert_eq!(trail.visible_count(), before),
        }
        assert!(trail.visible_count() <= 4);
        newest_is_on_top(&trail, newest);
    }
    assert!(placed > 100, "only {placed} placements");
    assert_eq!(trail.visible_count(), 4);
}

#[test]
fn fifth_placement_evicts_the_oldest_and_wraps() {
    let mut trail = MouseTrail::new(TrailConfig::default()).unwrap();
    let mut pos = Vec2::ZERO;
    trail.on_pointer_move(pos, Vec2::ZERO);
    for _ in 0..3 {
        pos += STEP;
        trail.on_pointer_move(pos, STEP);
    }
    assert_eq!(trail.window().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    pos += STEP;
    let fifth = trail.on_pointer_move(pos, STEP).unwrap();
    assert_eq!(fifth.slot, 4);
    assert_eq!(fifth.evicted, Some(0));
    assert!(!trail.slots()[0].visible);
    assert_eq!(trail.window().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    // Ring wrapped: slot 0 comes back after another full step.
    pos += STEP;
    let sixth = trail.on_pointer_move(pos, STEP).unwrap();
    assert_eq!(sixth.slot, 0);
    assert_eq!(sixth.evicted, Some(1));
    assert_eq!(trail.window().collect::<Vec<_>>(), vec![2, 3, 4, 0]);
}

#[test]
fn reset_hides_everything() {
    let mut trail = MouseTrail::new(TrailConfig::default()).unwrap();
    trail.on_pointer_move(Vec2::ZERO, Vec2::ZERO);
    trail.on_pointer_move(STEP, STEP);
    trail.reset();
    assert_eq!(trail.visible_count(), 0);
    assert!(trail.slots().iter().all(|s| !s.visible && s.z == 0));
    assert_eq!(trail.on_pointer_move(Vec2::ZERO, Vec2::ZERO).unwrap().slot, 0);
}

#[test]
fn carousel_shows_current_and_two_behind() {
    let mut rng = StdRng::seed_from_u64(7);
    let carousel = Carousel::new(CarouselConfig::default(), 5, &mut rng);
    assert_eq!(carousel.current(), 0);

    let front = carousel.frame(0).unwrap();
    assert_eq!((front.opacity, front.scale, front.z), (1.0, 1.0, 5));
    let behind = carousel.frame(4).unwrap();
    assert!((behind.opacity - 0.4).abs() < 1e-6);
    assert!((behind.scale - 0.75).abs() < 1e-6);
    assert_eq!(behind.z, 4);
    let further = carousel.frame(3).unwrap();
    assert!((further.opacity - 0.2).abs() < 1e-6);
    assert_eq!(further.z, 3);

    assert!(carousel.frame(2).is_none());
    assert!(carousel.frame(1).is_none());
    assert!(carousel.frame(5).is_none());
}

#[test]
fn carousel_advances_and_selects() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut carousel = Carousel::new(CarouselConfig::default(), 5, &mut rng);
    for expected in [1, 2, 3, 4, 0] {
        assert_eq!(carousel.advance(&mut rng), expected);
    }
    carousel.select(3);
    assert_eq!(carousel.current(), 3);
    carousel.select(9);
    assert_eq!(carousel.current(), 3);

    let pos = carousel.frame(3).unwrap().position_pct;
    for v in [pos.x, pos.y] {
        assert!((15.0..=85.0).contains(&v));
    }
}

#[test]
fn empty_carousel_is_inert() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut carousel = Carousel::new(CarouselConfig::default(), 0, &mut rng);
    assert!(carousel.is_empty());
    assert_eq!(carousel.advance(&mut rng), 0);
    assert!(carousel.frame(0).is_none());
    assert_eq!(carousel.distance(0), 0);
    assert_eq!(carousel.distance(5), 0);
}
