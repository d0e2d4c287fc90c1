// Host-side tests for eased page scrolling and the preloader word schedule.

use folio_core::content::GREETINGS;
use folio_core::error::FolioError;
use folio_core::preloader::{curve_path, Phase, Preloader, PreloaderConfig};
use folio_core::scroll::{ease_out_expo, SmoothScroll, SmoothScrollConfig};
use std::time::Duration;

fn scroller() -> SmoothScroll {
    SmoothScroll::new(SmoothScrollConfig::default(), 0.0, 4000.0)
}

/// Drive frames at 60 Hz from `t0` until idle; returns the last frame time.
fn run_to_rest(s: &mut SmoothScroll, t0: f64) -> f64 {
    let mut t = t0;
    for _ in 0..600 {
        if !s.is_animating() {
            break;
        }
        s.raf(t);
        t += 1.0 / 60.0;
    }
    t
}

#[test]
fn ease_out_expo_endpoints() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert_eq!(ease_out_expo(-2.0), 0.0);
    assert_eq!(ease_out_expo(3.0), 1.0);
    assert!((ease_out_expo(0.5) - 0.96875).abs() < 1e-12);
}

#[test]
fn initial_offset_is_clamped_to_limit() {
    let s = SmoothScroll::new(SmoothScrollConfig::default(), 9000.0, 4000.0);
    assert_eq!(s.offset(), 4000.0);
    let s = SmoothScroll::new(SmoothScrollConfig::default(), 10.0, -5.0);
    assert_eq!(s.limit(), 0.0);
    assert_eq!(s.offset(), 0.0);
}

#[test]
fn scroll_to_eases_and_lands_exactly() {
    let mut s = scroller();
    s.scroll_to(1000.0);
    assert_eq!(s.target(), 1000.0);
    // First frame stamps the start time.
    assert_eq!(s.raf(0.0), None);
    let mid = s.raf(0.5).unwrap();
    assert!(mid > 0.0 && mid < 1000.0);
    assert_eq!(s.raf(1.5), Some(1000.0));
    assert!(!s.is_animating());
    assert_eq!(s.raf(2.0), None);
}

#[test]
fn repeated_scroll_to_matches_a_single_call() {
    let mut once = scroller();
    let mut twice = scroller();
    once.scroll_to(1800.0);
    twice.scroll_to(1800.0);
    once.raf(0.0);
    twice.raf(0.0);
    once.raf(0.3);
    twice.raf(0.3);
    twice.scroll_to(1800.0);
    for t in [0.6, 0.9, 1.2, 1.6] {
        assert_eq!(once.raf(t), twice.raf(t));
    }
    assert_eq!(once.offset(), 1800.0);
    assert_eq!(twice.offset(), 1800.0);
}

#[test]
fn scroll_to_current_offset_does_not_animate() {
    let mut s = SmoothScroll::new(SmoothScrollConfig::default(), 300.0, 4000.0);
    s.scroll_to(300.0);
    assert!(!s.is_animating());
}

#[test]
fn wheel_accumulates_on_the_target() {
    let mut s = scroller();
    s.on_wheel(100.0);
    s.on_wheel(100.0);
    assert_eq!(s.target(), 200.0);
    s.on_wheel(1e9);
    assert_eq!(s.target(), 4000.0);
    s.on_wheel(-1e9);
    assert_eq!(s.target(), 0.0);
    s.on_wheel(f64::NAN);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn touch_uses_its_multiplier() {
    let mut s = scroller();
    s.on_touch(10.0);
    assert_eq!(s.target(), 20.0);
    run_to_rest(&mut s, 0.0);
    assert_eq!(s.offset(), 20.0);
}

#[test]
fn shrinking_limit_clamps_everything() {
    let mut s = scroller();
    s.scroll_to(3000.0);
    s.raf(0.0);
    s.raf(1.0);
    s.set_limit(500.0);
    assert!(s.offset() <= 500.0);
    assert_eq!(s.target(), 500.0);
    run_to_rest(&mut s, 1.1);
    assert_eq!(s.offset(), 500.0);
}

#[test]
fn native_scroll_syncs_only_when_idle() {
    let mut s = scroller();
    s.sync_native(700.0);
    assert_eq!(s.offset(), 700.0);
    s.scroll_to(100.0);
    s.sync_native(2000.0);
    assert_eq!(s.target(), 100.0);
}

#[test]
fn jump_to_cancels_animation() {
    let mut s = scroller();
    s.scroll_to(2500.0);
    s.raf(0.0);
    s.raf(0.2);
    s.jump_to(0.0);
    assert!(!s.is_animating());
    assert_eq!(s.offset(), 0.0);
}

#[test]
fn destroy_stops_frames_and_input() {
    let mut s = scroller();
    s.scroll_to(1000.0);
    s.raf(0.0);
    s.destroy();
    assert!(s.is_destroyed());
    assert_eq!(s.raf(0.5), None);
    s.on_wheel(100.0);
    s.scroll_to(50.0);
    assert!(!s.is_animating());
}

#[test]
fn preloader_reaches_last_word_at_2050ms() {
    let mut p = Preloader::new(PreloaderConfig::default(), GREETINGS).unwrap();
    assert_eq!(p.word(), GREETINGS[0]);
    assert_eq!(p.next_delay(), Some(Duration::from_millis(1000)));
    assert_eq!(p.advance(), Phase::Cycling);
    assert_eq!(p.next_delay(), Some(Duration::from_millis(150)));

    while p.phase() == Phase::Cycling {
        p.advance();
    }
    assert_eq!(p.index(), GREETINGS.len() - 1);
    assert_eq!(p.word(), GREETINGS[GREETINGS.len() - 1]);
    assert_eq!(p.elapsed(), Duration::from_millis(2050));
    assert_eq!(p.total_duration(), Duration::from_millis(2050));
    assert_eq!(p.reveal_after(), Duration::from_millis(2400));

    // Terminal: further timer fires change nothing.
    assert_eq!(p.next_delay(), None);
    assert_eq!(p.advance(), Phase::Complete);
    assert_eq!(p.elapsed(), Duration::from_millis(2050));
}

#[test]
fn preloader_edge_word_lists() {
    let empty: [&str; 0] = [];
    assert_eq!(
        Preloader::new(PreloaderConfig::default(), empty).unwrap_err(),
        FolioError::EmptyWordList
    );
    let single = Preloader::new(PreloaderConfig::default(), ["Hello"]).unwrap();
    assert!(single.is_complete());
    assert_eq!(single.total_duration(), Duration::ZERO);
    assert_eq!(single.next_delay(), None);
}

#[test]
fn curtain_curve_flattens_on_exit() {
    assert_eq!(
        curve_path(1000.0, 800.0, true),
        "M0 0 L1000 0 L1000 800 Q500 1100 0 800 L0 0"
    );
    assert_eq!(
        curve_path(1000.0, 800.0, false),
        "M0 0 L1000 0 L1000 800 Q500 800 0 800 L0 0"
    );
}
