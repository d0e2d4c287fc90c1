// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_local_subtracts_origin() {
    let local = client_to_local(Vec2::new(150.0, 80.0), Vec2::new(100.0, 50.0));
    assert_eq!(local, Vec2::new(50.0, 30.0));
    // Points left of / above the element go negative rather than clamping.
    let outside = client_to_local(Vec2::new(10.0, 10.0), Vec2::new(100.0, 50.0));
    assert_eq!(outside, Vec2::new(-90.0, -40.0));
}

#[test]
fn movement_since_is_zero_on_first_sample() {
    assert_eq!(movement_since(None, Vec2::new(5.0, 5.0)), Vec2::ZERO);
    assert_eq!(
        movement_since(Some(Vec2::new(1.0, 2.0)), Vec2::new(4.0, -2.0)),
        Vec2::new(3.0, -4.0)
    );
}

#[test]
fn wheel_delta_scales_by_mode() {
    assert_eq!(wheel_delta_px(3.0, 0, 16.0, 720.0), 3.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 720.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 720.0), -720.0);
    // Unknown modes are treated as pixels.
    assert_eq!(wheel_delta_px(7.0, 9, 16.0, 720.0), 7.0);
}

#[test]
fn touch_delta_is_positive_when_finger_moves_up() {
    assert_eq!(touch_delta(500.0, 420.0), 80.0);
    assert_eq!(touch_delta(420.0, 500.0), -80.0);
}

#[test]
fn anchor_offset_is_document_relative() {
    assert_eq!(anchor_offset(250.0, 1000.0), 1250.0);
    assert_eq!(anchor_offset(-400.0, 1000.0), 600.0);
    // Never above the document top.
    assert_eq!(anchor_offset(-50.0, 0.0), 0.0);
}

#[test]
fn backing_size_applies_device_pixel_ratio() {
    assert_eq!(backing_size(600.0, 250.0, 2.0), (1200, 500));
    assert_eq!(backing_size(600.0, 250.0, 1.5), (900, 375));
    // Broken ratios fall back to 1; collapsed boxes still get one pixel.
    assert_eq!(backing_size(600.0, 250.0, 0.0), (600, 250));
    assert_eq!(backing_size(600.0, 250.0, f64::NAN), (600, 250));
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
}

#[test]
fn escape_closes_the_menu() {
    assert!(closes_menu("Escape"));
    assert!(closes_menu("Esc"));
    assert!(!closes_menu("Enter"));
    assert!(!closes_menu("e"));
}

#[test]
fn input_state_defaults_are_empty() {
    assert_eq!(PointerState::default().last, None);
    assert_eq!(TouchState::default().last_y, None);
}

#[test]
fn touch_scroll_is_suppressed_while_dragging_a_capsule() {
    let mut t = TouchState::default();
    // First sample only primes the gesture.
    assert_eq!(touch_scroll_delta(&mut t, 500.0, false), None);
    assert_eq!(touch_scroll_delta(&mut t, 460.0, false), Some(40.0));

    // Finger grabbed a capsule: samples are tracked but never scroll.
    assert_eq!(touch_scroll_delta(&mut t, 300.0, true), None);
    assert_eq!(touch_scroll_delta(&mut t, 200.0, true), None);
    assert_eq!(t.last_y, Some(200.0));

    // After release the next move scrolls from the last tracked sample.
    assert_eq!(touch_scroll_delta(&mut t, 190.0, false), Some(10.0));
}
