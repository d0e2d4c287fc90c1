// Host-side tests for the frame-loop callback slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod loop_slot {
    include!("../src/loop_slot.rs");
}

use loop_slot::LoopSlot;
use std::cell::Cell;
use std::rc::Rc;

type Tick = Box<dyn FnMut()>;

/// A self-rescheduling tick like the RAF loop: it captures its own slot and
/// some per-frame state.
fn looping_tick(state: Rc<Cell<u32>>) -> LoopSlot<Tick> {
    let slot: LoopSlot<Tick> = LoopSlot::default();
    let own = slot.clone();
    slot.set(Box::new(move || {
        if !own.is_running() {
            return;
        }
        state.set(state.get() + 1);
        own.request(|_| Some(7));
    }));
    slot
}

#[test]
fn request_records_the_queued_id() {
    let slot = looping_tick(Rc::new(Cell::new(0)));
    slot.request(|_| Some(3));
    assert_eq!(slot.release(), Some(3));
    // Nothing left to cancel the second time.
    assert_eq!(slot.release(), None);
}

#[test]
fn release_frees_the_callback_and_its_captures() {
    let state = Rc::new(Cell::new(0));
    let slot = looping_tick(state.clone());
    assert_eq!(Rc::strong_count(&state), 2);

    slot.request(|_| Some(1));
    slot.release();
    assert!(!slot.is_running());
    // The tick and its clone of the slot are gone, breaking the cycle.
    assert_eq!(Rc::strong_count(&state), 1);
}

#[test]
fn released_slot_never_schedules_again() {
    let slot = looping_tick(Rc::new(Cell::new(0)));
    slot.release();
    let mut asked = false;
    slot.request(|_| {
        asked = true;
        Some(9)
    });
    assert!(!asked);
    assert_eq!(slot.release(), None);
}
