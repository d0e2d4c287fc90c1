//! Skills board: capsule rigid bodies in a walled arena.
//!
//! Bodies, contacts and continuous collision come from rapier. The board
//! owns spawning, the pointer spring and the pixel/metre conversion; drawing
//! reads `CapsuleBoard::views` and never touches simulation state.

pub mod board;
mod world;

pub use board::{
    capsule_width, pack_rows, ArenaSize, BodyView, CapsuleBoard, CapsuleSpec, PhysicsConfig,
};
