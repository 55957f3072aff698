//! Magnetic custom cursor.
//!
//! A tracking indicator eases towards the pointer, gated to run its smoothing
//! step at most every 11ms, while a fixed pool of trail particles is spawned in
//! proportion to pointer speed and fades out over a few hundred milliseconds.

mod component;
pub mod state;
pub mod trail;

pub use component::{INTERACTIVE_SELECTORS, MagneticCursor};
pub use state::CursorState;
pub use trail::{POOL_SIZE, TrailPool, TrailTint, spawn_count};
