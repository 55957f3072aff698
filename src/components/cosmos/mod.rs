//! Layered cosmic background.
//!
//! Renders three stacked canvases behind the page:
//! - Static stars with a slow sinusoidal flicker, drawn through an offscreen buffer
//! - Drifting dust that leans with the pointer and scroll
//! - A fast starfield streaking right to left
//!
//! Point sets are regenerated on every window resize. Fill strings come from
//! the theme, so drawing a frame does not format colours per particle.

mod component;
pub mod field;
mod render;

pub use component::CosmicCanvases;
pub use field::{DustTint, ParticleField, Viewport};
pub use render::{Surface, Surfaces};
