//! Particle field simulation for the three background layers.
//!
//! All coordinates are device pixels. The point sets are rebuilt from scratch
//! on every resize rather than rescaled, so a resize always yields the same
//! cardinalities regardless of what was there before.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of flickering stars on the static layer.
pub const STATIC_STAR_COUNT: usize = 320;
/// Number of dust particles on the drift layer.
pub const DRIFT_PARTICLE_COUNT: usize = 110;
/// Number of streaking stars on the fast layer.
pub const FAST_STAR_COUNT: usize = 140;

/// Scale applied to the normalized pointer displacement from centre.
const POINTER_SCALE: f64 = 0.08;
const DRIFT_POINTER_GAIN: f64 = 1.5;
const DRIFT_SCROLL_GAIN: f64 = 0.04;
const FAST_POINTER_GAIN: f64 = 5.0;
const FAST_SCROLL_GAIN: f64 = 0.4;
/// Flicker phase advance per millisecond.
const FLICKER_RATE: f64 = 0.001;

/// Canvas size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	/// Device pixel ratio used to derive `width`/`height`.
	pub dpi: f64,
}

impl Viewport {
	/// Builds a viewport from logical window size and device pixel ratio.
	/// A missing or nonsensical ratio falls back to 1.
	pub fn from_logical(width: f64, height: f64, dpi: f64) -> Self {
		let dpi = if dpi.is_finite() && dpi > 0.0 { dpi } else { 1.0 };
		Self {
			width: width.max(0.0) * dpi,
			height: height.max(0.0) * dpi,
			dpi,
		}
	}

	/// Logical (CSS pixel) size.
	pub fn logical(&self) -> (f64, f64) {
		(self.width / self.dpi, self.height / self.dpi)
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			dpi: 1.0,
		}
	}
}

/// Re-enter from the opposite edge when a coordinate leaves `[0, bound]`.
pub fn wrap(value: f64, bound: f64) -> f64 {
	if value < 0.0 {
		bound
	} else if value > bound {
		0.0
	} else {
		value
	}
}

#[derive(Clone, Debug)]
pub struct StaticStar {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
	pub flicker: f64,
	pub seed: f64,
}

impl StaticStar {
	/// Flickered alpha at `time` (milliseconds), never negative.
	pub fn alpha_at(&self, time: f64) -> f64 {
		(self.alpha + (time * FLICKER_RATE + self.seed).sin() * self.flicker).max(0.0)
	}
}

/// Which of the two dust palettes a drift particle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DustTint {
	Blue,
	Violet,
}

#[derive(Clone, Debug)]
pub struct DriftParticle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub tint: DustTint,
}

#[derive(Clone, Debug)]
pub struct FastStar {
	pub x: f64,
	pub y: f64,
	pub speed: f64,
	pub size: f64,
}

/// Pointer displacement from the viewport centre, already scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
	pub x: f64,
	pub y: f64,
}

/// Owns every point set of the background plus the inputs that push them.
///
/// Mutated only through [`resize`](Self::resize),
/// [`on_pointer_move`](Self::on_pointer_move) and [`tick`](Self::tick).
pub struct ParticleField {
	pub viewport: Viewport,
	pub static_stars: Vec<StaticStar>,
	pub drift: Vec<DriftParticle>,
	pub fast: Vec<FastStar>,
	pub pointer: PointerOffset,
	last_scroll: f64,
	rng: SmallRng,
}

impl ParticleField {
	pub fn new(seed: u64) -> Self {
		Self {
			viewport: Viewport::default(),
			static_stars: Vec::with_capacity(STATIC_STAR_COUNT),
			drift: Vec::with_capacity(DRIFT_PARTICLE_COUNT),
			fast: Vec::with_capacity(FAST_STAR_COUNT),
			pointer: PointerOffset::default(),
			last_scroll: 0.0,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Adopt a new viewport and regenerate all three point sets.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		let (w, h) = (viewport.width, viewport.height);
		let rng = &mut self.rng;

		self.static_stars.clear();
		self.static_stars.extend((0..STATIC_STAR_COUNT).map(|_| StaticStar {
			x: rng.random::<f64>() * w,
			y: rng.random::<f64>() * h,
			radius: rng.random::<f64>() * 1.2 + 0.3,
			alpha: 0.25 + rng.random::<f64>() * 0.3,
			flicker: rng.random::<f64>() * 0.15,
			seed: rng.random::<f64>() * TAU,
		}));

		self.drift.clear();
		self.drift.extend((0..DRIFT_PARTICLE_COUNT).map(|_| DriftParticle {
			x: rng.random::<f64>() * w,
			y: rng.random::<f64>() * h,
			vx: (rng.random::<f64>() - 0.5) * 0.25,
			vy: (rng.random::<f64>() - 0.5) * 0.2,
			size: rng.random::<f64>() * 1.6 + 0.8,
			tint: if rng.random_bool(0.5) {
				DustTint::Blue
			} else {
				DustTint::Violet
			},
		}));

		self.fast.clear();
		self.fast.extend((0..FAST_STAR_COUNT).map(|_| FastStar {
			x: rng.random::<f64>() * w,
			y: rng.random::<f64>() * h,
			speed: 0.8 + rng.random::<f64>() * 1.6,
			size: rng.random::<f64>() * 1.2 + 0.4,
		}));
	}

	/// Record a pointer position given in client (CSS pixel) coordinates.
	pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, inner_w: f64, inner_h: f64) {
		if inner_w <= 0.0 || inner_h <= 0.0 {
			return;
		}
		self.pointer = PointerOffset {
			x: (client_x / inner_w - 0.5) * POINTER_SCALE,
			y: (client_y / inner_h - 0.5) * POINTER_SCALE,
		};
	}

	/// Advance the drift and fast layers one frame. Returns the scroll delta
	/// applied this frame.
	pub fn tick(&mut self, scroll: f64) -> f64 {
		let scroll_delta = scroll - self.last_scroll;
		self.last_scroll = scroll;

		let Viewport { width, height, dpi } = self.viewport;
		let pointer = self.pointer;

		for p in &mut self.drift {
			p.x = wrap(p.x + p.vx + pointer.x * DRIFT_POINTER_GAIN, width);
			p.y = wrap(
				p.y + p.vy + pointer.y * DRIFT_POINTER_GAIN + scroll_delta * DRIFT_SCROLL_GAIN,
				height,
			);
		}

		for s in &mut self.fast {
			s.x = wrap(s.x - (s.speed + scroll_delta * FAST_SCROLL_GAIN) * dpi, width);
			s.y = wrap(s.y + pointer.y * FAST_POINTER_GAIN, height);
		}

		scroll_delta
	}
}
