//! Cursor tracking state: smoothed indicator position, visibility, hover
//! affordance and the trail pool.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::trail::{Expired, TrailParticle, TrailPool, spawn_count};

/// Fraction of the remaining distance covered by each smoothing step.
const SMOOTHING: f64 = 0.16;
/// Minimum accumulated time (ms) between smoothing steps.
const FRAME_GATE_MS: f64 = 11.0;
/// Largest step (s) fed to trail decay, so a stalled tab doesn't jump.
const MAX_DELTA: f64 = 0.05;
/// Indicator scale while over an interactive element.
const HOVER_SCALE: f64 = 1.25;

/// What changed during a [`CursorState::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
	/// The smoothing step ran and the indicator position changed.
	pub moved: bool,
	/// Trail slots that expired this frame and should be hidden.
	pub expired: Expired,
}

pub struct CursorState {
	pub target_x: f64,
	pub target_y: f64,
	/// Rendered (smoothed) position.
	pub x: f64,
	pub y: f64,
	pub visible: bool,
	pub hovering: bool,
	pub trail: TrailPool,
	frame_gate: f64,
	last_time: Option<f64>,
	rng: SmallRng,
}

impl CursorState {
	/// Starts hidden, resting at the centre of a `width` x `height` viewport.
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		let (cx, cy) = (width / 2.0, height / 2.0);
		Self {
			target_x: cx,
			target_y: cy,
			x: cx,
			y: cy,
			visible: false,
			hovering: false,
			trail: TrailPool::new(),
			frame_gate: 0.0,
			last_time: None,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Retarget the indicator and spawn trail particles proportional to the
	/// distance moved. `on_spawn` is called for each slot (re)activated.
	pub fn on_pointer_move<F>(&mut self, x: f64, y: f64, mut on_spawn: F) -> usize
	where
		F: FnMut(usize, &TrailParticle),
	{
		let (dx, dy) = (x - self.target_x, y - self.target_y);
		self.target_x = x;
		self.target_y = y;

		let count = spawn_count(dx.hypot(dy));
		for _ in 0..count {
			let idx = self.trail.spawn(&mut self.rng, x, y, dx, dy);
			on_spawn(idx, &self.trail.slots()[idx]);
		}

		self.visible = true;
		count
	}

	pub fn on_blur(&mut self) {
		self.visible = false;
	}

	pub fn set_hover(&mut self, hovering: bool) {
		self.hovering = hovering;
	}

	pub fn scale(&self) -> f64 {
		if self.hovering { HOVER_SCALE } else { 1.0 }
	}

	/// Advance to `now` (milliseconds). Trail decay runs every call; the
	/// smoothing step only once at least [`FRAME_GATE_MS`] has accumulated.
	pub fn tick(&mut self, now: f64) -> FrameReport {
		let elapsed = self.last_time.map_or(0.0, |last| (now - last).max(0.0));
		self.last_time = Some(now);

		let expired = self.trail.decay((elapsed / 1000.0).min(MAX_DELTA));

		self.frame_gate += elapsed;
		if self.frame_gate < FRAME_GATE_MS {
			return FrameReport {
				moved: false,
				expired,
			};
		}
		self.frame_gate = 0.0;

		self.x += (self.target_x - self.x) * SMOOTHING;
		self.y += (self.target_y - self.y) * SMOOTHING;

		FrameReport {
			moved: true,
			expired,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::trail::POOL_SIZE;
	use super::*;

	fn cursor() -> CursorState {
		let mut c = CursorState::new(1000.0, 800.0, 42);
		c.tick(0.0);
		c
	}

	#[test]
	fn starts_hidden_at_centre() {
		let c = CursorState::new(1000.0, 800.0, 1);
		assert!(!c.visible);
		assert_eq!((c.x, c.y), (500.0, 400.0));
		assert_eq!(c.trail.active_count(), 0);
	}

	#[test]
	fn move_shows_and_blur_hides() {
		let mut c = cursor();
		c.on_pointer_move(510.0, 400.0, |_, _| {});
		assert!(c.visible);
		c.on_blur();
		assert!(!c.visible);
		c.on_pointer_move(520.0, 400.0, |_, _| {});
		assert!(c.visible);
	}

	#[test]
	fn target_updates_immediately_position_lags() {
		let mut c = cursor();
		c.on_pointer_move(600.0, 400.0, |_, _| {});
		assert_eq!(c.target_x, 600.0);
		assert_eq!(c.x, 500.0);

		let report = c.tick(16.0);
		assert!(report.moved);
		assert!((c.x - 516.0).abs() < 1e-9);
	}

	#[test]
	fn frame_gate_holds_smoothing_until_eleven_ms() {
		let mut c = cursor();
		c.on_pointer_move(600.0, 400.0, |_, _| {});

		assert!(!c.tick(6.0).moved);
		assert_eq!(c.x, 500.0);
		assert!(c.tick(12.0).moved);
		assert!(c.x > 500.0);
		assert!(!c.tick(14.0).moved);
	}

	#[test]
	fn trail_decays_even_when_gated() {
		let mut c = cursor();
		c.on_pointer_move(501.0, 400.0, |_, _| {});
		let before = c.trail.slots()[0].life;

		let report = c.tick(5.0);
		assert!(!report.moved);
		assert!(c.trail.slots()[0].life < before);
	}

	#[test]
	fn spawn_count_follows_distance() {
		let mut c = cursor();
		let mut spawned = Vec::new();
		let n = c.on_pointer_move(590.0, 400.0, |idx, p| {
			assert!(p.active);
			spawned.push(idx);
		});
		assert_eq!(n, 3);
		assert_eq!(spawned, vec![0, 1, 2]);

		let n = c.on_pointer_move(0.0, 0.0, |_, _| {});
		assert_eq!(n, POOL_SIZE);
		assert_eq!(c.trail.active_count(), POOL_SIZE);
	}

	#[test]
	fn long_frames_are_clamped_for_decay() {
		let mut c = cursor();
		c.on_pointer_move(501.0, 400.0, |_, _| {});
		// 50ms is shorter than the minimum ttl, so the particle survives a stall.
		let report = c.tick(10_000.0);
		assert!(!report.expired[0]);
		assert!(c.trail.slots()[0].active);
	}

	#[test]
	fn hover_scales_indicator() {
		let mut c = cursor();
		assert_eq!(c.scale(), 1.0);
		c.set_hover(true);
		assert_eq!(c.scale(), 1.25);
		c.set_hover(false);
		assert_eq!(c.scale(), 1.0);
	}
}
