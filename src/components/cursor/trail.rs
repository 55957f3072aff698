//! Fixed-capacity pool of short-lived cursor trail particles.

use std::f64::consts::TAU;

use rand::Rng;

/// Number of trail slots. The pool never grows.
pub const POOL_SIZE: usize = 10;
/// Pointer travel (px) per spawned particle.
const SPAWN_SPACING: f64 = 30.0;
/// Particles spawn this fraction of the move vector behind the pointer.
const TRAIL_LAG: f64 = 0.25;
/// Positional jitter (px) around the spawn point.
const JITTER: f64 = 6.0;

/// Number of particles to spawn for a pointer move of `dist` pixels.
pub fn spawn_count(dist: f64) -> usize {
	let count = (dist / SPAWN_SPACING).ceil().max(1.0);
	(count as usize).min(POOL_SIZE)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailTint {
	#[default]
	White,
	Blue,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TrailParticle {
	pub active: bool,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Remaining life, 1.0 at spawn down to 0.0.
	pub life: f64,
	/// Time to live in seconds.
	pub ttl: f64,
	pub size: f64,
	pub opacity: f64,
	pub tint: TrailTint,
}

impl TrailParticle {
	/// Opacity to render with, fading linearly with remaining life.
	pub fn rendered_opacity(&self) -> f64 {
		if self.active {
			self.opacity * self.life
		} else {
			0.0
		}
	}

	/// Scale to render with; shrinks together with the fade.
	pub fn scale(&self) -> f64 {
		self.life
	}
}

/// Slots whose particle expired during a [`TrailPool::decay`] call.
pub type Expired = [bool; POOL_SIZE];

#[derive(Clone, Debug, Default)]
pub struct TrailPool {
	slots: [TrailParticle; POOL_SIZE],
}

impl TrailPool {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn slots(&self) -> &[TrailParticle; POOL_SIZE] {
		&self.slots
	}

	pub fn active_count(&self) -> usize {
		self.slots.iter().filter(|p| p.active).count()
	}

	/// First inactive slot; slot 0 is overwritten when every slot is busy.
	fn claim_slot(&self) -> usize {
		self.slots.iter().position(|p| !p.active).unwrap_or(0)
	}

	/// Activate a particle trailing a pointer that just moved by `(dx, dy)`
	/// to `(x, y)`. Returns the slot used.
	pub fn spawn<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64, dx: f64, dy: f64) -> usize {
		let idx = self.claim_slot();
		let angle = rng.random::<f64>() * TAU;
		let speed = 10.0 + rng.random::<f64>() * 40.0;

		self.slots[idx] = TrailParticle {
			active: true,
			x: x - dx * TRAIL_LAG + (rng.random::<f64>() - 0.5) * JITTER,
			y: y - dy * TRAIL_LAG + (rng.random::<f64>() - 0.5) * JITTER,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			life: 1.0,
			ttl: 0.25 + rng.random::<f64>() * 0.15,
			size: 2.0 + rng.random::<f64>() * 2.0,
			opacity: 0.4 + rng.random::<f64>() * 0.2,
			tint: if rng.random_bool(0.5) {
				TrailTint::White
			} else {
				TrailTint::Blue
			},
		};
		idx
	}

	/// Age every active particle by `dt` seconds.
	pub fn decay(&mut self, dt: f64) -> Expired {
		let mut expired = [false; POOL_SIZE];
		for (idx, p) in self.slots.iter_mut().enumerate() {
			if !p.active {
				continue;
			}
			p.life -= dt / p.ttl;
			if p.life <= 0.0 {
				p.life = 0.0;
				p.active = false;
				expired[idx] = true;
				continue;
			}
			p.x += p.vx * dt;
			p.y += p.vy * dt;
		}
		expired
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn spawn_count_is_at_least_one_and_capped() {
		assert_eq!(spawn_count(0.0), 1);
		assert_eq!(spawn_count(30.0), 1);
		assert_eq!(spawn_count(31.0), 2);
		assert_eq!(spawn_count(95.0), 4);
		assert_eq!(spawn_count(10_000.0), POOL_SIZE);
		assert_eq!(spawn_count(f64::INFINITY), POOL_SIZE);
	}

	#[test]
	fn spawn_count_is_monotonic() {
		let mut previous = spawn_count(30.5);
		let mut d = 30.5;
		while d < 1000.0 {
			d += 7.25;
			let next = spawn_count(d);
			assert!(next >= previous, "{d}: {next} < {previous}");
			previous = next;
		}
	}

	#[test]
	fn spawn_fills_first_free_slot_then_overwrites_slot_zero() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut pool = TrailPool::new();

		for expected in 0..POOL_SIZE {
			assert_eq!(pool.spawn(&mut rng, 0.0, 0.0, 0.0, 0.0), expected);
		}
		assert_eq!(pool.active_count(), POOL_SIZE);

		pool.slots[0].life = 0.3;
		assert_eq!(pool.spawn(&mut rng, 5.0, 5.0, 0.0, 0.0), 0);
		assert_eq!(pool.slots()[0].life, 1.0);
		assert_eq!(pool.active_count(), POOL_SIZE);
	}

	#[test]
	fn spawned_particles_are_within_ranges() {
		let mut rng = SmallRng::seed_from_u64(99);
		let mut pool = TrailPool::new();
		for _ in 0..50 {
			let idx = pool.spawn(&mut rng, 100.0, 100.0, 40.0, -20.0);
			let p = pool.slots()[idx];
			assert!((0.25..0.40).contains(&p.ttl));
			assert!((2.0..4.0).contains(&p.size));
			assert!((0.4..0.6).contains(&p.opacity));
			let speed = p.vx.hypot(p.vy);
			assert!((10.0 - 1e-9..50.0 + 1e-9).contains(&speed));
			// 0.25 of the move vector behind, +-3px jitter
			assert!((p.x - 90.0).abs() <= 3.0);
			assert!((p.y - 105.0).abs() <= 3.0);
			pool.decay(1.0);
		}
	}

	#[test]
	fn decay_is_monotonic_and_reaches_zero_after_ttl() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut pool = TrailPool::new();
		let idx = pool.spawn(&mut rng, 0.0, 0.0, 0.0, 0.0);
		let ttl = pool.slots()[idx].ttl;

		let dt = 1.0 / 60.0;
		let mut elapsed = 0.0;
		let mut last_opacity = pool.slots()[idx].rendered_opacity();
		let mut expired_at = None;
		while elapsed < 1.0 {
			let expired = pool.decay(dt);
			elapsed += dt;
			let opacity = pool.slots()[idx].rendered_opacity();
			assert!(opacity <= last_opacity);
			last_opacity = opacity;
			if expired[idx] {
				expired_at = Some(elapsed);
				break;
			}
		}

		let expired_at = expired_at.expect("particle never expired");
		assert!(expired_at + 1e-9 >= ttl);
		assert!(expired_at < ttl + dt + 1e-9);
		let p = pool.slots()[idx];
		assert!(!p.active);
		assert_eq!(p.life, 0.0);
		assert_eq!(p.rendered_opacity(), 0.0);

		pool.spawn(&mut rng, 0.0, 0.0, 0.0, 0.0);
		assert_eq!(pool.slots()[idx].life, 1.0);
	}

	#[test]
	fn active_count_never_exceeds_capacity() {
		let mut rng = SmallRng::seed_from_u64(11);
		let mut pool = TrailPool::new();
		for frame in 0..200 {
			for _ in 0..spawn_count(frame as f64 * 13.0) {
				pool.spawn(&mut rng, 0.0, 0.0, 3.0, 3.0);
			}
			pool.decay(0.016);
			assert!(pool.active_count() <= POOL_SIZE);
		}
	}
}
