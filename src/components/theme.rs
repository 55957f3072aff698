//! Colours and per-layer styling for the cosmic background and the cursor.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with an explicit alpha in `0.0..=1.0`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS colour string: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// CSS strings for one colour at evenly spaced alphas, built once so that
/// per-star fills do not format a new string every frame.
#[derive(Clone, Debug)]
pub struct AlphaRamp {
	steps: Vec<String>,
}

impl AlphaRamp {
	/// `levels` intervals between fully transparent and opaque.
	pub fn new(color: Color, levels: usize) -> Self {
		let levels = levels.max(1);
		let steps = (0..=levels)
			.map(|i| color.with_alpha(i as f64 / levels as f64).to_css())
			.collect();
		Self { steps }
	}

	/// The nearest precomputed step for `alpha`, clamped to `0.0..=1.0`.
	pub fn get(&self, alpha: f64) -> &str {
		let top = self.steps.len() - 1;
		let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
		&self.steps[(alpha * top as f64).round() as usize]
	}
}

/// Static star layer: white points with a flickering alpha.
#[derive(Clone, Debug)]
pub struct StarStyle {
	pub color: Color,
	/// Fill strings for [`color`](Self::color) at quantized alphas.
	pub ramp: AlphaRamp,
}

/// Drifting dust layer.
#[derive(Clone, Debug)]
pub struct DustStyle {
	/// Tint used by [`DustTint::Blue`](super::cosmos::DustTint) particles.
	pub blue: Color,
	/// Tint used by [`DustTint::Violet`](super::cosmos::DustTint) particles.
	pub violet: Color,
	/// Fixed translucency applied to both tints.
	pub alpha: f64,
}

/// Fast starfield layer.
#[derive(Clone, Debug)]
pub struct StreakStyle {
	/// Single fill shared by every streak.
	pub color: Color,
}

/// Trail particle tints for the magnetic cursor.
#[derive(Clone, Debug)]
pub struct TrailStyle {
	/// Background of [`TrailTint::White`](super::cursor::TrailTint) particles.
	pub white: Color,
	/// Background of [`TrailTint::Blue`](super::cursor::TrailTint) particles.
	pub blue: Color,
}

const STAR_ALPHA_LEVELS: usize = 64;

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub stars: StarStyle,
	pub dust: DustStyle,
	pub streaks: StreakStyle,
	pub trail: TrailStyle,
}

impl Theme {
	/// Deep-space blues and violets (default)
	pub fn stellar() -> Self {
		Self {
			stars: StarStyle {
				color: Color::rgb(255, 255, 255),
				ramp: AlphaRamp::new(Color::rgb(255, 255, 255), STAR_ALPHA_LEVELS),
			},
			dust: DustStyle {
				blue: Color::rgb(78, 164, 255),
				violet: Color::rgb(180, 160, 255),
				alpha: 0.38,
			},
			streaks: StreakStyle {
				color: Color::rgba(255, 255, 255, 0.9),
			},
			trail: TrailStyle {
				white: Color::rgba(255, 255, 255, 0.6),
				blue: Color::rgba(78, 164, 255, 0.5),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::stellar()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(78, 164, 255).to_css(), "#4ea4ff");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let dust = Theme::default().dust;
		assert_eq!(
			dust.violet.with_alpha(dust.alpha).to_css(),
			"rgba(180, 160, 255, 0.38)"
		);
	}

	#[test]
	fn alpha_ramp_snaps_to_nearest_level() {
		let ramp = AlphaRamp::new(Color::rgb(255, 255, 255), 64);
		assert_eq!(ramp.get(0.38), "rgba(255, 255, 255, 0.375)");
		assert_eq!(ramp.get(-0.2), "rgba(255, 255, 255, 0)");
		assert_eq!(ramp.get(1.7), "#ffffff");
		assert_eq!(ramp.get(f64::NAN), ramp.get(0.0));
		assert!(std::ptr::eq(ramp.get(0.5), ramp.get(0.501)));
	}
}
