//! One-shot probe of what the host page and pointer device support.
//!
//! Every visual component is an optional enhancement: when a gate fails the
//! component is simply not created, and the reason is logged.

use std::fmt::{self, Display};

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

/// Why an optional enhancement was not started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unavailable {
	/// The user asked the system for reduced motion.
	ReducedMotion,
	/// No fine pointer or no hover, e.g. touch screens.
	CoarsePointer,
	/// A required element could not be found or created.
	MissingHost(&'static str),
	/// A canvas exists but yields no 2D context.
	NoContext(&'static str),
}

impl Display for Unavailable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Unavailable::ReducedMotion => write!(f, "reduced motion requested"),
			Unavailable::CoarsePointer => write!(f, "pointer lacks fine precision or hover"),
			Unavailable::MissingHost(name) => write!(f, "host element `{name}` missing"),
			Unavailable::NoContext(name) => write!(f, "canvas `{name}` has no 2d context"),
		}
	}
}

/// Capabilities and preferences, evaluated once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
	/// The page can create canvases with a 2D context.
	pub has_canvas: bool,
	/// The primary pointer is fine-grained and can hover.
	pub supports_hover: bool,
	/// `prefers-reduced-motion: reduce` is set.
	pub reduced_motion: bool,
}

impl Default for Capabilities {
	fn default() -> Self {
		Self {
			has_canvas: true,
			supports_hover: true,
			reduced_motion: false,
		}
	}
}

impl Capabilities {
	/// Query the browser. Anything that cannot be determined counts as absent,
	/// except reduced motion which counts as not requested.
	pub fn probe() -> Self {
		let Some(window) = web_sys::window() else {
			return Self {
				has_canvas: false,
				supports_hover: false,
				reduced_motion: false,
			};
		};

		Self {
			has_canvas: canvas_2d_available(&window),
			supports_hover: media_matches(&window, "(pointer: fine)")
				&& media_matches(&window, "(hover: hover)"),
			reduced_motion: media_matches(&window, "(prefers-reduced-motion: reduce)"),
		}
	}

	/// Gate for the layered particle background and parallax.
	pub fn cosmos(&self) -> Result<(), Unavailable> {
		if self.reduced_motion {
			return Err(Unavailable::ReducedMotion);
		}
		if !self.has_canvas {
			return Err(Unavailable::MissingHost("canvas"));
		}
		Ok(())
	}

	/// Gate for the pointer-driven parallax layers.
	pub fn parallax(&self) -> Result<(), Unavailable> {
		if self.reduced_motion {
			return Err(Unavailable::ReducedMotion);
		}
		Ok(())
	}

	/// Gate for the magnetic cursor.
	pub fn cursor(&self) -> Result<(), Unavailable> {
		if self.reduced_motion {
			return Err(Unavailable::ReducedMotion);
		}
		if !self.supports_hover {
			return Err(Unavailable::CoarsePointer);
		}
		Ok(())
	}
}

fn media_matches(window: &Window, query: &str) -> bool {
	window
		.match_media(query)
		.ok()
		.flatten()
		.map(|mql| mql.matches())
		.unwrap_or(false)
}

fn canvas_2d_available(window: &Window) -> bool {
	window
		.document()
		.and_then(|doc| doc.create_element("canvas").ok())
		.and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
		.and_then(|canvas| canvas.get_context("2d").ok().flatten())
		.is_some()
}

/// Seed for the particle generators, drawn from the browser's RNG and clock.
pub fn entropy_seed() -> u64 {
	let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
	(random << 32) ^ js_sys::Date::now() as u64
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reduced_motion_disables_everything() {
		let caps = Capabilities {
			reduced_motion: true,
			..Capabilities::default()
		};
		assert_eq!(caps.cosmos(), Err(Unavailable::ReducedMotion));
		assert_eq!(caps.parallax(), Err(Unavailable::ReducedMotion));
		assert_eq!(caps.cursor(), Err(Unavailable::ReducedMotion));
	}

	#[test]
	fn coarse_pointer_only_skips_cursor() {
		let caps = Capabilities {
			supports_hover: false,
			..Capabilities::default()
		};
		assert_eq!(caps.cursor(), Err(Unavailable::CoarsePointer));
		assert!(caps.cosmos().is_ok());
		assert!(caps.parallax().is_ok());
	}

	#[test]
	fn missing_canvas_only_skips_cosmos() {
		let caps = Capabilities {
			has_canvas: false,
			..Capabilities::default()
		};
		assert_eq!(caps.cosmos(), Err(Unavailable::MissingHost("canvas")));
		assert!(caps.cursor().is_ok());
	}

	#[test]
	fn reasons_read_naturally() {
		assert_eq!(
			Unavailable::NoContext("starfield-fast").to_string(),
			"canvas `starfield-fast` has no 2d context"
		);
	}
}
