//! Scroll position sources for the particle background.
//!
//! A smooth-scroll library running in the page can push its virtual scroll
//! position through [`set_smooth_scroll_position`]; until it does, the native
//! `window.scrollY` is used.

use std::cell::Cell;

use wasm_bindgen::prelude::*;

thread_local! {
	static SMOOTH_SCROLL: Cell<Option<f64>> = const { Cell::new(None) };
}

/// Called from the page by a smooth-scroll provider on each of its scroll events.
#[wasm_bindgen]
pub fn set_smooth_scroll_position(position: f64) {
	SMOOTH_SCROLL.with(|s| s.set(position.is_finite().then_some(position)));
}

/// Something that knows the current vertical scroll offset.
pub trait ScrollSource {
	fn scroll_position(&self) -> f64;
}

/// The browser's own scroll offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
	fn scroll_position(&self) -> f64 {
		web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0)
	}
}

/// Prefers a pushed smooth-scroll position, falling back to `F`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageScroll<F = WindowScroll> {
	fallback: F,
}

impl<F: ScrollSource> PageScroll<F> {
	pub fn with_fallback(fallback: F) -> Self {
		Self { fallback }
	}
}

impl<F: ScrollSource> ScrollSource for PageScroll<F> {
	fn scroll_position(&self) -> f64 {
		SMOOTH_SCROLL
			.with(Cell::get)
			.unwrap_or_else(|| self.fallback.scroll_position())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(f64);

	impl ScrollSource for Fixed {
		fn scroll_position(&self) -> f64 {
			self.0
		}
	}

	#[test]
	fn pushed_position_overrides_fallback() {
		let source = PageScroll::with_fallback(Fixed(12.0));
		assert_eq!(source.scroll_position(), 12.0);

		set_smooth_scroll_position(340.0);
		assert_eq!(source.scroll_position(), 340.0);

		set_smooth_scroll_position(f64::NAN);
		assert_eq!(source.scroll_position(), 12.0);
	}
}
