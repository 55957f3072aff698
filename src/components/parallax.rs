//! Pointer parallax for depth-tagged page layers.
//!
//! Elements carrying a `data-depth` attribute inside the hero section and the
//! cosmic background follow the pointer with a slow ease. The hero also gets
//! `--cursor-x`/`--cursor-y` custom properties for its spotlight gradient.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, PointerEvent};

use crate::frame_loop::FrameLoop;

/// Fraction of the remaining distance eased per frame.
const EASING: f64 = 0.06;
const HERO_DEPTH_DEFAULT: f64 = 0.0;
const BACKGROUND_DEPTH_DEFAULT: f64 = 0.04;

/// Parse a `data-depth` value, falling back when absent or not a number.
pub fn parse_depth(raw: Option<&str>, default: f64) -> f64 {
	raw.and_then(|s| s.trim().parse::<f64>().ok())
		.filter(|d| d.is_finite())
		.unwrap_or(default)
}

/// Eased pointer position, normalized to -0.5..0.5 from the viewport centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxState {
	pub pointer_x: f64,
	pub pointer_y: f64,
	pub current_x: f64,
	pub current_y: f64,
}

impl ParallaxState {
	/// Record the pointer relative to a viewport of `inner_w` x `inner_h`.
	pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, inner_w: f64, inner_h: f64) {
		if inner_w <= 0.0 || inner_h <= 0.0 {
			return;
		}
		self.pointer_x = client_x / inner_w - 0.5;
		self.pointer_y = client_y / inner_h - 0.5;
	}

	/// Ease the current position one frame towards the pointer.
	pub fn tick(&mut self) {
		self.current_x += (self.pointer_x - self.current_x) * EASING;
		self.current_y += (self.pointer_y - self.current_y) * EASING;
	}

	/// Translation in px for a hero layer at `depth`.
	pub fn hero_offset(&self, depth: f64) -> (f64, f64) {
		(self.current_x * depth * 100.0, self.current_y * depth * 100.0)
	}

	/// Translation in px for a background layer at `depth`.
	pub fn background_offset(&self, depth: f64) -> (f64, f64) {
		(self.current_x * depth * 130.0, self.current_y * depth * 120.0)
	}
}

struct Layer {
	el: HtmlElement,
	depth: f64,
}

struct ParallaxContext {
	state: ParallaxState,
	hero: HtmlElement,
	hero_layers: Vec<Layer>,
	background_layers: Vec<Layer>,
}

fn collect_layers(document: &Document, selector: &str, default: f64) -> Vec<Layer> {
	let Ok(nodes) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.get(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.map(|el| {
			let depth = parse_depth(el.get_attribute("data-depth").as_deref(), default);
			Layer { el, depth }
		})
		.collect()
}

fn translate(el: &HtmlElement, (x, y): (f64, f64)) {
	let _ = el
		.style()
		.set_property("transform", &format!("translate3d({x}px, {y}px, 0)"));
}

/// Attaches the parallax effect to existing page markup. Renders nothing.
///
/// Does nothing when the page has no `.hero` section.
#[component]
pub fn ParallaxLayers() -> impl IntoView {
	let context: Rc<RefCell<Option<ParallaxContext>>> = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(FrameLoop::new());
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let Some(hero) = document
			.query_selector(".hero")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		else {
			debug!("stellar-nexus: no hero section, parallax skipped");
			return;
		};

		let hero_layers = collect_layers(&document, ".hero [data-depth]", HERO_DEPTH_DEFAULT);
		let background_layers =
			collect_layers(&document, ".cosmic-bg [data-depth]", BACKGROUND_DEPTH_DEFAULT);
		info!(
			"stellar-nexus: parallax on {} hero and {} background layers",
			hero_layers.len(),
			background_layers.len()
		);
		*context.borrow_mut() = Some(ParallaxContext {
			state: ParallaxState::default(),
			hero,
			hero_layers,
			background_layers,
		});

		let context_pointer = context.clone();
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);
				c.state
					.on_pointer_move(cx, cy, size(win.inner_width()), size(win.inner_height()));
				let rect = c.hero.get_bounding_client_rect();
				let style = c.hero.style();
				let _ = style.set_property("--cursor-x", &format!("{}px", cx - rect.left()));
				let _ = style.set_property("--cursor-y", &format!("{}px", cy - rect.top()));
			}
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ =
				document.add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}

		let context_anim = context.clone();
		frame_loop.start(move |_| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick();
				for layer in &c.hero_layers {
					translate(&layer.el, c.state.hero_offset(layer.depth));
				}
				for layer in &c.background_layers {
					translate(&layer.el, c.state.background_offset(layer.depth));
				}
			}
		});
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn depth_falls_back_on_missing_or_garbage() {
		assert_eq!(parse_depth(Some("0.3"), 0.0), 0.3);
		assert_eq!(parse_depth(Some(" 1 "), 0.0), 1.0);
		assert_eq!(parse_depth(None, 0.04), 0.04);
		assert_eq!(parse_depth(Some("deep"), 0.04), 0.04);
		assert_eq!(parse_depth(Some("NaN"), 0.04), 0.04);
	}

	#[test]
	fn easing_converges_towards_pointer() {
		let mut state = ParallaxState::default();
		state.on_pointer_move(1000.0, 0.0, 1000.0, 800.0);
		assert_eq!((state.pointer_x, state.pointer_y), (0.5, -0.5));

		state.tick();
		assert!((state.current_x - 0.03).abs() < 1e-12);

		let mut last_gap = f64::INFINITY;
		for _ in 0..200 {
			state.tick();
			let gap = (state.pointer_x - state.current_x).abs();
			assert!(gap < last_gap);
			last_gap = gap;
		}
		assert!(last_gap < 1e-4);
	}

	#[test]
	fn offsets_scale_with_depth() {
		let state = ParallaxState {
			current_x: 0.2,
			current_y: -0.1,
			..ParallaxState::default()
		};
		let (hx, hy) = state.hero_offset(0.5);
		assert!((hx - 10.0).abs() < 1e-9 && (hy + 5.0).abs() < 1e-9);
		let (bx, by) = state.background_offset(0.04);
		assert!((bx - 1.04).abs() < 1e-9 && (by + 0.48).abs() < 1e-9);
		assert_eq!(state.hero_offset(0.0), (0.0, 0.0));
	}
}
