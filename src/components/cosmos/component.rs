//! Leptos component wrapping the three background canvases.
//!
//! The component creates the canvases, then wires up window resize and
//! document pointer-move listeners. A [`FrameLoop`] advances the particle
//! field and redraws every layer each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, PointerEvent, Window};

use super::field::{ParticleField, Viewport};
use super::render::{self, Surfaces};
use crate::components::theme::Theme;
use crate::environment::entropy_seed;
use crate::frame_loop::FrameLoop;
use crate::scroll::{PageScroll, ScrollSource};

/// Bundles the simulation with the surfaces it is drawn on.
struct CosmosContext {
	field: ParticleField,
	surfaces: Surfaces,
	theme: Theme,
}

fn window_viewport(window: &Window) -> Viewport {
	let logical = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::from_logical(
		logical(window.inner_width()),
		logical(window.inner_height()),
		window.device_pixel_ratio(),
	)
}

fn apply_viewport(context: &mut CosmosContext, document: &Document, viewport: Viewport) {
	if let Err(reason) = context.surfaces.resize(document, &viewport) {
		debug!("stellar-nexus: static buffer not recreated: {reason}");
	}
	context.field.resize(viewport);
}

/// Renders the layered starfield behind the page.
///
/// Three canvases are stacked: flickering static stars, drifting dust that
/// leans with the pointer and scroll, and a fast horizontal starfield. Pass
/// `seed` for a reproducible field; otherwise the browser RNG is used.
#[component]
pub fn CosmicCanvases(#[prop(default = None)] seed: Option<u64>) -> impl IntoView {
	let stars_ref = NodeRef::<leptos::html::Canvas>::new();
	let dust_ref = NodeRef::<leptos::html::Canvas>::new();
	let streaks_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CosmosContext>>> = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(FrameLoop::new());
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let (Some(stars), Some(dust), Some(streaks)) =
			(stars_ref.get(), dust_ref.get(), streaks_ref.get())
		else {
			debug!("stellar-nexus: cosmic canvases not mounted, skipping");
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		let surfaces = match Surfaces::new(&document, stars, dust, streaks) {
			Ok(s) => s,
			Err(reason) => {
				info!("stellar-nexus: cosmic canvases disabled: {reason}");
				return;
			}
		};

		let mut ctx = CosmosContext {
			field: ParticleField::new(seed.unwrap_or_else(entropy_seed)),
			surfaces,
			theme: Theme::default(),
		};
		apply_viewport(&mut ctx, &document, window_viewport(&window));
		info!(
			"stellar-nexus: cosmic canvases at {}x{} device px",
			ctx.field.viewport.width, ctx.field.viewport.height
		);
		*context.borrow_mut() = Some(ctx);

		let context_resize = context.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some(doc) = win.document() else {
				return;
			};
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				apply_viewport(c, &doc, window_viewport(&win));
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_pointer = context.clone();
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.field.on_pointer_move(
					ev.client_x() as f64,
					ev.client_y() as f64,
					size(win.inner_width()),
					size(win.inner_height()),
				);
			}
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ =
				document.add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}

		let context_anim = context.clone();
		let scroll: PageScroll = PageScroll::default();
		frame_loop.start(move |time| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.tick(scroll.scroll_position());
				render::render(&c.field, &c.surfaces, &c.theme, time);
			}
		});
	});

	view! {
		<canvas node_ref=stars_ref id="stars-static" class="cosmic-layer" aria-hidden="true" />
		<canvas node_ref=dust_ref id="particles-layer" class="cosmic-layer" aria-hidden="true" />
		<canvas node_ref=streaks_ref id="starfield-fast" class="cosmic-layer" aria-hidden="true" />
	}
}
