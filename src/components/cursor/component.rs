//! Leptos component for the magnetic cursor and its trail.
//!
//! The indicator and the trail slots are plain `div`s positioned with CSS
//! transforms. Pointer, blur and hover listeners update [`CursorState`]; a
//! [`FrameLoop`] applies the smoothed state to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, PointerEvent};

use super::state::CursorState;
use super::trail::{POOL_SIZE, TrailParticle, TrailTint};
use crate::components::theme::Theme;
use crate::environment::entropy_seed;
use crate::frame_loop::FrameLoop;

/// Elements that switch the cursor into its hover affordance.
pub const INTERACTIVE_SELECTORS: &[&str] = &[
	"a",
	"button",
	".button",
	".cta",
	"[role=\"button\"]",
	".project-card",
	".stack-card",
	".timeline-card",
	".contact-card",
];

struct CursorContext {
	state: CursorState,
	indicator: HtmlElement,
	trail: Vec<HtmlElement>,
	theme: Theme,
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
	let _ = el.style().set_property(property, value);
}

fn show_spawned(el: &HtmlElement, p: &TrailParticle, theme: &Theme) {
	let size = format!("{}px", p.size);
	set_style(el, "width", &size);
	set_style(el, "height", &size);
	let tint = match p.tint {
		TrailTint::White => theme.trail.white,
		TrailTint::Blue => theme.trail.blue,
	};
	set_style(el, "background", &tint.to_css());
	set_style(el, "opacity", "1");
}

fn apply_frame(c: &CursorContext, moved: bool, expired: &[bool; POOL_SIZE]) {
	if moved {
		set_style(
			&c.indicator,
			"transform",
			&format!(
				"translate3d({}px, {}px, 0) translate(-50%, -50%) scale({})",
				c.state.x,
				c.state.y,
				c.state.scale()
			),
		);
	}

	for ((p, el), gone) in c.state.trail.slots().iter().zip(&c.trail).zip(expired) {
		if *gone {
			set_style(el, "opacity", "0");
		} else if p.active {
			set_style(el, "opacity", &p.rendered_opacity().to_string());
			set_style(
				el,
				"transform",
				&format!(
					"translate3d({}px, {}px, 0) translate(-50%, -50%) scale({})",
					p.x,
					p.y,
					p.scale()
				),
			);
		}
	}
}

fn set_visible(indicator: &HtmlElement, visible: bool) {
	set_style(indicator, "opacity", if visible { "1" } else { "0" });
}

/// A glowing dot that trails the mouse, sheds particles as it moves, and
/// grows over interactive elements.
///
/// Only mount this on fine, hover-capable pointers; see
/// [`Capabilities::cursor`](crate::environment::Capabilities::cursor).
#[component]
pub fn MagneticCursor(#[prop(default = None)] seed: Option<u64>) -> impl IntoView {
	let indicator_ref = NodeRef::<leptos::html::Div>::new();
	let trail_refs: [NodeRef<leptos::html::Div>; POOL_SIZE] = std::array::from_fn(|_| NodeRef::new());
	let context: Rc<RefCell<Option<CursorContext>>> = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(FrameLoop::new());
	let move_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> =
		Rc::new(RefCell::new(None));
	let blur_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let hover_cbs: Rc<RefCell<Vec<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(indicator) = indicator_ref.get() else {
			debug!("stellar-nexus: cursor node not mounted, skipping");
			return;
		};
		let trail: Option<Vec<HtmlElement>> = trail_refs
			.iter()
			.map(|r| r.get().map(HtmlElement::from))
			.collect();
		let Some(trail) = trail else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		let state = CursorState::new(
			size(window.inner_width()),
			size(window.inner_height()),
			seed.unwrap_or_else(entropy_seed),
		);
		*context.borrow_mut() = Some(CursorContext {
			state,
			indicator: indicator.into(),
			trail,
			theme: Theme::default(),
		});
		if let Some(body) = document.body() {
			let _ = body.class_list().add_1("cursor-hidden");
		}

		let context_move = context.clone();
		*move_cb.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			let kind = ev.pointer_type();
			if !kind.is_empty() && kind != "mouse" {
				return;
			}
			if let Some(ref mut c) = *context_move.borrow_mut() {
				let (trail, theme) = (&c.trail, &c.theme);
				c.state
					.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64, |idx, p| {
						show_spawned(&trail[idx], p, theme);
					});
				set_visible(&c.indicator, true);
			}
		}));
		if let Some(ref cb) = *move_cb.borrow() {
			let _ =
				document.add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}

		let context_blur = context.clone();
		*blur_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_blur.borrow_mut() {
				c.state.on_blur();
				set_visible(&c.indicator, false);
			}
		}));
		if let Some(ref cb) = *blur_cb.borrow() {
			let _ = window.add_event_listener_with_callback("blur", cb.as_ref().unchecked_ref());
		}

		let hover = |hovering: bool| {
			let context_hover = context.clone();
			Closure::<dyn FnMut()>::new(move || {
				if let Some(ref mut c) = *context_hover.borrow_mut() {
					c.state.set_hover(hovering);
					let _ = c
						.indicator
						.class_list()
						.toggle_with_force("cursor-hover", hovering);
				}
			})
		};
		let (enter, leave) = (hover(true), hover(false));
		let mut registered = 0;
		for selector in INTERACTIVE_SELECTORS {
			let Ok(nodes) = document.query_selector_all(selector) else {
				continue;
			};
			for i in 0..nodes.length() {
				if let Some(node) = nodes.get(i) {
					let _ = node
						.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
					let _ = node
						.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
					registered += 1;
				}
			}
		}
		hover_cbs.borrow_mut().extend([enter, leave]);
		info!("stellar-nexus: magnetic cursor ready, {registered} hover targets");

		let context_anim = context.clone();
		frame_loop.start(move |time| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let report = c.state.tick(time);
				apply_frame(c, report.moved, &report.expired);
			}
		});
	});

	view! {
		{trail_refs
			.into_iter()
			.map(|r| view! { <div node_ref=r class="cursor-particle" style="opacity: 0" /> })
			.collect_view()}
		<div node_ref=indicator_ref id="cursor" style="opacity: 0" />
	}
}
