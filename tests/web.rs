//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use stellar_nexus::components::cosmos::{Surface, Surfaces};
use stellar_nexus::components::parallax::parse_depth;
use stellar_nexus::{App, Capabilities, MotionLayers, Unavailable};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn count(selector: &str) -> u32 {
	document().query_selector_all(selector).unwrap().length()
}

/// A canvas already bound to a non-2D context, so `get_context("2d")` is null.
fn claimed_canvas() -> HtmlCanvasElement {
	let canvas: HtmlCanvasElement = document()
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap();
	assert!(canvas.get_context("bitmaprenderer").unwrap().is_some());
	canvas
}

fn fresh_canvas() -> HtmlCanvasElement {
	document().create_element("canvas").unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn reduced_motion_creates_no_canvases_or_cursor() {
	let capabilities = Capabilities {
		reduced_motion: true,
		..Capabilities::default()
	};
	let before = count("canvas");
	leptos::mount::mount_to_body(move || view! { <MotionLayers capabilities=capabilities /> });

	assert_eq!(count("canvas"), before);
	assert!(document().get_element_by_id("cursor").is_none());
	assert_eq!(count(".cursor-particle"), 0);
}

#[wasm_bindgen_test]
fn full_capabilities_mount_three_layers_and_cursor_pool() {
	let before = count("canvas");
	leptos::mount::mount_to_body(|| {
		view! { <MotionLayers capabilities=Capabilities::default() /> }
	});

	assert_eq!(count("canvas"), before + 3);
	assert!(document().get_element_by_id("starfield-fast").is_some());
	assert!(document().get_element_by_id("cursor").is_some());
	assert!(count(".cursor-particle") >= 10);
}

#[wasm_bindgen_test]
fn coarse_pointer_skips_only_the_cursor() {
	let capabilities = Capabilities {
		supports_hover: false,
		..Capabilities::default()
	};
	let before = count("canvas");
	let cursors = count("#cursor");
	leptos::mount::mount_to_body(move || view! { <MotionLayers capabilities=capabilities /> });

	assert_eq!(count("canvas"), before + 3);
	assert_eq!(count("#cursor"), cursors);
}

#[wasm_bindgen_test]
fn canvas_without_2d_context_is_reported_not_panicked() {
	assert_eq!(
		Surface::new(claimed_canvas(), "stars-static").err(),
		Some(Unavailable::NoContext("stars-static"))
	);

	let surfaces = Surfaces::new(&document(), fresh_canvas(), claimed_canvas(), fresh_canvas());
	assert_eq!(surfaces.err(), Some(Unavailable::NoContext("particles-layer")));
}

#[wasm_bindgen_test]
fn page_carries_depth_tagged_parallax_layers() {
	leptos::mount::mount_to_body(App);

	let depths = |selector: &str, default: f64| -> Vec<f64> {
		let nodes = document().query_selector_all(selector).unwrap();
		(0..nodes.length())
			.filter_map(|i| nodes.get(i))
			.filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
			.map(|el| parse_depth(el.get_attribute("data-depth").as_deref(), default))
			.collect()
	};
	let hero = depths(".hero [data-depth]", 0.0);
	let background = depths(".cosmic-bg [data-depth]", 0.04);

	assert!(hero.len() >= 2);
	assert!(background.len() >= 2);
	assert!(hero.iter().chain(&background).all(|d| *d > 0.0));
}
