//! Canvas drawing for the three background layers.
//!
//! Layers are drawn in a fixed order each frame:
//! 1. Static stars into the offscreen buffer, then blitted to the visible canvas
//! 2. Drifting dust
//! 3. Fast starfield

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::field::{DustTint, ParticleField, Viewport};
use crate::components::theme::Theme;
use crate::environment::Unavailable;

/// A canvas paired with its 2D context.
pub struct Surface {
	pub canvas: HtmlCanvasElement,
	pub ctx: CanvasRenderingContext2d,
}

impl Surface {
	/// Wrap `canvas`, failing with [`Unavailable::NoContext`] when it will not
	/// hand out a 2D context.
	pub fn new(canvas: HtmlCanvasElement, name: &'static str) -> Result<Self, Unavailable> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
			.ok_or(Unavailable::NoContext(name))?;
		Ok(Self { canvas, ctx })
	}

	fn detached(document: &Document, name: &'static str) -> Result<Self, Unavailable> {
		let canvas = document
			.create_element("canvas")
			.ok()
			.and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
			.ok_or(Unavailable::MissingHost(name))?;
		Self::new(canvas, name)
	}

	fn clear(&self, viewport: &Viewport) {
		self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
	}
}

/// The three visible layers plus the offscreen buffer behind the static one.
pub struct Surfaces {
	pub stars: Surface,
	pub dust: Surface,
	pub streaks: Surface,
	buffer: Surface,
}

impl Surfaces {
	/// Bind the three visible canvases and create the offscreen buffer.
	pub fn new(
		document: &Document,
		stars: HtmlCanvasElement,
		dust: HtmlCanvasElement,
		streaks: HtmlCanvasElement,
	) -> Result<Self, Unavailable> {
		Ok(Self {
			stars: Surface::new(stars, "stars-static")?,
			dust: Surface::new(dust, "particles-layer")?,
			streaks: Surface::new(streaks, "starfield-fast")?,
			buffer: Surface::detached(document, "static-buffer")?,
		})
	}

	/// Size every visible canvas to the viewport and recreate the buffer.
	pub fn resize(&mut self, document: &Document, viewport: &Viewport) -> Result<(), Unavailable> {
		let (css_w, css_h) = viewport.logical();
		for surface in [&self.stars, &self.dust, &self.streaks] {
			surface.canvas.set_width(viewport.width as u32);
			surface.canvas.set_height(viewport.height as u32);
			let style = surface.canvas.style();
			let _ = style.set_property("width", &format!("{css_w}px"));
			let _ = style.set_property("height", &format!("{css_h}px"));
		}

		let buffer = Surface::detached(document, "static-buffer")?;
		buffer.canvas.set_width(viewport.width as u32);
		buffer.canvas.set_height(viewport.height as u32);
		self.buffer = buffer;
		Ok(())
	}
}

/// Draws one complete frame. `time` is the frame timestamp in milliseconds.
pub fn render(field: &ParticleField, surfaces: &Surfaces, theme: &Theme, time: f64) {
	draw_static(field, surfaces, theme, time);
	draw_dust(field, &surfaces.dust, theme);
	draw_streaks(field, &surfaces.streaks, theme);
}

fn draw_static(field: &ParticleField, surfaces: &Surfaces, theme: &Theme, time: f64) {
	let vp = &field.viewport;
	let ctx = &surfaces.buffer.ctx;
	let ramp = &theme.stars.ramp;
	surfaces.buffer.clear(vp);

	for s in &field.static_stars {
		ctx.begin_path();
		ctx.set_fill_style_str(ramp.get(s.alpha_at(time)));
		let _ = ctx.arc(s.x, s.y, s.radius, 0.0, TAU);
		ctx.fill();
	}

	surfaces.stars.clear(vp);
	let _ = surfaces
		.stars
		.ctx
		.draw_image_with_html_canvas_element(&surfaces.buffer.canvas, 0.0, 0.0);
}

fn draw_dust(field: &ParticleField, surface: &Surface, theme: &Theme) {
	let vp = &field.viewport;
	let ctx = &surface.ctx;
	let blue = theme.dust.blue.with_alpha(theme.dust.alpha).to_css();
	let violet = theme.dust.violet.with_alpha(theme.dust.alpha).to_css();
	surface.clear(vp);

	for p in &field.drift {
		ctx.begin_path();
		ctx.set_fill_style_str(match p.tint {
			DustTint::Blue => &blue,
			DustTint::Violet => &violet,
		});
		let _ = ctx.arc(p.x, p.y, p.size * vp.dpi, 0.0, TAU);
		ctx.fill();
	}
}

fn draw_streaks(field: &ParticleField, surface: &Surface, theme: &Theme) {
	let vp = &field.viewport;
	let ctx = &surface.ctx;
	surface.clear(vp);
	ctx.set_fill_style_str(&theme.streaks.color.to_css());

	for s in &field.fast {
		ctx.begin_path();
		let _ = ctx.arc(s.x, s.y, s.size * vp.dpi, 0.0, TAU);
		ctx.fill();
	}
}
