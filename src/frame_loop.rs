//! `requestAnimationFrame` loop with an explicit start/stop handle.
//!
//! The per-frame callback receives the frame timestamp in milliseconds. The
//! callback only holds a weak reference back to the loop, so dropping the
//! [`FrameLoop`] cancels the pending frame and frees the closure.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::prelude::*;

#[derive(Default)]
struct Inner {
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
	handle: Cell<Option<i32>>,
	running: Cell<bool>,
}

impl Inner {
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(handle) => self.handle.set(Some(handle)),
				Err(_) => self.running.set(false),
			}
		}
	}
}

/// Drives a callback once per display frame until stopped.
#[derive(Default)]
pub struct FrameLoop {
	inner: Rc<Inner>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_running(&self) -> bool {
		self.inner.running.get()
	}

	/// Begin calling `on_frame` every frame. No-op if already running.
	pub fn start<F>(&self, mut on_frame: F)
	where
		F: FnMut(f64) + 'static,
	{
		if self.is_running() {
			return;
		}

		let weak: Weak<Inner> = Rc::downgrade(&self.inner);
		*self.inner.callback.borrow_mut() = Some(Closure::new(move |time: f64| {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			inner.handle.set(None);
			if !inner.running.get() {
				return;
			}
			on_frame(time);
			if inner.running.get() {
				inner.schedule();
			}
		}));

		self.inner.running.set(true);
		self.inner.schedule();
	}

	/// Cancel the pending frame. The loop can be started again afterwards.
	pub fn stop(&self) {
		self.inner.running.set(false);
		if let Some(handle) = self.inner.handle.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(handle);
			}
		}
		debug!("stellar-nexus: frame loop stopped");
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if self.is_running() {
			self.stop();
		}
	}
}
