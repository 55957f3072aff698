//! stellar-nexus: a portfolio page with a living cosmic backdrop.
//!
//! This crate renders the portfolio content from an embedded JSON document and
//! layers optional motion on top: a three-canvas starfield, pointer parallax,
//! and a magnetic cursor with a pooled particle trail. Every motion layer is
//! gated on the browser's capabilities and the reduced-motion preference.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod environment;
pub mod frame_loop;
pub mod scroll;

pub use components::cosmos::CosmicCanvases;
pub use components::cursor::MagneticCursor;
pub use components::parallax::ParallaxLayers;
pub use content::SiteContent;
pub use environment::{Capabilities, Unavailable};
pub use scroll::set_smooth_scroll_position;

use components::sections::{
	ContactLinks, ExperienceTimeline, HeroLayers, HeroStats, NebulaLayers, ProjectGrid, QuickFacts,
	StackColumns,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("stellar-nexus: logging initialized");
}

/// Load page content from a script element with id="site-content".
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-content")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteContent::from_json(&json_text) {
		Ok(content) => {
			info!(
				"stellar-nexus: loaded {} roles, {} projects, {} skill groups",
				content.experience.len(),
				content.projects.len(),
				content.skills.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("stellar-nexus: failed to parse site content: {}", e);
			None
		}
	}
}

fn enabled(layer: &str, gate: Result<(), Unavailable>) -> bool {
	match gate {
		Ok(()) => true,
		Err(reason) => {
			info!("stellar-nexus: {layer} disabled: {reason}");
			false
		}
	}
}

/// The motion layers allowed by `capabilities`.
///
/// With reduced motion requested nothing is rendered at all: no canvases, no
/// cursor node, no parallax listeners.
#[component]
pub fn MotionLayers(capabilities: Capabilities) -> impl IntoView {
	let cosmos = enabled("cosmic canvases", capabilities.cosmos());
	let parallax = enabled("parallax", capabilities.parallax());
	let cursor = enabled("magnetic cursor", capabilities.cursor());

	view! {
		{cosmos.then(|| view! { <div class="cosmic-canvases"><CosmicCanvases /></div> })}
		{parallax.then(|| view! { <ParallaxLayers /> })}
		{cursor.then(|| view! { <MagneticCursor /> })}
	}
}

/// Main application component.
/// Loads content from the DOM, renders the sections and starts motion layers.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_site_content().unwrap_or_default();
	let capabilities = Capabilities::probe();
	info!("stellar-nexus: {:?}", capabilities);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Stellar Nexus" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="cosmic-bg" aria-hidden="true">
			<NebulaLayers />
		</div>
		<main class="page">
			<section class="hero">
				<HeroLayers />
				<div class="hero-copy">
					<h1>"Stellar Nexus"</h1>
					<HeroStats stats=content.hero_stats />
				</div>
			</section>
			<section id="experience" class="section">
				<h2 class="section-title">"Experience"</h2>
				<ExperienceTimeline entries=content.experience />
			</section>
			<section id="projects" class="section">
				<h2 class="section-title">"Projects"</h2>
				<ProjectGrid projects=content.projects />
			</section>
			<section id="stack" class="section">
				<h2 class="section-title">"Stack"</h2>
				<StackColumns groups=content.skills />
			</section>
			<section id="about" class="section about">
				<h2 class="section-title">"About"</h2>
				<QuickFacts facts=content.quick_facts />
			</section>
			<section id="contact" class="section">
				<h2 class="section-title">"Contact"</h2>
				<ContactLinks links=content.contact_links />
			</section>
		</main>
		<MotionLayers capabilities=capabilities />
	}
}
