//! Static page sections rendered from [`SiteContent`](crate::content::SiteContent).

use leptos::prelude::*;

use crate::content::{ContactLink, Experience, Project, Side, SkillGroup, Stat};

/// Nebula washes inside `.cosmic-bg`. Their `data-depth` sets how far each one
/// drifts with the pointer.
#[component]
pub fn NebulaLayers() -> impl IntoView {
	view! {
		<div class="nebula nebula-blue" data-depth="0.04"></div>
		<div class="nebula nebula-violet" data-depth="0.08"></div>
	}
}

/// Decorative hero backdrop: a spotlight that follows `--cursor-x`/`--cursor-y`
/// and two depth-tagged shapes that lean with the pointer.
#[component]
pub fn HeroLayers() -> impl IntoView {
	view! {
		<div class="hero-spotlight" aria-hidden="true"></div>
		<div class="hero-ring" data-depth="0.18" aria-hidden="true"></div>
		<div class="hero-orb" data-depth="0.35" aria-hidden="true"></div>
	}
}

/// Headline numbers shown under the hero copy.
#[component]
pub fn HeroStats(stats: Vec<Stat>) -> impl IntoView {
	view! {
		<div id="hero-stats" class="hero-stats">
			{stats
				.into_iter()
				.map(|stat| {
					view! {
						<article class="stat">
							<strong>{stat.value}</strong>
							<p>{stat.label}</p>
							{stat.detail.map(|detail| view! { <p class="muted">{detail}</p> })}
						</article>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Experience cards alternating left and right of the timeline spine.
#[component]
pub fn ExperienceTimeline(entries: Vec<Experience>) -> impl IntoView {
	view! {
		<div id="experience-timeline" class="timeline">
			{entries
				.into_iter()
				.enumerate()
				.map(|(index, item)| {
					let side = Side::for_index(index).as_str();
					view! {
						<article class="timeline-card" data-side=side>
							<p class="timeframe">{item.timeframe}</p>
							<h3>{item.role}</h3>
							<p class="org">{item.org}</p>
							<p class="body-text" inner_html=item.summary></p>
							<div class="tags">
								{item
									.stack
									.into_iter()
									.map(|tech| view! { <span class="tag">{tech}</span> })
									.collect_view()}
							</div>
						</article>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Project cards with a category eyebrow and a cycling icon.
#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
	view! {
		<div id="projects-grid" class="projects-grid">
			{projects
				.into_iter()
				.enumerate()
				.map(|(index, project)| {
					let (category, description) = project.split_blurb();
					let (category, description) = (category.to_string(), description.to_string());
					view! {
						<article class="project-card">
							<div class="project-card-image">{Project::icon(index)}</div>
							<div class="project-card-content">
								<p class="eyebrow">{category}</p>
								<h3>{project.name}</h3>
								<p class="body-text" inner_html=description></p>
								<p class="highlight">{project.highlight}</p>
							</div>
						</article>
					}
				})
				.collect_view()}
		</div>
	}
}

/// One orbit-styled card per skill group.
#[component]
pub fn StackColumns(groups: Vec<SkillGroup>) -> impl IntoView {
	view! {
		<div id="stack-columns" class="stack-columns">
			{groups
				.into_iter()
				.map(|group| {
					let title = group.title().to_string();
					view! {
						<article class="stack-card">
							<div class="orbit-ring"></div>
							<div class="orbit-glow"></div>
							<p class="eyebrow">{group.group}</p>
							<h3>{title}</h3>
							<ul>
								{group
									.skills
									.into_iter()
									.map(|skill| view! { <li>{skill}</li> })
									.collect_view()}
							</ul>
						</article>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Short bullet facts for the about section.
#[component]
pub fn QuickFacts(facts: Vec<String>) -> impl IntoView {
	view! {
		<ul id="quick-facts" class="quick-facts">
			{facts.into_iter().map(|fact| view! { <li>{fact}</li> }).collect_view()}
		</ul>
	}
}

/// Contact links; external ones open in a new tab.
#[component]
pub fn ContactLinks(links: Vec<ContactLink>) -> impl IntoView {
	view! {
		<div id="contact-links" class="contact-links">
			{links
				.into_iter()
				.map(|link| {
					let (target, rel) = (link.target(), link.rel());
					view! {
						<a href=link.href target=target rel=rel>
							{link.label}
						</a>
					}
				})
				.collect_view()}
		</div>
	}
}
