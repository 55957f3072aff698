//! Portfolio content: the records rendered into the page sections.
//!
//! The content ships as a JSON document embedded in the page and is read once
//! at startup. Every collection is optional in the JSON and defaults to empty.

use serde::Deserialize;

/// A role on the experience timeline.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Experience {
	/// Job title.
	pub role: String,
	/// Company or organisation.
	pub org: String,
	/// Location and date range, shown above the title.
	pub timeframe: String,
	/// May contain `<br>` line breaks.
	pub summary: String,
	/// Technologies rendered as tags.
	#[serde(default)]
	pub stack: Vec<String>,
}

/// Which side of the timeline a card sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Left,
	Right,
}

impl Side {
	/// Cards alternate sides, starting on the left.
	pub fn for_index(index: usize) -> Self {
		if index % 2 == 0 { Side::Left } else { Side::Right }
	}

	/// Value of the card's `data-side` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Side::Left => "left",
			Side::Right => "right",
		}
	}
}

/// A project card.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
	/// Card title.
	pub name: String,
	/// Either `Category<br>Description` or a bare description.
	pub blurb: String,
	/// Tech line at the bottom of the card.
	pub highlight: String,
}

const PROJECT_ICONS: [&str; 4] = ["🤖", "🔌", "📊", "✨"];

impl Project {
	/// Split the blurb into its category eyebrow and description.
	pub fn split_blurb(&self) -> (&str, &str) {
		match self.blurb.split_once("<br>") {
			Some((category, description)) if !category.is_empty() && !category.contains('<') => {
				(category, description)
			}
			_ => ("Project", self.blurb.as_str()),
		}
	}

	/// Card icon for the project at `index`.
	pub fn icon(index: usize) -> &'static str {
		PROJECT_ICONS[index % PROJECT_ICONS.len()]
	}
}

/// A named column of skills.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillGroup {
	/// Group key, also shown as the eyebrow.
	pub group: String,
	pub skills: Vec<String>,
}

impl SkillGroup {
	/// Display title; `Tools` reads as `Workflow`.
	pub fn title(&self) -> &str {
		if self.group == "Tools" { "Workflow" } else { &self.group }
	}
}

/// A headline number in the hero.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
	pub value: String,
	pub label: String,
	#[serde(default)]
	pub detail: Option<String>,
}

/// A link in the contact section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactLink {
	pub label: String,
	pub href: String,
}

impl ContactLink {
	fn is_external(&self) -> bool {
		self.href.starts_with("http")
	}

	/// `_blank` for web links, `_self` for `mailto:` and the like.
	pub fn target(&self) -> &'static str {
		if self.is_external() { "_blank" } else { "_self" }
	}

	/// `rel` attribute for links opened in a new tab.
	pub fn rel(&self) -> Option<&'static str> {
		self.is_external().then_some("noreferrer noopener")
	}
}

/// Everything the page sections render.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteContent {
	pub experience: Vec<Experience>,
	pub projects: Vec<Project>,
	pub skills: Vec<SkillGroup>,
	pub quick_facts: Vec<String>,
	pub hero_stats: Vec<Stat>,
	pub contact_links: Vec<ContactLink>,
}

impl SiteContent {
	/// Parse the embedded content document.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"experience": [
			{
				"role": "Software Engineering Intern",
				"org": "SpanIdea",
				"timeframe": "Santa Clara · Summer 2025",
				"summary": "Built a chatbot.<br>Shipped APIs.",
				"stack": ["React", "Kotlin"]
			},
			{
				"role": "Web Developer",
				"org": "Local NGO",
				"timeframe": "2023",
				"summary": "Built a site."
			}
		],
		"projects": [
			{
				"name": "Credit Scoring Engine Prototype",
				"blurb": "ML + Full-Stack<br>A small-scale credit scoring pipeline.",
				"highlight": "Python · FastAPI"
			}
		],
		"skills": [
			{ "group": "Languages", "skills": ["Rust", "Python"] },
			{ "group": "Tools", "skills": ["Docker"] }
		],
		"quickFacts": ["CS @ UC Davis"],
		"heroStats": [{ "value": "10+", "label": "Projects shipped" }],
		"contactLinks": [
			{ "label": "Email", "href": "mailto:someone@example.com" },
			{ "label": "GitHub", "href": "https://github.com/example" }
		]
	}"#;

	#[test]
	fn parses_full_document() {
		let content = SiteContent::from_json(SAMPLE).unwrap();
		assert_eq!(content.experience.len(), 2);
		assert_eq!(content.experience[0].stack, vec!["React", "Kotlin"]);
		assert!(content.experience[1].stack.is_empty());
		assert_eq!(content.quick_facts, vec!["CS @ UC Davis"]);
		assert_eq!(content.hero_stats[0].detail, None);
		assert_eq!(content.skills[1].title(), "Workflow");
		assert_eq!(content.skills[0].title(), "Languages");
	}

	#[test]
	fn missing_sections_default_to_empty() {
		let content = SiteContent::from_json(r#"{ "quickFacts": ["hi"] }"#).unwrap();
		assert!(content.projects.is_empty());
		assert!(content.contact_links.is_empty());
		assert_eq!(content.quick_facts.len(), 1);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SiteContent::from_json("{ \"projects\": [ { \"name\": 3 } ] }").is_err());
		assert!(SiteContent::from_json("not json").is_err());
	}

	#[test]
	fn blurb_splits_on_first_break() {
		let content = SiteContent::from_json(SAMPLE).unwrap();
		assert_eq!(
			content.projects[0].split_blurb(),
			("ML + Full-Stack", "A small-scale credit scoring pipeline.")
		);

		let bare = Project {
			name: "x".into(),
			blurb: "<br>No category".into(),
			highlight: String::new(),
		};
		assert_eq!(bare.split_blurb(), ("Project", "<br>No category"));
	}

	#[test]
	fn icons_cycle() {
		assert_eq!(Project::icon(0), Project::icon(4));
		assert_ne!(Project::icon(0), Project::icon(1));
	}

	#[test]
	fn external_contacts_open_in_new_tab() {
		let content = SiteContent::from_json(SAMPLE).unwrap();
		let (mail, github) = (&content.contact_links[0], &content.contact_links[1]);
		assert_eq!((mail.target(), mail.rel()), ("_self", None));
		assert_eq!(
			(github.target(), github.rel()),
			("_blank", Some("noreferrer noopener"))
		);
	}

	#[test]
	fn timeline_sides_alternate() {
		let sides: Vec<_> = (0..4).map(|i| Side::for_index(i).as_str()).collect();
		assert_eq!(sides, ["left", "right", "left", "right"]);
	}
}
