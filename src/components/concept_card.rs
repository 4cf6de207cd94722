use leptos::prelude::*;

/// Card introducing one electricity concept on the concepts page.
#[component]
pub fn ConceptCard(
	title: &'static str,
	description: &'static str,
	/// Accent colour as a `#rrggbb` hex string.
	color: &'static str,
	/// Fragment link to the matching interactive section.
	link: &'static str,
) -> impl IntoView {
	view! {
		<div class="concept-card">
			<div class="concept-icon" style=format!("background-color: {color}22")>
				<span class="concept-dot" style=format!("background-color: {color}")></span>
			</div>
			<h3>{title}</h3>
			<p>{description}</p>
			<a class="concept-link" href=link style=format!("color: {color}")>
				"Learn more \u{2192}"
			</a>
		</div>
	}
}
