use leptos::prelude::*;

use crate::components::visualizer::{Variant, VisualizerCanvas};
use crate::components::{Footer, Header};

const MISSION_ITEMS: [(&str, &str); 3] = [
	(
		"Simplify AI Learning",
		"Making complex AI concepts accessible to everyone through visual learning.",
	),
	(
		"Bridge Knowledge Gaps",
		"Creating resources that help people of all backgrounds understand AI technology.",
	),
	(
		"Inspire Innovation",
		"Encouraging the next generation of AI developers and enthusiasts.",
	),
];

const VALUES: [(&str, &str, &str); 3] = [
	(
		"Clarity & Simplicity",
		"We break down complex concepts into clear, understandable visuals that focus on essential components without oversimplifying.",
		"#4896ef",
	),
	(
		"Interactive Learning",
		"We believe in learning by doing, which is why our visualizations encourage exploration and experimentation.",
		"#9d50ff",
	),
	(
		"Technical Accuracy",
		"We ensure our visualizations are not just accessible but also technically sound and representative of real AI principles.",
		"#50c9ff",
	),
];

const TEAM: [(&str, &str); 4] = [
	("Pop Mihai", "Visual Designer"),
	("Georgescu Alexandru", "AI Developer"),
	("Vascuta Denis", "Interactive Developer"),
	("Balascan Gabriel", "AI Developer"),
];

/// Mission, values and team page.
#[component]
pub fn About() -> impl IntoView {
	view! {
		<Header />
		<main class="page">
			<section class="page-hero">
				<div class="container center">
					<h1>"About Visualify"</h1>
					<p>
						"Dedicated to making artificial intelligence concepts more accessible and understandable through visual learning."
					</p>
				</div>
			</section>

			<section class="section">
				<div class="container split">
					<div class="split-copy">
						<span class="section-tag">"Our Mission"</span>
						<h2>"Visualizing the Future of AI Learning"</h2>
						<p>
							"Visualify was created with a simple but powerful mission: to make artificial intelligence concepts accessible to everyone through visual learning. We believe that understanding AI shouldn't require a computer science degree, but should be approachable for curious minds from all backgrounds."
						</p>
						<ul class="fact-list">
							{MISSION_ITEMS
								.iter()
								.map(|(title, description)| {
									view! {
										<li>
											<strong>{*title}</strong>
											<span>{*description}</span>
										</li>
									}
								})
								.collect_view()}
						</ul>
					</div>
					<div class="split-visual">
						<div class="viz-frame">
							<VisualizerCanvas variant=Variant::NeuralNetwork />
						</div>
					</div>
				</div>
			</section>

			<section class="section shaded">
				<div class="container">
					<div class="section-head">
						<h2>"Our Core Values"</h2>
						<p>"Principles that guide our approach to teaching and visualizing AI concepts"</p>
					</div>
					<div class="card-grid three">
						{VALUES
							.iter()
							.map(|(title, description, color)| {
								view! {
									<div class="feature-card">
										<span
											class="feature-dot"
											style=format!("background-color: {color}")
										></span>
										<h3>{*title}</h3>
										<p>{*description}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section class="section">
				<div class="container">
					<div class="section-head">
						<h2>"Meet Our Team"</h2>
						<p>"Passionate experts combining AI knowledge with visual design excellence"</p>
					</div>
					<div class="card-grid four">
						{TEAM
							.iter()
							.map(|(name, role)| {
								view! {
									<div class="team-card">
										<div class="team-avatar">
											{name.chars().next().map(String::from).unwrap_or_default()}
										</div>
										<h3>{*name}</h3>
										<p>{*role}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section class="section cta">
				<div class="container center">
					<h2>"Get In Touch"</h2>
					<p>
						"Have questions, feedback, or ideas for new AI visualizations? We'd love to hear from you!"
					</p>
					<p class="contact-line">
						<a href="mailto:hello@visualify.example">"hello@visualify.example"</a>
					</p>
				</div>
			</section>
		</main>
		<Footer />
	}
}
