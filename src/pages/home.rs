use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::visualizer::{Variant, VisualizerCanvas};
use crate::components::{Footer, Header};

struct Feature {
	title: &'static str,
	description: &'static str,
	color: &'static str,
}

const FEATURES: [Feature; 3] = [
	Feature {
		title: "Visual Learning",
		description: "Complex concepts transformed into intuitive visual representations for faster comprehension.",
		color: "#4896ef",
	},
	Feature {
		title: "Personalized Curriculum",
		description: "AI-generated learning plans tailored to your goals, schedule, and learning style.",
		color: "#9d50ff",
	},
	Feature {
		title: "Any Subject Matter",
		description: "From technical subjects to creative arts, our AI can visualize any topic for enhanced learning.",
		color: "#50c9ff",
	},
];

const STEPS: [(&str, &str); 3] = [
	(
		"1. Upload Materials",
		"Simply upload your PDF study materials or textbooks to our platform.",
	),
	(
		"2. AI Processing",
		"Our AI analyzes the content and creates visual learning materials and a personalized curriculum.",
	),
	(
		"3. Start Learning",
		"Follow your personalized learning plan with visual aids that make complex concepts easy to understand.",
	),
];

/// Landing page: hero with the network canvas, how-it-works and features.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Header />
		<main>
			<section class="hero">
				<div class="container hero-split">
					<div class="hero-copy">
						<h1>"Learn Anything " <span class="accent">"Visually"</span> " with AI"</h1>
						<p>
							"Upload your study materials and let our AI transform them into visual learning experiences."
						</p>
						<p class="tagline">"\u{201c}One picture is worth a thousand words\u{201d}"</p>
						<div class="hero-actions">
							<A href="/learn">"Start Learning"</A>
							<A href="/about">"About Visualify"</A>
						</div>
					</div>
					<div class="hero-visual">
						<div class="viz-frame">
							<VisualizerCanvas variant=Variant::NeuralNetwork />
						</div>
					</div>
				</div>
			</section>

			<section class="section steps">
				<div class="container">
					<div class="section-head">
						<h2>"How Visualify Works"</h2>
						<p>"Transform your learning experience in three simple steps"</p>
					</div>
					<div class="card-grid three">
						{STEPS
							.iter()
							.map(|(title, description)| {
								view! {
									<div class="step-card">
										<h3>{*title}</h3>
										<p>{*description}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section class="section features">
				<div class="container">
					<div class="section-head">
						<h2>"Features Designed for Visual Learners"</h2>
						<p>"Everything you need to turn dense material into something you can see"</p>
					</div>
					<div class="card-grid three">
						{FEATURES
							.iter()
							.map(|feature| {
								view! {
									<div class="feature-card">
										<span
											class="feature-dot"
											style=format!("background-color: {}", feature.color)
										></span>
										<h3>{feature.title}</h3>
										<p>{feature.description}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section class="section cta">
				<div class="container center">
					<h2>"Ready to Transform How You Learn?"</h2>
					<p>
						"Start with any PDF and watch it become a visual, personalized course in minutes."
					</p>
					<div class="cta-action">
						<A href="/learn">"Try Visualify Now"</A>
					</div>
				</div>
			</section>
		</main>
		<Footer />
	}
}
