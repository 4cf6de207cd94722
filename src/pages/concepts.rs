use leptos::prelude::*;

use crate::components::visualizer::{Variant, VisualizerCanvas};
use crate::components::{ConceptCard, Footer, Header};

struct Concept {
	title: &'static str,
	description: &'static str,
	color: &'static str,
	link: &'static str,
}

const CONCEPTS: [Concept; 6] = [
	Concept {
		title: "Circuits",
		description: "Understand how electrical circuits work, from simple to complex, and how electrons flow through them.",
		color: "#4896ef",
		link: "#circuits",
	},
	Concept {
		title: "Voltage & Current",
		description: "Explore the relationship between voltage, current, and resistance in electrical systems.",
		color: "#9d50ff",
		link: "#voltage-current",
	},
	Concept {
		title: "Components",
		description: "Learn about resistors, capacitors, inductors, and other electrical components that make up circuits.",
		color: "#50c9ff",
		link: "#components",
	},
	Concept {
		title: "Batteries & Power",
		description: "Discover how batteries and power sources work to provide electrical energy.",
		color: "#ff6b6b",
		link: "#circuits",
	},
	Concept {
		title: "Conductors & Insulators",
		description: "Understand the differences between materials that conduct electricity and those that block it.",
		color: "#4cd964",
		link: "#voltage-current",
	},
	Concept {
		title: "Measurement & Units",
		description: "Learn about volts, amps, ohms, and other units used to measure electricity.",
		color: "#ffcc00",
		link: "#components",
	},
];

const COMPONENT_TYPES: [(&str, &str, &str); 4] = [
	(
		"Resistors",
		"Control the flow of current in a circuit by providing resistance.",
		"#4896ef",
	),
	(
		"Capacitors",
		"Store and release electrical energy in the form of an electric field.",
		"#9d50ff",
	),
	(
		"Inductors",
		"Store energy in a magnetic field when current flows through them.",
		"#ff6b6b",
	),
	(
		"Transistors",
		"Control the flow of current, acting as switches or amplifiers.",
		"#4cd964",
	),
];

/// Electricity concepts gallery with one live canvas per section.
#[component]
pub fn Concepts() -> impl IntoView {
	view! {
		<Header />
		<main class="page">
			<section class="page-hero">
				<div class="container center">
					<h1>"Electricity Concepts Visualized"</h1>
					<p>
						"Explore electrical concepts through interactive visualizations that make complex topics approachable and intuitive."
					</p>
					<div class="cta-action">
						<a class="button primary" href="#all-concepts">
							"Browse Concepts"
						</a>
					</div>
				</div>
			</section>

			<section id="all-concepts" class="section">
				<div class="container">
					<div class="section-head">
						<h2>"Key Electricity Concepts"</h2>
						<p>"Each concept includes interactive visualizations and clear explanations"</p>
					</div>
					<div class="card-grid three">
						{CONCEPTS
							.iter()
							.map(|concept| {
								view! {
									<ConceptCard
										title=concept.title
										description=concept.description
										color=concept.color
										link=concept.link
									/>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="circuits" class="section shaded">
				<div class="container split">
					<div class="split-copy">
						<span class="section-tag" style="color: #4896ef">
							"Circuits"
						</span>
						<h2>"Understanding Electrical Circuits"</h2>
						<p>
							"An electrical circuit is a path that electrons follow from a power source through conductors and components, and back to the source. Circuits enable us to control electrical energy and put it to work."
						</p>
						<p>
							"There are two main types of circuits: series and parallel, each with different properties and applications."
						</p>
						<ul class="fact-list">
							<li>
								<strong>"Series Circuits"</strong>
								<span>"Components connected in a single path, sharing the same current"</span>
							</li>
							<li>
								<strong>"Parallel Circuits"</strong>
								<span>"Components connected in multiple paths, sharing the same voltage"</span>
							</li>
							<li>
								<strong>"Closed vs. Open Circuits"</strong>
								<span>
									"Closed circuits allow current to flow, while open circuits break the path"
								</span>
							</li>
						</ul>
					</div>
					<div class="split-visual">
						<div class="viz-frame">
							<VisualizerCanvas variant=Variant::Circuit />
						</div>
					</div>
				</div>
				<div class="container">
					<h3 class="subsection-title">"Circuit Components"</h3>
					<div class="card-grid two">
						{COMPONENT_TYPES
							.iter()
							.map(|(name, description, color)| {
								view! {
									<div class="info-card">
										<h4 style=format!("color: {color}")>{*name}</h4>
										<p>{*description}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</section>

			<section id="voltage-current" class="section">
				<div class="container split reverse">
					<div class="split-visual">
						<div class="viz-frame">
							<VisualizerCanvas variant=Variant::Electrons />
						</div>
					</div>
					<div class="split-copy">
						<span class="section-tag" style="color: #9d50ff">
							"Voltage & Current"
						</span>
						<h2>"Understanding Voltage, Current, and Resistance"</h2>
						<p>
							"The flow of electricity is governed by three fundamental concepts: voltage, current, and resistance, which are related by Ohm's Law."
						</p>
						<div class="stack">
							<div class="info-card">
								<h4>"Voltage (V)"</h4>
								<p>
									"The electrical pressure or force that pushes electrons through a circuit, measured in volts (V)."
								</p>
							</div>
							<div class="info-card">
								<h4>"Current (I)"</h4>
								<p>
									"The flow of electrons through a conductor, measured in amperes or amps (A)."
								</p>
							</div>
							<div class="info-card">
								<h4>"Resistance (R)"</h4>
								<p>
									"The opposition to current flow in a circuit, measured in ohms (\u{3a9})."
								</p>
							</div>
						</div>
					</div>
				</div>
			</section>

			<section id="components" class="section shaded">
				<div class="container center">
					<span class="section-tag" style="color: #50c9ff">
						"Electrical Components"
					</span>
					<h2>"Exploring Electrical Components"</h2>
					<p class="section-lede">
						"Electrical components are the building blocks of circuits, each with specific functions to control, store, or transform electrical energy."
					</p>
				</div>
				<div class="container">
					<div class="viz-frame wide">
						<VisualizerCanvas variant=Variant::Components />
					</div>
					<div class="card-grid three">
						<div class="info-card">
							<h3>"Passive Components"</h3>
							<p>
								"Components that don't generate energy or require a power source, such as resistors, capacitors, and inductors. They modify or store energy in a circuit."
							</p>
						</div>
						<div class="info-card">
							<h3>"Active Components"</h3>
							<p>
								"Components that can control current flow and typically require a power source, such as transistors, diodes, and integrated circuits."
							</p>
						</div>
						<div class="info-card">
							<h3>"Electromechanical"</h3>
							<p>
								"Components that combine electrical and mechanical functions, such as switches, relays, and motors, allowing physical control of electricity."
							</p>
						</div>
					</div>
				</div>
			</section>

			<section class="section cta">
				<div class="container center">
					<h2>"More Concepts Coming Soon"</h2>
					<p>
						"We're continuously adding new electricity concepts and visualizations to help you understand the fascinating world of electrical science."
					</p>
					<div class="cta-action">
						<a class="button primary" href="#all-concepts">
							"Browse Available Concepts"
						</a>
					</div>
				</div>
			</section>
		</main>
		<Footer />
	}
}
