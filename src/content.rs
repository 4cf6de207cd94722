//! Static site content: the mocked curriculum and its lesson bodies.
//!
//! A real deployment would fetch all of this from a backend after document
//! analysis. The upload flow on the learn page only simulates that step and
//! then serves the data below.

use crate::components::visualizer::Variant;

pub struct Chapter {
	pub id: &'static str,
	pub title: &'static str,
	pub duration: &'static str,
}

pub struct StudyPlan {
	pub id: &'static str,
	pub name: &'static str,
	pub description: &'static str,
	pub duration: &'static str,
}

pub struct Curriculum {
	pub title: &'static str,
	pub chapters: &'static [Chapter],
	pub plans: &'static [StudyPlan],
}

#[derive(PartialEq)]
pub struct Lesson {
	pub id: &'static str,
	pub title: &'static str,
	/// Trusted, locally authored HTML injected into the lesson body.
	pub body: &'static str,
	pub visualizer: Variant,
	pub prev: Option<&'static str>,
	pub next: Option<&'static str>,
}

pub static CURRICULUM: Curriculum = Curriculum {
	title: "Introduction to Machine Learning",
	chapters: &[
		Chapter { id: "ch1", title: "What is Machine Learning?", duration: "25 min" },
		Chapter { id: "ch2", title: "Supervised vs Unsupervised Learning", duration: "30 min" },
		Chapter { id: "ch3", title: "Neural Networks Fundamentals", duration: "45 min" },
		Chapter { id: "ch4", title: "Training Models: Best Practices", duration: "35 min" },
		Chapter { id: "ch5", title: "Evaluating Model Performance", duration: "30 min" },
	],
	plans: &[
		StudyPlan {
			id: "power",
			name: "Power Plan",
			description: "2 sessions of study/week",
			duration: "2 months",
		},
		StudyPlan {
			id: "balanced",
			name: "Balanced Plan",
			description: "1 session of study/week",
			duration: "4 months",
		},
		StudyPlan {
			id: "busy",
			name: "I'm Busy Plan",
			description: "1 short session of study/week",
			duration: "6 months",
		},
	],
};

pub static LESSONS: [Lesson; 5] = [
	Lesson {
		id: "ch1",
		title: "What is Machine Learning?",
		body: r#"
			<h2>Introduction to Machine Learning</h2>
			<p>Machine Learning is a subset of artificial intelligence that focuses on developing systems that can learn from and make decisions based on data.</p>
			<p>Unlike traditional programming where explicit instructions are provided, machine learning algorithms build a model based on sample data, known as training data, to make predictions or decisions without being explicitly programmed to do so.</p>
			<h3>Key Concepts</h3>
			<ul>
				<li><strong>Training:</strong> The process of teaching a model using data</li>
				<li><strong>Features:</strong> The input variables used by the model</li>
				<li><strong>Labels:</strong> The output or target variables the model tries to predict</li>
				<li><strong>Inference:</strong> Using the trained model to make predictions</li>
			</ul>
		"#,
		visualizer: Variant::NeuralNetwork,
		prev: None,
		next: Some("ch2"),
	},
	Lesson {
		id: "ch2",
		title: "Supervised vs Unsupervised Learning",
		body: r#"
			<h2>Types of Machine Learning</h2>
			<p>Machine learning can be categorized into several types based on how algorithms learn and make predictions.</p>
			<h3>Supervised Learning</h3>
			<p>In supervised learning, the algorithm is trained on labeled data, meaning that each training example has an input-output pair. The goal is to learn a mapping function that can predict the output for new, unseen inputs.</p>
			<h3>Unsupervised Learning</h3>
			<p>In unsupervised learning, the algorithm is given data without explicit instructions on what to do with it. The goal is to model the underlying structure or distribution of the data to learn more about it.</p>
			<h3>Key Differences</h3>
			<ul>
				<li><strong>Data:</strong> Supervised uses labeled data; unsupervised uses unlabeled data</li>
				<li><strong>Goal:</strong> Supervised predicts outputs; unsupervised finds patterns</li>
				<li><strong>Applications:</strong> Supervised for classification and regression; unsupervised for clustering and dimensionality reduction</li>
			</ul>
		"#,
		visualizer: Variant::Connections,
		prev: Some("ch1"),
		next: Some("ch3"),
	},
	Lesson {
		id: "ch3",
		title: "Neural Networks Fundamentals",
		body: r#"
			<h2>Neural Network Basics</h2>
			<p>Neural networks are computing systems inspired by the biological neural networks that constitute animal brains. They are a series of algorithms that endeavors to recognize underlying relationships in a set of data through a process that mimics the way the human brain operates.</p>
			<h3>Components of a Neural Network</h3>
			<ul>
				<li><strong>Neurons:</strong> The basic computational unit</li>
				<li><strong>Weights:</strong> Parameters that transform input data within the network</li>
				<li><strong>Activation Functions:</strong> Determine the output of a neural network node</li>
				<li><strong>Layers:</strong> Groups of neurons that process specific features</li>
			</ul>
			<h3>Types of Layers</h3>
			<ul>
				<li><strong>Input Layer:</strong> Receives the raw data</li>
				<li><strong>Hidden Layers:</strong> Perform computations and transfer information</li>
				<li><strong>Output Layer:</strong> Produces the final result</li>
			</ul>
		"#,
		visualizer: Variant::NeuralNetwork,
		prev: Some("ch2"),
		next: Some("ch4"),
	},
	Lesson {
		id: "ch4",
		title: "Training Models: Best Practices",
		body: r#"
			<h2>Training Neural Networks</h2>
			<p>Training a neural network involves adjusting its parameters (weights and biases) to minimize the difference between its predictions and the actual outputs.</p>
			<h3>Key Steps in Training</h3>
			<ol>
				<li><strong>Data Preparation:</strong> Cleaning, normalizing, and splitting data</li>
				<li><strong>Model Architecture:</strong> Designing the network structure</li>
				<li><strong>Forward Propagation:</strong> Computing predictions</li>
				<li><strong>Loss Calculation:</strong> Measuring prediction error</li>
				<li><strong>Backpropagation:</strong> Computing gradients</li>
				<li><strong>Parameter Update:</strong> Adjusting weights and biases</li>
			</ol>
			<h3>Common Challenges</h3>
			<ul>
				<li><strong>Overfitting:</strong> When the model learns noise in the training data</li>
				<li><strong>Underfitting:</strong> When the model is too simple to capture patterns</li>
				<li><strong>Vanishing/Exploding Gradients:</strong> Issues with gradient propagation</li>
			</ul>
		"#,
		visualizer: Variant::Particles,
		prev: Some("ch3"),
		next: Some("ch5"),
	},
	Lesson {
		id: "ch5",
		title: "Evaluating Model Performance",
		body: r#"
			<h2>Model Evaluation</h2>
			<p>Evaluating a machine learning model is crucial to understand its performance and how well it generalizes to unseen data.</p>
			<h3>Common Evaluation Metrics</h3>
			<h4>For Classification</h4>
			<ul>
				<li><strong>Accuracy:</strong> Proportion of correct predictions</li>
				<li><strong>Precision:</strong> Proportion of positive identifications that were actually correct</li>
				<li><strong>Recall:</strong> Proportion of actual positives that were identified correctly</li>
				<li><strong>F1 Score:</strong> Harmonic mean of precision and recall</li>
			</ul>
			<h4>For Regression</h4>
			<ul>
				<li><strong>Mean Absolute Error (MAE):</strong> Average absolute difference between predictions and actual values</li>
				<li><strong>Mean Squared Error (MSE):</strong> Average squared difference between predictions and actual values</li>
				<li><strong>R-squared:</strong> Proportion of variance in the dependent variable explained by the model</li>
			</ul>
		"#,
		visualizer: Variant::NeuralNetwork,
		prev: Some("ch4"),
		next: None,
	},
];

/// Look up one lesson by its chapter id.
pub fn lesson(id: &str) -> Option<&'static Lesson> {
	LESSONS.iter().find(|lesson| lesson.id == id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_chapter_has_a_lesson() {
		for chapter in CURRICULUM.chapters {
			let lesson = lesson(chapter.id).unwrap_or_else(|| panic!("missing {}", chapter.id));
			assert_eq!(lesson.title, chapter.title);
		}
	}

	#[test]
	fn prev_next_chain_is_consistent() {
		for entry in &LESSONS {
			if let Some(next) = entry.next {
				let next = lesson(next).expect("dangling next link");
				assert_eq!(next.prev, Some(entry.id));
			}
			if let Some(prev) = entry.prev {
				let prev = lesson(prev).expect("dangling prev link");
				assert_eq!(prev.next, Some(entry.id));
			}
		}
	}

	#[test]
	fn chain_covers_the_whole_course() {
		let first = LESSONS.iter().find(|l| l.prev.is_none()).expect("no first lesson");
		let mut seen = vec![first.id];
		let mut cursor = first;
		while let Some(next) = cursor.next {
			cursor = lesson(next).expect("broken chain");
			assert!(!seen.contains(&cursor.id), "cycle at {}", cursor.id);
			seen.push(cursor.id);
		}
		assert_eq!(seen.len(), LESSONS.len());
	}

	#[test]
	fn unknown_chapter_resolves_to_none() {
		assert!(lesson("ch99").is_none());
		assert!(lesson("").is_none());
	}
}
