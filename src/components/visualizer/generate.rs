//! Graph generators, one strategy per [`Variant`].
//!
//! Generators are pure: same variant, surface size and rng seed always
//! produce the same graph. All coordinates are in logical surface units.

use std::f64::consts::TAU;

use super::rng::Prng;
use super::types::{Edge, Graph, Node, NodeKind, Variant};

/// Node count per layer of the feed-forward sketch.
const NETWORK_LAYERS: [usize; 4] = [4, 6, 6, 2];
const CONNECTION_NODES: usize = 20;
const PARTICLE_NODES: usize = 30;
const CLOUD_NODES: usize = 40;
/// Chance that any given node pair in the electron cloud gets linked.
const CLOUD_EDGE_PROBABILITY: f64 = 0.03;
const RING_ELECTRONS: usize = 15;

/// Build the initial graph for `variant` on a `width` x `height` surface.
pub fn generate(variant: Variant, width: f64, height: f64, rng: &mut Prng) -> Graph {
	match variant {
		Variant::NeuralNetwork => neural_network(width, height, rng),
		Variant::Connections => connections(width, height, rng),
		Variant::Particles => particles(width, height, rng),
		Variant::Circuit => circuit(width, height),
		Variant::Electrons => electron_cloud(width, height, rng),
		Variant::Components => component_gallery(width, height),
	}
}

/// Layers spread evenly across the width, nodes evenly down the height,
/// with every node wired to all nodes of the previous layer.
fn neural_network(width: f64, height: f64, rng: &mut Prng) -> Graph {
	let mut graph = Graph::default();
	let layer_count = NETWORK_LAYERS.len();
	let mut layer_start = 0;

	for (layer, &count) in NETWORK_LAYERS.iter().enumerate() {
		let x = (layer + 1) as f64 * width / (layer_count + 1) as f64;
		let color = if layer == 0 {
			"rgba(64, 156, 255, 0.8)"
		} else if layer == layer_count - 1 {
			"rgba(157, 80, 255, 0.8)"
		} else {
			"rgba(100, 180, 255, 0.6)"
		};

		for i in 0..count {
			let y = (i + 1) as f64 * height / (count + 1) as f64;
			graph.nodes.push(Node {
				x,
				y,
				radius: 6.0,
				color: color.to_string(),
				vx: 0.0,
				vy: 0.0,
				kind: NodeKind::Plain,
			});

			if layer > 0 {
				let prev_start = layer_start - NETWORK_LAYERS[layer - 1];
				for from in prev_start..layer_start {
					graph.edges.push(Edge {
						from,
						to: layer_start + i,
						width: rng.range(0.5, 2.0),
						alpha: rng.range(0.1, 0.5),
						current: None,
					});
				}
			}
		}

		layer_start += count;
	}

	graph
}

/// Randomly scattered drifting nodes, each linked to one to three of the
/// nodes that follow it (wrapping around).
fn connections(width: f64, height: f64, rng: &mut Prng) -> Graph {
	let mut graph = Graph::default();

	for _ in 0..CONNECTION_NODES {
		let r = 100 + (rng.next_f64() * 100.0) as u8;
		let g = 100 + (rng.next_f64() * 100.0) as u8;
		graph.nodes.push(Node {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			radius: rng.range(2.0, 6.0),
			color: format!("rgba({r}, {g}, 255, 0.7)"),
			vx: rng.range(-0.5, 0.5),
			vy: rng.range(-0.5, 0.5),
			kind: NodeKind::Plain,
		});
	}

	for from in 0..CONNECTION_NODES {
		let picks = 1 + (rng.next_f64() * 3.0) as usize;
		for j in 0..picks {
			graph.edges.push(Edge {
				from,
				to: (from + j + 1) % CONNECTION_NODES,
				width: rng.range(0.5, 1.5),
				alpha: rng.range(0.1, 0.4),
				current: None,
			});
		}
	}

	graph
}

/// Unconnected dots with the widest speed spread of any variant.
fn particles(width: f64, height: f64, rng: &mut Prng) -> Graph {
	let mut graph = Graph::default();

	for _ in 0..PARTICLE_NODES {
		let r = 150 + (rng.next_f64() * 100.0) as u8;
		let g = 100 + (rng.next_f64() * 50.0) as u8;
		let alpha = rng.range(0.3, 0.8);
		graph.nodes.push(Node {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			radius: rng.range(1.0, 6.0),
			color: format!("rgba({r}, {g}, 255, {alpha})"),
			vx: rng.range(-1.0, 1.0),
			vy: rng.range(-1.0, 1.0),
			kind: NodeKind::Plain,
		});
	}

	graph
}

/// Four components at fixed fractional positions, joined into a single
/// conducting loop, plus a ring of electrons around the centre.
fn circuit(width: f64, height: f64) -> Graph {
	let mut graph = Graph::default();

	let parts = [
		(0.2, 0.5, 20.0, "#ffcc66", NodeKind::Battery),
		(0.4, 0.3, 15.0, "#aaddff", NodeKind::Resistor),
		(0.6, 0.3, 15.0, "#ffff99", NodeKind::Bulb),
		(0.8, 0.5, 15.0, "#dddddd", NodeKind::Switch),
	];
	for (fx, fy, radius, color, kind) in parts {
		graph.nodes.push(Node {
			x: width * fx,
			y: height * fy,
			radius,
			color: color.to_string(),
			vx: 0.0,
			vy: 0.0,
			kind,
		});
	}

	let ring_radius = width.min(height) * 0.3;
	for i in 0..RING_ELECTRONS {
		let angle = i as f64 / RING_ELECTRONS as f64 * TAU;
		// velocity tangent to the ring
		graph.nodes.push(Node {
			x: width / 2.0 + angle.cos() * ring_radius,
			y: height / 2.0 + angle.sin() * ring_radius,
			radius: 4.0,
			color: "#4488ff".to_string(),
			vx: -angle.sin() * 0.5,
			vy: angle.cos() * 0.5,
			kind: NodeKind::Electron,
		});
	}

	for (i, current) in [1.0, 0.8, 0.6, 1.0].into_iter().enumerate() {
		graph.edges.push(Edge {
			from: i,
			to: (i + 1) % 4,
			width: 3.0,
			alpha: 0.8,
			current: Some(current),
		});
	}

	graph
}

/// Dense field of electrons with occasional random pairings.
fn electron_cloud(width: f64, height: f64, rng: &mut Prng) -> Graph {
	let mut graph = Graph::default();

	for _ in 0..CLOUD_NODES {
		let alpha = rng.range(0.5, 1.0);
		graph.nodes.push(Node {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			radius: rng.range(3.0, 7.0),
			color: format!("rgba(68, 136, 255, {alpha})"),
			vx: rng.range(-0.75, 0.75),
			vy: rng.range(-0.75, 0.75),
			kind: NodeKind::Electron,
		});
	}

	for from in 0..CLOUD_NODES {
		for to in from + 1..CLOUD_NODES {
			if rng.next_f64() < CLOUD_EDGE_PROBABILITY {
				graph.edges.push(Edge {
					from,
					to,
					width: rng.range(0.5, 1.5),
					alpha: rng.range(0.1, 0.4),
					current: None,
				});
			}
		}
	}

	graph
}

/// One of each component kind on a 3x2 grid, unwired and motionless.
fn component_gallery(width: f64, height: f64) -> Graph {
	let mut graph = Graph::default();

	let gallery = [
		(NodeKind::Battery, "#ffcc66"),
		(NodeKind::Resistor, "#aaddff"),
		(NodeKind::Bulb, "#ffff99"),
		(NodeKind::Switch, "#dddddd"),
		(NodeKind::Capacitor, "#bbffbb"),
	];
	let cols = 3;
	let rows = 2;
	let margin_x = width * 0.15;
	let margin_y = height * 0.2;
	let spacing_x = (width - margin_x * 2.0) / (cols - 1) as f64;
	let spacing_y = (height - margin_y * 2.0) / (rows - 1) as f64;

	for (index, (kind, color)) in gallery.into_iter().enumerate() {
		graph.nodes.push(Node {
			x: margin_x + (index % cols) as f64 * spacing_x,
			y: margin_y + (index / cols) as f64 * spacing_y,
			radius: 20.0,
			color: color.to_string(),
			vx: 0.0,
			vy: 0.0,
			kind,
		});
	}

	graph
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [Variant; 6] = [
		Variant::NeuralNetwork,
		Variant::Connections,
		Variant::Particles,
		Variant::Circuit,
		Variant::Electrons,
		Variant::Components,
	];

	#[test]
	fn edges_reference_existing_nodes() {
		for variant in ALL {
			for seed in [0, 1, 99_999] {
				let graph = generate(variant, 640.0, 480.0, &mut Prng::new(seed));
				for edge in &graph.edges {
					assert!(edge.from < graph.nodes.len(), "{variant:?} edge.from out of range");
					assert!(edge.to < graph.nodes.len(), "{variant:?} edge.to out of range");
				}
			}
		}
	}

	#[test]
	fn same_seed_reproduces_the_same_graph() {
		for variant in ALL {
			let a = generate(variant, 800.0, 600.0, &mut Prng::new(1234));
			let b = generate(variant, 800.0, 600.0, &mut Prng::new(1234));
			assert_eq!(a, b, "{variant:?} not deterministic");
		}
	}

	#[test]
	fn network_layers_are_fully_bipartite() {
		let graph = generate(Variant::NeuralNetwork, 500.0, 300.0, &mut Prng::new(7));
		assert_eq!(graph.nodes.len(), 18);
		// 4*6 + 6*6 + 6*2 links between adjacent layers
		assert_eq!(graph.edges.len(), 72);
		assert!(graph.nodes.iter().all(|n| n.vx == 0.0 && n.vy == 0.0));
		// input, hidden and output layers carry distinct colours
		assert_ne!(graph.nodes[0].color, graph.nodes[4].color);
		assert_ne!(graph.nodes[4].color, graph.nodes[16].color);
		// layer x positions ascend left to right
		assert!(graph.nodes[0].x < graph.nodes[4].x);
		assert!(graph.nodes[10].x < graph.nodes[16].x);
	}

	#[test]
	fn connections_pick_one_to_three_links_per_node() {
		let graph = generate(Variant::Connections, 640.0, 480.0, &mut Prng::new(3));
		assert_eq!(graph.nodes.len(), 20);
		for from in 0..20 {
			let count = graph.edges.iter().filter(|e| e.from == from).count();
			assert!((1..=3).contains(&count), "node {from} has {count} links");
		}
	}

	#[test]
	fn circuit_is_a_four_part_loop_with_an_electron_ring() {
		let graph = generate(Variant::Circuit, 400.0, 400.0, &mut Prng::new(0));
		assert_eq!(graph.nodes.len(), 19);

		let kinds: Vec<_> = graph.nodes[..4].iter().map(|n| n.kind).collect();
		assert_eq!(
			kinds,
			[NodeKind::Battery, NodeKind::Resistor, NodeKind::Bulb, NodeKind::Switch]
		);
		assert_eq!(graph.nodes[0].x, 80.0);
		assert_eq!(graph.nodes[0].y, 200.0);

		assert_eq!(graph.edges.len(), 4);
		for (i, edge) in graph.edges.iter().enumerate() {
			assert_eq!((edge.from, edge.to), (i, (i + 1) % 4));
			assert!(edge.current.is_some_and(|c| c > 0.0));
		}

		let electrons: Vec<_> = graph
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Electron)
			.collect();
		assert_eq!(electrons.len(), 15);
		for node in electrons {
			// tangential launch: velocity is perpendicular to the ring radius
			let dot = (node.x - 200.0) * node.vx + (node.y - 200.0) * node.vy;
			assert!(dot.abs() < 1e-9, "electron velocity not tangential: {dot}");
		}
	}

	#[test]
	fn particles_and_gallery_have_no_edges() {
		let particles = generate(Variant::Particles, 640.0, 480.0, &mut Prng::new(11));
		assert_eq!(particles.nodes.len(), 30);
		assert!(particles.edges.is_empty());

		let gallery = generate(Variant::Components, 600.0, 400.0, &mut Prng::new(11));
		assert_eq!(gallery.nodes.len(), 5);
		assert!(gallery.edges.is_empty());
		assert!(gallery.nodes.iter().all(|n| n.vx == 0.0 && n.vy == 0.0));
	}

	#[test]
	fn gallery_fills_the_grid_row_major() {
		let graph = generate(Variant::Components, 600.0, 400.0, &mut Prng::new(0));
		// first row spans the margins, second row starts back at the left
		assert_eq!((graph.nodes[0].x, graph.nodes[0].y), (90.0, 80.0));
		assert_eq!((graph.nodes[2].x, graph.nodes[2].y), (510.0, 80.0));
		assert_eq!((graph.nodes[3].x, graph.nodes[3].y), (90.0, 320.0));
		assert_eq!(graph.nodes[4].kind, NodeKind::Capacitor);
	}

	#[test]
	fn cloud_links_are_sparse_and_forward_only() {
		let graph = generate(Variant::Electrons, 640.0, 480.0, &mut Prng::new(21));
		assert_eq!(graph.nodes.len(), 40);
		// 780 candidate pairs at 3%: anything near the expectation is fine,
		// but it must never approach the dense end
		assert!(graph.edges.len() < 100, "cloud got {} edges", graph.edges.len());
		for edge in &graph.edges {
			assert!(edge.from < edge.to);
		}
	}
}
