use super::generate;
use super::render;
use super::rng::Prng;
use super::surface::Surface2d;
use super::types::{Graph, Variant};

/// Owns one canvas's graph and drives its frame-to-frame evolution.
pub struct VisualizerState {
	pub graph: Graph,
	pub variant: Variant,
	pub width: f64,
	pub height: f64,
	pub running: bool,
	seed: u32,
}

impl VisualizerState {
	pub fn new(variant: Variant, width: f64, height: f64, seed: u32) -> Self {
		let mut state = Self {
			graph: Graph::default(),
			variant,
			width,
			height,
			running: true,
			seed,
		};
		state.regenerate();
		state
	}

	/// Switch strategy and rebuild the graph from scratch. The state's seed
	/// is reused, so setting the variant it already has is a no-op in effect.
	pub fn set_variant(&mut self, variant: Variant) {
		self.variant = variant;
		self.regenerate();
	}

	fn regenerate(&mut self) {
		let mut rng = Prng::new(self.seed);
		self.graph = generate::generate(self.variant, self.width, self.height, &mut rng);
	}

	/// Track a new logical surface size. Node positions are kept as they
	/// are; only the motion bounds follow the new extent.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Advance drifting nodes by their velocity, then bounce at the walls.
	/// Positions are never clamped: a node beyond the edge comes back on
	/// its own under the flipped velocity.
	pub fn step(&mut self) {
		for node in &mut self.graph.nodes {
			if !self.variant.drifts(node.kind) {
				continue;
			}
			node.x += node.vx;
			node.y += node.vy;
			if node.x < node.radius || node.x > self.width - node.radius {
				node.vx = -node.vx;
			}
			if node.y < node.radius || node.y > self.height - node.radius {
				node.vy = -node.vy;
			}
		}
	}

	/// Stop producing frames. Idempotent; there is no restart.
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Draw one frame at `now_ms`. Does nothing once stopped.
	pub fn frame<S: Surface2d>(&mut self, surface: &mut S, now_ms: f64) {
		if !self.running {
			return;
		}
		render::render(self, surface, now_ms);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::visualizer::surface::{RecordingSurface, SurfaceOp};
	use crate::components::visualizer::types::{Node, NodeKind};

	fn lone_drifter(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> VisualizerState {
		VisualizerState {
			graph: Graph {
				nodes: vec![Node {
					x,
					y,
					radius,
					color: "#fff".to_string(),
					vx,
					vy,
					kind: NodeKind::Plain,
				}],
				edges: Vec::new(),
			},
			variant: Variant::Particles,
			width: 100.0,
			height: 100.0,
			running: true,
			seed: 0,
		}
	}

	#[test]
	fn step_integrates_velocity() {
		let mut state = lone_drifter(50.0, 50.0, 1.5, -2.0, 3.0);
		state.step();
		assert_eq!(state.graph.nodes[0].x, 51.5);
		assert_eq!(state.graph.nodes[0].y, 48.0);
	}

	#[test]
	fn wall_contact_flips_velocity_without_clamping() {
		let mut state = lone_drifter(1.0, 50.0, -4.0, 0.0, 2.0);
		state.step();
		let node = &state.graph.nodes[0];
		// moved out of bounds this frame; the flip brings it back next frame
		assert_eq!(node.x, -3.0);
		assert_eq!(node.vx, 4.0);

		state.step();
		assert_eq!(state.graph.nodes[0].x, 1.0);
	}

	#[test]
	fn far_wall_uses_the_live_bounds() {
		let mut state = lone_drifter(98.0, 50.0, 1.0, 0.0, 2.0);
		state.resize(300.0, 300.0);
		state.step();
		// 99.0 is nowhere near the 300-unit wall, so no bounce
		assert_eq!(state.graph.nodes[0].vx, 1.0);
	}

	#[test]
	fn anchored_variants_hold_still() {
		let mut state = VisualizerState::new(Variant::NeuralNetwork, 400.0, 300.0, 5);
		let before = state.graph.clone();
		state.step();
		assert_eq!(state.graph, before);
	}

	#[test]
	fn circuit_moves_electrons_but_not_components() {
		let mut state = VisualizerState::new(Variant::Circuit, 400.0, 400.0, 5);
		let before = state.graph.clone();
		state.step();
		for (i, (now, was)) in state.graph.nodes.iter().zip(&before.nodes).enumerate() {
			if was.kind == NodeKind::Electron {
				assert_ne!((now.x, now.y), (was.x, was.y), "electron {i} stuck");
			} else {
				assert_eq!((now.x, now.y), (was.x, was.y), "component {i} moved");
			}
		}
	}

	#[test]
	fn setting_the_same_variant_rebuilds_the_same_scene() {
		let mut state = VisualizerState::new(Variant::Connections, 640.0, 480.0, 77);
		let before = state.graph.clone();
		state.step();
		state.set_variant(Variant::Connections);
		assert_eq!(state.graph, before);
	}

	#[test]
	fn setting_a_new_variant_replaces_the_scene() {
		let mut state = VisualizerState::new(Variant::NeuralNetwork, 640.0, 480.0, 8);
		assert_eq!(state.graph.nodes.len(), 18);
		state.set_variant(Variant::Circuit);
		assert_eq!(state.graph.nodes.len(), 19);
		assert_eq!(state.variant, Variant::Circuit);
	}

	#[test]
	fn resize_keeps_the_graph() {
		let mut state = VisualizerState::new(Variant::Particles, 640.0, 480.0, 13);
		let before = state.graph.clone();
		state.resize(200.0, 900.0);
		assert_eq!(state.graph, before);
		assert_eq!((state.width, state.height), (200.0, 900.0));
	}

	#[test]
	fn frames_stop_after_stop() {
		let mut state = VisualizerState::new(Variant::Particles, 100.0, 100.0, 1);
		let mut surface = RecordingSurface::default();

		state.frame(&mut surface, 16.0);
		assert!(!surface.ops.is_empty());
		assert_eq!(
			surface.ops[0],
			SurfaceOp::ClearRect { x: 0.0, y: 0.0, width: 100.0, height: 100.0 }
		);

		state.stop();
		let drawn = surface.ops.len();
		state.frame(&mut surface, 32.0);
		state.frame(&mut surface, 48.0);
		assert_eq!(surface.ops.len(), drawn);
	}
}
