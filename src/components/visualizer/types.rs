/// What a node depicts, which picks its draw routine and motion rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Plain,
	Electron,
	Resistor,
	Battery,
	Bulb,
	Switch,
	Capacitor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: String,
	pub vx: f64,
	pub vy: f64,
	pub kind: NodeKind,
}

/// Line between two nodes, by index into the graph's node list.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub from: usize,
	pub to: usize,
	pub width: f64,
	pub alpha: f64,
	/// Conducted current for circuit wires; `None` for decorative links.
	pub current: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

/// Scene generator a canvas runs. Each variant is a different strategy for
/// building the initial graph, and tweaks how edges and motion render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
	/// Feed-forward network with fully connected adjacent layers.
	NeuralNetwork,
	/// Scattered nodes with a few forward links each.
	Connections,
	/// Free-floating dots, no edges.
	Particles,
	/// Battery, resistor, bulb and switch wired in a loop, orbited by electrons.
	Circuit,
	/// Dense electron cloud with sparse random pairings.
	Electrons,
	/// Static gallery of circuit components laid out on a grid.
	Components,
}

impl Variant {
	/// Base stroke colour shared by every wire of the variant's family.
	pub fn edge_rgb(self) -> (u8, u8, u8) {
		match self {
			Self::NeuralNetwork | Self::Connections | Self::Particles => (100, 149, 237),
			Self::Circuit | Self::Electrons | Self::Components => (120, 185, 250),
		}
	}

	/// Whether current flows through wires, lighting bulbs and flow markers.
	pub fn energized(self) -> bool {
		matches!(self, Self::Circuit)
	}

	/// Whether a node of `kind` drifts each frame or stays where its
	/// generator placed it.
	pub fn drifts(self, kind: NodeKind) -> bool {
		match self {
			Self::NeuralNetwork | Self::Components => false,
			Self::Circuit => kind == NodeKind::Electron,
			Self::Connections | Self::Particles | Self::Electrons => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_electrons_drift_in_the_circuit() {
		assert!(Variant::Circuit.drifts(NodeKind::Electron));
		for kind in [NodeKind::Battery, NodeKind::Resistor, NodeKind::Bulb, NodeKind::Switch] {
			assert!(!Variant::Circuit.drifts(kind), "{kind:?} should stay put");
		}
	}

	#[test]
	fn structural_scenes_never_drift() {
		for kind in [NodeKind::Plain, NodeKind::Electron] {
			assert!(!Variant::NeuralNetwork.drifts(kind));
			assert!(!Variant::Components.drifts(kind));
		}
		assert!(Variant::Particles.drifts(NodeKind::Plain));
		assert!(Variant::Electrons.drifts(NodeKind::Electron));
	}

	#[test]
	fn only_the_circuit_is_energized() {
		assert!(Variant::Circuit.energized());
		for variant in [
			Variant::NeuralNetwork,
			Variant::Connections,
			Variant::Particles,
			Variant::Electrons,
			Variant::Components,
		] {
			assert!(!variant.energized());
		}
	}
}
