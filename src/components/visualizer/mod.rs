//! Animated graph visualizer rendered onto a 2d canvas.
//!
//! The graph model, generators and renderer are plain Rust with no browser
//! types behind them, so the whole pipeline short of the real canvas is
//! unit-testable on the host. Only `component` touches the DOM.

mod component;
mod generate;
mod render;
mod rng;
mod state;
mod surface;
mod types;

pub use component::VisualizerCanvas;
pub use types::Variant;
