//! Drawing seam between the animator and the host canvas.

use web_sys::CanvasRenderingContext2d;

/// The 2d-context subset the visualizers draw with.
///
/// The browser context implements it by direct delegation; unit tests swap
/// in a recording surface to observe the emitted draw calls.
pub trait Surface2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn set_fill_style(&mut self, color: &str);
	fn set_stroke_style(&mut self, color: &str);
	fn set_line_width(&mut self, width: f64);
	fn fill(&mut self);
	fn stroke(&mut self);
	/// Install a radial-gradient fill centred on `(x, y)`, running from
	/// `inner` to `outer` radius through `stops` of `(offset, color)`.
	fn set_fill_radial_gradient(&mut self, x: f64, y: f64, inner: f64, outer: f64, stops: &[(f64, &str)]);
}

impl Surface2d for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::stroke_rect(self, x, y, width, height);
	}

	fn set_fill_style(&mut self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.set_stroke_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&mut self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn set_fill_radial_gradient(&mut self, x: f64, y: f64, inner: f64, outer: f64, stops: &[(f64, &str)]) {
		let Ok(gradient) = self.create_radial_gradient(x, y, inner, x, y, outer) else {
			return;
		};
		for (offset, color) in stops {
			let _ = gradient.add_color_stop(*offset as f32, color);
		}
		self.set_fill_style_canvas_gradient(&gradient);
	}
}

/// One recorded draw call.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
	ClearRect { x: f64, y: f64, width: f64, height: f64 },
	BeginPath,
	MoveTo { x: f64, y: f64 },
	LineTo { x: f64, y: f64 },
	Arc { x: f64, y: f64, radius: f64 },
	FillRect { x: f64, y: f64, width: f64, height: f64 },
	StrokeRect { x: f64, y: f64, width: f64, height: f64 },
	FillStyle(String),
	StrokeStyle(String),
	LineWidth(f64),
	Fill,
	Stroke,
	RadialGradient { x: f64, y: f64, inner: f64, outer: f64 },
}

/// Surface that records instead of drawing.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
	pub ops: Vec<SurfaceOp>,
}

#[cfg(test)]
impl Surface2d for RecordingSurface {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ops.push(SurfaceOp::ClearRect { x, y, width, height });
	}

	fn begin_path(&mut self) {
		self.ops.push(SurfaceOp::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(SurfaceOp::MoveTo { x, y });
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ops.push(SurfaceOp::LineTo { x, y });
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
		self.ops.push(SurfaceOp::Arc { x, y, radius });
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ops.push(SurfaceOp::FillRect { x, y, width, height });
	}

	fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ops.push(SurfaceOp::StrokeRect { x, y, width, height });
	}

	fn set_fill_style(&mut self, color: &str) {
		self.ops.push(SurfaceOp::FillStyle(color.to_string()));
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.ops.push(SurfaceOp::StrokeStyle(color.to_string()));
	}

	fn set_line_width(&mut self, width: f64) {
		self.ops.push(SurfaceOp::LineWidth(width));
	}

	fn fill(&mut self) {
		self.ops.push(SurfaceOp::Fill);
	}

	fn stroke(&mut self) {
		self.ops.push(SurfaceOp::Stroke);
	}

	fn set_fill_radial_gradient(&mut self, x: f64, y: f64, inner: f64, outer: f64, _stops: &[(f64, &str)]) {
		self.ops.push(SurfaceOp::RadialGradient { x, y, inner, outer });
	}
}
