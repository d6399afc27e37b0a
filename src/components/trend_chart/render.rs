#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::feed::{SERIES_LEN, TrendPoint, TrendSeries};

const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 56.0;
const GRID_LINES: u32 = 4;

/// A plotted metric of the series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
	Total,
	Positive,
	Negative,
	Neutral,
}

impl Metric {
	pub const ALL: [Metric; 4] = [Self::Total, Self::Positive, Self::Negative, Self::Neutral];

	pub fn value(self, point: &TrendPoint) -> u32 {
		match self {
			Self::Total => point.total,
			Self::Positive => point.positive,
			Self::Negative => point.negative,
			Self::Neutral => point.neutral,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Total => "Total Responses",
			Self::Positive => "Positive",
			Self::Negative => "Negative",
			Self::Neutral => "Neutral",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Self::Total => "#64b4ff",
			Self::Positive => "#4CAF50",
			Self::Negative => "#EF5350",
			Self::Neutral => "#FFC107",
		}
	}

	fn line_width(self) -> f64 {
		if self == Self::Total { 3.0 } else { 2.0 }
	}
}

/// Plot area and value scale for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
	/// Value mapped to the top edge.
	pub y_max: f64,
}

impl ChartFrame {
	pub fn new(series: &TrendSeries, width: f64, height: f64) -> Self {
		Self {
			left: MARGIN_LEFT,
			top: MARGIN_TOP,
			width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
			height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
			y_max: nice_ceiling(series.max_value()),
		}
	}

	pub fn x(&self, index: usize) -> f64 {
		self.left + self.width * index as f64 / (SERIES_LEN - 1) as f64
	}

	pub fn y(&self, value: u32) -> f64 {
		self.top + self.height * (1.0 - value as f64 / self.y_max)
	}

	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// Index of the point whose column is nearest to `x`, if `x` is inside the plot.
	pub fn nearest_index(&self, x: f64) -> Option<usize> {
		if x < self.left - self.step() / 2.0 || x > self.left + self.width + self.step() / 2.0 {
			return None;
		}
		let i = ((x - self.left) / self.step()).round();
		Some(i.clamp(0.0, (SERIES_LEN - 1) as f64) as usize)
	}

	fn step(&self) -> f64 {
		self.width / (SERIES_LEN - 1) as f64
	}
}

/// Smallest multiple of the grid count (and of 5 past 20) at or above `max`.
pub fn nice_ceiling(max: u32) -> f64 {
	let unit = if max > 20 { 5 * GRID_LINES } else { GRID_LINES };
	let max = max.max(1);
	(max.div_ceil(unit) * unit) as f64
}

pub fn render(
	series: &TrendSeries,
	hovered: Option<usize>,
	width: f64,
	height: f64,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let frame = ChartFrame::new(series, width, height);
	draw_grid(&frame, series, ctx);
	for metric in Metric::ALL {
		draw_line(&frame, series, metric, ctx);
	}
	if let Some(i) = hovered {
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.35)");
		ctx.set_line_width(1.0);
		ctx.begin_path();
		ctx.move_to(frame.x(i), frame.top);
		ctx.line_to(frame.x(i), frame.bottom());
		ctx.stroke();
	}
	draw_legend(&frame, width, height, ctx);
}

fn draw_grid(frame: &ChartFrame, series: &TrendSeries, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.12)");
	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(3.0),
		&JsValue::from_f64(3.0),
	));
	ctx.set_font("12px sans-serif");
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");

	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for step in 0..=GRID_LINES {
		let value = frame.y_max * step as f64 / GRID_LINES as f64;
		let y = frame.y(value.round() as u32);
		ctx.begin_path();
		ctx.move_to(frame.left, y);
		ctx.line_to(frame.left + frame.width, y);
		ctx.stroke();
		let _ = ctx.fill_text(&format!("{}", value.round()), frame.left - 8.0, y);
	}

	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for (i, point) in series.points().iter().enumerate() {
		let x = frame.x(i);
		ctx.begin_path();
		ctx.move_to(x, frame.top);
		ctx.line_to(x, frame.bottom());
		ctx.stroke();
		let _ = ctx.fill_text(&point.label, x, frame.bottom() + 8.0);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_text_align("start");
}

fn draw_line(
	frame: &ChartFrame,
	series: &TrendSeries,
	metric: Metric,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_stroke_style_str(metric.color());
	ctx.set_line_width(metric.line_width());
	ctx.begin_path();
	for (i, point) in series.points().iter().enumerate() {
		let (x, y) = (frame.x(i), frame.y(metric.value(point)));
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.stroke();

	ctx.set_fill_style_str(metric.color());
	let radius = metric.line_width() + 1.0;
	for (i, point) in series.points().iter().enumerate() {
		ctx.begin_path();
		let _ = ctx.arc(frame.x(i), frame.y(metric.value(point)), radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_legend(frame: &ChartFrame, width: f64, height: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("13px sans-serif");
	ctx.set_text_baseline("middle");
	let y = height - 14.0;
	let widths: Vec<f64> = Metric::ALL
		.iter()
		.map(|m| {
			ctx.measure_text(m.name())
				.map(|t| t.width())
				.unwrap_or(m.name().len() as f64 * 7.0)
				+ 40.0
		})
		.collect();
	let total: f64 = widths.iter().sum();
	let mut x = (frame.left + (width - frame.left - total) / 2.0).max(0.0);
	for (metric, w) in Metric::ALL.iter().zip(widths) {
		ctx.set_stroke_style_str(metric.color());
		ctx.set_line_width(metric.line_width());
		ctx.begin_path();
		ctx.move_to(x, y);
		ctx.line_to(x + 16.0, y);
		ctx.stroke();
		ctx.set_fill_style_str(metric.color());
		let _ = ctx.fill_text(metric.name(), x + 22.0, y);
		x += w;
	}
}
