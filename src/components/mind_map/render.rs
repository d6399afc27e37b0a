use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::{DiagramLayout, NodeBox};
use super::state::DiagramViewState;
use super::types::{Classification, NodeKind};

const BOX_RADIUS: f64 = 8.0;
const HOVER_GROW: f64 = 1.05;

pub fn render(
	state: &DiagramViewState,
	layout: &DiagramLayout,
	width: f64,
	height: f64,
	ctx: &CanvasRenderingContext2d,
) {
	let background = ctx.create_linear_gradient(0.0, 0.0, width, height);
	let _ = background.add_color_stop(0.0, "#1a1a2e");
	let _ = background.add_color_stop(1.0, "#16213e");
	#[allow(deprecated)]
	ctx.set_fill_style(&background);
	ctx.fill_rect(0.0, 0.0, width, height);

	let (cx, cy, k) = (width / 2.0, height / 2.0, state.zoom_factor());
	ctx.save();
	let _ = ctx.translate(cx, cy);
	let _ = ctx.scale(k, k);
	let _ = ctx.translate(-cx, -cy);
	draw_connectors(layout, ctx);
	draw_nodes(state, layout, ctx);
	ctx.restore();

	draw_legend(width, height, ctx);
	draw_hint(width, ctx);
}

fn draw_connectors(layout: &DiagramLayout, ctx: &CanvasRenderingContext2d) {
	let (rx, ry) = layout.root.right_anchor();
	for placement in &layout.categories {
		let (x, y) = placement.node.left_anchor();
		ctx.set_stroke_style_str(&placement.node.classification.rgba(0.4));
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(rx, ry);
		ctx.quadratic_curve_to(rx + (x - rx) * 0.5, y, x, y);
		ctx.stroke();

		let (px, py) = placement.node.right_anchor();
		for annotation in &placement.annotations {
			let (ax, ay) = annotation.left_anchor();
			ctx.set_stroke_style_str(&annotation.classification.rgba(0.4));
			ctx.set_line_width(1.5);
			ctx.begin_path();
			ctx.move_to(px, py);
			ctx.quadratic_curve_to(px + (ax - px) * 0.5, ay, ax, ay);
			ctx.stroke();
		}
	}
}

fn draw_nodes(state: &DiagramViewState, layout: &DiagramLayout, ctx: &CanvasRenderingContext2d) {
	draw_box(&layout.root, state.is_hovered(&layout.root.id), false, ctx);
	for placement in &layout.categories {
		let hovered = state.is_hovered(&placement.node.id);
		draw_box(&placement.node, hovered, placement.expanded, ctx);
		for annotation in &placement.annotations {
			draw_box(annotation, state.is_hovered(&annotation.id), false, ctx);
		}
	}
}

fn draw_box(node: &NodeBox, hovered: bool, expanded: bool, ctx: &CanvasRenderingContext2d) {
	let scale = if hovered || expanded { HOVER_GROW } else { 1.0 };
	let (w, h) = (node.width * scale, node.height * scale);
	let (x, y) = (
		node.x - (w - node.width) / 2.0,
		node.y - (h - node.height) / 2.0,
	);

	let (fill, stroke, line_width, font) = match node.kind {
		NodeKind::Root => (
			"rgba(100, 180, 255, 0.2)".to_owned(),
			"rgba(100, 180, 255, 1)".to_owned(),
			2.0,
			"bold 16px sans-serif",
		),
		NodeKind::Category => (
			node.classification.rgba(0.08),
			node.classification.rgba(if expanded { 1.0 } else { 0.38 }),
			2.0,
			"600 14px sans-serif",
		),
		NodeKind::Annotation => (
			node.classification.rgba(0.13),
			node.classification.rgba(0.38),
			1.0,
			"12px sans-serif",
		),
	};

	if hovered {
		ctx.set_shadow_color("rgba(0, 0, 0, 0.5)");
		ctx.set_shadow_blur(12.0);
	}
	rounded_rect(ctx, x, y, w, h, BOX_RADIUS);
	ctx.set_fill_style_str(&fill);
	ctx.fill();
	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_color("transparent");
	ctx.set_stroke_style_str(&stroke);
	ctx.set_line_width(line_width);
	ctx.stroke();

	let padding = match node.kind {
		NodeKind::Root => 24.0,
		NodeKind::Category => 16.0,
		NodeKind::Annotation => 12.0,
	};
	ctx.set_fill_style_str("white");
	ctx.set_font(font);
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.label, x + padding, y + h / 2.0);

	if node.kind == NodeKind::Category {
		draw_chevron(ctx, x + w - 18.0, y + h / 2.0, expanded, node.classification);
	}
}

fn draw_chevron(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	expanded: bool,
	classification: Classification,
) {
	ctx.save();
	let _ = ctx.translate(x, y);
	if expanded {
		let _ = ctx.rotate(PI / 2.0);
	}
	ctx.set_stroke_style_str(classification.color());
	ctx.set_line_width(2.0);
	ctx.begin_path();
	ctx.move_to(-3.0, -5.0);
	ctx.line_to(3.0, 0.0);
	ctx.line_to(-3.0, 5.0);
	ctx.stroke();
	ctx.restore();
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

fn draw_legend(width: f64, height: f64, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (150.0, 96.0);
	let (x, y) = (width - w - 16.0, height - h - 16.0);
	rounded_rect(ctx, x, y, w, h, BOX_RADIUS);
	ctx.set_fill_style_str("rgba(26, 26, 46, 0.9)");
	ctx.fill();
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.15)");
	ctx.set_line_width(1.0);
	ctx.stroke();

	ctx.set_text_baseline("middle");
	ctx.set_font("600 12px sans-serif");
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
	let _ = ctx.fill_text("Sentiment Legend", x + 12.0, y + 16.0);

	ctx.set_font("12px sans-serif");
	for (i, classification) in Classification::ALL.iter().enumerate() {
		let row_y = y + 38.0 + i as f64 * 20.0;
		ctx.set_fill_style_str(classification.color());
		ctx.fill_rect(x + 12.0, row_y - 6.0, 12.0, 12.0);
		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(classification.legend_label(), x + 32.0, row_y);
	}
}

fn draw_hint(width: f64, ctx: &CanvasRenderingContext2d) {
	let text = "Click on categories to expand insights";
	ctx.set_font("12px sans-serif");
	ctx.set_text_baseline("middle");
	let text_width = ctx.measure_text(text).map(|m| m.width()).unwrap_or(230.0);
	let (w, h) = (text_width + 24.0, 28.0);
	let x = width - w - 16.0;
	rounded_rect(ctx, x, 16.0, w, h, BOX_RADIUS);
	ctx.set_fill_style_str("rgba(26, 26, 46, 0.9)");
	ctx.fill();
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
	let _ = ctx.fill_text(text, x + 12.0, 16.0 + h / 2.0);
}
