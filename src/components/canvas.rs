//! Small helpers shared by the canvas-backed widgets.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		log::error!("2d canvas context unavailable");
	}
	ctx
}

/// Pointer position relative to the canvas' top-left corner.
pub fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

pub fn parent_width(canvas: &HtmlCanvasElement) -> Option<f64> {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
}
