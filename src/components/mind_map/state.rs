#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use log::debug;

use super::layout::{DiagramGeometry, DiagramLayout, compute_layout};
use super::types::MindMap;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Per-mount interaction state of the mind map.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramViewState {
	hovered_node_id: Option<String>,
	expanded_category_id: Option<String>,
	zoom_factor: f64,
}

impl Default for DiagramViewState {
	fn default() -> Self {
		Self {
			hovered_node_id: None,
			expanded_category_id: None,
			zoom_factor: DEFAULT_ZOOM,
		}
	}
}

impl DiagramViewState {
	pub fn hovered_node_id(&self) -> Option<&str> {
		self.hovered_node_id.as_deref()
	}

	pub fn expanded_category_id(&self) -> Option<&str> {
		self.expanded_category_id.as_deref()
	}

	pub fn zoom_factor(&self) -> f64 {
		self.zoom_factor
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered_node_id.as_deref() == Some(id)
	}

	pub fn is_expanded(&self, id: &str) -> bool {
		self.expanded_category_id.as_deref() == Some(id)
	}

	/// Collapses `category_id` if it is open, otherwise opens it and closes
	/// any other category. Ids that are not categories of `map` are ignored.
	pub fn toggle_category_expansion(&mut self, map: &MindMap, category_id: &str) {
		if map.category(category_id).is_none() {
			return;
		}
		if self.is_expanded(category_id) {
			debug!("collapsing category {category_id}");
			self.expanded_category_id = None;
		} else {
			debug!("expanding category {category_id}");
			self.expanded_category_id = Some(category_id.to_owned());
		}
	}

	/// Returns whether the hover target changed.
	pub fn set_hover(&mut self, node_id: Option<&str>) -> bool {
		if self.hovered_node_id.as_deref() == node_id {
			return false;
		}
		self.hovered_node_id = node_id.map(str::to_owned);
		true
	}

	pub fn zoom_in(&mut self) {
		self.set_zoom(self.zoom_factor + ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.set_zoom(self.zoom_factor - ZOOM_STEP);
	}

	pub fn reset_zoom(&mut self) {
		self.zoom_factor = DEFAULT_ZOOM;
	}

	/// Scrolling down zooms out and up zooms in. Returns false for a
	/// purely horizontal scroll, which leaves the zoom alone.
	pub fn apply_wheel(&mut self, delta_y: f64) -> bool {
		if delta_y > 0.0 {
			self.zoom_out();
		} else if delta_y < 0.0 {
			self.zoom_in();
		} else {
			return false;
		}
		true
	}

	fn set_zoom(&mut self, zoom: f64) {
		// two decimals keep repeated steps from drifting
		let rounded = (zoom * 100.0).round() / 100.0;
		self.zoom_factor = rounded.clamp(MIN_ZOOM, MAX_ZOOM);
	}

	pub fn can_zoom_in(&self) -> bool {
		self.zoom_factor < MAX_ZOOM
	}

	pub fn can_zoom_out(&self) -> bool {
		self.zoom_factor > MIN_ZOOM
	}

	pub fn zoom_percent(&self) -> u32 {
		(self.zoom_factor * 100.0).round() as u32
	}

	/// Undo the zoom applied about the center of a `width` x `height` canvas.
	pub fn screen_to_diagram(&self, sx: f64, sy: f64, width: f64, height: f64) -> (f64, f64) {
		let (cx, cy) = (width / 2.0, height / 2.0);
		(
			(sx - cx) / self.zoom_factor + cx,
			(sy - cy) / self.zoom_factor + cy,
		)
	}

	pub fn layout(&self, map: &MindMap, geometry: &DiagramGeometry) -> DiagramLayout {
		compute_layout(
			map,
			self.expanded_category_id(),
			geometry,
			geometry.container_height,
		)
	}
}
