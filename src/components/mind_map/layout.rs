//! Fixed-geometry placement of mind map nodes.
//!
//! Layout is a pure function of the tree, the expanded category and the
//! container height, so identical inputs always produce identical boxes.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use super::types::{Classification, DiagramNode, MindMap, NodeKind};

/// Diagram-space geometry of the mind map columns and boxes.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramGeometry {
	pub container_height: f64,
	/// Vertical space excluded from the category column.
	pub fixed_padding: f64,
	/// Offset of the first category row.
	pub top_padding: f64,
	pub root_x: f64,
	pub category_x: f64,
	pub annotation_x: f64,
	pub annotation_row_height: f64,
	/// Vertical shift of the first annotation relative to its category.
	pub annotation_offset: f64,
	pub root_height: f64,
	pub category_height: f64,
	pub annotation_height: f64,
}

impl Default for DiagramGeometry {
	fn default() -> Self {
		Self {
			container_height: 600.0,
			fixed_padding: 100.0,
			top_padding: 60.0,
			root_x: 64.0,
			category_x: 360.0,
			annotation_x: 680.0,
			annotation_row_height: 35.0,
			annotation_offset: -10.0,
			root_height: 48.0,
			category_height: 40.0,
			annotation_height: 28.0,
		}
	}
}

const ROOT_CHAR_WIDTH: f64 = 9.0;
const CATEGORY_CHAR_WIDTH: f64 = 7.5;
const ANNOTATION_CHAR_WIDTH: f64 = 6.2;
const CHEVRON_SPACE: f64 = 22.0;

/// Axis-aligned box occupied by one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub classification: Classification,
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl NodeBox {
	fn new(node: &DiagramNode, x: f64, y: f64, height: f64) -> Self {
		let width = match node.kind {
			NodeKind::Root => label_width(&node.label, ROOT_CHAR_WIDTH) + 48.0,
			NodeKind::Category => {
				label_width(&node.label, CATEGORY_CHAR_WIDTH) + 32.0 + CHEVRON_SPACE
			}
			NodeKind::Annotation => label_width(&node.label, ANNOTATION_CHAR_WIDTH) + 24.0,
		};
		Self {
			id: node.id.clone(),
			label: node.label.clone(),
			kind: node.kind,
			classification: node.classification,
			x,
			y,
			width,
			height,
		}
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
	}

	pub fn left_anchor(&self) -> (f64, f64) {
		(self.x, self.y + self.height / 2.0)
	}

	pub fn right_anchor(&self) -> (f64, f64) {
		(self.x + self.width, self.y + self.height / 2.0)
	}
}

fn label_width(label: &str, char_width: f64) -> f64 {
	label.chars().count() as f64 * char_width
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPlacement {
	pub node: NodeBox,
	pub expanded: bool,
	/// Empty unless the category is expanded.
	pub annotations: Vec<NodeBox>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramLayout {
	pub root: NodeBox,
	pub categories: Vec<CategoryPlacement>,
}

impl DiagramLayout {
	/// Topmost node under a diagram-space point.
	pub fn node_at(&self, x: f64, y: f64) -> Option<&NodeBox> {
		self.categories
			.iter()
			.flat_map(|c| c.annotations.iter())
			.chain(self.categories.iter().map(|c| &c.node))
			.chain(std::iter::once(&self.root))
			.find(|b| b.contains(x, y))
	}

	/// Width needed to show every placed box.
	pub fn extent(&self) -> f64 {
		self.categories
			.iter()
			.flat_map(|c| c.annotations.iter().chain(std::iter::once(&c.node)))
			.chain(std::iter::once(&self.root))
			.map(|b| b.x + b.width)
			.fold(0.0, f64::max)
	}
}

/// Vertical offsets of evenly distributed category rows.
pub fn category_offsets(count: usize, container_height: f64, geometry: &DiagramGeometry) -> Vec<f64> {
	if count == 0 {
		return Vec::new();
	}
	let usable_span = container_height - geometry.fixed_padding;
	let spacing = usable_span / count as f64;
	(0..count)
		.map(|i| geometry.top_padding + i as f64 * spacing)
		.collect()
}

pub fn compute_layout(
	map: &MindMap,
	expanded: Option<&str>,
	geometry: &DiagramGeometry,
	container_height: f64,
) -> DiagramLayout {
	let root = NodeBox::new(
		map.root(),
		geometry.root_x,
		(container_height - geometry.root_height) / 2.0,
		geometry.root_height,
	);

	let offsets = category_offsets(map.categories().len(), container_height, geometry);
	let categories = map
		.categories()
		.iter()
		.zip(offsets)
		.map(|(category, y)| {
			let is_expanded = expanded == Some(category.id.as_str());
			let annotations = if is_expanded {
				category
					.children
					.iter()
					.enumerate()
					.map(|(j, annotation)| {
						NodeBox::new(
							annotation,
							geometry.annotation_x,
							y + geometry.annotation_offset + j as f64 * geometry.annotation_row_height,
							geometry.annotation_height,
						)
					})
					.collect()
			} else {
				Vec::new()
			};
			CategoryPlacement {
				node: NodeBox::new(category, geometry.category_x, y, geometry.category_height),
				expanded: is_expanded,
				annotations,
			}
		})
		.collect();

	DiagramLayout { root, categories }
}
