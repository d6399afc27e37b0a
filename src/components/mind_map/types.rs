//! Static category tree behind the insight mind map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashSet;

use thiserror::Error;

/// Position of a node in the two-level tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Root,
	Category,
	Annotation,
}

/// Sentiment bucket driving a node's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
	Positive,
	Mixed,
	Attention,
}

impl Classification {
	pub const ALL: [Classification; 3] = [Self::Positive, Self::Mixed, Self::Attention];

	pub fn color(self) -> &'static str {
		match self {
			Self::Positive => "#4CAF50",
			Self::Mixed => "#FFC107",
			Self::Attention => "#EF5350",
		}
	}

	pub fn rgba(self, alpha: f64) -> String {
		let (r, g, b) = match self {
			Self::Positive => (76, 175, 80),
			Self::Mixed => (255, 193, 7),
			Self::Attention => (239, 83, 80),
		};
		format!("rgba({r}, {g}, {b}, {alpha})")
	}

	pub fn legend_label(self) -> &'static str {
		match self {
			Self::Positive => "Positive",
			Self::Mixed => "Neutral/Mixed",
			Self::Attention => "Needs Attention",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub classification: Classification,
	pub children: Vec<DiagramNode>,
}

impl DiagramNode {
	pub fn category(
		id: &str,
		label: &str,
		classification: Classification,
		children: Vec<DiagramNode>,
	) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			kind: NodeKind::Category,
			classification,
			children,
		}
	}

	pub fn annotation(id: &str, label: &str, classification: Classification) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			kind: NodeKind::Annotation,
			classification,
			children: Vec::new(),
		}
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
	#[error("diagram root `{0}` must be of kind root")]
	NotARoot(String),
	#[error("node `{id}` is a {found:?} but a {expected:?} was expected at this depth")]
	MisplacedNode {
		id: String,
		expected: NodeKind,
		found: NodeKind,
	},
	#[error("annotation `{0}` cannot have children")]
	AnnotationWithChildren(String),
	#[error("duplicate node id `{0}`")]
	DuplicateId(String),
}

/// Validated root → category → annotation tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MindMap {
	root: DiagramNode,
}

impl MindMap {
	pub fn new(root: DiagramNode) -> Result<Self, DiagramError> {
		if root.kind != NodeKind::Root {
			return Err(DiagramError::NotARoot(root.id));
		}
		let mut seen = HashSet::new();
		seen.insert(root.id.clone());

		for category in &root.children {
			if category.kind != NodeKind::Category {
				return Err(DiagramError::MisplacedNode {
					id: category.id.clone(),
					expected: NodeKind::Category,
					found: category.kind,
				});
			}
			if !seen.insert(category.id.clone()) {
				return Err(DiagramError::DuplicateId(category.id.clone()));
			}
			for annotation in &category.children {
				if annotation.kind != NodeKind::Annotation {
					return Err(DiagramError::MisplacedNode {
						id: annotation.id.clone(),
						expected: NodeKind::Annotation,
						found: annotation.kind,
					});
				}
				if !annotation.children.is_empty() {
					return Err(DiagramError::AnnotationWithChildren(annotation.id.clone()));
				}
				if !seen.insert(annotation.id.clone()) {
					return Err(DiagramError::DuplicateId(annotation.id.clone()));
				}
			}
		}

		Ok(Self { root })
	}

	pub fn root(&self) -> &DiagramNode {
		&self.root
	}

	pub fn categories(&self) -> &[DiagramNode] {
		&self.root.children
	}

	pub fn category(&self, id: &str) -> Option<&DiagramNode> {
		self.root.children.iter().find(|c| c.id == id)
	}

	/// Looks up any node in the tree by id.
	pub fn node(&self, id: &str) -> Option<&DiagramNode> {
		if self.root.id == id {
			return Some(&self.root);
		}
		self.root.children.iter().find_map(|c| {
			if c.id == id {
				Some(c)
			} else {
				c.children.iter().find(|a| a.id == id)
			}
		})
	}

	/// The feedback overview shown on the dashboard.
	pub fn feedback_overview() -> Result<Self, DiagramError> {
		use Classification::{Attention, Mixed, Positive};

		Self::new(DiagramNode {
			id: "root".into(),
			label: "AI Feedback Analysis".into(),
			kind: NodeKind::Root,
			classification: Positive,
			children: vec![
				DiagramNode::category(
					"visual-design",
					"Visual Design",
					Positive,
					vec![
						DiagramNode::annotation("vd-1", "Modern aesthetics praised by 67%", Positive),
						DiagramNode::annotation("vd-2", "Color scheme highly appreciated", Positive),
					],
				),
				DiagramNode::category(
					"brand-recognition",
					"Brand Recognition",
					Positive,
					vec![
						DiagramNode::annotation(
							"br-1",
							"92% recognition score - highest theme",
							Positive,
						),
						DiagramNode::annotation("br-2", "Strong brand identity consistency", Positive),
					],
				),
				DiagramNode::category(
					"user-experience",
					"User Experience",
					Mixed,
					vec![
						DiagramNode::annotation("ux-1", "Navigation intuitive for most users", Mixed),
						DiagramNode::annotation(
							"ux-2",
							"Mobile responsiveness needs improvement",
							Mixed,
						),
					],
				),
				DiagramNode::category(
					"accessibility",
					"Accessibility",
					Attention,
					vec![
						DiagramNode::annotation(
							"acc-1",
							"Text readability issues in small sizes",
							Attention,
						),
						DiagramNode::annotation(
							"acc-2",
							"42% score requires immediate attention",
							Attention,
						),
					],
				),
				DiagramNode::category(
					"sentiment",
					"Overall Sentiment",
					Positive,
					vec![
						DiagramNode::annotation("sent-1", "67% positive responses", Positive),
						DiagramNode::annotation(
							"sent-2",
							"Energetic and positive tone detected",
							Positive,
						),
					],
				),
				DiagramNode::category(
					"media-insights",
					"Media Insights",
					Mixed,
					vec![
						DiagramNode::annotation("mi-1", "56% included visual feedback", Positive),
						DiagramNode::annotation("mi-2", "Video feedback most detailed", Mixed),
					],
				),
				DiagramNode::category(
					"recommendations",
					"Key Recommendations",
					Mixed,
					vec![
						DiagramNode::annotation(
							"rec-1",
							"Prioritize text readability improvements",
							Attention,
						),
						DiagramNode::annotation(
							"rec-2",
							"Leverage strong brand in marketing",
							Positive,
						),
					],
				),
			],
		})
	}
}
