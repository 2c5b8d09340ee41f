use std::collections::HashSet;

use super::layout::layout_nodes;
use super::state::{GraphViewState, connections};
use super::types::{GraphEdge, GraphNode, NodeCategory};

pub const MIN_NODE_RADIUS: f64 = 8.0;
pub const MAX_NODE_RADIUS: f64 = 20.0;
/// Extra radius of the translucent halo, also counted when hit-testing.
pub const HALO_WIDTH: f64 = 4.0;
pub const DIMMED_OPACITY: f64 = 0.2;
pub const ACCENT_COLOR: &str = "hsl(217, 91%, 60%)";
pub const NEUTRAL_COLOR: &str = "hsl(215, 16%, 47%)";
const MAX_LABEL_CHARS: usize = 18;

/// Circle radius for a node with `connections` edges.
pub fn node_radius(connections: u32) -> f64 {
	(f64::from(connections) * 1.5).clamp(MIN_NODE_RADIUS, MAX_NODE_RADIUS)
}

/// Stroke of an edge given whether a selection exists and touches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub width: f64,
	pub opacity: f64,
	pub color: &'static str,
}

pub fn edge_style(weight: u32, selection_active: bool, touches_selection: bool) -> EdgeStyle {
	let weight = f64::from(weight);
	if touches_selection {
		return EdgeStyle {
			width: (weight / 8.0).max(1.5),
			opacity: 1.0,
			color: ACCENT_COLOR,
		};
	}
	EdgeStyle {
		width: (weight / 15.0).max(0.5),
		opacity: if selection_active { 0.1 } else { 0.3 },
		color: NEUTRAL_COLOR,
	}
}

fn short_label(label: &str) -> String {
	if label.chars().count() > MAX_LABEL_CHARS {
		let head: String = label.chars().take(MAX_LABEL_CHARS - 2).collect();
		format!("{head}…")
	} else {
		label.to_string()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub id: String,
	pub category: NodeCategory,
	pub label: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub opacity: f64,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	pub source: String,
	pub target: String,
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub style: EdgeStyle,
	pub highlighted: bool,
}

/// Everything the canvas needs to paint one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphScene {
	pub width: f64,
	pub height: f64,
	pub zoom: f64,
	pub nodes: Vec<SceneNode>,
	pub edges: Vec<SceneEdge>,
}

impl GraphScene {
	/// Filter, lay out and style the graph for the given viewport.
	///
	/// Edges whose endpoints are not both visible are left out.
	pub fn build(
		nodes: &[GraphNode],
		edges: &[GraphEdge],
		state: &GraphViewState,
		width: f64,
		height: f64,
	) -> Self {
		let positioned = layout_nodes(&state.visible_nodes(nodes), width, height);
		let selected = state.selected_in(nodes);
		let connected: HashSet<&str> = selected
			.map(|s| {
				connections(s, edges, nodes)
					.into_iter()
					.map(|c| c.node.id.as_str())
					.collect()
			})
			.unwrap_or_default();

		let position_of = |id: &str| {
			positioned
				.iter()
				.find(|p| p.node.id == id)
				.map(|p| (p.x, p.y))
		};

		let scene_edges = edges
			.iter()
			.filter_map(|edge| {
				let (from, to) = (position_of(&edge.source)?, position_of(&edge.target)?);
				let highlighted = selected.is_some_and(|s| edge.touches(&s.id));
				Some(SceneEdge {
					source: edge.source.clone(),
					target: edge.target.clone(),
					from,
					to,
					style: edge_style(edge.weight, selected.is_some(), highlighted),
					highlighted,
				})
			})
			.collect();

		let scene_nodes = positioned
			.iter()
			.map(|p| {
				let is_selected = state.is_selected(&p.node.id);
				let dimmed =
					selected.is_some() && !is_selected && !connected.contains(p.node.id.as_str());
				SceneNode {
					id: p.node.id.clone(),
					category: p.node.category,
					label: short_label(&p.node.label),
					x: p.x,
					y: p.y,
					radius: node_radius(p.node.connections),
					opacity: if dimmed { DIMMED_OPACITY } else { 1.0 },
					selected: is_selected,
				}
			})
			.collect();

		Self {
			width,
			height,
			zoom: state.zoom.factor(),
			nodes: scene_nodes,
			edges: scene_edges,
		}
	}

	/// Map a point on the canvas element back into layout coordinates.
	///
	/// Zoom scales about the viewport centre.
	pub fn screen_to_scene(&self, sx: f64, sy: f64) -> (f64, f64) {
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		(cx + (sx - cx) / self.zoom, cy + (sy - cy) / self.zoom)
	}

	/// Topmost node under a canvas point.
	pub fn node_at(&self, sx: f64, sy: f64) -> Option<&SceneNode> {
		let (x, y) = self.screen_to_scene(sx, sy);
		self.nodes.iter().rev().find(|n| {
			let (dx, dy) = (n.x - x, n.y - y);
			(dx * dx + dy * dy).sqrt() <= n.radius + HALO_WIDTH
		})
	}
}
