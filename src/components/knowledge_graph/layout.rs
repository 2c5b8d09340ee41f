use std::f64::consts::PI;

use super::types::{GraphNode, NodeCategory};

/// A node with its assigned canvas position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub node: GraphNode,
	pub x: f64,
	pub y: f64,
}

/// Place every node on its category's ring around the viewport centre.
///
/// One deterministic pass: nodes of a category are spread at equal angles
/// (plus the category's fixed offset) on a circle whose radius is a fixed
/// fraction of the shorter viewport side. Output order matches input order.
pub fn layout_nodes(nodes: &[GraphNode], width: f64, height: f64) -> Vec<PositionedNode> {
	let (cx, cy) = (width / 2.0, height / 2.0);
	let side = width.min(height);

	let group_size = |category: NodeCategory| nodes.iter().filter(|n| n.category == category).count();
	let sizes = NodeCategory::ALL.map(group_size);
	let mut seen = [0usize; 3];

	nodes
		.iter()
		.map(|node| {
			let slot = NodeCategory::ALL
				.iter()
				.position(|&c| c == node.category)
				.unwrap_or_default();
			let (index, count) = (seen[slot], sizes[slot].max(1));
			seen[slot] += 1;

			let radius = side * node.category.ring_fraction();
			let angle = 2.0 * PI * index as f64 / count as f64 + node.category.ring_offset();
			PositionedNode {
				node: node.clone(),
				x: cx + radius * angle.cos(),
				y: cy + radius * angle.sin(),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, category: NodeCategory) -> GraphNode {
		GraphNode {
			id: id.into(),
			category,
			label: id.into(),
			connections: 3,
		}
	}

	fn mixed() -> Vec<GraphNode> {
		vec![
			node("p1", NodeCategory::Person),
			node("t1", NodeCategory::Topic),
			node("d1", NodeCategory::Decision),
			node("p2", NodeCategory::Person),
			node("t2", NodeCategory::Topic),
		]
	}

	fn radius(p: &PositionedNode, w: f64, h: f64) -> f64 {
		((p.x - w / 2.0).powi(2) + (p.y - h / 2.0).powi(2)).sqrt()
	}

	#[test]
	fn layout_is_deterministic() {
		let nodes = mixed();
		assert_eq!(layout_nodes(&nodes, 900.0, 600.0), layout_nodes(&nodes, 900.0, 600.0));
	}

	#[test]
	fn rings_separate_by_category() {
		let (w, h) = (900.0, 600.0);
		let placed = layout_nodes(&mixed(), w, h);
		let r = |id: &str| radius(placed.iter().find(|p| p.node.id == id).unwrap(), w, h);
		assert!((r("p1") - 108.0).abs() < 1e-9);
		assert!(r("p1") < r("d1"));
		assert!(r("d1") < r("t1"));
		assert!((r("p1") - r("p2")).abs() < 1e-9);
	}

	#[test]
	fn ring_members_are_evenly_spaced() {
		let placed = layout_nodes(&mixed(), 600.0, 600.0);
		// two people: opposite ends of the ring
		let (a, b) = (&placed[0], &placed[3]);
		assert!((a.x + b.x - 600.0).abs() < 1e-9);
		assert!((a.y + b.y - 600.0).abs() < 1e-9);
	}

	#[test]
	fn order_is_preserved() {
		let placed = layout_nodes(&mixed(), 800.0, 600.0);
		let ids: Vec<_> = placed.iter().map(|p| p.node.id.as_str()).collect();
		assert_eq!(ids, ["p1", "t1", "d1", "p2", "t2"]);
	}

	#[test]
	fn empty_input_yields_nothing() {
		assert!(layout_nodes(&[], 800.0, 600.0).is_empty());
		let only_people = vec![node("p", NodeCategory::Person)];
		let placed = layout_nodes(&only_people, 800.0, 600.0);
		assert!(placed[0].x.is_finite() && placed[0].y.is_finite());
	}
}
