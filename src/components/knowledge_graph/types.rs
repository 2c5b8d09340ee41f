use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Closed set of node kinds the backend reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
	Person,
	Topic,
	Decision,
}

impl NodeCategory {
	pub const ALL: [NodeCategory; 3] = [
		NodeCategory::Person,
		NodeCategory::Topic,
		NodeCategory::Decision,
	];

	/// Wire name, also used as the `node_type` query parameter.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeCategory::Person => "person",
			NodeCategory::Topic => "topic",
			NodeCategory::Decision => "decision",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			NodeCategory::Person => "Person",
			NodeCategory::Topic => "Topic",
			NodeCategory::Decision => "Decision",
		}
	}

	pub fn plural_label(self) -> &'static str {
		match self {
			NodeCategory::Person => "People",
			NodeCategory::Topic => "Topics",
			NodeCategory::Decision => "Decisions",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			NodeCategory::Person => "hsl(217, 91%, 60%)",
			NodeCategory::Topic => "hsl(160, 84%, 39%)",
			NodeCategory::Decision => "hsl(38, 92%, 50%)",
		}
	}

	/// Translucent halo drawn behind the node.
	pub fn halo_color(self) -> &'static str {
		match self {
			NodeCategory::Person => "hsla(217, 91%, 60%, 0.15)",
			NodeCategory::Topic => "hsla(160, 84%, 39%, 0.15)",
			NodeCategory::Decision => "hsla(38, 92%, 50%, 0.15)",
		}
	}

	/// Ring radius as a fraction of `min(width, height)`.
	pub fn ring_fraction(self) -> f64 {
		match self {
			NodeCategory::Person => 0.18,
			NodeCategory::Decision => 0.26,
			NodeCategory::Topic => 0.34,
		}
	}

	/// Angular offset of the first node on the ring.
	pub fn ring_offset(self) -> f64 {
		match self {
			NodeCategory::Person => 0.0,
			NodeCategory::Topic => PI / 17.0,
			NodeCategory::Decision => PI / 7.0,
		}
	}
}

/// Closed set of relation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCategory {
	CommunicatesWith,
	MentionsTopic,
	DecidedOn,
}

impl EdgeCategory {
	pub fn label(self) -> &'static str {
		match self {
			EdgeCategory::CommunicatesWith => "communicates with",
			EdgeCategory::MentionsTopic => "mentions topic",
			EdgeCategory::DecidedOn => "decided on",
		}
	}
}

/// A node as delivered by `GET /api/graph/nodes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	pub id: String,
	#[serde(rename = "type")]
	pub category: NodeCategory,
	pub label: String,
	/// Degree precomputed by the backend.
	#[serde(default)]
	pub connections: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
	#[serde(rename = "edge_type", alias = "type")]
	pub category: EdgeCategory,
	/// Only drives line thickness.
	#[serde(default = "default_weight")]
	pub weight: u32,
}

fn default_weight() -> u32 {
	1
}

impl GraphEdge {
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}

	/// The endpoint that is not `id`, if `id` is an endpoint at all.
	pub fn other_end(&self, id: &str) -> Option<&str> {
		if self.source == id {
			Some(&self.target)
		} else if self.target == id {
			Some(&self.source)
		} else {
			None
		}
	}
}

/// Aggregate counts from `GET /api/graph/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
	pub total_nodes: u32,
	pub total_edges: u32,
	pub people_count: u32,
	pub topics_count: u32,
	pub decisions_count: u32,
	/// Edge density in `[0, 1]`.
	pub density: f64,
}

impl GraphStats {
	/// Density as a one-decimal percentage, e.g. `0.032` -> `"3.2%"`.
	pub fn density_label(&self) -> String {
		format_percent(self.density)
	}

	pub fn count_for(&self, category: NodeCategory) -> u32 {
		match category {
			NodeCategory::Person => self.people_count,
			NodeCategory::Topic => self.topics_count,
			NodeCategory::Decision => self.decisions_count,
		}
	}
}

/// Render a ratio as a percentage with one decimal.
pub fn format_percent(ratio: f64) -> String {
	format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_decodes_from_backend_shape() {
		let node: GraphNode = serde_json::from_str(
			r#"{"id":"alice@company.com","type":"person","label":"Alice Chen","connections":15}"#,
		)
		.unwrap();
		assert_eq!(node.category, NodeCategory::Person);
		assert_eq!(node.connections, 15);
	}

	#[test]
	fn unknown_category_is_rejected() {
		let res = serde_json::from_str::<GraphNode>(
			r#"{"id":"eng","type":"team","label":"Engineering","connections":2}"#,
		);
		assert!(res.is_err());
	}

	#[test]
	fn edge_accepts_either_tag_name() {
		let a: GraphEdge = serde_json::from_str(
			r#"{"source":"a","target":"b","edge_type":"decided_on","weight":3}"#,
		)
		.unwrap();
		let b: GraphEdge =
			serde_json::from_str(r#"{"source":"a","target":"b","type":"decided_on"}"#).unwrap();
		assert_eq!(a.category, b.category);
		assert_eq!(b.weight, 1);
	}

	#[test]
	fn density_is_one_decimal_percent() {
		let stats = GraphStats {
			density: 0.032,
			..GraphStats::default()
		};
		assert_eq!(stats.density_label(), "3.2%");
		assert_eq!(format_percent(0.0), "0.0%");
	}

	#[test]
	fn rings_are_nested() {
		assert!(NodeCategory::Person.ring_fraction() < NodeCategory::Decision.ring_fraction());
		assert!(NodeCategory::Decision.ring_fraction() < NodeCategory::Topic.ring_fraction());
	}
}
