use log::{info, warn};

use super::filter::CategoryFilter;
use super::types::{GraphEdge, GraphNode, GraphStats};
use crate::api::{ApiClient, ApiError, ApiResult, EdgesResponse, NodesResponse, Transport};

/// Graph collections fetched for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStore {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub stats: Option<GraphStats>,
}

/// Outcome of one graph load, each part independent of the others.
#[derive(Debug)]
pub struct GraphFetch {
	pub stats: ApiResult<GraphStats>,
	pub nodes: ApiResult<NodesResponse>,
	pub edges: ApiResult<EdgesResponse>,
}

impl GraphFetch {
	/// Issue the three requests concurrently.
	pub async fn load<T: Transport>(client: &ApiClient<T>, limit: u32) -> Self {
		let (stats, nodes, edges) = futures::join!(
			client.graph_stats(),
			client.nodes(CategoryFilter::All, limit),
			client.edges(limit),
		);
		Self {
			stats,
			nodes,
			edges,
		}
	}
}

impl GraphStore {
	/// Replace whatever loaded and keep the rest.
	///
	/// Returns the failures worth showing. The edge listing is optional on
	/// the backend, so its failure keeps the previous edges and is not
	/// reported; edges left dangling by new nodes are never drawn.
	pub fn apply(&mut self, fetch: GraphFetch) -> Vec<ApiError> {
		let mut errors = Vec::new();

		match fetch.stats {
			Ok(stats) => self.stats = Some(stats),
			Err(e) => errors.push(e),
		}
		match fetch.nodes {
			Ok(resp) => {
				info!("loaded {} of {} graph nodes", resp.nodes.len(), resp.total_count);
				self.nodes = resp.nodes;
			}
			Err(e) => errors.push(e),
		}
		match fetch.edges {
			Ok(resp) => self.edges = resp.edges,
			Err(e) => {
				warn!("edge listing unavailable, keeping {} known edges: {}", self.edges.len(), e);
			}
		}

		errors
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::knowledge_graph::types::NodeCategory;

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			category: NodeCategory::Topic,
			label: id.into(),
			connections: 0,
		}
	}

	#[test]
	fn failed_parts_keep_previous_values() {
		let mut store = GraphStore {
			nodes: vec![node("old")],
			edges: Vec::new(),
			stats: Some(GraphStats {
				total_nodes: 1,
				..GraphStats::default()
			}),
		};
		let errors = store.apply(GraphFetch {
			stats: Err(ApiError::Transport("offline".into())),
			nodes: Err(ApiError::Transport("offline".into())),
			edges: Err(ApiError::Transport("offline".into())),
		});
		assert_eq!(errors.len(), 2);
		assert_eq!(store.nodes, vec![node("old")]);
		assert_eq!(store.stats.as_ref().map(|s| s.total_nodes), Some(1));
	}

	#[test]
	fn failed_edge_listing_keeps_previous_edges() {
		let edge = GraphEdge {
			source: "old".into(),
			target: "other".into(),
			category: crate::components::knowledge_graph::types::EdgeCategory::MentionsTopic,
			weight: 3,
		};
		let mut store = GraphStore {
			edges: vec![edge.clone()],
			..GraphStore::default()
		};
		let errors = store.apply(GraphFetch {
			stats: Ok(GraphStats::default()),
			nodes: Ok(NodesResponse {
				nodes: vec![node("old")],
				total_count: 1,
			}),
			edges: Err(ApiError::Status {
				status: 404,
				message: "HTTP 404: Not Found".into(),
			}),
		});
		assert!(errors.is_empty());
		assert_eq!(store.edges, vec![edge]);
	}

	#[test]
	fn successful_parts_replace_wholesale() {
		let mut store = GraphStore {
			nodes: vec![node("old")],
			..GraphStore::default()
		};
		let errors = store.apply(GraphFetch {
			stats: Ok(GraphStats::default()),
			nodes: Ok(NodesResponse {
				nodes: vec![node("new")],
				total_count: 1,
			}),
			edges: Ok(EdgesResponse { edges: Vec::new() }),
		});
		assert!(errors.is_empty());
		assert_eq!(store.nodes, vec![node("new")]);
	}
}
