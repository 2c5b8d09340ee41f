use super::types::{GraphNode, NodeCategory};

/// Category stage of the node filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
	#[default]
	All,
	Only(NodeCategory),
}

impl CategoryFilter {
	/// Filter buttons in display order.
	pub const CHOICES: [CategoryFilter; 4] = [
		CategoryFilter::All,
		CategoryFilter::Only(NodeCategory::Person),
		CategoryFilter::Only(NodeCategory::Topic),
		CategoryFilter::Only(NodeCategory::Decision),
	];

	pub fn matches(self, category: NodeCategory) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Only(c) => c == category,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			CategoryFilter::All => "All Types",
			CategoryFilter::Only(c) => c.label(),
		}
	}
}

/// Nodes passing both the category filter and the case-insensitive id
/// search, in input order.
pub fn filter_nodes(nodes: &[GraphNode], filter: CategoryFilter, search: &str) -> Vec<GraphNode> {
	let needle = search.to_lowercase();
	nodes
		.iter()
		.filter(|n| filter.matches(n.category))
		.filter(|n| needle.is_empty() || n.id.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}

/// How many nodes of each category the store holds.
pub fn count_in(nodes: &[GraphNode], category: NodeCategory) -> usize {
	nodes.iter().filter(|n| n.category == category).count()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, category: NodeCategory) -> GraphNode {
		GraphNode {
			id: id.into(),
			category,
			label: id.into(),
			connections: 1,
		}
	}

	fn sample() -> Vec<GraphNode> {
		vec![
			node("alice@company.com", NodeCategory::Person),
			node("topic_launch", NodeCategory::Topic),
			node("bob@company.com", NodeCategory::Person),
			node("decision_launch_go", NodeCategory::Decision),
		]
	}

	#[test]
	fn category_and_search_are_conjunctive() {
		let out = filter_nodes(&sample(), CategoryFilter::Only(NodeCategory::Person), "alice");
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].id, "alice@company.com");
	}

	#[test]
	fn search_is_case_insensitive_and_keeps_order() {
		let out = filter_nodes(&sample(), CategoryFilter::All, "LAUNCH");
		let ids: Vec<_> = out.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["topic_launch", "decision_launch_go"]);
	}

	#[test]
	fn filtering_is_idempotent() {
		let nodes = sample();
		for filter in CategoryFilter::CHOICES {
			for term in ["", "a", "company", "zzz"] {
				let once = filter_nodes(&nodes, filter, term);
				assert_eq!(filter_nodes(&once, filter, term), once);
			}
		}
	}

	#[test]
	fn empty_input_is_empty_output() {
		assert!(filter_nodes(&[], CategoryFilter::All, "").is_empty());
	}

	#[test]
	fn counts_per_category() {
		assert_eq!(count_in(&sample(), NodeCategory::Person), 2);
		assert_eq!(count_in(&sample(), NodeCategory::Topic), 1);
	}
}
