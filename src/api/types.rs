//! Request and response bodies of the backend API.

use serde::{Deserialize, Serialize};

use crate::components::knowledge_graph::{GraphEdge, GraphNode};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
	pub query: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub context: Option<serde_json::Value>,
}

impl QueryRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			context: None,
		}
	}
}

/// Kind of a truth entry or change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
	Decision,
	Topic,
	Fact,
}

impl ChangeKind {
	pub const ALL: [ChangeKind; 3] = [ChangeKind::Decision, ChangeKind::Topic, ChangeKind::Fact];

	pub fn label(self) -> &'static str {
		match self {
			ChangeKind::Decision => "Decision",
			ChangeKind::Topic => "Topic",
			ChangeKind::Fact => "Fact",
		}
	}

	pub fn plural_label(self) -> &'static str {
		match self {
			ChangeKind::Decision => "Decisions",
			ChangeKind::Topic => "Topics",
			ChangeKind::Fact => "Facts",
		}
	}

	/// CSS class carrying the kind's colour.
	pub fn class(self) -> &'static str {
		match self {
			ChangeKind::Decision => "kind-decision",
			ChangeKind::Topic => "kind-topic",
			ChangeKind::Fact => "kind-fact",
		}
	}
}

/// A grounded answer fragment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
	pub content: String,
	#[serde(default)]
	pub source: Option<String>,
	#[serde(default, rename = "type")]
	pub kind: Option<ChangeKind>,
	#[serde(default)]
	pub timestamp: Option<String>,
	#[serde(default)]
	pub version: Option<u32>,
	/// Backends disagree on string vs number here.
	#[serde(default)]
	pub confidence: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeItem {
	#[serde(rename = "type")]
	pub kind: ChangeKind,
	pub content: String,
	pub timestamp: String,
	pub source: String,
	#[serde(default = "first_version")]
	pub version: u32,
}

fn first_version() -> u32 {
	1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
	pub person: String,
	pub degree_centrality: f64,
	#[serde(default)]
	pub betweenness_centrality: Option<f64>,
	#[serde(default)]
	pub communication_volume: Option<u32>,
}

impl Notification {
	/// Two upper-case letters from the mailbox name.
	pub fn initials(&self) -> String {
		let local = self.person.split('@').next().unwrap_or_default();
		local.chars().take(2).collect::<String>().to_uppercase()
	}

	/// Degree centrality as a whole percentage.
	pub fn centrality_percent(&self) -> String {
		format!("{:.0}", self.degree_centrality * 100.0)
	}
}

/// Which agent answered and how much of the graph it saw.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orchestration {
	pub agent_used: String,
	pub graph_nodes: u32,
	pub graph_edges: u32,
	pub truth_entries: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
	pub answer: String,
	#[serde(default)]
	pub results: Vec<QueryResult>,
	#[serde(default)]
	pub changes: Vec<ChangeItem>,
	#[serde(default)]
	pub recommended_notifications: Vec<Notification>,
	#[serde(default)]
	pub reasoning: Option<String>,
	#[serde(default)]
	pub orchestration: Option<Orchestration>,
	#[serde(default)]
	pub conflicts_found: u32,
}

impl QueryResponse {
	/// `"1 conflict detected"`, `"3 conflicts detected"`, or nothing.
	pub fn conflicts_label(&self) -> Option<String> {
		match self.conflicts_found {
			0 => None,
			1 => Some("1 conflict detected".into()),
			n => Some(format!("{n} conflicts detected")),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodesResponse {
	pub nodes: Vec<GraphNode>,
	#[serde(default)]
	pub total_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgesResponse {
	pub edges: Vec<GraphEdge>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeSummary {
	pub total_changes: u32,
	pub new_decisions: u32,
	pub new_topics: u32,
	pub new_facts: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangesResponse {
	#[serde(default)]
	pub summary: ChangeSummary,
	#[serde(default)]
	pub changes: Vec<ChangeItem>,
}

/// Kind of a detected conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
	DecisionContradiction,
	TopicContradiction,
	InformationConflict,
	PriorityConflict,
}

impl ConflictKind {
	pub const ALL: [ConflictKind; 4] = [
		ConflictKind::DecisionContradiction,
		ConflictKind::TopicContradiction,
		ConflictKind::InformationConflict,
		ConflictKind::PriorityConflict,
	];

	pub fn label(self) -> &'static str {
		match self {
			ConflictKind::DecisionContradiction => "Contradiction",
			ConflictKind::TopicContradiction => "Topic Clash",
			ConflictKind::InformationConflict => "Info Conflict",
			ConflictKind::PriorityConflict => "Priority",
		}
	}

	/// Severity class used for the badge colour.
	pub fn class(self) -> &'static str {
		match self {
			ConflictKind::DecisionContradiction | ConflictKind::TopicContradiction => {
				"severity-critical"
			}
			ConflictKind::InformationConflict => "severity-warning",
			ConflictKind::PriorityConflict => "severity-info",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
	#[serde(rename = "type")]
	pub kind: ConflictKind,
	#[serde(default)]
	pub conflict_type: Option<String>,
	#[serde(default)]
	pub decision1: Option<String>,
	#[serde(default)]
	pub decision2: Option<String>,
	#[serde(default)]
	pub topic1: Option<String>,
	#[serde(default)]
	pub topic2: Option<String>,
	#[serde(default)]
	pub times: Vec<String>,
}

impl Conflict {
	/// The two clashing statements, decisions first.
	pub fn sides(&self) -> (&str, &str) {
		let left = self.decision1.as_deref().or(self.topic1.as_deref());
		let right = self.decision2.as_deref().or(self.topic2.as_deref());
		(left.unwrap_or_default(), right.unwrap_or_default())
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictsResponse {
	#[serde(default)]
	pub conflicts_found: u32,
	#[serde(default)]
	pub conflicts: Vec<Conflict>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverloadBreakdown {
	pub decisions: u32,
	pub topics: u32,
	pub other: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverloadResponse {
	pub is_overloaded: bool,
	#[serde(default)]
	pub relevant_changes: u32,
	#[serde(default)]
	pub threshold: u32,
	#[serde(default)]
	pub breakdown: OverloadBreakdown,
	#[serde(default)]
	pub recommendation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	#[serde(default)]
	pub graph_nodes: u32,
	#[serde(default)]
	pub truth_entries: u32,
}

/// Shape of FastAPI error bodies.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
	#[serde(default)]
	pub detail: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sparse_query_response_decodes() {
		let resp: QueryResponse =
			serde_json::from_str(r#"{"answer":"ok","orchestration":{},"conflicts_found":2}"#)
				.unwrap();
		assert!(resp.results.is_empty());
		assert_eq!(resp.orchestration, Some(Orchestration::default()));
		assert_eq!(resp.conflicts_label().as_deref(), Some("2 conflicts detected"));
	}

	#[test]
	fn single_conflict_is_singular() {
		let resp = QueryResponse {
			conflicts_found: 1,
			..QueryResponse::default()
		};
		assert_eq!(resp.conflicts_label().as_deref(), Some("1 conflict detected"));
	}

	#[test]
	fn topic_conflict_uses_topic_sides() {
		let conflict: Conflict = serde_json::from_str(
			r#"{"type":"topic_contradiction","topic1":"launch completed","topic2":"launch delayed","times":[]}"#,
		)
		.unwrap();
		assert_eq!(conflict.sides(), ("launch completed", "launch delayed"));
	}

	#[test]
	fn notification_initials() {
		let n = Notification {
			person: "alice@company.com".into(),
			degree_centrality: 0.754,
			betweenness_centrality: None,
			communication_volume: Some(25),
		};
		assert_eq!(n.initials(), "AL");
		assert_eq!(n.centrality_percent(), "75");
	}
}
