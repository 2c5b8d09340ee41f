//! Canned organisation used for offline demos and as suggestion text.
//!
//! [`DemoTransport`] answers the same routes as the backend from this data
//! set, so the whole UI runs without the service.

use log::debug;
use serde::Serialize;

use crate::api::{
	ApiResult, ChangeItem, ChangeKind, ChangeSummary, ChangesResponse, Conflict, ConflictKind,
	ConflictsResponse, EdgesResponse, HealthResponse, HttpRequest, HttpResponse, Method,
	NodesResponse, Notification, Orchestration, OverloadBreakdown, OverloadResponse,
	QueryRequest, QueryResponse, Transport,
};
use crate::components::knowledge_graph::{
	EdgeCategory, GraphEdge, GraphNode, GraphStats, NodeCategory,
};

const PEOPLE: &[(&str, &str, u32)] = &[
	("alice@company.com", "Alice Chen", 15),
	("bob@company.com", "Bob Martinez", 12),
	("carol@company.com", "Carol Wu", 9),
	("david@company.com", "David Kim", 8),
	("eve@company.com", "Eve Johnson", 11),
	("frank@company.com", "Frank Lee", 7),
	("grace@company.com", "Grace Park", 6),
	("henry@company.com", "Henry Davis", 5),
];

const TOPICS: &[(&str, &str, u32)] = &[
	("topic_launch", "Q4 Product Launch", 8),
	("topic_security", "Security Audit", 6),
	("topic_budget", "Budget Planning", 5),
	("topic_hiring", "Engineering Hiring", 7),
	("topic_infra", "Infrastructure Migration", 4),
	("topic_design", "Design System V2", 3),
	("topic_ai", "AI Strategy", 9),
	("topic_compliance", "Compliance Review", 4),
	("topic_roadmap", "Product Roadmap", 6),
	("topic_perf", "Performance Review Cycle", 3),
	("topic_partner", "Partner Integration", 5),
	("topic_data", "Data Pipeline", 4),
	("topic_mobile", "Mobile App v3", 6),
	("topic_onboard", "Onboarding Flow", 3),
	("topic_metrics", "OKR Tracking", 5),
	("topic_outage", "Incident Response", 4),
	("topic_vendor", "Vendor Consolidation", 2),
];

const DECISIONS: &[(&str, &str, u32)] = &[
	("decision_launch_go", "Proceed with Q4 launch", 5),
	("decision_launch_delay", "Postpone launch 2 weeks", 3),
	("decision_budget_cut", "Reduce marketing budget 15%", 4),
	("decision_hire_5", "Hire 5 senior engineers", 6),
	("decision_aws", "Migrate to AWS", 4),
	("decision_ai_invest", "Invest in AI tooling", 5),
	("decision_sec_audit", "External security audit Q1", 3),
	("decision_mobile_react", "Use React Native for mobile", 4),
	("decision_okr_q", "Quarterly OKR cadence", 3),
	("decision_partner_api", "Build partner API first", 4),
	("decision_freeze", "Code freeze Dec 15", 5),
	("decision_oncall", "24/7 on-call rotation", 3),
	("decision_design_token", "Adopt design tokens", 2),
];

const EDGES: &[(&str, &str, EdgeCategory, u32)] = &[
	("alice@company.com", "bob@company.com", EdgeCategory::CommunicatesWith, 25),
	("alice@company.com", "carol@company.com", EdgeCategory::CommunicatesWith, 18),
	("alice@company.com", "eve@company.com", EdgeCategory::CommunicatesWith, 20),
	("bob@company.com", "david@company.com", EdgeCategory::CommunicatesWith, 14),
	("bob@company.com", "frank@company.com", EdgeCategory::CommunicatesWith, 10),
	("carol@company.com", "grace@company.com", EdgeCategory::CommunicatesWith, 8),
	("david@company.com", "henry@company.com", EdgeCategory::CommunicatesWith, 6),
	("eve@company.com", "frank@company.com", EdgeCategory::CommunicatesWith, 12),
	("alice@company.com", "topic_launch", EdgeCategory::MentionsTopic, 15),
	("alice@company.com", "topic_ai", EdgeCategory::MentionsTopic, 12),
	("bob@company.com", "topic_security", EdgeCategory::MentionsTopic, 10),
	("bob@company.com", "topic_hiring", EdgeCategory::MentionsTopic, 8),
	("carol@company.com", "topic_budget", EdgeCategory::MentionsTopic, 9),
	("carol@company.com", "topic_compliance", EdgeCategory::MentionsTopic, 7),
	("david@company.com", "topic_infra", EdgeCategory::MentionsTopic, 11),
	("eve@company.com", "topic_design", EdgeCategory::MentionsTopic, 6),
	("eve@company.com", "topic_roadmap", EdgeCategory::MentionsTopic, 8),
	("frank@company.com", "topic_mobile", EdgeCategory::MentionsTopic, 9),
	("grace@company.com", "topic_data", EdgeCategory::MentionsTopic, 7),
	("henry@company.com", "topic_outage", EdgeCategory::MentionsTopic, 5),
	("alice@company.com", "decision_launch_go", EdgeCategory::DecidedOn, 5),
	("alice@company.com", "decision_ai_invest", EdgeCategory::DecidedOn, 4),
	("bob@company.com", "decision_hire_5", EdgeCategory::DecidedOn, 6),
	("bob@company.com", "decision_sec_audit", EdgeCategory::DecidedOn, 3),
	("carol@company.com", "decision_budget_cut", EdgeCategory::DecidedOn, 4),
	("david@company.com", "decision_aws", EdgeCategory::DecidedOn, 5),
	("eve@company.com", "decision_mobile_react", EdgeCategory::DecidedOn, 4),
	("frank@company.com", "decision_partner_api", EdgeCategory::DecidedOn, 3),
	("grace@company.com", "decision_oncall", EdgeCategory::DecidedOn, 2),
	("alice@company.com", "decision_freeze", EdgeCategory::DecidedOn, 5),
	("topic_launch", "decision_launch_go", EdgeCategory::DecidedOn, 4),
	("topic_launch", "decision_launch_delay", EdgeCategory::DecidedOn, 3),
	("topic_hiring", "decision_hire_5", EdgeCategory::DecidedOn, 5),
	("topic_infra", "decision_aws", EdgeCategory::DecidedOn, 4),
	("topic_ai", "decision_ai_invest", EdgeCategory::DecidedOn, 3),
	("topic_metrics", "decision_okr_q", EdgeCategory::DecidedOn, 3),
	("topic_partner", "decision_partner_api", EdgeCategory::DecidedOn, 4),
	("topic_design", "decision_design_token", EdgeCategory::DecidedOn, 2),
	("topic_outage", "decision_oncall", EdgeCategory::DecidedOn, 3),
	("topic_security", "decision_sec_audit", EdgeCategory::DecidedOn, 3),
	("topic_mobile", "decision_mobile_react", EdgeCategory::DecidedOn, 4),
	("topic_budget", "decision_budget_cut", EdgeCategory::DecidedOn, 4),
	("topic_launch", "decision_freeze", EdgeCategory::DecidedOn, 3),
	("topic_roadmap", "topic_launch", EdgeCategory::MentionsTopic, 2),
	("topic_onboard", "topic_design", EdgeCategory::MentionsTopic, 2),
];

const CHANGES: &[(ChangeKind, &str, &str, &str, u32)] = &[
	(ChangeKind::Decision, "Postpone Q4 product launch by 2 weeks due to security concerns", "2026-02-08T09:30:00", "Leadership sync", 2),
	(ChangeKind::Topic, "New infrastructure migration timeline proposed for Q1 2026", "2026-02-08T09:15:00", "Engineering standup", 1),
	(ChangeKind::Fact, "Security audit identified 3 critical vulnerabilities in auth module", "2026-02-08T08:45:00", "Security team report", 1),
	(ChangeKind::Decision, "Hire 5 senior engineers for platform team by end of Q1", "2026-02-08T08:30:00", "HR planning meeting", 1),
	(ChangeKind::Topic, "AI strategy discussion moved to biweekly cadence", "2026-02-08T08:00:00", "Product council", 1),
	(ChangeKind::Fact, "Mobile app v3 beta downloads reached 10,000 milestone", "2026-02-08T07:45:00", "Analytics dashboard", 1),
	(ChangeKind::Decision, "Adopt design tokens system for component library", "2026-02-07T17:30:00", "Design review", 1),
	(ChangeKind::Topic, "Partner API integration requirements finalized", "2026-02-07T16:00:00", "Partner meeting", 2),
	(ChangeKind::Fact, "Q3 revenue exceeded targets by 12%", "2026-02-07T15:00:00", "Finance report", 1),
	(ChangeKind::Decision, "Code freeze scheduled for December 15th", "2026-02-07T14:00:00", "Release planning", 1),
	(ChangeKind::Topic, "Onboarding flow redesign kickoff scheduled", "2026-02-07T11:00:00", "Product team", 1),
	(ChangeKind::Fact, "Team satisfaction survey results: 4.2/5 average", "2026-02-07T10:00:00", "People ops", 1),
];

/// Suggested questions and the agent that answers each.
pub const QUERY_EXAMPLES: &[(&str, &str)] = &[
	("What changed today?", "Memory"),
	("Who needs to know about the security audit?", "Coordinator"),
	("Context for alice@company.com", "Memory"),
	("Are there any conflicts?", "Critic"),
	("What is the current truth about the product launch?", "Memory"),
	("Information overload for Bob Martinez", "Critic"),
];

/// Decisions, topics and facts per weekday for the dashboard chart.
pub const WEEKLY_ACTIVITY: &[(&str, [u32; 3])] = &[
	("Mon", [2, 4, 3]),
	("Tue", [1, 3, 5]),
	("Wed", [3, 2, 2]),
	("Thu", [0, 5, 4]),
	("Fri", [4, 3, 1]),
	("Sat", [1, 1, 2]),
	("Sun", [3, 5, 4]),
];

fn nodes_of(rows: &[(&str, &str, u32)], category: NodeCategory) -> impl Iterator<Item = GraphNode> {
	rows.iter().map(move |&(id, label, connections)| GraphNode {
		id: id.into(),
		category,
		label: label.into(),
		connections,
	})
}

pub fn sample_nodes() -> Vec<GraphNode> {
	nodes_of(PEOPLE, NodeCategory::Person)
		.chain(nodes_of(TOPICS, NodeCategory::Topic))
		.chain(nodes_of(DECISIONS, NodeCategory::Decision))
		.collect()
}

pub fn sample_edges() -> Vec<GraphEdge> {
	EDGES
		.iter()
		.map(|&(source, target, category, weight)| GraphEdge {
			source: source.into(),
			target: target.into(),
			category,
			weight,
		})
		.collect()
}

pub fn sample_stats() -> GraphStats {
	GraphStats {
		total_nodes: (PEOPLE.len() + TOPICS.len() + DECISIONS.len()) as u32,
		total_edges: EDGES.len() as u32,
		people_count: PEOPLE.len() as u32,
		topics_count: TOPICS.len() as u32,
		decisions_count: DECISIONS.len() as u32,
		density: 0.032,
	}
}

pub fn sample_changes() -> Vec<ChangeItem> {
	CHANGES
		.iter()
		.map(|&(kind, content, timestamp, source, version)| ChangeItem {
			kind,
			content: content.into(),
			timestamp: timestamp.into(),
			source: source.into(),
			version,
		})
		.collect()
}

fn changes_response() -> ChangesResponse {
	let changes = sample_changes();
	let count = |kind| changes.iter().filter(|c| c.kind == kind).count() as u32;
	ChangesResponse {
		summary: ChangeSummary {
			total_changes: changes.len() as u32,
			new_decisions: count(ChangeKind::Decision),
			new_topics: count(ChangeKind::Topic),
			new_facts: count(ChangeKind::Fact),
		},
		changes,
	}
}

fn conflict(kind: ConflictKind, label: &str, left: &str, right: &str, times: [&str; 2]) -> Conflict {
	Conflict {
		kind,
		conflict_type: Some(label.into()),
		decision1: Some(left.into()),
		decision2: Some(right.into()),
		topic1: None,
		topic2: None,
		times: times.iter().map(|t| t.to_string()).collect(),
	}
}

pub fn sample_conflicts() -> ConflictsResponse {
	let conflicts = vec![
		conflict(
			ConflictKind::DecisionContradiction,
			"proceed vs postpone",
			"Proceed with Q4 product launch",
			"Postpone Q4 product launch by 2 weeks",
			["2026-02-08T01:30:00", "2026-02-08T09:30:00"],
		),
		conflict(
			ConflictKind::DecisionContradiction,
			"expand vs reduce",
			"Hire 5 senior engineers for platform team",
			"Reduce marketing budget by 15%",
			["2026-02-08T08:30:00", "2026-02-07T14:00:00"],
		),
		conflict(
			ConflictKind::InformationConflict,
			"timeline mismatch",
			"Infrastructure migration Q1 2026",
			"Code freeze December 15th (blocks migration prep)",
			["2026-02-08T09:15:00", "2026-02-07T14:00:00"],
		),
		conflict(
			ConflictKind::PriorityConflict,
			"resource allocation",
			"AI strategy requires dedicated ML team",
			"All engineers allocated to mobile app v3",
			["2026-02-08T08:00:00", "2026-02-07T16:00:00"],
		),
	];
	ConflictsResponse {
		conflicts_found: conflicts.len() as u32,
		conflicts,
	}
}

pub fn sample_overload() -> OverloadResponse {
	OverloadResponse {
		is_overloaded: true,
		relevant_changes: 14,
		threshold: 10,
		breakdown: OverloadBreakdown {
			decisions: 6,
			topics: 5,
			other: 3,
		},
		recommendation: "Consider filtering or prioritizing information".into(),
	}
}

/// What a free-text question is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryIntent {
	Changes,
	Stakeholders,
	Conflicts,
	Context,
}

/// First matching row wins; anything unmatched is a context question.
const INTENT_KEYWORDS: &[(QueryIntent, &[&str])] = &[
	(QueryIntent::Changes, &["changed", "today"]),
	(QueryIntent::Stakeholders, &["who needs", "notify", "know about"]),
	(QueryIntent::Conflicts, &["conflict", "contradiction"]),
];

impl QueryIntent {
	pub fn classify(query: &str) -> Self {
		let q = query.to_lowercase();
		INTENT_KEYWORDS
			.iter()
			.find(|(_, words)| words.iter().any(|w| q.contains(w)))
			.map(|&(intent, _)| intent)
			.unwrap_or(QueryIntent::Context)
	}

	pub fn agent(self) -> &'static str {
		match self {
			QueryIntent::Changes | QueryIntent::Context => "Memory Agent",
			QueryIntent::Stakeholders => "Coordinator Agent",
			QueryIntent::Conflicts => "Critic Agent",
		}
	}

	/// The canned answer for this intent.
	pub fn respond(self) -> QueryResponse {
		let stats = sample_stats();
		let orchestration = Some(Orchestration {
			agent_used: self.agent().into(),
			graph_nodes: stats.total_nodes,
			graph_edges: stats.total_edges,
			truth_entries: 102,
		});
		match self {
			QueryIntent::Changes => QueryResponse {
				answer: "12 organizational changes detected in the last 24 hours. Key highlights: Q4 launch postponed 2 weeks due to security concerns, 5 senior engineer hires approved, and 3 critical vulnerabilities identified in the auth module.".into(),
				changes: sample_changes().into_iter().take(6).collect(),
				conflicts_found: 2,
				reasoning: Some("Scanned 102 truth entries and 45 graph edges. Identified 12 changes across 3 categories and cross-referenced them with conflict detection.".into()),
				orchestration,
				..QueryResponse::default()
			},
			QueryIntent::Stakeholders => QueryResponse {
				answer: "6 stakeholders should be notified about this topic. Alice Chen and Bob Martinez have the highest centrality scores and are most critical to inform.".into(),
				recommended_notifications: [
					("alice@company.com", 0.75, 0.45, 25),
					("bob@company.com", 0.68, 0.38, 20),
					("eve@company.com", 0.55, 0.30, 15),
					("carol@company.com", 0.48, 0.22, 12),
					("david@company.com", 0.42, 0.18, 10),
					("frank@company.com", 0.35, 0.12, 8),
				]
				.into_iter()
				.map(|(person, degree, betweenness, volume)| Notification {
					person: person.into(),
					degree_centrality: degree,
					betweenness_centrality: Some(betweenness),
					communication_volume: Some(volume),
				})
				.collect(),
				reasoning: Some("Computed degree and betweenness centrality for all people, filtered by topic relevance and ranked by combined score.".into()),
				orchestration,
				..QueryResponse::default()
			},
			QueryIntent::Conflicts => QueryResponse {
				answer: "4 conflicts detected in the last 48 hours. Most critical: 'Proceed with Q4 launch' contradicts 'Postpone Q4 launch by 2 weeks'.".into(),
				conflicts_found: 4,
				reasoning: Some("Cross-referenced 13 decisions and 17 topics and applied contradiction detection on temporal decision pairs.".into()),
				orchestration,
				..QueryResponse::default()
			},
			QueryIntent::Context => QueryResponse {
				answer: format!(
					"Based on current organizational knowledge: {} entities tracked across {} people, {} topics and {} decisions, with {} active connections.",
					stats.total_nodes,
					stats.people_count,
					stats.topics_count,
					stats.decisions_count,
					stats.total_edges
				),
				reasoning: Some("Performed a broad knowledge graph scan and aggregated statistics from all node types.".into()),
				orchestration,
				..QueryResponse::default()
			},
		}
	}
}

/// In-process stand-in for the backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoTransport;

fn json<T: Serialize>(value: &T) -> ApiResult<HttpResponse> {
	Ok(HttpResponse::ok(serde_json::to_string(value)?))
}

fn not_found(path: &str) -> ApiResult<HttpResponse> {
	Ok(HttpResponse {
		status: 404,
		status_text: "Not Found".into(),
		body: format!(r#"{{"detail":"no demo route for {path}"}}"#),
	})
}

impl DemoTransport {
	fn route(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
		let path = request.url.path();
		let param = |name: &str| {
			request
				.url
				.query_pairs()
				.find(|(k, _)| k == name)
				.map(|(_, v)| v.into_owned())
		};
		let limit = param("limit")
			.and_then(|l| l.parse::<usize>().ok())
			.unwrap_or(50);

		match (request.method, path) {
			(Method::Post, "/api/query") => {
				let body = request.body.as_deref().unwrap_or("{}");
				let query: QueryRequest = serde_json::from_str(body)?;
				json(&QueryIntent::classify(&query.query).respond())
			}
			(Method::Get, "/api/graph/stats") => json(&sample_stats()),
			(Method::Get, "/api/graph/nodes") => {
				let wanted = param("node_type");
				let matching: Vec<GraphNode> = sample_nodes()
					.into_iter()
					.filter(|n| wanted.as_deref().is_none_or(|t| t == n.category.as_str()))
					.collect();
				json(&NodesResponse {
					total_count: matching.len() as u32,
					nodes: matching.into_iter().take(limit).collect(),
				})
			}
			(Method::Get, "/api/graph/edges") => json(&EdgesResponse {
				edges: sample_edges().into_iter().take(limit).collect(),
			}),
			(Method::Get, "/api/changes") => json(&changes_response()),
			(Method::Post, "/api/conflicts/detect") => json(&sample_conflicts()),
			(Method::Get, p) if p.starts_with("/api/overload/") => json(&sample_overload()),
			(Method::Get, "/api/health") => json(&HealthResponse {
				status: "healthy".into(),
				graph_nodes: sample_stats().total_nodes,
				truth_entries: 102,
			}),
			(Method::Get, "/") => json(&serde_json::json!({
				"message": "AI Chief of Staff API (demo)",
				"version": "1.0.0",
			})),
			_ => not_found(path),
		}
	}
}

impl Transport for DemoTransport {
	async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
		debug!("demo backend: {:?} {}", request.method, request.url);
		self.route(&request)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn intents_follow_the_keyword_table() {
		assert_eq!(QueryIntent::classify("What changed today?"), QueryIntent::Changes);
		assert_eq!(
			QueryIntent::classify("Who needs to know about the security audit?"),
			QueryIntent::Stakeholders
		);
		assert_eq!(QueryIntent::classify("Are there any CONFLICTS?"), QueryIntent::Conflicts);
		assert_eq!(
			QueryIntent::classify("Context for alice@company.com"),
			QueryIntent::Context
		);
	}

	#[test]
	fn every_intent_names_its_agent() {
		for intent in [
			QueryIntent::Changes,
			QueryIntent::Stakeholders,
			QueryIntent::Conflicts,
			QueryIntent::Context,
		] {
			let resp = intent.respond();
			assert_eq!(resp.orchestration.unwrap().agent_used, intent.agent());
		}
	}

	#[test]
	fn sample_graph_is_consistent() {
		let nodes = sample_nodes();
		let stats = sample_stats();
		assert_eq!(nodes.len() as u32, stats.total_nodes);
		assert_eq!(stats.total_nodes, 38);
		assert_eq!(stats.total_edges, 45);
		let ids: HashSet<_> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), nodes.len());
		assert!(
			sample_edges()
				.iter()
				.all(|e| ids.contains(e.source.as_str()) && ids.contains(e.target.as_str()))
		);
	}
}
