mod common;

use chief_of_staff_ui::api::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
use chief_of_staff_ui::components::knowledge_graph::{
	CategoryFilter, GraphFetch, GraphScene, GraphStore, GraphViewState, NodeCategory,
};
use chief_of_staff_ui::demo::{DemoTransport, QueryIntent};
use chief_of_staff_ui::pages::conflicts::{ConflictsBoard, OverloadLevel};
use chief_of_staff_ui::pages::dashboard::DashboardSummary;
use common::{FakeTransport, STATS, client};
use futures::executor::block_on;

const CONFLICTS: &str = r#"{
	"conflicts_found": 2,
	"conflicts": [
		{"type": "decision_contradiction", "conflict_type": "proceed vs postpone",
		 "decision1": "Proceed with launch", "decision2": "Postpone launch",
		 "times": ["2026-02-08T01:30:00", "2026-02-08T09:30:00"]},
		{"type": "topic_contradiction", "topic1": "launch completed", "topic2": "launch delayed"}
	]
}"#;

#[test]
fn dashboard_shows_stats_counts_and_density() {
	let api = client(FakeTransport::new().json("/api/graph/stats", STATS));
	let stats = block_on(api.graph_stats()).unwrap();
	let summary = DashboardSummary::from_stats(&stats);

	let counts: Vec<u32> = summary.metrics().iter().map(|&(_, n)| n).collect();
	assert_eq!(counts, [8, 17, 13, 38]);
	assert_eq!(summary.density, "3.2%");
}

#[test]
fn conflicts_render_when_overload_check_fails() {
	let api = client(
		FakeTransport::new()
			.json("/api/conflicts/detect", CONFLICTS)
			.unreachable("/api/overload/phillip.allen@enron.com"),
	);
	let board = block_on(ConflictsBoard::load(&api, "phillip.allen@enron.com"));

	assert_eq!(board.conflicts.len(), 2);
	assert_eq!(board.contradictions(), 2);
	assert_eq!(board.overload, None);
	assert_eq!(board.people_at_risk(), 0);
	assert_eq!(board.errors.len(), 1);
	assert_eq!(board.conflicts[1].sides(), ("launch completed", "launch delayed"));
}

#[test]
fn graph_loads_without_edge_listing() {
	let api = client(
		FakeTransport::new()
			.json("/api/graph/stats", STATS)
			.json(
				"/api/graph/nodes",
				r#"{"nodes":[
					{"id":"alice@company.com","type":"person","label":"Alice","connections":15},
					{"id":"topic_launch","type":"topic","label":"Launch","connections":8}
				],"total_count":2}"#,
			),
	);
	let mut store = GraphStore::default();
	let errors = store.apply(block_on(GraphFetch::load(&api, 100)));

	assert!(errors.is_empty());
	assert_eq!(store.nodes.len(), 2);
	assert!(store.edges.is_empty());

	let scene = GraphScene::build(&store.nodes, &store.edges, &GraphViewState::default(), 800.0, 600.0);
	assert_eq!(scene.nodes.len(), 2);
	assert!(scene.edges.is_empty());
}

#[test]
fn failed_reload_keeps_previous_graph() {
	let good = client(
		FakeTransport::new()
			.json("/api/graph/stats", STATS)
			.json(
				"/api/graph/nodes",
				r#"{"nodes":[{"id":"alice@company.com","type":"person","label":"Alice","connections":15}],"total_count":1}"#,
			),
	);
	let mut store = GraphStore::default();
	store.apply(block_on(GraphFetch::load(&good, 100)));

	let down = client(FakeTransport::new().unreachable("/api/graph/stats").unreachable("/api/graph/nodes"));
	let errors = store.apply(block_on(GraphFetch::load(&down, 100)));

	assert_eq!(errors.len(), 2);
	assert_eq!(store.nodes.len(), 1);
	assert_eq!(store.stats.as_ref().map(|s| s.total_nodes), Some(38));
}

fn demo() -> ApiClient<DemoTransport> {
	ApiClient::new(ApiConfig::new(DEFAULT_BASE_URL), DemoTransport)
}

#[test]
fn demo_backend_serves_every_page() {
	let api = demo();

	let stats = block_on(api.graph_stats()).unwrap();
	assert_eq!(stats.total_nodes, 38);
	assert_eq!(stats.density_label(), "3.2%");

	let people = block_on(api.nodes(CategoryFilter::Only(NodeCategory::Person), 100)).unwrap();
	assert_eq!(people.nodes.len(), 8);
	assert!(people.nodes.iter().all(|n| n.category == NodeCategory::Person));

	let limited = block_on(api.nodes(CategoryFilter::All, 5)).unwrap();
	assert_eq!(limited.nodes.len(), 5);
	assert_eq!(limited.total_count, 38);

	assert_eq!(block_on(api.edges(100)).unwrap().edges.len(), 45);

	let changes = block_on(api.changes(24)).unwrap();
	assert_eq!(changes.summary.total_changes, 12);
	assert_eq!(changes.summary.new_decisions, 4);

	let board = block_on(ConflictsBoard::load(&api, "phillip.allen@enron.com"));
	assert_eq!(board.conflicts.len(), 4);
	assert_eq!(board.overload_level(), Some(OverloadLevel::High));
	assert!(board.errors.is_empty());

	assert_eq!(block_on(api.health()).unwrap().status, "healthy");
	assert!(block_on(api.api_info()).unwrap().get("version").is_some());
}

#[test]
fn demo_agent_answers_by_intent() {
	let api = demo();
	let resp = block_on(api.process_query(&chief_of_staff_ui::api::QueryRequest::new(
		"Who needs to know about the security audit?",
	)))
	.unwrap();
	assert_eq!(resp.recommended_notifications.len(), 6);
	assert_eq!(
		resp.orchestration.map(|o| o.agent_used),
		Some(QueryIntent::Stakeholders.agent().to_string())
	);
}
