mod common;

use chief_of_staff_ui::api::{ApiError, QueryRequest};
use chief_of_staff_ui::components::knowledge_graph::{CategoryFilter, NodeCategory};
use common::{FakeTransport, STATS, client};
use futures::executor::block_on;

#[test]
fn error_detail_becomes_the_message() {
	let api = client(FakeTransport::new().status(
		"/api/graph/stats",
		500,
		"Internal Server Error",
		r#"{"detail":"Error getting graph stats: graph not loaded"}"#,
	));
	let err = block_on(api.graph_stats()).unwrap_err();
	assert_eq!(
		err,
		ApiError::Status {
			status: 500,
			message: "Error getting graph stats: graph not loaded".into(),
		}
	);
	assert_eq!(err.to_string(), "Error getting graph stats: graph not loaded");
}

#[test]
fn unparsable_error_body_falls_back_to_status_line() {
	let api = client(FakeTransport::new().status("/api/health", 502, "Bad Gateway", "<html>upstream</html>"));
	let err = block_on(api.health()).unwrap_err();
	assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
}

#[test]
fn missing_route_reports_status_line() {
	let api = client(FakeTransport::new());
	let err = block_on(api.changes(24)).unwrap_err();
	assert_eq!(err.to_string(), "HTTP 404: Not Found");
}

#[test]
fn transport_failure_is_a_transport_error() {
	let api = client(FakeTransport::new().unreachable("/api/health"));
	assert!(matches!(block_on(api.health()), Err(ApiError::Transport(_))));
}

#[test]
fn malformed_body_is_a_decode_error() {
	let api = client(FakeTransport::new().json("/api/graph/stats", "{not json"));
	assert!(matches!(block_on(api.graph_stats()), Err(ApiError::Decode(_))));
}

#[test]
fn unknown_node_type_fails_decoding() {
	let api = client(FakeTransport::new().json(
		"/api/graph/nodes",
		r#"{"nodes":[{"id":"x","type":"project","label":"X","connections":1}],"total_count":1}"#,
	));
	assert!(matches!(
		block_on(api.nodes(CategoryFilter::All, 10)),
		Err(ApiError::Decode(_))
	));
}

#[test]
fn nodes_query_omits_type_for_all() {
	let transport = FakeTransport::new().json("/api/graph/nodes", r#"{"nodes":[],"total_count":0}"#);
	let api = client(transport);

	block_on(api.nodes(CategoryFilter::All, 100)).unwrap();
	assert_eq!(
		api_last_url(&api),
		"http://localhost:8000/api/graph/nodes?limit=100"
	);

	block_on(api.nodes(CategoryFilter::Only(NodeCategory::Topic), 25)).unwrap();
	assert_eq!(
		api_last_url(&api),
		"http://localhost:8000/api/graph/nodes?node_type=topic&limit=25"
	);
}

#[test]
fn overload_email_is_one_path_segment() {
	let api = client(FakeTransport::new().json(
		"/api/overload/first%20last@example.com",
		r#"{"is_overloaded":false,"relevant_changes":3,"threshold":10,"breakdown":{"decisions":1,"topics":1,"other":1},"recommendation":"ok"}"#,
	));
	let report = block_on(api.check_overload("first last@example.com")).unwrap();
	assert!(!report.is_overloaded);
	assert_eq!(report.breakdown.other, 1);
}

#[test]
fn query_posts_json_body() {
	let api = client(FakeTransport::new().json(
		"/api/query",
		r#"{"answer":"2 conflicts","conflicts_found":2}"#,
	));
	let resp = block_on(api.process_query(&QueryRequest::new("Are there any conflicts?"))).unwrap();
	assert_eq!(resp.conflicts_label().as_deref(), Some("2 conflicts detected"));

	let seen = api_transport_seen_body(&api);
	assert_eq!(seen.as_deref(), Some(r#"{"query":"Are there any conflicts?"}"#));
}

#[test]
fn stats_decode() {
	let api = client(FakeTransport::new().json("/api/graph/stats", STATS));
	let stats = block_on(api.graph_stats()).unwrap();
	assert_eq!(stats.density_label(), "3.2%");
}

fn api_last_url(api: &chief_of_staff_ui::api::ApiClient<FakeTransport>) -> String {
	api.transport().last_url()
}

fn api_transport_seen_body(api: &chief_of_staff_ui::api::ApiClient<FakeTransport>) -> Option<String> {
	api.transport().seen.borrow().last().and_then(|r| r.body.clone())
}
