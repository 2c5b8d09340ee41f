#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use chief_of_staff_ui::api::{ApiClient, ApiConfig, ApiError, ApiResult, HttpRequest, HttpResponse, Transport};

/// Answers by URL path and remembers every request it saw.
#[derive(Default)]
pub struct FakeTransport {
	routes: HashMap<String, ApiResult<HttpResponse>>,
	pub seen: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn json(mut self, path: &str, body: &str) -> Self {
		self.routes.insert(path.to_string(), Ok(HttpResponse::ok(body)));
		self
	}

	pub fn status(mut self, path: &str, status: u16, status_text: &str, body: &str) -> Self {
		self.routes.insert(
			path.to_string(),
			Ok(HttpResponse {
				status,
				status_text: status_text.to_string(),
				body: body.to_string(),
			}),
		);
		self
	}

	pub fn unreachable(mut self, path: &str) -> Self {
		self.routes.insert(
			path.to_string(),
			Err(ApiError::Transport("connection refused".into())),
		);
		self
	}

	pub fn last_url(&self) -> String {
		self.seen.borrow().last().map(|r| r.url.to_string()).unwrap_or_default()
	}
}

impl Transport for FakeTransport {
	async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
		let path = request.url.path().to_string();
		self.seen.borrow_mut().push(request);
		self.routes.get(&path).cloned().unwrap_or_else(|| {
			Ok(HttpResponse {
				status: 404,
				status_text: "Not Found".into(),
				body: String::new(),
			})
		})
	}
}

pub fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
	ApiClient::new(ApiConfig::new("http://localhost:8000/"), transport)
}

pub const STATS: &str = r#"{"total_nodes":38,"total_edges":45,"people_count":8,"topics_count":17,"decisions_count":13,"density":0.032}"#;
