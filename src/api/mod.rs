//! Typed client for the organizational-knowledge backend.

mod config;
mod error;
mod transport;
mod types;

use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use transport::{AppTransport, FetchTransport, HttpRequest, HttpResponse, Method, Transport};
pub use types::*;

use crate::components::knowledge_graph::{CategoryFilter, GraphStats};

/// Client type placed in Leptos context by the app.
pub type DashboardClient = ApiClient<AppTransport>;

/// Turns page intents into REST calls and decoded responses.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
	config: ApiConfig,
	transport: T,
}

impl<T: Transport> ApiClient<T> {
	pub fn new(config: ApiConfig, transport: T) -> Self {
		Self { config, transport }
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// `POST /api/query`
	pub async fn process_query(&self, request: &QueryRequest) -> ApiResult<QueryResponse> {
		self.post("/api/query", Some(request)).await
	}

	/// `GET /api/graph/stats`
	pub async fn graph_stats(&self) -> ApiResult<GraphStats> {
		self.get(self.url("/api/graph/stats")?).await
	}

	/// `GET /api/graph/nodes`; the type parameter is omitted for `all`.
	pub async fn nodes(&self, filter: CategoryFilter, limit: u32) -> ApiResult<NodesResponse> {
		let mut url = self.url("/api/graph/nodes")?;
		{
			let mut query = url.query_pairs_mut();
			if let CategoryFilter::Only(category) = filter {
				query.append_pair("node_type", category.as_str());
			}
			query.append_pair("limit", &limit.to_string());
		}
		self.get(url).await
	}

	/// `GET /api/graph/edges`
	pub async fn edges(&self, limit: u32) -> ApiResult<EdgesResponse> {
		let mut url = self.url("/api/graph/edges")?;
		url.query_pairs_mut()
			.append_pair("limit", &limit.to_string());
		self.get(url).await
	}

	/// `GET /api/changes?hours=`
	pub async fn changes(&self, hours: u32) -> ApiResult<ChangesResponse> {
		let mut url = self.url("/api/changes")?;
		url.query_pairs_mut()
			.append_pair("hours", &hours.to_string());
		self.get(url).await
	}

	/// `POST /api/conflicts/detect`
	pub async fn detect_conflicts(&self) -> ApiResult<ConflictsResponse> {
		self.post::<(), _>("/api/conflicts/detect", None).await
	}

	/// `GET /api/overload/{email}` with the email as one path segment.
	pub async fn check_overload(&self, person_email: &str) -> ApiResult<OverloadResponse> {
		let mut url = self.url("/api/overload")?;
		url.path_segments_mut()
			.map_err(|_| ApiError::InvalidUrl(format!("{} cannot carry a path", self.config.base_url)))?
			.push(person_email);
		self.get(url).await
	}

	/// `GET /api/health`
	pub async fn health(&self) -> ApiResult<HealthResponse> {
		self.get(self.url("/api/health")?).await
	}

	/// `GET /`, left untyped.
	pub async fn api_info(&self) -> ApiResult<serde_json::Value> {
		self.get(self.url("/")?).await
	}

	fn url(&self, path: &str) -> ApiResult<Url> {
		Ok(Url::parse(&self.config.endpoint(path))?)
	}

	async fn get<R: DeserializeOwned>(&self, url: Url) -> ApiResult<R> {
		self.execute(HttpRequest {
			method: Method::Get,
			url,
			body: None,
		})
		.await
	}

	async fn post<B: Serialize, R: DeserializeOwned>(
		&self,
		path: &str,
		body: Option<&B>,
	) -> ApiResult<R> {
		let body = body.map(serde_json::to_string).transpose()?;
		self.execute(HttpRequest {
			method: Method::Post,
			url: self.url(path)?,
			body,
		})
		.await
	}

	async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
		let path = request.url.path().to_string();
		let result = match self.transport.send(request).await {
			Ok(response) => decode(response),
			Err(e) => Err(e),
		};
		if let Err(ref e) = result {
			error!("API request failed: {}: {}", path, e);
		}
		result
	}
}

fn decode<R: DeserializeOwned>(response: HttpResponse) -> ApiResult<R> {
	if !response.is_success() {
		return Err(ApiError::Status {
			status: response.status,
			message: error_message(&response),
		});
	}
	Ok(serde_json::from_str(&response.body)?)
}

/// The `detail` of a JSON error body, else the status line.
fn error_message(response: &HttpResponse) -> String {
	let detail = serde_json::from_str::<ErrorBody>(&response.body)
		.ok()
		.and_then(|b| b.detail);
	match detail {
		Some(serde_json::Value::String(s)) if !s.is_empty() => s,
		None | Some(serde_json::Value::Null) | Some(serde_json::Value::String(_)) => {
			format!("HTTP {}: {}", response.status, response.status_text)
		}
		Some(v) => v.to_string(),
	}
}
