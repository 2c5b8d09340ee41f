//! The seam between the typed client and the network.

use gloo_net::http::Request;
use log::debug;

use super::error::{ApiError, ApiResult};
use crate::demo::DemoTransport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
	pub method: Method,
	pub url: url::Url,
	pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
	pub status: u16,
	pub status_text: String,
	pub body: String,
}

impl HttpResponse {
	pub fn ok(body: impl Into<String>) -> Self {
		Self {
			status: 200,
			status_text: "OK".into(),
			body: body.into(),
		}
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends one request and hands back whatever the server said.
///
/// Implementations only fail for requests that never completed; status
/// handling and decoding belong to [`ApiClient`](super::ApiClient).
#[allow(async_fn_in_trait)]
pub trait Transport {
	async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Browser `fetch` via gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
		let builder = match request.method {
			Method::Get => Request::get(request.url.as_str()),
			Method::Post => Request::post(request.url.as_str()),
		}
		.header("Content-Type", "application/json");

		let req = match request.body {
			Some(body) => builder.body(body),
			None => builder.build(),
		}
		.map_err(|e| ApiError::Transport(e.to_string()))?;

		let response = req
			.send()
			.await
			.map_err(|e| ApiError::Transport(e.to_string()))?;
		let status = response.status();
		let status_text = response.status_text();
		// An unreadable body on an error status still leaves the status line
		let body = match response.text().await {
			Ok(body) => body,
			Err(e) if !(200..300).contains(&status) => {
				debug!("discarding unreadable error body: {}", e);
				String::new()
			}
			Err(e) => return Err(ApiError::Transport(e.to_string())),
		};

		Ok(HttpResponse {
			status,
			status_text,
			body,
		})
	}
}

/// The transports the app can be started with.
#[derive(Clone, Debug)]
pub enum AppTransport {
	Fetch(FetchTransport),
	Demo(DemoTransport),
}

impl Transport for AppTransport {
	async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
		match self {
			AppTransport::Fetch(t) => t.send(request).await,
			AppTransport::Demo(t) => t.send(request).await,
		}
	}
}
