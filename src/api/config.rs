/// Backend used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the API client sends its requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Scheme, host and optional prefix, without a trailing slash.
	pub base_url: String,
}

impl ApiConfig {
	/// Config pointing at `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url: String = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	/// Join an endpoint path (starting with `/`) onto the base URL.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
	}
}
