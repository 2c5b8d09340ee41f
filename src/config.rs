//! Application-wide settings shared through Leptos context.

use crate::api::ApiConfig;

/// Which backend the dashboard talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
	/// The HTTP service at [`ApiConfig::base_url`].
	#[cfg_attr(not(feature = "demo"), default)]
	Remote,
	/// Canned data served in-process.
	#[cfg_attr(feature = "demo", default)]
	Demo,
}

/// Settings read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	pub api: ApiConfig,
	pub backend: Backend,
	/// Person whose information load the conflicts page reports on.
	pub overload_subject: String,
	pub graph_node_limit: u32,
	pub changes_window_hours: u32,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api: ApiConfig::default(),
			backend: Backend::default(),
			overload_subject: "phillip.allen@enron.com".into(),
			graph_node_limit: 100,
			changes_window_hours: 24,
		}
	}
}
