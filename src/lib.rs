//! Leptos client-side dashboard over the organizational knowledge backend.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod api;
pub mod components;
pub mod config;
pub mod demo;
pub mod pages;

use crate::api::{AppTransport, DashboardClient, FetchTransport};
use crate::components::shell::Shell;
use crate::config::{AppConfig, Backend};
use crate::demo::DemoTransport;

// Top-Level pages
use crate::pages::agent::Agent;
use crate::pages::changes::Changes;
use crate::pages::conflicts::Conflicts;
use crate::pages::dashboard::Dashboard;
use crate::pages::graph::Graph;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The client every page pulls from context.
pub fn build_client(config: &AppConfig) -> DashboardClient {
	let transport = match config.backend {
		Backend::Remote => AppTransport::Fetch(FetchTransport),
		Backend::Demo => AppTransport::Demo(DemoTransport),
	};
	let client = DashboardClient::new(config.api.clone(), transport);
	info!("using {:?} backend at {}", config.backend, client.config().base_url);
	client
}

/// Router over the five dashboard sections, with a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::default();
	provide_context(build_client(&config));
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="AI Chief of Staff" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Shell>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Dashboard />
					<Route path=path!("/graph") view=Graph />
					<Route path=path!("/agent") view=Agent />
					<Route path=path!("/changes") view=Changes />
					<Route path=path!("/conflicts") view=Conflicts />
				</Routes>
			</Shell>
		</Router>
	}
}
