use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use log::{info, warn};

use crate::api::{ApiResult, ChangeItem, ChangesResponse, DashboardClient, HealthResponse};
use crate::components::activity_chart::ActivityChart;
use crate::components::badges::ChangeKindBadge;
use crate::components::knowledge_graph::GraphStats;
use crate::components::metric_card::MetricCard;
use crate::components::query_input::QueryInput;
use crate::config::AppConfig;
use crate::demo::WEEKLY_ACTIVITY;
use crate::pages::changes::format_timestamp;

const RECENT_CHANGES: usize = 8;

/// Figures the dashboard derives from the graph statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
	pub people: u32,
	pub topics: u32,
	pub decisions: u32,
	pub truth_entries: u32,
	pub density: String,
	/// Width of the density bar in percent of its track.
	pub density_bar_percent: f64,
	pub active_connections: u32,
}

impl DashboardSummary {
	pub fn from_stats(stats: &GraphStats) -> Self {
		Self {
			people: stats.people_count,
			topics: stats.topics_count,
			decisions: stats.decisions_count,
			truth_entries: stats.total_nodes,
			density: stats.density_label(),
			density_bar_percent: (stats.density * 1000.0).clamp(0.0, 100.0),
			active_connections: stats.total_edges,
		}
	}

	/// The four headline cards, in display order.
	pub fn metrics(&self) -> [(&'static str, u32); 4] {
		[
			("People", self.people),
			("Active Topics", self.topics),
			("Decisions", self.decisions),
			("Truth Entries", self.truth_entries),
		]
	}
}

/// What one dashboard load produced. A failed part is `None` so the page
/// keeps what it already shows, and its message lands in `errors`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardFeed {
	pub summary: Option<DashboardSummary>,
	pub recent: Option<Vec<ChangeItem>>,
	pub errors: Vec<String>,
}

impl DashboardFeed {
	pub fn from_outcomes(stats: ApiResult<GraphStats>, changes: ApiResult<ChangesResponse>) -> Self {
		let mut feed = DashboardFeed::default();
		match stats {
			Ok(stats) => feed.summary = Some(DashboardSummary::from_stats(&stats)),
			Err(e) => {
				warn!("dashboard stats unavailable: {}", e);
				feed.errors.push(format!("Graph statistics failed: {e}"));
			}
		}
		match changes {
			Ok(resp) => {
				info!("dashboard: {} recent changes", resp.changes.len());
				feed.recent = Some(resp.changes.into_iter().take(RECENT_CHANGES).collect());
			}
			Err(e) => {
				warn!("dashboard changes unavailable: {}", e);
				feed.errors.push(format!("Recent changes failed: {e}"));
			}
		}
		feed
	}
}

pub fn greeting(hour: u32) -> &'static str {
	match hour {
		0..12 => "Good morning",
		12..17 => "Good afternoon",
		_ => "Good evening",
	}
}

/// Route handing a typed question to the agent page.
pub fn agent_link(query: &str) -> String {
	let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
	format!("/agent?q={encoded}")
}

#[component]
pub fn Dashboard() -> impl IntoView {
	let client = expect_context::<DashboardClient>();
	let config = expect_context::<AppConfig>();
	let navigate = use_navigate();

	let summary = RwSignal::new(Option::<DashboardSummary>::None);
	let health = RwSignal::new(Option::<Result<HealthResponse, String>>::None);
	let recent = RwSignal::new(Vec::<ChangeItem>::new());
	let errors = RwSignal::new(Vec::<String>::new());
	let query = RwSignal::new(String::new());

	let hours = config.changes_window_hours;
	spawn_local(async move {
		let (stats, status, changes) =
			futures::join!(client.graph_stats(), client.health(), client.changes(hours));
		let feed = DashboardFeed::from_outcomes(stats, changes);
		if let Some(s) = feed.summary {
			summary.set(Some(s));
		}
		if let Some(r) = feed.recent {
			recent.set(r);
		}
		errors.set(feed.errors);
		if let Err(e) = &status {
			warn!("backend health check failed: {}", e);
		}
		health.set(Some(status.map_err(|e| e.to_string())));
	});

	let on_query = Callback::new(move |q: String| navigate(&agent_link(&q), Default::default()));
	let hour = js_sys::Date::new_0().get_hours();

	let metric = move |index: usize| {
		Signal::derive(move || {
			summary.with(|s| match s {
				Some(s) => s.metrics()[index].1.to_string(),
				None => "-".to_string(),
			})
		})
	};
	let labels = DashboardSummary::from_stats(&GraphStats::default()).metrics();

	view! {
		<div class="dashboard">
			<div class="dashboard-header">
				<h2>{format!("{}, here is your organization today", greeting(hour))}</h2>
				{move || {
					health
						.get()
						.map(|h| match h {
							Ok(h) => {
								view! {
									<span class="health-pill ok">
										{format!("Backend {} · {} truth entries", h.status, h.truth_entries)}
									</span>
								}
									.into_any()
							}
							Err(_) => view! { <span class="health-pill down">"Backend offline"</span> }.into_any(),
						})
				}}
			</div>

			{move || {
				errors
					.get()
					.into_iter()
					.map(|e| view! { <div class="error-banner">{e}</div> })
					.collect_view()
			}}

			<div class="metric-grid">
				{labels
					.iter()
					.enumerate()
					.map(|(i, &(label, _))| view! { <MetricCard label=label value=metric(i) /> })
					.collect_view()}
			</div>

			<section class="panel">
				<h3>"Ask the Chief of Staff"</h3>
				<QueryInput value=query on_submit=on_query />
			</section>

			<div class="dashboard-columns">
				<section class="panel">
					<h3>"Weekly Activity"</h3>
					<ActivityChart days=WEEKLY_ACTIVITY />
				</section>

				<section class="panel">
					<h3>"Network Health"</h3>
					{move || {
						summary
							.get()
							.map(|s| {
								view! {
									<div class="density-row">
										<span>"Network Density"</span>
										<strong>{s.density.clone()}</strong>
									</div>
									<div class="density-track">
										<div
											class="density-bar"
											style=format!("width: {}%", s.density_bar_percent)
										/>
									</div>
									<div class="density-row">
										<span>"Active Connections"</span>
										<strong>{s.active_connections}</strong>
									</div>
								}
							})
					}}
				</section>

				<section class="panel quick-actions">
					<h3>"Quick Actions"</h3>
					<A href="/graph">"Explore the knowledge graph"</A>
					<A href="/changes">"Review today's changes"</A>
					<A href="/conflicts">"Check for conflicts"</A>
				</section>
			</div>

			<section class="panel">
				<h3>"Recent Changes"</h3>
				<ul class="recent-changes">
					{move || {
						recent
							.get()
							.into_iter()
							.map(|change| {
								view! {
									<li>
										<ChangeKindBadge kind=change.kind />
										<span class="change-content">{change.content}</span>
										<span class="change-meta">
											{format!("{} · {}", change.source, format_timestamp(&change.timestamp))}
										</span>
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</section>
		</div>
	}
}
