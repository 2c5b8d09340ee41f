use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::api::{ChangeItem, ChangeKind, ChangeSummary, DashboardClient};
use crate::components::badges::ChangeKindBadge;
use crate::components::metric_card::MetricCard;
use crate::config::AppConfig;

/// Changes of the chosen kind whose content or source contains `search`,
/// ignoring case, in feed order.
pub fn filter_changes(changes: &[ChangeItem], kind: Option<ChangeKind>, search: &str) -> Vec<ChangeItem> {
	let needle = search.trim().to_lowercase();
	changes
		.iter()
		.filter(|c| kind.is_none_or(|k| c.kind == k))
		.filter(|c| {
			needle.is_empty()
				|| c.content.to_lowercase().contains(&needle)
				|| c.source.to_lowercase().contains(&needle)
		})
		.cloned()
		.collect()
}

pub fn result_label(count: usize) -> String {
	match count {
		1 => "1 result".to_string(),
		n => format!("{n} results"),
	}
}

/// `2026-02-08T09:30:00` -> `2026-02-08 09:30`; anything else is shown as is.
pub fn format_timestamp(timestamp: &str) -> String {
	match timestamp.split_once('T') {
		Some((date, time)) => match time.get(..5) {
			Some(hm) => format!("{date} {hm}"),
			None => timestamp.to_string(),
		},
		None => timestamp.to_string(),
	}
}

#[component]
pub fn Changes() -> impl IntoView {
	let client = expect_context::<DashboardClient>();
	let config = expect_context::<AppConfig>();

	let changes = RwSignal::new(Vec::<ChangeItem>::new());
	let summary = RwSignal::new(ChangeSummary::default());
	let loading = RwSignal::new(true);
	let error = RwSignal::new(Option::<String>::None);
	let kind = RwSignal::new(Option::<ChangeKind>::None);
	let search = RwSignal::new(String::new());

	let hours = config.changes_window_hours;
	spawn_local(async move {
		match client.changes(hours).await {
			Ok(resp) => {
				info!("loaded {} changes from the last {}h", resp.changes.len(), hours);
				summary.set(resp.summary);
				changes.set(resp.changes);
			}
			Err(e) => {
				warn!("changes unavailable: {}", e);
				error.set(Some(e.to_string()));
			}
		}
		loading.set(false);
	});

	let visible = Memo::new(move |_| {
		changes.with(|all| search.with(|s| filter_changes(all, kind.get(), s)))
	});
	let count_of = move |k: Option<ChangeKind>| {
		changes.with(|all| all.iter().filter(|c| k.is_none_or(|k| c.kind == k)).count())
	};

	let metric = move |pick: fn(&ChangeSummary) -> u32| {
		Signal::derive(move || summary.with(|s| pick(s).to_string()))
	};

	let choices = std::iter::once(None).chain(ChangeKind::ALL.map(Some));

	view! {
		<div class="changes-page">
			<div class="metric-grid">
				<MetricCard label="Total Changes" value=metric(|s| s.total_changes) />
				<MetricCard label="New Decisions" value=metric(|s| s.new_decisions) accent="kind-decision" />
				<MetricCard label="New Topics" value=metric(|s| s.new_topics) accent="kind-topic" />
				<MetricCard label="New Facts" value=metric(|s| s.new_facts) accent="kind-fact" />
			</div>

			<div class="toolbar">
				<div class="filter-buttons">
					{choices
						.map(|choice| {
							let label = choice.map(ChangeKind::plural_label).unwrap_or("All");
							view! {
								<button
									class:active=move || kind.get() == choice
									on:click=move |_| kind.set(choice)
								>
									{move || format!("{label} ({})", count_of(choice))}
								</button>
							}
						})
						.collect_view()}
				</div>
				<input
					type="search"
					placeholder="Search changes..."
					prop:value=move || search.get()
					on:input=move |ev| search.set(event_target_value(&ev))
				/>
				<span class="result-count">{move || result_label(visible.with(Vec::len))}</span>
			</div>

			{move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
			<Show when=move || loading.get()>
				<div class="loading">"Loading changes..."</div>
			</Show>

			<ol class="timeline">
				{move || {
					visible
						.get()
						.into_iter()
						.map(|change| {
							view! {
								<li class=format!("timeline-item {}", change.kind.class())>
									<div class="timeline-head">
										<ChangeKindBadge kind=change.kind />
										<span class="timeline-time">{format_timestamp(&change.timestamp)}</span>
										{(change.version > 1)
											.then(|| view! { <span class="version">{format!("v{}", change.version)}</span> })}
									</div>
									<p>{change.content}</p>
									<span class="timeline-source">{change.source}</span>
								</li>
							}
						})
						.collect_view()
				}}
			</ol>
		</div>
	}
}
