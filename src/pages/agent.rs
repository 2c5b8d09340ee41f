use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use log::{debug, info};

use crate::api::{DashboardClient, QueryRequest, QueryResponse};
use crate::components::badges::ChangeKindBadge;
use crate::components::collapsible::CollapsibleSection;
use crate::components::query_input::QueryInput;
use crate::pages::changes::format_timestamp;

pub const HISTORY_LIMIT: usize = 10;

const AGENTS: [(&str, &str); 3] = [
	("Memory Agent", "Recalls facts, decisions and what changed"),
	("Coordinator Agent", "Works out who needs to know"),
	("Critic Agent", "Flags contradictions and overload"),
];

/// Record `query` as the most recent entry, dropping an older copy and
/// anything past [`HISTORY_LIMIT`].
pub fn push_history(history: &mut Vec<String>, query: &str) {
	history.retain(|q| q != query);
	history.insert(0, query.to_string());
	history.truncate(HISTORY_LIMIT);
}

/// Numbers outgoing questions so only the newest answer is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatestQuery(u64);

impl LatestQuery {
	/// Ticket for a new question; every earlier ticket goes stale.
	pub fn issue(&mut self) -> u64 {
		self.0 += 1;
		self.0
	}

	pub fn is_current(self, ticket: u64) -> bool {
		self.0 == ticket
	}
}

#[component]
pub fn Agent() -> impl IntoView {
	let client = expect_context::<DashboardClient>();
	let params = use_query_map();

	let query = RwSignal::new(String::new());
	let history = RwSignal::new(Vec::<String>::new());
	let response = RwSignal::new(Option::<QueryResponse>::None);
	let loading = RwSignal::new(false);
	let error = RwSignal::new(Option::<String>::None);
	let latest = RwSignal::new(LatestQuery::default());

	let submit = Callback::new(move |text: String| {
		let client = client.clone();
		history.update(|h| push_history(h, &text));
		let ticket = latest.try_update(LatestQuery::issue).unwrap_or_default();
		loading.set(true);
		error.set(None);
		spawn_local(async move {
			let outcome = client.process_query(&QueryRequest::new(text)).await;
			if !latest.with_untracked(|l| l.is_current(ticket)) {
				debug!("dropping answer to superseded question #{}", ticket);
				return;
			}
			match outcome {
				Ok(resp) => {
					info!("agent answered via {:?}", resp.orchestration.as_ref().map(|o| &o.agent_used));
					response.set(Some(resp));
				}
				Err(e) => error.set(Some(e.to_string())),
			}
			loading.set(false);
		});
	});

	// A question handed over from the dashboard is asked once on arrival
	if let Some(q) = params.with_untracked(|p| p.get("q")).filter(|q| !q.trim().is_empty()) {
		query.set(q.clone());
		submit.run(q);
	}

	view! {
		<div class="agent-page">
			<section class="panel">
				<QueryInput value=query on_submit=submit loading=loading suggestions=true />
			</section>

			<Show when=move || loading.get()>
				<div class="loading">"The agents are working on it..."</div>
			</Show>
			{move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

			{move || match response.get() {
				Some(resp) => view! { <ResponsePanel response=resp on_ask=submit query=query /> }.into_any(),
				None => view! { <EmptyState history=history on_ask=submit query=query /> }.into_any(),
			}}
		</div>
	}
}

#[component]
fn ResponsePanel(response: QueryResponse, on_ask: Callback<String>, query: RwSignal<String>) -> impl IntoView {
	let conflicts = response.conflicts_label();
	let QueryResponse {
		answer,
		results,
		changes,
		recommended_notifications: notifications,
		reasoning,
		orchestration,
		..
	} = response;
	let agent_line = orchestration
		.as_ref()
		.filter(|o| !o.agent_used.is_empty())
		.map(|o| format!("Answered by {}", o.agent_used));

	let results_view = (!results.is_empty()).then(move || {
		let title = format!("Results ({})", results.len());
		view! {
			<CollapsibleSection title=title>
				<ul class="results">
					{results
						.iter()
						.map(|r| {
							view! {
								<li>
									{r.kind.map(|k| view! { <ChangeKindBadge kind=k /> })}
									<span>{r.content.clone()}</span>
									{r.source.clone().map(|s| view! { <span class="result-source">{s}</span> })}
								</li>
							}
						})
						.collect_view()}
				</ul>
			</CollapsibleSection>
		}
	});

	let changes_view = (!changes.is_empty()).then(move || {
		let title = format!("Detailed Changes ({})", changes.len());
		view! {
			<CollapsibleSection title=title>
				<ul class="results">
					{changes
						.iter()
						.map(|c| {
							view! {
								<li>
									<ChangeKindBadge kind=c.kind />
									<span>{c.content.clone()}</span>
									<span class="result-source">
										{format!("{} · {}", c.source, format_timestamp(&c.timestamp))}
									</span>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</CollapsibleSection>
		}
	});

	let notifications_view = (!notifications.is_empty()).then(move || {
		view! {
			<CollapsibleSection title="Recommended Notifications">
				<ul class="notifications">
					{notifications
						.iter()
						.map(|n| {
							view! {
								<li>
									<span class="avatar">{n.initials()}</span>
									<span class="person">{n.person.clone()}</span>
									<span class="centrality">
										{format!("{}% centrality", n.centrality_percent())}
									</span>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</CollapsibleSection>
		}
	});

	let reasoning_view = reasoning.map(|r| {
		view! {
			<CollapsibleSection title="Reasoning" open=false>
				<p class="reasoning">{r.clone()}</p>
			</CollapsibleSection>
		}
	});

	let orchestration_view = orchestration.map(|o| {
		view! {
			<CollapsibleSection title="Orchestration" open=false>
				<dl class="orchestration">
					<dt>"Agent"</dt>
					<dd>{o.agent_used.clone()}</dd>
					<dt>"Graph nodes"</dt>
					<dd>{o.graph_nodes}</dd>
					<dt>"Graph edges"</dt>
					<dd>{o.graph_edges}</dd>
					<dt>"Truth entries"</dt>
					<dd>{o.truth_entries}</dd>
				</dl>
			</CollapsibleSection>
		}
	});

	view! {
		<section class="panel response">
			<div class="response-head">
				{agent_line.map(|l| view! { <span class="agent-line">{l}</span> })}
				{conflicts
					.map(|c| {
						view! {
							<button
								class="badge severity-critical"
								on:click=move |_| {
									query.set("Are there any conflicts?".into());
									on_ask.run("Are there any conflicts?".into());
								}
							>
								{c}
							</button>
						}
					})}
			</div>
			<p class="answer">{answer}</p>
			{results_view}
			{changes_view}
			{notifications_view}
			{reasoning_view}
			{orchestration_view}
		</section>
	}
}

#[component]
fn EmptyState(history: RwSignal<Vec<String>>, on_ask: Callback<String>, query: RwSignal<String>) -> impl IntoView {
	view! {
		<section class="panel empty-state">
			<h3>"Three agents, one question"</h3>
			<ul class="agents">
				{AGENTS
					.iter()
					.map(|&(name, role)| view! { <li><strong>{name}</strong>" - "{role}</li> })
					.collect_view()}
			</ul>
			{move || {
				let recent: Vec<String> = history.with(|h| h.iter().take(3).cloned().collect());
				(!recent.is_empty())
					.then(|| {
						view! {
							<h4>"Recent questions"</h4>
							<ul class="history">
								{recent
									.into_iter()
									.map(|q| {
										let text = q.clone();
										view! {
											<li>
												<button on:click=move |_| {
													query.set(text.clone());
													on_ask.run(text.clone());
												}>{q}</button>
											</li>
										}
									})
									.collect_view()}
							</ul>
						}
					})
			}}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn history_is_most_recent_first_without_duplicates() {
		let mut history = Vec::new();
		push_history(&mut history, "a");
		push_history(&mut history, "b");
		push_history(&mut history, "a");
		assert_eq!(history, ["a", "b"]);
	}

	#[test]
	fn only_the_newest_question_is_current() {
		let mut latest = LatestQuery::default();
		let first = latest.issue();
		let second = latest.issue();
		assert!(!latest.is_current(first));
		assert!(latest.is_current(second));

		// a late reply to the first question must not land
		let mut shown = None;
		for (ticket, answer) in [(second, "b"), (first, "a")] {
			if latest.is_current(ticket) {
				shown = Some(answer);
			}
		}
		assert_eq!(shown, Some("b"));
	}

	#[test]
	fn history_is_capped() {
		let mut history = Vec::new();
		for i in 0..15 {
			push_history(&mut history, &format!("q{i}"));
		}
		assert_eq!(history.len(), HISTORY_LIMIT);
		assert_eq!(history[0], "q14");
		assert_eq!(history[9], "q5");
	}
}
