use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::api::{ApiClient, ApiResult, Conflict, ConflictKind, ConflictsResponse, DashboardClient, OverloadResponse, Transport};
use crate::components::badges::ConflictBadge;
use crate::components::metric_card::MetricCard;
use crate::config::AppConfig;
use crate::pages::changes::format_timestamp;

/// Coarse information-load band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverloadLevel {
	High,
	Medium,
	Low,
}

impl OverloadLevel {
	pub const ALL: [OverloadLevel; 3] = [OverloadLevel::High, OverloadLevel::Medium, OverloadLevel::Low];

	pub fn from_score(score: f64) -> Self {
		if score >= 0.7 {
			OverloadLevel::High
		} else if score >= 0.5 {
			OverloadLevel::Medium
		} else {
			OverloadLevel::Low
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			OverloadLevel::High => "High",
			OverloadLevel::Medium => "Medium",
			OverloadLevel::Low => "Low",
		}
	}

	pub fn class(self) -> &'static str {
		match self {
			OverloadLevel::High => "severity-critical",
			OverloadLevel::Medium => "severity-warning",
			OverloadLevel::Low => "severity-info",
		}
	}
}

/// The backend only says yes or no, so the score is two-valued.
pub fn overload_score(report: &OverloadResponse) -> f64 {
	if report.is_overloaded { 0.8 } else { 0.2 }
}

/// Everything the conflicts page shows, built from two independent fetches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConflictsBoard {
	pub conflicts: Vec<Conflict>,
	pub overload: Option<OverloadResponse>,
	pub errors: Vec<String>,
}

impl ConflictsBoard {
	/// Keep whichever outcome succeeded; a failure only blanks its own part.
	pub fn from_outcomes(
		conflicts: ApiResult<ConflictsResponse>,
		overload: ApiResult<OverloadResponse>,
	) -> Self {
		let mut board = ConflictsBoard::default();
		match conflicts {
			Ok(resp) => board.conflicts = resp.conflicts,
			Err(e) => {
				warn!("conflict detection failed: {}", e);
				board.errors.push(format!("Conflict detection failed: {e}"));
			}
		}
		match overload {
			Ok(report) => board.overload = Some(report),
			Err(e) => {
				warn!("overload check failed: {}", e);
				board.errors.push(format!("Overload check failed: {e}"));
			}
		}
		board
	}

	/// Issue both requests concurrently and wait for the pair.
	pub async fn load<T: Transport>(client: &ApiClient<T>, person_email: &str) -> Self {
		let (conflicts, overload) =
			futures::join!(client.detect_conflicts(), client.check_overload(person_email));
		Self::from_outcomes(conflicts, overload)
	}

	pub fn contradictions(&self) -> usize {
		self.conflicts
			.iter()
			.filter(|c| {
				matches!(
					c.kind,
					ConflictKind::DecisionContradiction | ConflictKind::TopicContradiction
				)
			})
			.count()
	}

	pub fn people_at_risk(&self) -> usize {
		self.overload.as_ref().filter(|o| o.is_overloaded).map_or(0, |_| 1)
	}

	pub fn overload_level(&self) -> Option<OverloadLevel> {
		self.overload.as_ref().map(|o| OverloadLevel::from_score(overload_score(o)))
	}

	pub fn conflicts_of(&self, kind: Option<ConflictKind>) -> Vec<Conflict> {
		self.conflicts
			.iter()
			.filter(|c| kind.is_none_or(|k| c.kind == k))
			.cloned()
			.collect()
	}
}

#[component]
pub fn Conflicts() -> impl IntoView {
	let client = expect_context::<DashboardClient>();
	let config = expect_context::<AppConfig>();

	let board = RwSignal::new(ConflictsBoard::default());
	let loading = RwSignal::new(true);
	let severity = RwSignal::new(Option::<ConflictKind>::None);
	let level_filter = RwSignal::new(Option::<OverloadLevel>::None);

	let subject = config.overload_subject.clone();
	spawn_local(async move {
		let loaded = ConflictsBoard::load(&client, &subject).await;
		info!("{} conflicts loaded", loaded.conflicts.len());
		board.set(loaded);
		loading.set(false);
	});

	let count = move |pick: fn(&ConflictsBoard) -> usize| Signal::derive(move || board.with(|b| pick(b).to_string()));

	let severity_choices = std::iter::once(None).chain(ConflictKind::ALL.map(Some));
	let level_choices = std::iter::once(None).chain(OverloadLevel::ALL.map(Some));
	let subject = config.overload_subject;

	view! {
		<div class="conflicts-page">
			<div class="metric-grid">
				<MetricCard label="Active Conflicts" value=count(|b| b.conflicts.len()) accent="severity-critical" />
				<MetricCard label="People at Risk" value=count(ConflictsBoard::people_at_risk) accent="severity-warning" />
				<MetricCard label="Contradictions" value=count(ConflictsBoard::contradictions) accent="severity-info" />
			</div>

			<Show when=move || loading.get()>
				<div class="loading">"Analyzing decisions and topics..."</div>
			</Show>
			{move || {
				board
					.with(|b| b.errors.clone())
					.into_iter()
					.map(|e| view! { <div class="error-banner">{e}</div> })
					.collect_view()
			}}

			<section class="panel">
				<h3>"Detected Conflicts"</h3>
				<div class="filter-buttons">
					{severity_choices
						.map(|choice| {
							let label = choice.map(ConflictKind::label).unwrap_or("All");
							view! {
								<button
									class:active=move || severity.get() == choice
									on:click=move |_| severity.set(choice)
								>
									{label}
								</button>
							}
						})
						.collect_view()}
				</div>
				<ul class="conflict-list">
					{move || {
						let shown = board.with(|b| b.conflicts_of(severity.get()));
						if shown.is_empty() && !loading.get() {
							return view! { <li class="empty">"No conflicts detected"</li> }.into_any();
						}
						shown
							.into_iter()
							.map(|c| {
								let (left, right) = c.sides();
								let (left, right) = (left.to_string(), right.to_string());
								let when = c.times.iter().map(|t| format_timestamp(t)).collect::<Vec<_>>().join(" vs ");
								view! {
									<li class="conflict-card">
										<div class="conflict-head">
											<ConflictBadge kind=c.kind />
											{c.conflict_type.clone().map(|t| view! { <span class="conflict-type">{t}</span> })}
										</div>
										<div class="conflict-sides">
											<p>{left}</p>
											<span class="versus">"vs"</span>
											<p>{right}</p>
										</div>
										{(!when.is_empty()).then(|| view! { <span class="conflict-times">{when}</span> })}
									</li>
								}
							})
							.collect_view()
							.into_any()
					}}
				</ul>
			</section>

			<section class="panel">
				<h3>"Information Overload"</h3>
				<div class="filter-buttons">
					{level_choices
						.map(|choice| {
							let label = choice.map(OverloadLevel::label).unwrap_or("All");
							view! {
								<button
									class:active=move || level_filter.get() == choice
									on:click=move |_| level_filter.set(choice)
								>
									{label}
								</button>
							}
						})
						.collect_view()}
				</div>
				{move || {
					let subject = subject.clone();
					board.with(|b| {
						let (Some(report), Some(level)) = (b.overload.clone(), b.overload_level()) else {
							return view! { <p class="empty">"No overload data"</p> }.into_any();
						};
						if level_filter.get().is_some_and(|f| f != level) {
							return view! { <p class="empty">"Nobody at this level"</p> }.into_any();
						}
						view! {
							<div class="overload-card">
								<div class="overload-head">
									<span class="person">{subject}</span>
									<span class=format!("badge {}", level.class())>{level.label()}</span>
								</div>
								<p>
									{format!(
										"{} relevant changes against a threshold of {}",
										report.relevant_changes,
										report.threshold,
									)}
								</p>
								<ul class="breakdown">
									<li>{format!("Decisions: {}", report.breakdown.decisions)}</li>
									<li>{format!("Topics: {}", report.breakdown.topics)}</li>
									<li>{format!("Other: {}", report.breakdown.other)}</li>
								</ul>
								<p class="recommendation">{report.recommendation}</p>
							</div>
						}
							.into_any()
					})
				}}
			</section>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::ApiError;

	fn conflict(kind: ConflictKind) -> Conflict {
		Conflict {
			kind,
			conflict_type: None,
			decision1: Some("proceed".into()),
			decision2: Some("postpone".into()),
			topic1: None,
			topic2: None,
			times: Vec::new(),
		}
	}

	fn report(is_overloaded: bool) -> OverloadResponse {
		OverloadResponse {
			is_overloaded,
			relevant_changes: 14,
			threshold: 10,
			..OverloadResponse::default()
		}
	}

	#[test]
	fn overload_bands() {
		assert_eq!(OverloadLevel::from_score(overload_score(&report(true))), OverloadLevel::High);
		assert_eq!(OverloadLevel::from_score(overload_score(&report(false))), OverloadLevel::Low);
		assert_eq!(OverloadLevel::from_score(0.5), OverloadLevel::Medium);
		assert_eq!(OverloadLevel::from_score(0.7), OverloadLevel::High);
	}

	#[test]
	fn failed_overload_keeps_conflicts() {
		let board = ConflictsBoard::from_outcomes(
			Ok(ConflictsResponse {
				conflicts_found: 2,
				conflicts: vec![
					conflict(ConflictKind::DecisionContradiction),
					conflict(ConflictKind::PriorityConflict),
				],
			}),
			Err(ApiError::Transport("connection refused".into())),
		);
		assert_eq!(board.conflicts.len(), 2);
		assert_eq!(board.overload, None);
		assert_eq!(board.people_at_risk(), 0);
		assert_eq!(board.overload_level(), None);
		assert_eq!(board.errors.len(), 1);
	}

	#[test]
	fn failed_conflicts_keep_overload() {
		let board = ConflictsBoard::from_outcomes(
			Err(ApiError::Status {
				status: 500,
				message: "boom".into(),
			}),
			Ok(report(true)),
		);
		assert!(board.conflicts.is_empty());
		assert_eq!(board.people_at_risk(), 1);
	}

	#[test]
	fn severity_filter_and_contradiction_count() {
		let board = ConflictsBoard {
			conflicts: vec![
				conflict(ConflictKind::DecisionContradiction),
				conflict(ConflictKind::TopicContradiction),
				conflict(ConflictKind::InformationConflict),
			],
			..ConflictsBoard::default()
		};
		assert_eq!(board.contradictions(), 2);
		assert_eq!(board.conflicts_of(None).len(), 3);
		assert_eq!(board.conflicts_of(Some(ConflictKind::InformationConflict)).len(), 1);
		assert!(board.conflicts_of(Some(ConflictKind::PriorityConflict)).is_empty());
	}
}
