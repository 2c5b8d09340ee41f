use leptos::prelude::*;

/// Headline number with a caption.
#[component]
pub fn MetricCard(
	#[prop(into)] label: String,
	#[prop(into)] value: Signal<String>,
	#[prop(optional, into)] hint: Option<String>,
	/// Extra class for the accent colour.
	#[prop(optional, into)]
	accent: Option<String>,
) -> impl IntoView {
	let class = match accent {
		Some(accent) => format!("metric-card {accent}"),
		None => "metric-card".to_string(),
	};
	view! {
		<div class=class>
			<div class="metric-label">{label}</div>
			<div class="metric-value">{move || value.get()}</div>
			{hint.map(|h| view! { <div class="metric-hint">{h}</div> })}
		</div>
	}
}
