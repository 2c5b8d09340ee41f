use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::demo::QUERY_EXAMPLES;

/// Free-text question box. Submits trimmed, non-empty text only.
#[component]
pub fn QueryInput(
	value: RwSignal<String>,
	on_submit: Callback<String>,
	#[prop(optional, into)] loading: Signal<bool>,
	/// Show clickable example questions under the box.
	#[prop(optional)]
	suggestions: bool,
	#[prop(default = "Ask anything about your organization...".to_string(), into)]
	placeholder: String,
) -> impl IntoView {
	let submit = move || {
		let query = value.get_untracked().trim().to_string();
		if !query.is_empty() && !loading.get_untracked() {
			on_submit.run(query);
		}
	};

	view! {
		<form
			class="query-input"
			on:submit=move |ev: SubmitEvent| {
				ev.prevent_default();
				submit();
			}
		>
			<input
				type="text"
				placeholder=placeholder
				prop:value=move || value.get()
				on:input=move |ev| value.set(event_target_value(&ev))
			/>
			<button type="submit" disabled=move || loading.get() || value.with(|v| v.trim().is_empty())>
				{move || if loading.get() { "Thinking..." } else { "Ask" }}
			</button>
		</form>
		{suggestions
			.then(|| {
				view! {
					<div class="query-suggestions">
						{QUERY_EXAMPLES
							.iter()
							.map(|&(text, agent)| {
								view! {
									<button
										class="suggestion"
										title=format!("Answered by the {agent} agent")
										on:click=move |_| {
											value.set(text.to_string());
											submit();
										}
									>
										{text}
									</button>
								}
							})
							.collect_view()}
					</div>
				}
			})}
	}
}
