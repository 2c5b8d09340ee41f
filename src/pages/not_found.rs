use leptos::prelude::*;
use leptos_router::components::A;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Page not found"</h1>
			<p>"Nothing lives at this address."</p>
			<A href="/">"Back to the dashboard"</A>
		</div>
	}
}
