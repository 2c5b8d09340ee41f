use leptos::prelude::*;

/// Section with a clickable header that hides its body.
#[component]
pub fn CollapsibleSection(
	#[prop(into)] title: String,
	#[prop(default = true)] open: bool,
	children: ChildrenFn,
) -> impl IntoView {
	let open = RwSignal::new(open);

	view! {
		<section class="collapsible">
			<button class="collapsible-header" on:click=move |_| open.update(|o| *o = !*o)>
				<span>{title}</span>
				<span class="chevron">{move || if open.get() { "▾" } else { "▸" }}</span>
			</button>
			{move || open.get().then(|| view! { <div class="collapsible-body">{children()}</div> })}
		</section>
	}
}
