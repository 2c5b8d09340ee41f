use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// One sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub path: &'static str,
	pub label: &'static str,
	pub description: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
	NavItem {
		path: "/",
		label: "Dashboard",
		description: "Overview of organizational intelligence",
	},
	NavItem {
		path: "/graph",
		label: "Knowledge Graph",
		description: "People, topics and decisions and how they connect",
	},
	NavItem {
		path: "/agent",
		label: "AI Agent",
		description: "Ask questions and get grounded answers",
	},
	NavItem {
		path: "/changes",
		label: "Changes",
		description: "What changed in the organization recently",
	},
	NavItem {
		path: "/conflicts",
		label: "Conflicts",
		description: "Contradictions and information overload",
	},
];

/// The nav entry owning `path`; the dashboard only owns `/` itself.
pub fn nav_item_for(path: &str) -> Option<&'static NavItem> {
	NAV_ITEMS.iter().find(|item| {
		if item.path == "/" {
			path == "/"
		} else {
			path == item.path || path.starts_with(&format!("{}/", item.path))
		}
	})
}

/// Sidebar, top bar and the routed page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
	let location = use_location();
	let collapsed = RwSignal::new(false);
	let current = Memo::new(move |_| location.pathname.with(|p| nav_item_for(p).copied()));

	view! {
		<div class="app-shell" class:collapsed=move || collapsed.get()>
			<nav class="sidebar">
				<div class="brand">
					<span class="brand-mark">"CoS"</span>
					<Show when=move || !collapsed.get()>
						<span class="brand-name">"AI Chief of Staff"</span>
					</Show>
				</div>
				{NAV_ITEMS
					.iter()
					.map(|item| {
						let is_active = move || current.get().is_some_and(|c| c.path == item.path);
						view! {
							<A href=item.path attr:class=move || {
								if is_active() { "nav-link active" } else { "nav-link" }
							}>
								<span class="nav-initial">{&item.label[..1]}</span>
								<Show when=move || !collapsed.get()>
									<span class="nav-label">{item.label}</span>
								</Show>
							</A>
						}
					})
					.collect_view()}
				<button class="collapse-toggle" on:click=move |_| collapsed.update(|c| *c = !*c)>
					{move || if collapsed.get() { "»" } else { "«" }}
				</button>
			</nav>
			<div class="main-column">
				<header class="top-bar">
					{move || {
						current
							.get()
							.map(|item| {
								view! {
									<h1>{item.label}</h1>
									<p class="subtitle">{item.description}</p>
								}
							})
					}}
				</header>
				<main class="page">{children()}</main>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nested_paths_resolve_to_their_section() {
		assert_eq!(nav_item_for("/").map(|i| i.label), Some("Dashboard"));
		assert_eq!(nav_item_for("/graph").map(|i| i.label), Some("Knowledge Graph"));
		assert_eq!(nav_item_for("/changes/today").map(|i| i.label), Some("Changes"));
		assert_eq!(nav_item_for("/graphs"), None);
		assert_eq!(nav_item_for("/nowhere"), None);
	}
}
