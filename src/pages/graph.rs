use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DashboardClient;
use crate::components::badges::NodeBadge;
use crate::components::knowledge_graph::{
	CategoryFilter, GraphFetch, GraphNode, GraphStats, GraphStore, GraphViewState,
	KnowledgeGraphCanvas, NodeCategory, connections, count_in, format_percent,
};
use crate::config::AppConfig;

/// Label and count on a filter button.
pub fn filter_button_label(filter: CategoryFilter, nodes: &[GraphNode]) -> String {
	let count = match filter {
		CategoryFilter::All => nodes.len(),
		CategoryFilter::Only(category) => count_in(nodes, category),
	};
	format!("{} ({count})", filter.label())
}

/// Rows of the statistics panel.
pub fn stats_rows(stats: &GraphStats) -> [(&'static str, String); 6] {
	[
		("Total Nodes", stats.total_nodes.to_string()),
		("People", stats.count_for(NodeCategory::Person).to_string()),
		("Topics", stats.count_for(NodeCategory::Topic).to_string()),
		("Decisions", stats.count_for(NodeCategory::Decision).to_string()),
		("Total Edges", stats.total_edges.to_string()),
		("Network Density", format_percent(stats.density)),
	]
}

#[component]
pub fn Graph() -> impl IntoView {
	let client = expect_context::<DashboardClient>();
	let config = expect_context::<AppConfig>();

	let store = RwSignal::new(GraphStore::default());
	let state = RwSignal::new(GraphViewState::default());
	let loading = RwSignal::new(true);
	let errors = RwSignal::new(Vec::<String>::new());

	let limit = config.graph_node_limit;
	spawn_local(async move {
		let fetch = GraphFetch::load(&client, limit).await;
		let failed = store.try_update(|s| s.apply(fetch)).unwrap_or_default();
		store.with_untracked(|s| state.update(|st| st.reconcile(&s.nodes)));
		errors.set(failed.iter().map(ToString::to_string).collect());
		loading.set(false);
	});

	let nodes = Signal::derive(move || store.with(|s| s.nodes.clone()));
	let edges = Signal::derive(move || store.with(|s| s.edges.clone()));

	let on_search = move |ev: leptos::ev::Event| {
		let value = event_target_value(&ev);
		store.with_untracked(|s| state.update(|st| st.set_search(value, &s.nodes)));
	};

	view! {
		<div class="graph-page">
			<div class="toolbar">
				<div class="filter-buttons">
					{CategoryFilter::CHOICES
						.into_iter()
						.map(|choice| {
							view! {
								<button
									class:active=move || state.with(|s| s.filter == choice)
									on:click=move |_| {
										store.with_untracked(|s| state.update(|st| st.set_filter(choice, &s.nodes)))
									}
								>
									{move || store.with(|s| filter_button_label(choice, &s.nodes))}
								</button>
							}
						})
						.collect_view()}
				</div>
				<input
					type="search"
					placeholder="Search nodes by id..."
					prop:value=move || state.with(|s| s.search.clone())
					on:input=on_search
				/>
				<div class="zoom-controls">
					<button on:click=move |_| state.update(|s| s.zoom.zoom_out())>"-"</button>
					<span class="zoom-label">{move || state.with(|s| s.zoom.label())}</span>
					<button on:click=move |_| state.update(|s| s.zoom.zoom_in())>"+"</button>
					<button on:click=move |_| state.update(|s| s.zoom.reset())>"Reset"</button>
				</div>
			</div>

			{move || {
				errors
					.get()
					.into_iter()
					.map(|e| view! { <div class="error-banner">{e}</div> })
					.collect_view()
			}}

			<div class="graph-layout">
				<div class="graph-surface">
					<Show when=move || loading.get()>
						<div class="loading">"Loading knowledge graph..."</div>
					</Show>
					<KnowledgeGraphCanvas nodes=nodes edges=edges state=state />
				</div>

				<aside class="graph-sidebar">
					{move || {
						let selected = state.with(|s| store.with(|st| s.selected_in(&st.nodes).cloned()));
						match selected {
							Some(node) => view! { <NodeDetail node=node store=store state=state /> }.into_any(),
							None => {
								view! {
									<div class="panel hint">"Click a node to see its connections."</div>
								}
									.into_any()
							}
						}
					}}

					<div class="panel">
						<h3>"Graph Statistics"</h3>
						{move || {
							store
								.with(|s| s.stats.clone())
								.map(|stats| {
									view! {
										<dl class="stats">
											{stats_rows(&stats)
												.into_iter()
												.map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
												.collect_view()}
										</dl>
									}
								})
						}}
					</div>
				</aside>
			</div>
		</div>
	}
}

#[component]
fn NodeDetail(node: GraphNode, store: RwSignal<GraphStore>, state: RwSignal<GraphViewState>) -> impl IntoView {
	let linked: Vec<(String, GraphNode)> = store.with(|s| {
		connections(&node, &s.edges, &s.nodes)
			.into_iter()
			.map(|c| (c.edge.category.label().to_string(), c.node.clone()))
			.collect()
	});
	let edge_count = linked.len();

	view! {
		<div class="panel node-detail">
			<NodeBadge category=node.category />
			<h3>{node.label.clone()}</h3>
			<code class="node-id">{node.id.clone()}</code>
			<dl class="stats">
				<dt>"Connections"</dt>
				<dd>{node.connections}</dd>
				<dt>"Edges shown"</dt>
				<dd>{edge_count}</dd>
			</dl>
			<h4>"Connected to"</h4>
			<ul class="connections">
				{linked
					.into_iter()
					.map(|(relation, other)| {
						let target = other.clone();
						view! {
							<li>
								<button on:click=move |_| {
									store.with_untracked(|s| state.update(|st| st.focus(&target, &s.nodes)))
								}>
									<NodeBadge category=other.category />
									<span>{other.label}</span>
									<span class="relation">{relation}</span>
								</button>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<button class="clear" on:click=move |_| state.update(|s| s.clear_selection())>
				"Clear selection"
			</button>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, category: NodeCategory) -> GraphNode {
		GraphNode {
			id: id.into(),
			category,
			label: id.into(),
			connections: 1,
		}
	}

	#[test]
	fn filter_buttons_carry_counts() {
		let nodes = vec![
			node("alice", NodeCategory::Person),
			node("bob", NodeCategory::Person),
			node("topic_launch", NodeCategory::Topic),
		];
		assert_eq!(filter_button_label(CategoryFilter::All, &nodes), "All Types (3)");
		assert_eq!(
			filter_button_label(CategoryFilter::Only(NodeCategory::Person), &nodes),
			"Person (2)"
		);
		assert_eq!(
			filter_button_label(CategoryFilter::Only(NodeCategory::Decision), &nodes),
			"Decision (0)"
		);
	}

	#[test]
	fn statistics_panel_has_six_rows() {
		let stats = GraphStats {
			total_nodes: 38,
			total_edges: 45,
			people_count: 8,
			topics_count: 17,
			decisions_count: 13,
			density: 0.032,
		};
		let rows = stats_rows(&stats);
		assert_eq!(rows[1], ("People", "8".to_string()));
		assert_eq!(rows[5], ("Network Density", "3.2%".to_string()));
	}
}
