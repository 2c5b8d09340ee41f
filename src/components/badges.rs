use leptos::prelude::*;

use crate::api::{ChangeKind, ConflictKind};
use crate::components::knowledge_graph::NodeCategory;

/// Category-coloured pill for a graph node.
#[component]
pub fn NodeBadge(category: NodeCategory) -> impl IntoView {
	view! {
		<span class=format!("badge node-{}", category.as_str())>{category.label()}</span>
	}
}

#[component]
pub fn ChangeKindBadge(kind: ChangeKind) -> impl IntoView {
	view! { <span class=format!("badge {}", kind.class())>{kind.label()}</span> }
}

#[component]
pub fn ConflictBadge(kind: ConflictKind) -> impl IntoView {
	view! { <span class=format!("badge {}", kind.class())>{kind.label()}</span> }
}
