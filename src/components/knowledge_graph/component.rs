use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::scene::GraphScene;
use super::state::GraphViewState;
use super::types::{GraphEdge, GraphNode};

const MIN_WIDTH: f64 = 600.0;
const MIN_HEIGHT: f64 = 400.0;

/// Canvas position of a mouse event in canvas pixels.
fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let scale_x = if rect.width() > 0.0 {
		canvas.width() as f64 / rect.width()
	} else {
		1.0
	};
	let scale_y = if rect.height() > 0.0 {
		canvas.height() as f64 / rect.height()
	} else {
		1.0
	};
	(
		(ev.client_x() as f64 - rect.left()) * scale_x,
		(ev.client_y() as f64 - rect.top()) * scale_y,
	)
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((900.0, 600.0));
	(w.max(MIN_WIDTH), h.max(MIN_HEIGHT))
}

/// Interactive knowledge graph drawn on a 2D canvas.
///
/// Clicking a node toggles it in `state`; the wheel steps the zoom.
#[component]
pub fn KnowledgeGraphCanvas(
	#[prop(into)] nodes: Signal<Vec<GraphNode>>,
	#[prop(into)] edges: Signal<Vec<GraphEdge>>,
	state: RwSignal<GraphViewState>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let viewport = RwSignal::new((900.0, 600.0));
	let hovering = RwSignal::new(false);

	let scene = Memo::new(move |_| {
		let (w, h) = viewport.get();
		nodes.with(|nodes| {
			edges.with(|edges| state.with(|state| GraphScene::build(nodes, edges, state, w, h)))
		})
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		viewport.set(parent_size(&canvas));
	});

	let resize = window_event_listener(leptos::ev::resize, move |_| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			viewport.set(parent_size(&canvas));
		}
	});
	on_cleanup(move || resize.remove());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		scene.with(|scene| {
			canvas.set_width(scene.width as u32);
			canvas.set_height(scene.height as u32);
			let Ok(Some(ctx)) = canvas.get_context("2d") else {
				return;
			};
			let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
				return;
			};
			render::render(scene, &ctx);
		});
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = event_position(&canvas, &ev);
		let Some(id) = scene.with_untracked(|s| s.node_at(x, y).map(|n| n.id.clone())) else {
			return;
		};
		let Some(node) = nodes.with_untracked(|nodes| nodes.iter().find(|n| n.id == id).cloned())
		else {
			return;
		};
		state.update(|s| s.select(&node));
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = event_position(&canvas, &ev);
		let over_node = scene.with_untracked(|s| s.node_at(x, y).is_some());
		if hovering.get_untracked() != over_node {
			hovering.set(over_node);
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		let delta = ev.delta_y();
		if delta == 0.0 {
			return;
		}
		ev.prevent_default();
		state.update(|s| {
			s.zoom.scroll(delta);
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="knowledge-graph-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=move |_| hovering.set(false)
			on:wheel=on_wheel
			style=move || {
				let cursor = if hovering.get() { "pointer" } else { "default" };
				format!("display: block; width: 100%; cursor: {cursor};")
			}
		/>
	}
}
