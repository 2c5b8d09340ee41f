use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{GraphScene, HALO_WIDTH};

const LABEL_COLOR: &str = "hsl(220, 13%, 91%)";
const SELECTED_RING: &str = "white";

pub fn render(scene: &GraphScene, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
	ctx.save();
	// Zoom about the centre; positions themselves never move
	let (cx, cy) = (scene.width / 2.0, scene.height / 2.0);
	let _ = ctx.translate(cx, cy);
	let _ = ctx.scale(scene.zoom, scene.zoom);
	let _ = ctx.translate(-cx, -cy);
	draw_edges(scene, ctx);
	draw_nodes(scene, ctx);
	ctx.restore();
}

fn draw_edges(scene: &GraphScene, ctx: &CanvasRenderingContext2d) {
	for edge in &scene.edges {
		ctx.set_global_alpha(edge.style.opacity);
		ctx.set_stroke_style_str(edge.style.color);
		ctx.set_line_width(edge.style.width);
		ctx.begin_path();
		ctx.move_to(edge.from.0, edge.from.1);
		ctx.line_to(edge.to.0, edge.to.1);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(scene: &GraphScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");

	for node in &scene.nodes {
		let (x, y, r) = (node.x, node.y, node.radius);
		ctx.set_global_alpha(node.opacity);

		ctx.begin_path();
		let _ = ctx.arc(x, y, r + HALO_WIDTH, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.category.halo_color());
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.category.color());
		ctx.fill();

		if node.selected {
			ctx.set_stroke_style_str(SELECTED_RING);
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&node.label, x, y + r + 14.0);
	}
	ctx.set_global_alpha(1.0);
}
