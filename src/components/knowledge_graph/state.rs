use super::filter::{CategoryFilter, filter_nodes};
use super::types::{GraphEdge, GraphNode};

pub const MIN_ZOOM_PERCENT: u16 = 50;
pub const MAX_ZOOM_PERCENT: u16 = 200;
pub const ZOOM_STEP_PERCENT: u16 = 10;

/// Render scale, kept in whole percent so repeated steps stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zoom(u16);

impl Default for Zoom {
	fn default() -> Self {
		Zoom(100)
	}
}

impl Zoom {
	pub fn percent(self) -> u16 {
		self.0
	}

	pub fn factor(self) -> f64 {
		f64::from(self.0) / 100.0
	}

	pub fn zoom_in(&mut self) {
		self.0 = (self.0 + ZOOM_STEP_PERCENT).min(MAX_ZOOM_PERCENT);
	}

	pub fn zoom_out(&mut self) {
		self.0 = self.0.saturating_sub(ZOOM_STEP_PERCENT).max(MIN_ZOOM_PERCENT);
	}

	pub fn reset(&mut self) {
		*self = Zoom::default();
	}

	/// Step for one wheel event: down zooms out, up zooms in, sideways
	/// leaves the zoom alone. Returns whether the event was a zoom.
	pub fn scroll(&mut self, delta_y: f64) -> bool {
		if delta_y > 0.0 {
			self.zoom_out();
		} else if delta_y < 0.0 {
			self.zoom_in();
		} else {
			return false;
		}
		true
	}

	pub fn label(self) -> String {
		format!("{}%", self.0)
	}
}

/// Transient state of one graph view.
///
/// Every mutation that can shrink the visible set re-checks the selection,
/// so `selected` never names a node the user cannot see. Only the id is
/// kept; the node itself is looked up in the current list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphViewState {
	pub filter: CategoryFilter,
	pub search: String,
	pub zoom: Zoom,
	selected: Option<String>,
}

impl GraphViewState {
	pub fn selected_id(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// The selected node as it appears in `nodes`.
	pub fn selected_in<'a>(&self, nodes: &'a [GraphNode]) -> Option<&'a GraphNode> {
		let id = self.selected_id()?;
		nodes.iter().find(|n| n.id == id)
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected_id() == Some(id)
	}

	/// Click on a node: select it, or clear if it already was.
	pub fn select(&mut self, node: &GraphNode) {
		if self.is_selected(&node.id) {
			self.selected = None;
		} else {
			self.selected = Some(node.id.clone());
		}
	}

	/// Jump to `node` from outside the canvas, widening the filter first if
	/// it currently hides the node.
	pub fn focus(&mut self, node: &GraphNode, nodes: &[GraphNode]) {
		if !self.visible_nodes(nodes).iter().any(|n| n.id == node.id) {
			self.filter = CategoryFilter::All;
			self.search.clear();
		}
		self.selected = Some(node.id.clone());
		self.reconcile(nodes);
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	pub fn visible_nodes(&self, nodes: &[GraphNode]) -> Vec<GraphNode> {
		filter_nodes(nodes, self.filter, &self.search)
	}

	pub fn set_filter(&mut self, filter: CategoryFilter, nodes: &[GraphNode]) {
		self.filter = filter;
		self.reconcile(nodes);
	}

	pub fn set_search(&mut self, search: impl Into<String>, nodes: &[GraphNode]) {
		self.search = search.into();
		self.reconcile(nodes);
	}

	/// Drop the selection if it fell out of the visible set.
	///
	/// Call with the full node list whenever it is replaced.
	pub fn reconcile(&mut self, nodes: &[GraphNode]) {
		let Some(selected) = self.selected_id() else {
			return;
		};
		let still_visible = self.visible_nodes(nodes).iter().any(|n| n.id == selected);
		if !still_visible {
			self.selected = None;
		}
	}
}

/// One edge touching the selection, with the node at its far end.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection<'a> {
	pub edge: &'a GraphEdge,
	pub node: &'a GraphNode,
}

/// Edges touching `selected`, each paired with the resolvable node at its
/// other end, in edge order.
pub fn connections<'a>(
	selected: &GraphNode,
	edges: &'a [GraphEdge],
	nodes: &'a [GraphNode],
) -> Vec<Connection<'a>> {
	edges
		.iter()
		.filter_map(|edge| {
			let other = edge.other_end(&selected.id)?;
			let node = nodes.iter().find(|n| n.id == other)?;
			Some(Connection { edge, node })
		})
		.collect()
}
