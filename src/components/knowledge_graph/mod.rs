mod component;
mod filter;
mod layout;
mod render;
mod scene;
mod state;
mod store;
mod types;

pub use component::KnowledgeGraphCanvas;
pub use filter::{CategoryFilter, count_in, filter_nodes};
pub use layout::{PositionedNode, layout_nodes};
pub use scene::{EdgeStyle, GraphScene, SceneEdge, SceneNode, edge_style, node_radius};
pub use state::{Connection, GraphViewState, Zoom, connections};
pub use store::{GraphFetch, GraphStore};
pub use types::{EdgeCategory, GraphEdge, GraphNode, GraphStats, NodeCategory, format_percent};
