//! One module per route.

pub mod agent;
pub mod changes;
pub mod conflicts;
pub mod dashboard;
pub mod graph;
pub mod not_found;
