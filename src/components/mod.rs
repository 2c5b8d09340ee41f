//! Reusable view pieces shared by the pages.

pub mod activity_chart;
pub mod badges;
pub mod collapsible;
pub mod knowledge_graph;
pub mod metric_card;
pub mod query_input;
pub mod shell;
