//! Chart components.

pub mod network_graph;
