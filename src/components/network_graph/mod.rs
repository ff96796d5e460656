//! Clustered force-directed network of research records.

pub mod attributes;
pub mod builder;
pub mod cluster;
mod component;
pub mod config;
pub mod details;
pub mod interaction;
mod legend;
pub mod palette;
pub mod pipeline;
mod render;
pub mod scale;
pub mod state;
pub mod types;

pub use attributes::{Column, ScaleKind, SizeAttribute};
pub use builder::GraphBuilder;
pub use cluster::{attract, cluster_centers};
pub use component::NetworkGraphCanvas;
pub use config::ChartConfig;
pub use interaction::{InteractionState, ViewTransform, find_nearest};
pub use pipeline::{DrawCommand, Frame};
pub use scale::{LinearScale, RankTable, SizeScale};
pub use state::{ChartState, Selection};
pub use types::{Edge, GraphData, Node, Point, Record};
