//! The live chart: simulation, view and selection for one build.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData};

use super::attributes::{Column, SizeAttribute};
use super::builder::GraphBuilder;
use super::cluster::{attract, cluster_centers};
use super::config::ChartConfig;
use super::details::NodeDetails;
use super::interaction::{InteractionState, ViewTransform};
use super::palette::{LegendEntry, category_colors, legend_entries};
use super::pipeline::Frame;
use super::scale::SizeScale;
use super::types::{GraphData, Node, Point, Record};

/// Current values of the two selectors, as column names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
	/// Column that sizes nodes.
	pub size_column: String,
	/// Column whose equal values produce secondary links.
	pub secondary_column: String,
}

impl Default for Selection {
	fn default() -> Self {
		Self {
			size_column: SizeAttribute::default().column().name().into(),
			secondary_column: Column::SecondaryDeterminantAnalyzed1.name().into(),
		}
	}
}

/// Background drag in progress.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Pointer is down on the canvas.
	pub active: bool,
	/// Pointer travelled past the click distance since going down. The click
	/// that ends such a drag is swallowed.
	pub moved: bool,
	/// Screen position where the drag started.
	pub start_x: f64,
	/// Screen position where the drag started.
	pub start_y: f64,
	/// View translation when the drag started.
	pub transform_start_x: f64,
	/// View translation when the drag started.
	pub transform_start_y: f64,
}

/// Eased move between two view transforms.
#[derive(Clone, Copy, Debug)]
pub struct ZoomTransition {
	from: ViewTransform,
	to: ViewTransform,
	start_ms: f64,
	duration_ms: f64,
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// One chart instance: the current build plus everything that reacts to it.
pub struct ChartState {
	/// Design constants.
	pub config: ChartConfig,
	/// Nodes and edges of the current build.
	pub graph: GraphData,
	/// Unique categories in first-seen order.
	pub categories: Vec<String>,
	/// Cluster centre per category.
	pub centers: HashMap<String, Point>,
	/// Legend rows, largest category first.
	pub legend: Vec<LegendEntry>,
	/// Hover and click.
	pub interaction: InteractionState,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// Background drag.
	pub pan: PanState,
	/// Running initial zoom, if any.
	pub zoom: Option<ZoomTransition>,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	simulation: ForceGraph<usize, ()>,
	positions: Vec<Point>,
	alpha: f64,
	running: bool,
}

impl ChartState {
	/// Builds the first graph and starts the simulation.
	pub fn new(
		config: ChartConfig,
		rows: &[Record],
		selection: &Selection,
		width: f64,
		height: f64,
	) -> Self {
		let simulation = ForceGraph::new(config.simulation.parameters());
		let mut state = Self {
			graph: GraphData::default(),
			categories: Vec::new(),
			centers: HashMap::new(),
			legend: Vec::new(),
			interaction: InteractionState::default(),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			zoom: None,
			width,
			height,
			simulation,
			positions: Vec::new(),
			alpha: config.alpha.start,
			running: false,
			config,
		};
		state.rebuild(rows, selection);
		state
	}

	/// Replaces nodes, edges and simulation with a fresh build. Any selection
	/// from the previous build is dropped.
	pub fn rebuild(&mut self, rows: &[Record], selection: &Selection) {
		let mut graph =
			GraphBuilder::from_config(&self.config).build(rows, &selection.secondary_column);

		SizeScale::build(&graph.nodes, &selection.size_column, self.config.node_radius)
			.assign(&mut graph.nodes);

		let categories = graph.categories();
		let colors = category_colors(&self.config, &categories);
		for node in &mut graph.nodes {
			node.color = colors.get(&node.category).cloned().unwrap_or_default();
		}

		self.legend = legend_entries(&graph.nodes, &categories, &colors);
		self.centers = cluster_centers(self.width, self.height, &categories);
		self.categories = categories;
		self.graph = graph;
		self.interaction.clear();
		self.pan = PanState::default();
		self.restart_simulation();

		log::info!(
			"rebuilt chart: {} nodes, {} edges, {} categories (size {:?}, secondary {:?})",
			self.graph.nodes.len(),
			self.graph.edges.len(),
			self.categories.len(),
			selection.size_column,
			selection.secondary_column
		);
	}

	fn restart_simulation(&mut self) {
		let mut simulation = ForceGraph::new(self.config.simulation.parameters());
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		let golden = PI * (3.0 - 5.0_f64.sqrt());

		let indices = self
			.graph
			.nodes
			.iter()
			.enumerate()
			.map(|(i, _)| {
				let (radius, angle) = (10.0 * (0.5 + i as f64).sqrt(), i as f64 * golden);
				simulation.add_node(NodeData {
					x: (cx + radius * angle.cos()) as f32,
					y: (cy + radius * angle.sin()) as f32,
					mass: self.config.simulation.node_mass,
					is_anchor: false,
					user_data: i,
				})
			})
			.collect::<Vec<_>>();

		for edge in &self.graph.edges {
			simulation.add_edge(indices[edge.source], indices[edge.target], EdgeData::default());
		}

		self.simulation = simulation;
		self.alpha = self.config.alpha.start;
		self.running = true;
		self.sync_positions();
	}

	fn sync_positions(&mut self) {
		let positions = &mut self.positions;
		positions.clear();
		positions.resize(self.graph.nodes.len(), Point::default());
		self.simulation.visit_nodes(|node| {
			if let Some(slot) = positions.get_mut(node.data.user_data) {
				*slot = Point::new(node.x() as f64, node.y() as f64);
			}
		});
	}

	/// Advances the simulation one step: integrate, cool, then pull nodes
	/// toward their category centre with the cooled alpha. The pull is skipped
	/// while the user pans.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.running {
			return false;
		}

		self.simulation.update(dt);
		self.alpha += -self.alpha * self.config.alpha.decay;

		if !self.pan.active {
			let (nodes, centers, alpha) = (&self.graph.nodes, &self.centers, self.alpha);
			self.simulation.visit_nodes_mut(|node| {
				let Some(center) = nodes
					.get(node.data.user_data)
					.and_then(|n| centers.get(&n.category))
				else {
					return;
				};
				let moved = attract(
					Point::new(node.data.x as f64, node.data.y as f64),
					*center,
					alpha,
				);
				node.data.x = moved.x as f32;
				node.data.y = moved.y as f32;
			});
		}

		if self.alpha < self.config.alpha.min {
			log::debug!("simulation settled");
			self.running = false;
		}

		self.sync_positions();
		true
	}

	/// Halts the simulation; positions stay where they are.
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Whether ticks still move nodes.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Current cooling coefficient.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Node positions, indexed like `graph.nodes`.
	pub fn positions(&self) -> &[Point] {
		&self.positions
	}

	/// Everything the next paint needs.
	pub fn frame(&self) -> Frame<'_> {
		Frame {
			config: &self.config,
			nodes: &self.graph.nodes,
			edges: &self.graph.edges,
			positions: &self.positions,
			interaction: &self.interaction,
		}
	}

	/// Hit-tests a screen-space pointer position and updates the hover.
	pub fn pointer_move(&mut self, screen: Point) -> Option<usize> {
		if self.config.stop_on_pointer_move {
			self.stop();
		}
		let at = self.transform.invert(screen);
		self.interaction
			.on_pointer_move(at, self.config.search_radius(), &self.positions)
	}

	/// Clears the hover and ends any pan.
	pub fn pointer_leave(&mut self) {
		self.interaction.set_hovered(None);
		self.end_pan();
	}

	/// Toggles the clicked node, unless the click only ends a drag.
	pub fn click(&mut self) {
		if std::mem::take(&mut self.pan.moved) {
			return;
		}
		self.interaction.on_click();
	}

	/// Node the detail panel shows.
	pub fn displayed_node(&self) -> Option<&Node> {
		self.interaction
			.displayed()
			.and_then(|index| self.graph.nodes.get(index))
	}

	/// Detail panel content for [`Self::displayed_node`].
	pub fn details(&self) -> Option<NodeDetails> {
		self.displayed_node()
			.map(|node| NodeDetails::from_record(&node.record))
	}

	/// New canvas size; cluster centres follow.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.centers = cluster_centers(width, height, &self.categories);
	}

	/// Pointer went down at `screen`.
	pub fn start_pan(&mut self, screen: Point) {
		self.zoom = None;
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: screen.x,
			start_y: screen.y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Follows the pointer while a pan is active.
	pub fn pan_to(&mut self, screen: Point) {
		if !self.pan.active {
			return;
		}
		let travelled = Point::new(self.pan.start_x, self.pan.start_y).distance_sq(screen);
		if travelled > self.config.click_distance.powi(2) {
			self.pan.moved = true;
		}
		self.transform.x = self.pan.transform_start_x + (screen.x - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (screen.y - self.pan.start_y);
	}

	/// Pointer released.
	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zooms about the pointer, one step per wheel event.
	pub fn wheel(&mut self, screen: Point, delta_y: f64) {
		self.zoom = None;
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.transform
			.zoom_about(screen, factor, self.config.scale_extent);
	}

	/// Starts the animated move to the default zoom for this window width.
	pub fn begin_initial_zoom(&mut self, window_width: f64, now_ms: f64) {
		let (scale, divider) = self.config.initial_zoom(window_width);
		self.zoom = Some(ZoomTransition {
			from: self.transform,
			to: ViewTransform {
				x: -self.width / divider,
				y: -self.height / divider,
				k: scale,
			},
			start_ms: now_ms,
			duration_ms: self.config.zoom_duration_ms,
		});
	}

	/// Moves the initial zoom forward to `now_ms`.
	pub fn advance_zoom(&mut self, now_ms: f64) {
		let Some(zoom) = self.zoom else {
			return;
		};
		let t = if zoom.duration_ms > 0.0 {
			((now_ms - zoom.start_ms) / zoom.duration_ms).clamp(0.0, 1.0)
		} else {
			1.0
		};
		if t >= 1.0 {
			self.transform = zoom.to;
			self.zoom = None;
		} else {
			self.transform = ViewTransform::lerp(zoom.from, zoom.to, ease_out_cubic(t));
		}
	}
}
