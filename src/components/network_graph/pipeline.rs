//! Per-frame draw decisions, independent of any drawing backend.

use super::config::ChartConfig;
use super::interaction::InteractionState;
use super::types::{Edge, Node, Point};

/// One primitive to paint, in simulation coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// An edge.
	Line {
		/// Source node position.
		from: Point,
		/// Target node position.
		to: Point,
		/// Stroke colour.
		color: String,
		/// Stroke width.
		width: f64,
		/// Opacity.
		alpha: f64,
	},
	/// A node.
	Circle {
		/// Node position.
		center: Point,
		/// Node radius.
		radius: f64,
		/// Category colour.
		fill: String,
		/// Border colour.
		stroke: String,
		/// Border width.
		stroke_width: f64,
		/// Opacity.
		alpha: f64,
	},
}

/// Read-only view of everything one frame needs.
pub struct Frame<'a> {
	/// Colours, widths and opacities.
	pub config: &'a ChartConfig,
	/// Nodes of the current build.
	pub nodes: &'a [Node],
	/// Edges of the current build.
	pub edges: &'a [Edge],
	/// Node positions, indexed like `nodes`.
	pub positions: &'a [Point],
	/// Current hover and click.
	pub interaction: &'a InteractionState,
}

impl Frame<'_> {
	/// Clicked node colour wins over hovered node colour.
	pub fn edge_color(&self, edge: &Edge) -> &str {
		let touching = |node: Option<usize>| node.filter(|&index| edge.touches(index));
		touching(self.interaction.clicked())
			.or_else(|| touching(self.interaction.hovered()))
			.and_then(|index| self.nodes.get(index))
			.map(|node| node.color.as_str())
			.unwrap_or(self.config.default_edge_color.as_str())
	}

	fn edge_highlighted(&self, edge: &Edge) -> bool {
		[self.interaction.clicked(), self.interaction.hovered()]
			.into_iter()
			.flatten()
			.any(|index| edge.touches(index))
	}

	/// Highlight border for hovered or clicked nodes.
	pub fn border_color(&self, node: usize) -> &str {
		if self.interaction.is_selected(node) {
			self.config.highlight_border_color.as_str()
		} else {
			self.config.default_border_color.as_str()
		}
	}

	fn alpha(&self, highlighted: bool) -> f64 {
		if highlighted || !self.interaction.is_active() {
			1.0
		} else {
			self.config.faded_alpha
		}
	}

	/// Edges first, then nodes on top, both in collection order.
	pub fn commands(&self) -> Vec<DrawCommand> {
		let mut commands = Vec::with_capacity(self.edges.len() + self.nodes.len());

		for edge in self.edges {
			let (Some(&from), Some(&to)) =
				(self.positions.get(edge.source), self.positions.get(edge.target))
			else {
				continue;
			};
			commands.push(DrawCommand::Line {
				from,
				to,
				color: self.edge_color(edge).to_owned(),
				width: if edge.primary {
					self.config.primary_line_width
				} else {
					self.config.secondary_line_width
				},
				alpha: self.alpha(self.edge_highlighted(edge)),
			});
		}

		for (index, (node, &center)) in self.nodes.iter().zip(self.positions).enumerate() {
			commands.push(DrawCommand::Circle {
				center,
				radius: node.radius,
				fill: node.color.clone(),
				stroke: self.border_color(index).to_owned(),
				stroke_width: self.config.node_border_width,
				alpha: self.alpha(self.interaction.is_selected(index)),
			});
		}

		commands
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::Record;

	fn node(id: &str, color: &str) -> Node {
		Node {
			id: id.into(),
			category: String::new(),
			radius: 4.0,
			color: color.into(),
			record: Record::new().with("ID", id),
		}
	}

	struct Fixture {
		config: ChartConfig,
		nodes: Vec<Node>,
		edges: Vec<Edge>,
		positions: Vec<Point>,
	}

	impl Fixture {
		fn new() -> Self {
			Self {
				config: ChartConfig::default(),
				nodes: vec![node("a", "#111111"), node("b", "#222222"), node("c", "#333333")],
				edges: vec![
					Edge { source: 0, target: 1, primary: true },
					Edge { source: 1, target: 2, primary: false },
				],
				positions: vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(100.0, 0.0)],
			}
		}

		fn commands(&self, interaction: &InteractionState) -> Vec<DrawCommand> {
			Frame {
				config: &self.config,
				nodes: &self.nodes,
				edges: &self.edges,
				positions: &self.positions,
				interaction,
			}
			.commands()
		}
	}

	fn select(hover: Option<usize>, click: Option<usize>) -> InteractionState {
		let mut state = InteractionState::default();
		state.set_hovered(click);
		state.on_click();
		state.set_hovered(hover);
		state
	}

	#[test]
	fn idle_frame_is_fully_opaque() {
		let fixture = Fixture::new();
		let commands = fixture.commands(&InteractionState::default());
		assert_eq!(commands.len(), 5);
		for command in &commands {
			match command {
				DrawCommand::Line { color, alpha, .. } => {
					assert_eq!(color, "#cccccc");
					assert_eq!(*alpha, 1.0);
				}
				DrawCommand::Circle { stroke, alpha, .. } => {
					assert_eq!(stroke, "#ffffff");
					assert_eq!(*alpha, 1.0);
				}
			}
		}
	}

	#[test]
	fn hover_highlights_its_edges_and_fades_the_rest() {
		let fixture = Fixture::new();
		let commands = fixture.commands(&select(Some(0), None));

		let DrawCommand::Line { color, alpha, width, .. } = &commands[0] else {
			panic!("expected line");
		};
		assert_eq!((color.as_str(), *alpha, *width), ("#111111", 1.0, 1.5));

		let DrawCommand::Line { color, alpha, width, .. } = &commands[1] else {
			panic!("expected line");
		};
		assert_eq!((color.as_str(), *alpha, *width), ("#cccccc", 0.3, 0.2));

		let DrawCommand::Circle { stroke, alpha, fill, .. } = &commands[2] else {
			panic!("expected circle");
		};
		assert_eq!((stroke.as_str(), *alpha, fill.as_str()), ("#000000", 1.0, "#111111"));

		let DrawCommand::Circle { stroke, alpha, fill, .. } = &commands[3] else {
			panic!("expected circle");
		};
		assert_eq!((stroke.as_str(), *alpha, fill.as_str()), ("#ffffff", 0.3, "#222222"));
	}

	#[test]
	fn clicked_colour_beats_hovered_colour_on_shared_edges() {
		let fixture = Fixture::new();
		let commands = fixture.commands(&select(Some(1), Some(2)));

		let colors = commands
			.iter()
			.filter_map(|command| match command {
				DrawCommand::Line { color, .. } => Some(color.as_str()),
				DrawCommand::Circle { .. } => None,
			})
			.collect::<Vec<_>>();
		assert_eq!(colors, vec!["#222222", "#333333"]);

		let strokes = commands
			.iter()
			.filter_map(|command| match command {
				DrawCommand::Circle { stroke, .. } => Some(stroke.as_str()),
				DrawCommand::Line { .. } => None,
			})
			.collect::<Vec<_>>();
		assert_eq!(strokes, vec!["#ffffff", "#000000", "#000000"]);
	}
}
