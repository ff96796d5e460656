//! Design constants of the chart.

use force_graph::SimulationParameters;

use super::attributes::Column;

/// Design constants for one chart. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct ChartConfig {
	/// Column that colours and clusters nodes.
	pub category_column: String,
	/// Column whose equal values produce primary links.
	pub primary_link_column: String,
	/// Smallest and largest node radius.
	pub node_radius: (f64, f64),
	/// Category colours, cycled in category order.
	pub palette: Vec<String>,
	/// Stroke width of primary links.
	pub primary_line_width: f64,
	/// Stroke width of secondary links.
	pub secondary_line_width: f64,
	/// Edge stroke when no touching node is selected.
	pub default_edge_color: String,
	/// Stroke width of node borders.
	pub node_border_width: f64,
	/// Border of unselected nodes.
	pub default_border_color: String,
	/// Border of hovered or clicked nodes.
	pub highlight_border_color: String,
	/// Opacity of everything unrelated to the selection.
	pub faded_alpha: f64,
	/// Zoom scale limits.
	pub scale_extent: (f64, f64),
	/// Screen pixels a press may travel and still count as a click.
	pub click_distance: f64,
	/// Length of the initial zoom animation.
	pub zoom_duration_ms: f64,
	/// Cooling schedule.
	pub alpha: AlphaConfig,
	/// Halt the simulation on the first pointer move.
	pub stop_on_pointer_move: bool,
	/// Force integrator settings.
	pub simulation: SimulationConfig,
}

impl ChartConfig {
	/// Hover hit radius in simulation units.
	pub fn search_radius(&self) -> f64 {
		self.node_radius.1
	}

	/// Palette colour for the `index`th category.
	pub fn color_for(&self, index: usize) -> &str {
		if self.palette.is_empty() {
			return &self.default_edge_color;
		}
		&self.palette[index % self.palette.len()]
	}

	/// Initial zoom `(scale, size divider)` for a given window width.
	pub fn initial_zoom(&self, window_width: f64) -> (f64, f64) {
		if window_width < 1600.0 { (2.3, 1.5) } else { (2.8, 1.1) }
	}
}

impl Default for ChartConfig {
	fn default() -> Self {
		Self {
			category_column: Column::SocialDeterminantCategory.name().into(),
			primary_link_column: Column::PrimaryDeterminantAnalyzed.name().into(),
			node_radius: (2.0, 20.0),
			palette: [
				"#2965CC", "#29A634", "#D99E0B", "#D13913", "#8F398F", "#00B3A4", "#DB2C6F",
				"#9BBF30", "#96622D", "#7157D9",
			]
			.map(String::from)
			.to_vec(),
			primary_line_width: 1.5,
			secondary_line_width: 0.2,
			default_edge_color: "#cccccc".into(),
			node_border_width: 0.5,
			default_border_color: "#ffffff".into(),
			highlight_border_color: "#000000".into(),
			faded_alpha: 0.3,
			scale_extent: (0.1, 8.0),
			click_distance: 3.0,
			zoom_duration_ms: 2000.0,
			alpha: AlphaConfig::default(),
			stop_on_pointer_move: true,
			simulation: SimulationConfig::default(),
		}
	}
}

/// Cooling schedule for the settling coefficient.
#[derive(Clone, Copy, Debug)]
pub struct AlphaConfig {
	/// Alpha of a fresh build.
	pub start: f64,
	/// The simulation stops below this.
	pub min: f64,
	/// Fraction of alpha lost per tick.
	pub decay: f64,
}

impl Default for AlphaConfig {
	fn default() -> Self {
		let min = 0.001_f64;
		Self {
			start: 1.0,
			min,
			decay: 1.0 - min.powf(1.0 / 300.0),
		}
	}
}

/// `force_graph` integrator settings plus the mass given to every node.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
	/// Repulsion between nodes.
	pub force_charge: f32,
	/// Attraction along edges.
	pub force_spring: f32,
	/// Cap on the force applied to one node.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity kept per step.
	pub damping_factor: f32,
	/// Mass of every node.
	pub node_mass: f32,
}

impl SimulationConfig {
	/// Parameters for a new `ForceGraph`.
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			node_mass: 10.0,
		}
	}
}
