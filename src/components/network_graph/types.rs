//! Records and the graph built from them.

use std::collections::HashMap;

use super::attributes::Column;

/// One row of the research dataset, keyed by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
	fields: HashMap<String, String>,
}

impl Record {
	/// Empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert, mostly useful for fixtures.
	pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(column, value);
		self
	}

	/// Sets one cell.
	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
		self.fields.insert(column.into(), value.into());
	}

	/// Raw lookup by column name. Empty strings count as absent.
	pub fn get(&self, column: &str) -> Option<&str> {
		self.fields
			.get(column)
			.map(String::as_str)
			.filter(|value| !value.is_empty())
	}

	/// Typed lookup, same rules as [`Self::get`].
	pub fn column(&self, column: Column) -> Option<&str> {
		self.get(column.name())
	}

	/// The `ID` cell.
	pub fn id(&self) -> Option<&str> {
		self.column(Column::Id)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// A position in simulation or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared euclidean distance.
	pub fn distance_sq(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}
}

/// A chart node. Positions live in the simulation, not here.
#[derive(Clone, Debug)]
pub struct Node {
	/// Value of the `ID` column.
	pub id: String,
	/// Value of the category column; empty when the row has none.
	pub category: String,
	/// Radius from the size scale.
	pub radius: f64,
	/// Category colour, assigned once per build.
	pub color: String,
	/// The row the node was built from.
	pub record: Record,
}

impl Node {
	/// Category as shown to the user.
	pub fn category_label(&self) -> &str {
		if self.category.is_empty() {
			"No Data"
		} else {
			&self.category
		}
	}
}

/// Undirected link between two node indices of the same build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Index of the node the link was generated from.
	pub source: usize,
	/// Index of the other node.
	pub target: usize,
	/// Created by the primary link column.
	pub primary: bool,
}

impl Edge {
	/// Whether `node` is either end.
	pub fn touches(&self, node: usize) -> bool {
		self.source == node || self.target == node
	}
}

/// Output of one build.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// Nodes in row order.
	pub nodes: Vec<Node>,
	/// Deduplicated links between `nodes`.
	pub edges: Vec<Edge>,
}

impl GraphData {
	/// Unique categories in first-seen node order.
	pub fn categories(&self) -> Vec<String> {
		let mut seen = Vec::<String>::new();
		for node in &self.nodes {
			if !seen.contains(&node.category) {
				seen.push(node.category.clone());
			}
		}
		seen
	}
}
