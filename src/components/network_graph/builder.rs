//! Rows to nodes and deduplicated links.

use std::collections::{HashMap, HashSet};

use super::config::ChartConfig;
use super::types::{Edge, GraphData, Node, Record};

/// Turns dataset rows into a [`GraphData`].
#[derive(Clone, Debug)]
pub struct GraphBuilder {
	category_column: String,
	primary_column: String,
}

impl GraphBuilder {
	/// Builder reading categories and primary links from the given columns.
	pub fn new(category_column: impl Into<String>, primary_column: impl Into<String>) -> Self {
		Self {
			category_column: category_column.into(),
			primary_column: primary_column.into(),
		}
	}

	/// Builder reading the columns named in `config`.
	pub fn from_config(config: &ChartConfig) -> Self {
		Self::new(&config.category_column, &config.primary_link_column)
	}

	/// Builds a fresh graph. Radii and colours are filled in later by the chart.
	pub fn build(&self, rows: &[Record], secondary_column: &str) -> GraphData {
		let nodes = self.nodes(rows);

		let primary_groups = group_by(&nodes, &self.primary_column);
		let secondary_groups = group_by(&nodes, secondary_column);

		let mut links = Vec::new();
		for (index, node) in nodes.iter().enumerate() {
			if let Some(members) = node
				.record
				.get(&self.primary_column)
				.and_then(|value| primary_groups.get(value))
			{
				links.extend(members.iter().map(|&target| Edge {
					source: index,
					target,
					primary: true,
				}));
			}
			if let Some(members) = node
				.record
				.get(secondary_column)
				.and_then(|value| secondary_groups.get(value))
			{
				links.extend(members.iter().map(|&target| Edge {
					source: index,
					target,
					primary: false,
				}));
			}
		}

		let edges = dedup_links(links);
		log::debug!(
			"built {} nodes and {} edges (secondary: {secondary_column:?})",
			nodes.len(),
			edges.len()
		);

		GraphData { nodes, edges }
	}

	fn nodes(&self, rows: &[Record]) -> Vec<Node> {
		let mut seen = HashSet::new();
		let mut nodes = Vec::with_capacity(rows.len());

		for row in rows {
			let Some(id) = row.id() else {
				log::debug!("skipping row without an ID");
				continue;
			};
			if !seen.insert(id.to_owned()) {
				log::warn!("duplicate ID {id:?}, keeping the first row");
				continue;
			}
			nodes.push(Node {
				id: id.to_owned(),
				category: row.get(&self.category_column).unwrap_or_default().to_owned(),
				radius: 0.0,
				color: String::new(),
				record: row.clone(),
			});
		}

		nodes
	}
}

/// Node indices per non-empty value of `column`, in node order.
fn group_by<'a>(nodes: &'a [Node], column: &str) -> HashMap<&'a str, Vec<usize>> {
	let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
	for (index, node) in nodes.iter().enumerate() {
		if let Some(value) = node.record.get(column) {
			groups.entry(value).or_default().push(index);
		}
	}
	groups
}

/// Keeps the first link per unordered pair and drops self-links.
pub fn dedup_links(links: impl IntoIterator<Item = Edge>) -> Vec<Edge> {
	let mut seen = HashSet::new();
	links
		.into_iter()
		.filter(|link| {
			if link.source == link.target {
				return false;
			}
			let pair = (link.source.min(link.target), link.source.max(link.target));
			seen.insert(pair)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(id: &str, primary: &str, secondary: &str) -> Record {
		Record::new()
			.with("ID", id)
			.with("Cat", primary)
			.with("Primary", primary)
			.with("Secondary", secondary)
	}

	fn builder() -> GraphBuilder {
		GraphBuilder::new("Cat", "Primary")
	}

	fn pairs(graph: &GraphData) -> Vec<(&str, &str, bool)> {
		graph
			.edges
			.iter()
			.map(|e| (graph.nodes[e.source].id.as_str(), graph.nodes[e.target].id.as_str(), e.primary))
			.collect()
	}

	#[test]
	fn rows_without_id_are_dropped() {
		let rows = vec![
			row("1", "A", ""),
			Record::new().with("Cat", "A"),
			row("", "A", ""),
			row("2", "B", ""),
		];
		let graph = builder().build(&rows, "Secondary");
		let ids = graph.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
		assert_eq!(ids, vec!["1", "2"]);
	}

	#[test]
	fn empty_category_is_kept_as_no_data() {
		let graph = builder().build(&[row("1", "", "")], "Secondary");
		assert_eq!(graph.nodes[0].category, "");
		assert_eq!(graph.nodes[0].category_label(), "No Data");
	}

	#[test]
	fn links_are_unique_per_pair_and_never_self() {
		let rows = vec![
			row("1", "A", "x"),
			row("2", "A", "x"),
			row("3", "A", "y"),
			row("4", "B", "x"),
		];
		let graph = builder().build(&rows, "Secondary");

		let mut seen = HashSet::new();
		for edge in &graph.edges {
			assert_ne!(edge.source, edge.target);
			let pair = (edge.source.min(edge.target), edge.source.max(edge.target));
			assert!(seen.insert(pair), "duplicate edge {pair:?}");
		}
		assert_eq!(
			pairs(&graph),
			vec![
				("1", "2", true),
				("1", "3", true),
				("1", "4", false),
				("2", "3", true),
				("2", "4", false),
			]
		);
	}

	#[test]
	fn primary_wins_when_a_pair_matches_both_ways() {
		let rows = vec![row("1", "A", "x"), row("2", "A", "x")];
		let graph = builder().build(&rows, "Secondary");
		assert_eq!(pairs(&graph), vec![("1", "2", true)]);
	}

	#[test]
	fn unknown_secondary_column_only_yields_primary_links() {
		let rows = vec![row("1", "A", "x"), row("2", "B", "x"), row("3", "B", "x")];
		let graph = builder().build(&rows, "Not A Column");
		assert_eq!(pairs(&graph), vec![("2", "3", true)]);
	}

	#[test]
	fn duplicate_ids_keep_the_first_row() {
		let rows = vec![row("1", "A", ""), row("1", "B", "")];
		let graph = builder().build(&rows, "Secondary");
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.nodes[0].category, "A");
	}

	#[test]
	fn rebuilding_is_deterministic() {
		let rows = (0..30)
			.map(|i| row(&i.to_string(), ["A", "B", "C"][i % 3], ["x", "y"][i % 2]))
			.collect::<Vec<_>>();
		let first = builder().build(&rows, "Secondary");
		let second = builder().build(&rows, "Secondary");
		assert_eq!(first.edges, second.edges);
		assert_eq!(
			first.nodes.iter().map(|n| &n.id).collect::<Vec<_>>(),
			second.nodes.iter().map(|n| &n.id).collect::<Vec<_>>()
		);
	}

	#[test]
	fn dedup_keeps_first_orientation() {
		let links = vec![
			Edge { source: 1, target: 0, primary: false },
			Edge { source: 0, target: 1, primary: true },
			Edge { source: 2, target: 2, primary: true },
		];
		assert_eq!(
			dedup_links(links),
			vec![Edge { source: 1, target: 0, primary: false }]
		);
	}
}
