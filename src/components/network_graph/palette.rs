//! Category colours and legend rows.

use std::collections::HashMap;

use super::config::ChartConfig;
use super::types::Node;

/// Category → colour, cycling through the palette in category order.
pub fn category_colors(config: &ChartConfig, categories: &[String]) -> HashMap<String, String> {
	categories
		.iter()
		.enumerate()
		.map(|(index, category)| (category.clone(), config.color_for(index).to_owned()))
		.collect()
}

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	/// Category, or `No Data` for the empty category.
	pub label: String,
	/// Swatch colour.
	pub color: String,
	/// Share of all nodes, 0..=100.
	pub percentage: f64,
}

/// One entry per category, largest share first.
pub fn legend_entries(
	nodes: &[Node],
	categories: &[String],
	colors: &HashMap<String, String>,
) -> Vec<LegendEntry> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for node in nodes {
		*counts.entry(node.category.as_str()).or_default() += 1;
	}

	let total = nodes.len().max(1) as f64;
	let mut entries = categories
		.iter()
		.map(|category| LegendEntry {
			label: if category.is_empty() {
				"No Data".to_owned()
			} else {
				category.clone()
			},
			color: colors.get(category).cloned().unwrap_or_default(),
			percentage: counts.get(category.as_str()).copied().unwrap_or(0) as f64 / total * 100.0,
		})
		.collect::<Vec<_>>();
	entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
	entries
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::Record;

	fn node(id: &str, category: &str) -> Node {
		Node {
			id: id.into(),
			category: category.into(),
			radius: 2.0,
			color: String::new(),
			record: Record::new().with("ID", id),
		}
	}

	#[test]
	fn colors_cycle_through_the_palette() {
		let config = ChartConfig::default();
		let categories = (0..12).map(|i| format!("c{i}")).collect::<Vec<_>>();
		let colors = category_colors(&config, &categories);
		assert_eq!(colors["c0"], "#2965CC");
		assert_eq!(colors["c10"], "#2965CC");
		assert_eq!(colors["c11"], "#29A634");
	}

	#[test]
	fn legend_is_sorted_by_share() {
		let nodes = vec![node("1", "A"), node("2", ""), node("3", ""), node("4", "B")];
		let categories = vec!["A".to_owned(), String::new(), "B".to_owned()];
		let colors = category_colors(&ChartConfig::default(), &categories);
		let legend = legend_entries(&nodes, &categories, &colors);

		assert_eq!(legend[0].label, "No Data");
		assert_eq!(legend[0].percentage, 50.0);
		assert_eq!(legend[0].color, "#29A634");
		assert_eq!(legend[1].label, "A");
		assert_eq!(legend[2].label, "B");
		assert_eq!(legend[2].percentage, 25.0);
		assert!(legend.iter().all(|entry| !entry.label.contains('%')));
	}
}
