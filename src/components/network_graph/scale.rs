//! Size encoding: turns any size attribute into node radii.

use std::collections::HashMap;

use super::attributes::{HARM_LEVEL_ORDER, POPULATION_SCALE_ORDER, ScaleKind, SizeAttribute};
use super::types::{Node, Record};

impl ScaleKind {
	/// Exact-name match against the size options; any other column is numeric.
	pub fn of(column: &str) -> Self {
		SizeAttribute::from_name(column)
			.map(SizeAttribute::kind)
			.unwrap_or(Self::Numeric)
	}
}

/// Linear map from the extent of a domain onto a radius range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	/// Fits the extent of the finite values in `domain`. An empty domain
	/// collapses to `0..0`.
	pub fn fit(domain: &[f64], range: (f64, f64)) -> Self {
		let extent = domain
			.iter()
			.copied()
			.filter(|value| value.is_finite())
			.fold(None, |acc: Option<(f64, f64)>, value| match acc {
				Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
				None => Some((value, value)),
			})
			.unwrap_or((0.0, 0.0));
		Self {
			domain: extent,
			range,
		}
	}

	/// Fitted `(min, max)`.
	pub fn domain(&self) -> (f64, f64) {
		self.domain
	}

	/// A collapsed domain or a non-finite input maps to the range start.
	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		let span = d1 - d0;
		if !value.is_finite() || span.abs() < f64::EPSILON {
			return r0;
		}
		r0 + (value - d0) / span * (r1 - r0)
	}
}

/// Label → rank lookup, shared by every radius lookup of one build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankTable {
	ranks: HashMap<String, usize>,
}

impl RankTable {
	/// Ranks follow the position in `order`.
	pub fn fixed(order: &[&str]) -> Self {
		Self {
			ranks: order
				.iter()
				.enumerate()
				.map(|(rank, label)| ((*label).to_owned(), rank))
				.collect(),
		}
	}

	/// Ranks follow first occurrence in an already sorted sequence.
	pub fn by_first_occurrence<'a>(sorted: impl IntoIterator<Item = &'a str>) -> Self {
		let mut ranks = HashMap::new();
		for label in sorted {
			let next = ranks.len();
			ranks.entry(label.to_owned()).or_insert(next);
		}
		Self { ranks }
	}

	/// Rank of an exact label.
	pub fn rank(&self, label: &str) -> Option<usize> {
		self.ranks.get(label).copied()
	}
}

/// Prefix used to match harm levels.
pub fn first_two_words(value: &str) -> String {
	value.split(' ').take(2).collect::<Vec<_>>().join(" ")
}

/// Stable sort by the level named in the first two words. Unknown levels go last.
pub fn sort_by_harm_level(values: &mut [&str], order: &[&str]) {
	let level = |value: &str| {
		let prefix = first_two_words(value);
		order
			.iter()
			.position(|known| *known == prefix)
			.unwrap_or(order.len())
	};
	values.sort_by_key(|value| level(*value));
}

/// Drops thousands separators and parses what is left.
pub fn parse_numeric(value: &str) -> Option<f64> {
	let cleaned = value.replace(',', "");
	cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A fitted size encoding for one attribute over one node set.
#[derive(Clone, Debug)]
pub struct SizeScale {
	column: String,
	kind: ScaleKind,
	ranks: RankTable,
	domain: Vec<f64>,
	scale: LinearScale,
}

impl SizeScale {
	/// Fits a scale for `column` over `nodes`, mapping onto `range`.
	pub fn build(nodes: &[Node], column: &str, range: (f64, f64)) -> Self {
		let kind = ScaleKind::of(column);
		let values = nodes
			.iter()
			.filter_map(|node| node.record.get(column))
			.collect::<Vec<_>>();

		let (ranks, domain) = match kind {
			ScaleKind::FixedOrdinal => {
				let ranks = RankTable::fixed(&POPULATION_SCALE_ORDER);
				let domain = (0..POPULATION_SCALE_ORDER.len()).map(|rank| rank as f64).collect();
				(ranks, domain)
			}
			ScaleKind::HarmLevel => {
				let mut sorted = values;
				sort_by_harm_level(&mut sorted, &HARM_LEVEL_ORDER);
				let ranks = RankTable::by_first_occurrence(sorted.iter().copied());
				let domain = sorted
					.iter()
					.filter_map(|label| ranks.rank(label))
					.map(|rank| rank as f64)
					.collect();
				(ranks, domain)
			}
			ScaleKind::Numeric => {
				let mut domain = values
					.into_iter()
					.filter_map(parse_numeric)
					.collect::<Vec<_>>();
				domain.sort_by(f64::total_cmp);
				(RankTable::default(), domain)
			}
		};

		log::debug!(
			"size scale for {column:?}: {kind:?}, {} domain values",
			domain.len()
		);

		Self {
			column: column.to_owned(),
			kind,
			scale: LinearScale::fit(&domain, range),
			ranks,
			domain,
		}
	}

	/// Kind chosen for the column.
	pub fn kind(&self) -> ScaleKind {
		self.kind
	}

	/// Sorted domain values, duplicates kept.
	pub fn domain(&self) -> &[f64] {
		&self.domain
	}

	/// Resolved numeric value of the attribute for one record.
	pub fn value(&self, record: &Record) -> Option<f64> {
		let raw = record.get(&self.column)?;
		match self.kind {
			ScaleKind::FixedOrdinal | ScaleKind::HarmLevel => {
				self.ranks.rank(raw).map(|rank| rank as f64)
			}
			ScaleKind::Numeric => parse_numeric(raw),
		}
	}

	/// Records without a usable value get the minimum radius.
	pub fn radius(&self, record: &Record) -> f64 {
		match self.value(record) {
			Some(value) => self.scale.apply(value),
			None => self.scale.range.0,
		}
	}

	/// Writes each node's radius.
	pub fn assign(&self, nodes: &mut [Node]) {
		for node in nodes {
			node.radius = self.radius(&node.record);
		}
	}
}
