//! Category cluster centres and the pull toward them.

use std::collections::HashMap;
use std::f64::consts::TAU;

use super::types::Point;

/// Target point per category: the first at the canvas centre, the rest on a
/// ring of radius `min(width, height) / 8` around it.
pub fn cluster_centers(width: f64, height: f64, categories: &[String]) -> HashMap<String, Point> {
	let mut centers = HashMap::with_capacity(categories.len());
	let Some((first, rest)) = categories.split_first() else {
		return centers;
	};

	let center = Point::new(width / 2.0, height / 2.0);
	centers.insert(first.clone(), center);
	if rest.is_empty() {
		return centers;
	}

	let radius = width.min(height) / 8.0;
	let step = TAU / rest.len() as f64;
	for (i, category) in rest.iter().enumerate() {
		let angle = i as f64 * step;
		centers
			.entry(category.clone())
			.or_insert(Point::new(
				center.x + radius * angle.cos(),
				center.y + radius * angle.sin(),
			));
	}

	centers
}

/// Moves `position` toward `center` by the fraction `alpha`.
pub fn attract(position: Point, center: Point, alpha: f64) -> Point {
	Point::new(
		position.x + (center.x - position.x) * alpha,
		position.y + (center.y - position.y) * alpha,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn categories(names: &[&str]) -> Vec<String> {
		names.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn single_category_sits_at_canvas_center() {
		let centers = cluster_centers(800.0, 600.0, &categories(&["A"]));
		assert_eq!(centers.len(), 1);
		assert_eq!(centers["A"], Point::new(400.0, 300.0));
	}

	#[test]
	fn remaining_categories_share_the_ring() {
		let centers = cluster_centers(800.0, 600.0, &categories(&["A", "B", "C", "D"]));
		let origin = Point::new(400.0, 300.0);
		assert_eq!(centers["A"], origin);

		for (name, angle) in [("B", 0.0), ("C", TAU / 3.0), ("D", 2.0 * TAU / 3.0)] {
			let point = centers[name];
			assert!((point.distance_sq(origin).sqrt() - 75.0).abs() < 1e-9);
			let actual = (point.y - origin.y).atan2(point.x - origin.x).rem_euclid(TAU);
			assert!((actual - angle).abs() < 1e-9, "{name}: {actual} != {angle}");
		}
	}

	#[test]
	fn no_categories_no_centers() {
		assert!(cluster_centers(800.0, 600.0, &[]).is_empty());
	}

	#[test]
	fn attraction_scales_with_alpha() {
		let from = Point::new(0.0, 0.0);
		let to = Point::new(10.0, -20.0);
		assert_eq!(attract(from, to, 0.0), from);
		assert_eq!(attract(from, to, 1.0), to);
		assert_eq!(attract(from, to, 0.5), Point::new(5.0, -10.0));
	}
}
