//! Pointer hit-testing and hover/click selection.

use super::types::Point;

/// Pan/zoom transform from simulation space to screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal translation in screen pixels.
	pub x: f64,
	/// Vertical translation in screen pixels.
	pub y: f64,
	/// Scale factor.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Simulation point to screen point.
	pub fn apply(&self, point: Point) -> Point {
		Point::new(point.x * self.k + self.x, point.y * self.k + self.y)
	}

	/// Screen point to simulation point.
	pub fn invert(&self, screen: Point) -> Point {
		Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}

	/// Zooms by `factor` keeping the simulation point under `screen` fixed.
	pub fn zoom_about(&mut self, screen: Point, factor: f64, extent: (f64, f64)) {
		let k = (self.k * factor).clamp(extent.0, extent.1);
		let ratio = k / self.k;
		self.x = screen.x - (screen.x - self.x) * ratio;
		self.y = screen.y - (screen.y - self.y) * ratio;
		self.k = k;
	}

	/// Component-wise interpolation, `t` in `0..=1`.
	pub fn lerp(from: ViewTransform, to: ViewTransform, t: f64) -> ViewTransform {
		let t = t.clamp(0.0, 1.0);
		ViewTransform {
			x: from.x + (to.x - from.x) * t,
			y: from.y + (to.y - from.y) * t,
			k: from.k + (to.k - from.k) * t,
		}
	}
}

/// Index of the closest position strictly within `radius`. The first of
/// equally close positions wins.
pub fn find_nearest(positions: &[Point], at: Point, radius: f64) -> Option<usize> {
	let mut best = radius * radius;
	let mut found = None;
	for (index, position) in positions.iter().enumerate() {
		let distance = position.distance_sq(at);
		if distance < best {
			best = distance;
			found = Some(index);
		}
	}
	found
}

/// Hovered and clicked node indices into the current build's nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	hovered: Option<usize>,
	clicked: Option<usize>,
}

impl InteractionState {
	/// Node under the pointer.
	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	/// Node pinned by the last click.
	pub fn clicked(&self) -> Option<usize> {
		self.clicked
	}

	/// Sets or clears the hover directly.
	pub fn set_hovered(&mut self, node: Option<usize>) {
		self.hovered = node;
	}

	/// Replaces the hovered node with whatever lies under the pointer.
	pub fn on_pointer_move(&mut self, at: Point, radius: f64, positions: &[Point]) -> Option<usize> {
		self.hovered = find_nearest(positions, at, radius);
		self.hovered
	}

	/// Clicking the clicked node again releases it; otherwise the hovered node
	/// (possibly none) becomes the clicked one.
	pub fn on_click(&mut self) {
		if self.clicked == self.hovered {
			self.clicked = None;
		} else {
			self.clicked = self.hovered;
		}
	}

	/// Node shown in the detail panel: hover first, then the clicked node.
	pub fn displayed(&self) -> Option<usize> {
		self.hovered.or(self.clicked)
	}

	/// Whether anything is hovered or clicked.
	pub fn is_active(&self) -> bool {
		self.hovered.is_some() || self.clicked.is_some()
	}

	/// Whether `node` is hovered or clicked.
	pub fn is_selected(&self, node: usize) -> bool {
		self.hovered == Some(node) || self.clicked == Some(node)
	}

	/// Drops hover and click.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn positions() -> Vec<Point> {
		vec![
			Point::new(0.0, 0.0),
			Point::new(10.0, 0.0),
			Point::new(4.0, 0.0),
			Point::new(6.0, 0.0),
		]
	}

	#[test]
	fn nearest_within_radius_wins() {
		let points = positions();
		assert_eq!(find_nearest(&points, Point::new(3.5, 0.0), 20.0), Some(2));
		assert_eq!(find_nearest(&points, Point::new(9.0, 1.0), 20.0), Some(1));
		assert_eq!(find_nearest(&points, Point::new(100.0, 100.0), 20.0), None);
	}

	#[test]
	fn ties_go_to_the_first_scanned() {
		let points = positions();
		assert_eq!(find_nearest(&points, Point::new(5.0, 0.0), 20.0), Some(2));
	}

	#[test]
	fn radius_is_exclusive() {
		let points = vec![Point::new(3.0, 4.0)];
		assert_eq!(find_nearest(&points, Point::new(0.0, 0.0), 5.0), None);
		assert_eq!(find_nearest(&points, Point::new(0.0, 0.0), 5.01), Some(0));
	}

	#[test]
	fn hover_takes_precedence_over_click() {
		let points = positions();
		let mut state = InteractionState::default();

		state.on_pointer_move(Point::new(0.0, 0.0), 1.0, &points);
		state.on_click();
		assert_eq!(state.clicked(), Some(0));

		state.on_pointer_move(Point::new(10.0, 0.0), 1.0, &points);
		assert_eq!(state.displayed(), Some(1));

		state.on_pointer_move(Point::new(50.0, 50.0), 1.0, &points);
		assert_eq!(state.hovered(), None);
		assert_eq!(state.displayed(), Some(0));
	}

	#[test]
	fn clicking_the_clicked_node_toggles_it_off() {
		let points = positions();
		let mut state = InteractionState::default();
		state.on_pointer_move(Point::new(10.0, 0.0), 1.0, &points);
		state.on_click();
		assert_eq!(state.clicked(), Some(1));
		state.on_click();
		assert_eq!(state.clicked(), None);
		assert!(state.is_active());
	}

	#[test]
	fn clicking_empty_space_clears_the_click() {
		let points = positions();
		let mut state = InteractionState::default();
		state.on_pointer_move(Point::new(10.0, 0.0), 1.0, &points);
		state.on_click();
		state.on_pointer_move(Point::new(50.0, 50.0), 1.0, &points);
		state.on_click();
		assert_eq!(state.clicked(), None);
		assert!(!state.is_active());
	}

	#[test]
	fn transform_round_trips() {
		let transform = ViewTransform {
			x: -300.0,
			y: 120.0,
			k: 2.5,
		};
		let point = Point::new(17.0, -4.0);
		let back = transform.invert(transform.apply(point));
		assert!((back.x - point.x).abs() < 1e-9 && (back.y - point.y).abs() < 1e-9);
	}

	#[test]
	fn zoom_keeps_the_anchor_fixed_and_respects_extent() {
		let mut transform = ViewTransform::default();
		let anchor = Point::new(200.0, 100.0);
		let before = transform.invert(anchor);
		transform.zoom_about(anchor, 2.0, (0.1, 8.0));
		let after = transform.invert(anchor);
		assert!((before.x - after.x).abs() < 1e-9 && (before.y - after.y).abs() < 1e-9);

		transform.zoom_about(anchor, 100.0, (0.1, 8.0));
		assert_eq!(transform.k, 8.0);
	}
}
