//! Hit-testing and edge geometry
//!
//! Used by click handling and the random generator to keep vertices apart,
//! and by renderers to draw edges from circle border to circle border.

use crate::graph::Position;

/// Whether `point` lies inside the circle of a vertex centered at `center`
pub fn is_on_vertex(point: Position, center: Position, radius: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Whether `point` lies in the `2 * radius` box around a vertex centered at `center`
///
/// A new vertex placed here would overlap or crowd the existing one.
pub fn is_near_vertex(point: Position, center: Position, radius: f64) -> bool {
    let reach = 2.0 * radius;
    point.x <= center.x + reach
        && point.x >= center.x - reach
        && point.y <= center.y + reach
        && point.y >= center.y - reach
}

/// Segment between the borders of two vertex circles, so lines never cross the labels
pub fn edge_segment(from: Position, to: Position, radius: f64) -> (Position, Position) {
    let theta = (to.y - from.y).atan2(to.x - from.x);
    let len_x = theta.cos() * radius;
    let len_y = theta.sin() * radius;
    (
        Position::new(from.x + len_x, from.y + len_y),
        Position::new(to.x - len_x, to.y - len_y),
    )
}

/// The two barbs of an arrowhead at `tip`, for an edge coming from `from`
pub fn arrowhead(from: Position, tip: Position, side_length: f64) -> (Position, Position) {
    let theta = (tip.y - from.y).atan2(tip.x - from.x);
    let spread = std::f64::consts::PI / 6.0;
    let left = theta + std::f64::consts::PI - spread;
    let right = theta + std::f64::consts::PI + spread;
    (
        Position::new(tip.x + side_length * left.cos(), tip.y + side_length * left.sin()),
        Position::new(tip.x + side_length * right.cos(), tip.y + side_length * right.sin()),
    )
}
