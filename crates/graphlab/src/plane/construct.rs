//! Construction helpers: marked points, their distances, line through two points.
//!
//! Marked points are labelled `A`..`J` in insertion order and relabelled
//! after a removal, so labels always read consecutively.

use nalgebra::Vector2;

use super::types::Line;

/// Maximum number of marked points.
pub const MAX_MARKED: usize = 10;
const LABELS: [char; MAX_MARKED] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkedPoint {
    pub label: char,
    pub pos: Vector2<f64>,
}

/// Ordered set of at most `MAX_MARKED` labelled points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkedPoints {
    points: Vec<MarkedPoint>,
}

impl MarkedPoints {
    pub fn points(&self) -> &[MarkedPoint] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Append a point; returns its label, or `None` when full.
    pub fn add(&mut self, pos: Vector2<f64>) -> Option<char> {
        let label = *LABELS.get(self.points.len())?;
        self.points.push(MarkedPoint { label, pos });
        Some(label)
    }
    /// Remove by index and relabel; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<MarkedPoint> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        for (pt, label) in self.points.iter_mut().zip(LABELS) {
            pt.label = label;
        }
        Some(removed)
    }
    pub fn clear(&mut self) {
        self.points.clear();
    }
    /// Euclidean distances between consecutive points (AB, BC, ...).
    pub fn consecutive_distances(&self) -> Vec<(char, char, f64)> {
        self.points
            .windows(2)
            .map(|w| (w[0].label, w[1].label, (w[1].pos - w[0].pos).norm()))
            .collect()
    }
    /// Line through the first two marked points.
    pub fn line_through_first_two(&self) -> Option<Line> {
        match self.points.as_slice() {
            [p1, p2, ..] => line_through(p1.pos, p2.pos),
            _ => None,
        }
    }
}

/// Line through `p1` and `p2`, clamped into the line's parameter range.
///
/// `None` for a vertical pair (equal `x`), which `y = mx + n` cannot express.
pub fn line_through(p1: Vector2<f64>, p2: Vector2<f64>) -> Option<Line> {
    if p1.x == p2.x {
        return None;
    }
    let m = (p2.y - p1.y) / (p2.x - p1.x);
    let n = p1.y - m * p1.x;
    Some(Line::new(m, n))
}
