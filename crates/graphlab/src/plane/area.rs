//! Triangle areas from the two intersection points.
//!
//! Two separate paths:
//! - `triangle_area`: general cross-product formula for any third vertex.
//!   Used for the apex triangle of the area missions and for the overlay.
//! - `simplified_area`: `½|n||x₂-x₁|`, correct only when the third vertex is
//!   the origin (the segment from the origin to `(0, n)` splits the triangle).
//!
//! Both return `0.0` for anything other than exactly two points; that is the
//! normal "no triangle" state while a slider is being dragged.

use nalgebra::Vector2;

use super::cfg::VALIDATION_TOLERANCE;
use super::solvers::solve_intersections;
use super::types::{IntersectionPoint, Line, Parabola};

/// Third vertex of the area triangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaVertex {
    /// Coordinate origin `(0, 0)`.
    Origin,
    /// Parabola apex `(p, q)`.
    #[default]
    Apex,
}

impl AreaVertex {
    #[inline]
    pub fn point(self, parabola: &Parabola) -> Vector2<f64> {
        match self {
            AreaVertex::Origin => Vector2::zeros(),
            AreaVertex::Apex => parabola.vertex(),
        }
    }
}

/// `½|x₁(y₂-y₀) - x₂(y₁-y₀) + x₀(y₁-y₂)|` for vertex `(x₀, y₀)`.
#[inline]
pub fn triangle_area(vertex: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    let (x0, y0) = (vertex.x, vertex.y);
    0.5 * (p1.x * (p2.y - y0) - p2.x * (p1.y - y0) + x0 * (p1.y - p2.y)).abs()
}

/// General area over a solver result; `0.0` unless exactly two points.
pub fn triangle_area_from(vertex: Vector2<f64>, points: &[IntersectionPoint]) -> f64 {
    match points {
        [p1, p2] => triangle_area(vertex, p1.pos(), p2.pos()),
        _ => 0.0,
    }
}

/// `½|n||x₂-x₁|`; only meaningful for the origin vertex. `0.0` unless exactly two points.
pub fn simplified_area(line: &Line, points: &[IntersectionPoint]) -> f64 {
    match points {
        [p1, p2] => 0.5 * line.n().abs() * (p2.x - p1.x).abs(),
        _ => 0.0,
    }
}

/// Solve, then the general area with the chosen vertex.
pub fn enclosed_area(parabola: &Parabola, line: &Line, vertex: AreaVertex) -> f64 {
    let points = solve_intersections(parabola, line);
    triangle_area_from(vertex.point(parabola), &points)
}

/// True if `point` lies on both curves within `tol` (testing and consistency checks).
pub fn validate_intersection(
    point: &IntersectionPoint,
    parabola: &Parabola,
    line: &Line,
    tol: f64,
) -> bool {
    let py = parabola.evaluate(point.x);
    let ly = line.evaluate(point.x);
    (point.y - py).abs() < tol && (point.y - ly).abs() < tol && (py - ly).abs() < tol
}

/// Every point validates; vacuously true for an empty slice.
pub fn validate_all_intersections(
    points: &[IntersectionPoint],
    parabola: &Parabola,
    line: &Line,
    tol: f64,
) -> bool {
    points
        .iter()
        .all(|pt| validate_intersection(pt, parabola, line, tol))
}

/// Ascending-by-x check on a solver result.
#[inline]
pub fn are_intersections_sorted(points: &[IntersectionPoint]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}

/// Compare two area values; `tol = None` means `VALIDATION_TOLERANCE`.
#[inline]
pub fn areas_equal(a: f64, b: f64, tol: Option<f64>) -> bool {
    (a - b).abs() < tol.unwrap_or(VALIDATION_TOLERANCE)
}
