//! Parabola/line plane geometry.
//!
//! Purpose
//! - Model `y = a(x-p)² + q` and `y = mx + n` with clamped parameters.
//! - Solve their intersection robustly across the degenerate cases
//!   (`a ≈ 0`, `D ≈ 0`) with one shared epsilon.
//! - Derive triangle areas from the intersections (general cross-product
//!   formula with a chosen third vertex, and the origin-only shortcut).
//!
//! Code cross-refs: `Parabola`, `Line`, `solve_intersections`, `triangle_area`,
//! `simplified_area`, `PlaneCfg`

pub mod area;
pub mod cfg;
pub mod construct;
mod solvers;
mod types;
pub mod util;

pub use area::{
    are_intersections_sorted, areas_equal, enclosed_area, simplified_area, triangle_area,
    triangle_area_from, validate_all_intersections, validate_intersection, AreaVertex,
};
pub use cfg::{PlaneCfg, SOLVER_EPSILON, VALIDATION_TOLERANCE};
pub use solvers::{
    discriminant, intersection_count, quadratic_coefficients, solve_intersections,
    solve_intersections_with, Intersections,
};
pub use types::{IntersectionPoint, Line, Parabola, INTERCEPT_RANGE, PARABOLA_RANGE, SLOPE_RANGE};

#[cfg(test)]
mod tests;
