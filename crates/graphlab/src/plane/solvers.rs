//! Parabola/line intersection solver.
//!
//! Substituting `y = mx + n` into `y = a(x-p)² + q` gives
//! `A x² + B x + C = 0` with `A = a`, `B = -2ap - m`, `C = ap² + q - n`.
//!
//! - `|a| ≤ ε`: the parabola is the horizontal line `y = q`; one crossing
//!   unless the line is horizontal too, in which case the result is empty
//!   (parallel and coincident are not told apart).
//! - `D < -ε`: no real roots. `|D| ≤ ε`: tangent, one root. `D > ε`: two roots.
//!
//! The `y` of every root is read off the line, which is better conditioned
//! than the parabola near the roots.
//!
//! Code cross-refs: `cfg::SOLVER_EPSILON`, `types::{Parabola, Line}`

use super::cfg::PlaneCfg;
use super::types::{IntersectionPoint, Line, Parabola};

/// Solver output: 0, 1 or 2 points, ascending by `x`.
pub type Intersections = Vec<IntersectionPoint>;

/// Root classification shared by `solve_intersections_with` and `intersection_count`.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Roots {
    None,
    /// `a ≈ 0`, line not horizontal: single crossing of `y = q`.
    Flat(f64),
    Tangent(f64),
    Pair(f64, f64),
}

impl Roots {
    #[inline]
    fn count(self) -> usize {
        match self {
            Roots::None => 0,
            Roots::Flat(_) | Roots::Tangent(_) => 1,
            Roots::Pair(..) => 2,
        }
    }
}

/// Standard-form coefficients `(A, B, C)` of `parabola(x) - line(x) = 0`.
#[inline]
pub fn quadratic_coefficients(parabola: &Parabola, line: &Line) -> (f64, f64, f64) {
    let (a, p, q) = (parabola.a(), parabola.p(), parabola.q());
    let (m, n) = (line.m(), line.n());
    (a, -2.0 * a * p - m, a * p * p + q - n)
}

#[inline]
fn raw_discriminant(parabola: &Parabola, line: &Line) -> f64 {
    let (a, b, c) = quadratic_coefficients(parabola, line);
    b * b - 4.0 * a * c
}

fn classify(parabola: &Parabola, line: &Line, eps: f64) -> Roots {
    let (a, b, _) = quadratic_coefficients(parabola, line);
    if a.abs() <= eps {
        let m = line.m();
        if m.abs() <= eps {
            return Roots::None;
        }
        return Roots::Flat((parabola.q() - line.n()) / m);
    }
    let d = raw_discriminant(parabola, line);
    if d < -eps {
        Roots::None
    } else if d.abs() <= eps {
        Roots::Tangent(-b / (2.0 * a))
    } else {
        let sqrt_d = d.sqrt();
        let x1 = (-b - sqrt_d) / (2.0 * a);
        let x2 = (-b + sqrt_d) / (2.0 * a);
        // For a < 0 the "minus" root is the right one.
        if x1 <= x2 {
            Roots::Pair(x1, x2)
        } else {
            Roots::Pair(x2, x1)
        }
    }
}

/// Intersections with the default epsilon (`SOLVER_EPSILON`).
#[inline]
pub fn solve_intersections(parabola: &Parabola, line: &Line) -> Intersections {
    solve_intersections_with(parabola, line, PlaneCfg::default())
}

/// Intersections sorted ascending by `x`; ids are `0, 1` in that order.
pub fn solve_intersections_with(parabola: &Parabola, line: &Line, cfg: PlaneCfg) -> Intersections {
    match classify(parabola, line, cfg.eps_solver) {
        Roots::None => Vec::new(),
        Roots::Flat(x) => vec![IntersectionPoint::new(0, x, parabola.q())],
        Roots::Tangent(x) => vec![IntersectionPoint::new(0, x, line.evaluate(x))],
        Roots::Pair(x1, x2) => vec![
            IntersectionPoint::new(0, x1, line.evaluate(x1)),
            IntersectionPoint::new(1, x2, line.evaluate(x2)),
        ],
    }
}

/// `B² - 4AC`, or `0.0` for a degenerate parabola (`|a| ≤ ε`).
///
/// A zero from the degenerate branch does not mean tangency; check `a` when
/// the distinction matters.
pub fn discriminant(parabola: &Parabola, line: &Line) -> f64 {
    if parabola.a().abs() <= PlaneCfg::default().eps_solver {
        return 0.0;
    }
    raw_discriminant(parabola, line)
}

/// Number of intersections; always `solve_intersections(..).len()`.
#[inline]
pub fn intersection_count(parabola: &Parabola, line: &Line) -> usize {
    classify(parabola, line, PlaneCfg::default().eps_solver).count()
}
