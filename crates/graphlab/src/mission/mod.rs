//! Missions: goal-directed challenges evaluated against live parameters.
//!
//! - `Goal`: what must hold (apex triangle area, a point on the line, tangency).
//! - `evaluate` / `current_value`: pass/fail verdict and the measured value.
//!   Both go through `measure`, so a label never disagrees with the verdict.
//! - `MissionSession`: caller-owned session with an injectable RNG.
//!
//! The area goal uses the parabola apex as third vertex, unlike the origin
//! variant of the overlay; see `plane::AreaVertex`.

pub mod catalog;
mod session;

pub use catalog::CATALOG;
pub use session::MissionSession;

use crate::plane::{discriminant, enclosed_area, intersection_count, AreaVertex, Line, Parabola};

/// Label shown when no value is available.
pub const NO_VALUE: &str = "—";

/// What a mission asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Goal {
    /// Apex triangle area equals `target`.
    Area { target: f64 },
    /// The line passes through `(x, y)`.
    PassThrough { x: f64, y: f64 },
    /// Line tangent to the parabola (`D ≈ 0`).
    Tangent,
}

impl Goal {
    /// Value the measured quantity must reach.
    #[inline]
    fn target_value(self) -> f64 {
        match self {
            Goal::Area { target } => target,
            Goal::PassThrough { y, .. } => y,
            Goal::Tangent => 0.0,
        }
    }
}

/// Immutable mission description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mission {
    pub title: &'static str,
    pub description: &'static str,
    pub goal: Goal,
    /// Absolute tolerance on the measured quantity.
    pub tolerance: f64,
}

impl Mission {
    /// Display form of the target: `"6"`, `"(2, 4)"`, `"D = 0"`.
    pub fn target_label(&self) -> String {
        match self.goal {
            Goal::Area { target } => format!("{target:.0}"),
            Goal::PassThrough { x, y } => format!("({}, {})", x as i64, y as i64),
            Goal::Tangent => "D = 0".to_string(),
        }
    }
}

/// Quantity a goal is judged on.
///
/// - Area: apex triangle area, `None` without exactly two intersections.
/// - PassThrough: line height at the target `x`.
/// - Tangent: discriminant.
pub fn measure(goal: Goal, parabola: &Parabola, line: &Line) -> Option<f64> {
    match goal {
        Goal::Area { .. } => {
            if intersection_count(parabola, line) != 2 {
                return None;
            }
            Some(enclosed_area(parabola, line, AreaVertex::Apex))
        }
        Goal::PassThrough { x, .. } => Some(line.evaluate(x)),
        Goal::Tangent => Some(discriminant(parabola, line)),
    }
}

/// Pass iff the measured value is within the mission tolerance of the target.
pub fn evaluate(mission: &Mission, parabola: &Parabola, line: &Line) -> bool {
    measure(mission.goal, parabola, line)
        .is_some_and(|v| (v - mission.goal.target_value()).abs() <= mission.tolerance)
}

/// Measured value for feedback; same path as `evaluate`.
#[inline]
pub fn current_value(mission: &Mission, parabola: &Parabola, line: &Line) -> Option<f64> {
    measure(mission.goal, parabola, line)
}

/// `current_value` with two decimals, or `NO_VALUE`.
pub fn current_value_label(mission: &Mission, parabola: &Parabola, line: &Line) -> String {
    match current_value(mission, parabola, line) {
        Some(v) => format!("{v:.2}"),
        None => NO_VALUE.to_string(),
    }
}
