//! Tolerance defaults for plane geometry.
//!
//! Policy
//! - The solver epsilon is fixed: the `a ≈ 0` guard and the discriminant sign
//!   classification must agree, so both read `SOLVER_EPSILON`.
//! - Mission tolerances are per mission and never replace these.

/// Degeneracy and discriminant-sign threshold used by the intersection solver.
pub const SOLVER_EPSILON: f64 = 1e-10;
/// Default tolerance for checking that a point lies on both curves.
pub const VALIDATION_TOLERANCE: f64 = 1e-6;

/// Plane geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneCfg {
    pub eps_solver: f64,
    pub tol_validate: f64,
}

impl Default for PlaneCfg {
    fn default() -> Self {
        Self {
            eps_solver: SOLVER_EPSILON,
            tol_validate: VALIDATION_TOLERANCE,
        }
    }
}
