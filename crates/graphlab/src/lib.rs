//! Numeric core for the parabola/line graphing lab.
//!
//! Everything here is pure: callers pass parameter values and get points,
//! areas, verdicts and sampled curves back. Rendering, gestures and stored
//! preferences live in the front end and never reach this crate.
//!
//! Layout
//! - `plane`: models, intersection solver, triangle areas, construction helpers.
//! - `locus`: midpoint locus sampling.
//! - `mission`: goals, catalog, evaluator and the caller-owned session.
//! - `coords`: math-plane ↔ viewport mapping (zoom + pan).
//!
//! API Policy
//! - The crate is consumed by the lab front end and the `cli` driver only.
//!   Prefer `api` or `prelude` imports over deep module paths.

pub mod api;
pub mod coords;
pub mod locus;
pub mod mission;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use plane::{IntersectionPoint, Line, Parabola, PlaneCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coords::{CoordinateSystem, MathBounds};
    pub use crate::locus::{midpoint_at, trace, LocusCfg, LocusTrace};
    pub use crate::mission::{evaluate, Goal, Mission, MissionSession, CATALOG};
    pub use crate::plane::{
        discriminant, intersection_count, simplified_area, solve_intersections, triangle_area,
        triangle_area_from, AreaVertex, IntersectionPoint, Intersections, Line, Parabola, PlaneCfg,
    };
    pub use nalgebra::Vector2 as Vec2;
}
