//! Curated surface for the front end and the `cli` driver.
//!
//! Names follow what the lab screens call these operations; everything is a
//! re-export, so deep paths keep working.

// Models and tolerances
pub use crate::plane::{
    IntersectionPoint, Intersections, Line, Parabola, PlaneCfg, SOLVER_EPSILON,
    VALIDATION_TOLERANCE,
};
// Intersection solver
pub use crate::plane::{
    discriminant as get_discriminant, intersection_count as get_intersection_count,
    quadratic_coefficients, solve_intersections, solve_intersections_with,
};
// Areas and validation
pub use crate::plane::{
    are_intersections_sorted, areas_equal, enclosed_area,
    simplified_area as calculate_triangle_area_simplified,
    triangle_area as calculate_triangle_area, triangle_area_from, validate_all_intersections,
    validate_intersection, AreaVertex,
};
// Construction and display helpers
pub use crate::plane::construct::{line_through, MarkedPoint, MarkedPoints};
pub use crate::plane::util::{fraction_label, round_to_places, snap_to};
// Locus
pub use crate::locus::{
    clamp_reference, midpoint_at, trace, LocusCfg, LocusTrace, MAX_SAMPLES, REFERENCE_RANGE,
};
// Missions
pub use crate::mission::{
    current_value, current_value_label, evaluate as check_mission, Goal, Mission,
    MissionSession, CATALOG as MISSION_CATALOG,
};
// Viewport mapping
pub use crate::coords::{CoordinateSystem, MathBounds, VISIBLE_MARGIN};
