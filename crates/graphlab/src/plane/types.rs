//! Value types for the two curves and their intersection points.
//!
//! - `Parabola`: `y = a(x-p)² + q`, every parameter clamped to `[-5, 5]`.
//! - `Line`: `y = mx + n`, `m ∈ [-5, 5]`, `n ∈ [-10, 10]`.
//! - `IntersectionPoint`: solver output with an id unique within one result.
//!
//! Clamping happens in the constructors and setters, so a value of these types
//! is always in range. `a = 0` is a legal (degenerate) parabola.

use nalgebra::Vector2;

use super::util::clamp_to;

/// Range for `a`, `p` and `q`.
pub const PARABOLA_RANGE: (f64, f64) = (-5.0, 5.0);
/// Range for the slope `m`.
pub const SLOPE_RANGE: (f64, f64) = (-5.0, 5.0);
/// Range for the intercept `n`.
pub const INTERCEPT_RANGE: (f64, f64) = (-10.0, 10.0);

/// Quadratic `y = a(x-p)² + q` in vertex form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parabola {
    a: f64,
    p: f64,
    q: f64,
}

impl Parabola {
    #[inline]
    pub fn new(a: f64, p: f64, q: f64) -> Self {
        Self {
            a: clamp_to(a, PARABOLA_RANGE),
            p: clamp_to(p, PARABOLA_RANGE),
            q: clamp_to(q, PARABOLA_RANGE),
        }
    }
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
    #[inline]
    pub fn q(&self) -> f64 {
        self.q
    }
    #[inline]
    pub fn set_a(&mut self, a: f64) {
        self.a = clamp_to(a, PARABOLA_RANGE);
    }
    #[inline]
    pub fn set_p(&mut self, p: f64) {
        self.p = clamp_to(p, PARABOLA_RANGE);
    }
    #[inline]
    pub fn set_q(&mut self, q: f64) {
        self.q = clamp_to(q, PARABOLA_RANGE);
    }
    /// Apex `(p, q)`.
    #[inline]
    pub fn vertex(&self) -> Vector2<f64> {
        Vector2::new(self.p, self.q)
    }
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.p;
        self.a * dx * dx + self.q
    }
}

impl Default for Parabola {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// Line `y = mx + n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    m: f64,
    n: f64,
}

impl Line {
    #[inline]
    pub fn new(m: f64, n: f64) -> Self {
        Self {
            m: clamp_to(m, SLOPE_RANGE),
            n: clamp_to(n, INTERCEPT_RANGE),
        }
    }
    #[inline]
    pub fn m(&self) -> f64 {
        self.m
    }
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }
    #[inline]
    pub fn set_m(&mut self, m: f64) {
        self.m = clamp_to(m, SLOPE_RANGE);
    }
    #[inline]
    pub fn set_n(&mut self, n: f64) {
        self.n = clamp_to(n, INTERCEPT_RANGE);
    }
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.m * x + self.n
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(1.0, 2.0)
    }
}

/// A point where the parabola meets the line.
///
/// `id` is unique within one solve result (left point first); it does not
/// identify the same geometric point across solves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionPoint {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl IntersectionPoint {
    #[inline]
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}
