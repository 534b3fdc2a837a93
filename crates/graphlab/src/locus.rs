//! Midpoint locus of a point moving on the parabola.
//!
//! Model
//! - A point `P(t) = (t, f(t))` runs along the parabola; `A` is a fixed
//!   reference point. The locus is the curve traced by the midpoint of `PA`.
//! - Samples sit at `t_k = t_min + k·step` computed from `k`, never by repeated
//!   addition, so the same inputs give the same sequence bit for bit.
//!
//! `trace` returns a lazy iterator holding only its inputs and a cursor;
//! call `trace` again (or clone an unstarted trace) to restart.
//!
//! Code cross-refs: `coords::MathBounds`, `plane::Parabola`

use nalgebra::Vector2;

use crate::coords::MathBounds;
use crate::plane::util::clamp_to;
use crate::plane::Parabola;

/// Range allowed for each coordinate of the reference point.
pub const REFERENCE_RANGE: (f64, f64) = (-5.0, 5.0);

/// Upper bound on samples per trace; denser configurations trace nothing.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Sampling configuration for a locus trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocusCfg {
    pub t_min: f64,
    pub t_max: f64,
    /// Spacing between consecutive `t` samples; caller's accuracy/speed trade-off.
    pub step: f64,
}

impl Default for LocusCfg {
    fn default() -> Self {
        Self {
            t_min: -10.0,
            t_max: 10.0,
            step: 0.08,
        }
    }
}

impl LocusCfg {
    /// Use the visible x-range of a viewport as the `t` range.
    ///
    /// The midpoint's x is `(t + a_x)/2`, so this samples at least the visible
    /// part of the locus whenever the reference point is itself visible.
    pub fn from_bounds(bounds: MathBounds, step: f64) -> Self {
        Self {
            t_min: bounds.min_x,
            t_max: bounds.max_x,
            step,
        }
    }

    /// Parameter value of sample `k`.
    #[inline]
    pub fn t_at(&self, k: usize) -> f64 {
        self.t_min + (k as f64) * self.step
    }

    /// Number of samples; zero for a non-positive step, an inverted range,
    /// or more than `MAX_SAMPLES` samples.
    pub fn sample_count(&self) -> usize {
        let span = self.t_max - self.t_min;
        if !(self.step > 0.0) || !span.is_finite() || !self.step.is_finite() || span < 0.0 {
            return 0;
        }
        // Small slack so an exact multiple keeps its endpoint.
        let intervals = (span / self.step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_SAMPLES as f64 {
            return 0;
        }
        (intervals as usize).saturating_add(1)
    }
}

/// Clamp a reference point into `REFERENCE_RANGE` on both axes.
#[inline]
pub fn clamp_reference(point: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(
        clamp_to(point.x, REFERENCE_RANGE),
        clamp_to(point.y, REFERENCE_RANGE),
    )
}

/// Moving point `P(t)` on the parabola and the midpoint of `P(t)` and `reference`.
#[inline]
pub fn midpoint_at(
    parabola: &Parabola,
    reference: Vector2<f64>,
    t: f64,
) -> (Vector2<f64>, Vector2<f64>) {
    let moving = Vector2::new(t, parabola.evaluate(t));
    (moving, (moving + reference) * 0.5)
}

/// Lazy sampled locus; see module docs.
#[derive(Clone, Debug)]
pub struct LocusTrace {
    parabola: Parabola,
    reference: Vector2<f64>,
    cfg: LocusCfg,
    next: usize,
    len: usize,
}

impl Iterator for LocusTrace {
    type Item = Vector2<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let t = self.cfg.t_at(self.next);
        self.next += 1;
        Some(midpoint_at(&self.parabola, self.reference, t).1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for LocusTrace {}

/// Sample the midpoint locus over `cfg`.
pub fn trace(parabola: &Parabola, reference: Vector2<f64>, cfg: LocusCfg) -> LocusTrace {
    LocusTrace {
        parabola: *parabola,
        reference,
        cfg,
        next: 0,
        len: cfg.sample_count(),
    }
}
