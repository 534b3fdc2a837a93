//! Math plane ↔ viewport mapping.
//!
//! The viewport centre (shifted by `pan`) is the math origin; one math unit is
//! `min(width, height)/12 · zoom` screen units; screen `y` grows downward and
//! math `y` upward. No drawing happens here: the map only answers which math
//! rectangle is visible and where a point lands.

use nalgebra::Vector2;

/// Math units across the shorter viewport side at zoom 1.
const UNITS_ACROSS: f64 = 12.0;
/// Default margin for `is_visible`, in math units.
pub const VISIBLE_MARGIN: f64 = 2.0;

/// Axis-aligned math-space rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MathBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl MathBounds {
    #[inline]
    pub fn contains_with_margin(&self, p: Vector2<f64>, margin: f64) -> bool {
        p.x >= self.min_x - margin
            && p.x <= self.max_x + margin
            && p.y >= self.min_y - margin
            && p.y <= self.max_y + margin
    }
}

/// Affine map parametrized by viewport size, zoom and pan (all in screen units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSystem {
    width: f64,
    height: f64,
    zoom: f64,
    pan: Vector2<f64>,
}

impl CoordinateSystem {
    /// `None` unless size and zoom are positive and everything is finite.
    pub fn new(width: f64, height: f64, zoom: f64, pan: Vector2<f64>) -> Option<Self> {
        let finite = width.is_finite() && height.is_finite() && zoom.is_finite();
        if !finite || !pan.iter().all(|v| v.is_finite()) {
            return None;
        }
        if width <= 0.0 || height <= 0.0 || zoom <= 0.0 {
            return None;
        }
        Some(Self {
            width,
            height,
            zoom,
            pan,
        })
    }

    /// Zoom 1, no pan.
    #[inline]
    pub fn unzoomed(width: f64, height: f64) -> Option<Self> {
        Self::new(width, height, 1.0, Vector2::zeros())
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
    #[inline]
    pub fn pan(&self) -> Vector2<f64> {
        self.pan
    }

    /// Screen units per math unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.width.min(self.height) / UNITS_ACROSS * self.zoom
    }

    /// Screen position of the math origin.
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.width / 2.0, self.height / 2.0) + self.pan
    }

    #[inline]
    pub fn to_screen(&self, p: Vector2<f64>) -> Vector2<f64> {
        let c = self.center();
        let s = self.scale();
        Vector2::new(c.x + p.x * s, c.y - p.y * s)
    }

    #[inline]
    pub fn to_math(&self, p: Vector2<f64>) -> Vector2<f64> {
        let c = self.center();
        let s = self.scale();
        Vector2::new((p.x - c.x) / s, (c.y - p.y) / s)
    }

    /// Math rectangle covered by the viewport `[0, width] × [0, height]`.
    pub fn visible_math_bounds(&self) -> MathBounds {
        let top_left = self.to_math(Vector2::zeros());
        let bottom_right = self.to_math(Vector2::new(self.width, self.height));
        MathBounds {
            min_x: top_left.x,
            max_x: bottom_right.x,
            min_y: bottom_right.y,
            max_y: top_left.y,
        }
    }

    /// Whether a math point falls within the visible bounds widened by `margin`.
    #[inline]
    pub fn is_visible(&self, p: Vector2<f64>, margin: f64) -> bool {
        self.visible_math_bounds().contains_with_margin(p, margin)
    }

    /// Same viewport and pan, new zoom.
    #[inline]
    pub fn with_zoom(&self, zoom: f64) -> Option<Self> {
        Self::new(self.width, self.height, zoom, self.pan)
    }

    /// Shift the pan by a screen-space delta.
    #[inline]
    pub fn pan_by(&self, delta: Vector2<f64>) -> Option<Self> {
        Self::new(self.width, self.height, self.zoom, self.pan + delta)
    }

    /// Zoom so the math point under `anchor` (screen space) stays under it.
    pub fn zoom_about(&self, anchor: Vector2<f64>, zoom: f64) -> Option<Self> {
        let fixed = self.to_math(anchor);
        let zoomed = self.with_zoom(zoom)?;
        let s = zoomed.scale();
        let center = Vector2::new(anchor.x - fixed.x * s, anchor.y + fixed.y * s);
        let pan = center - Vector2::new(self.width / 2.0, self.height / 2.0);
        Self::new(self.width, self.height, zoom, pan)
    }

    /// Zoom 1, no pan.
    #[inline]
    pub fn reset(&self) -> Self {
        Self {
            zoom: 1.0,
            pan: Vector2::zeros(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn origin_at_centre_and_y_inverted() {
        let cs = CoordinateSystem::unzoomed(600.0, 400.0).expect("valid viewport");
        assert!((cs.scale() - 400.0 / 12.0).abs() < 1e-12);
        assert_eq!(cs.to_screen(vector![0.0, 0.0]), vector![300.0, 200.0]);
        let up = cs.to_screen(vector![0.0, 1.0]);
        assert!(up.y < 200.0);
    }

    #[test]
    fn bounds_without_and_with_pan() {
        let cs = CoordinateSystem::unzoomed(600.0, 600.0).expect("valid viewport");
        let b = cs.visible_math_bounds();
        assert!((b.min_x + 6.0).abs() < 1e-12 && (b.max_x - 6.0).abs() < 1e-12);
        assert!((b.min_y + 6.0).abs() < 1e-12 && (b.max_y - 6.0).abs() < 1e-12);
        // Panning right by one math unit (50 px) shows one more unit on the left.
        let panned = cs.pan_by(vector![50.0, 0.0]).expect("finite");
        let pb = panned.visible_math_bounds();
        assert!((pb.min_x + 7.0).abs() < 1e-12 && (pb.max_x - 5.0).abs() < 1e-12);
        assert!(panned.is_visible(vector![-8.5, 0.0], VISIBLE_MARGIN));
        assert!(!panned.is_visible(vector![7.5, 0.0], VISIBLE_MARGIN));
        assert_eq!(panned.reset(), cs);
    }

    #[test]
    fn margin_widens_bounds_on_every_side() {
        let b = MathBounds {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -2.0,
            max_y: 2.0,
        };
        assert!(b.contains_with_margin(vector![1.0, -2.0], 0.0));
        assert!(!b.contains_with_margin(vector![1.5, 0.0], 0.0));
        assert!(b.contains_with_margin(vector![1.5, 0.0], 0.5));
        assert!(b.contains_with_margin(vector![0.0, -2.5], 0.5));
        assert!(!b.contains_with_margin(vector![0.0, 2.6], 0.5));
    }

    #[test]
    fn zoom_shrinks_bounds() {
        let cs = CoordinateSystem::unzoomed(600.0, 600.0).expect("valid viewport");
        let z = cs.with_zoom(2.0).expect("positive zoom");
        assert!((z.visible_math_bounds().max_x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_about_keeps_anchor() {
        let cs = CoordinateSystem::new(800.0, 500.0, 1.3, vector![20.0, -15.0]).expect("valid");
        let anchor = vector![610.0, 120.0];
        let before = cs.to_math(anchor);
        let z = cs.zoom_about(anchor, 3.1).expect("positive zoom");
        let after = z.to_math(anchor);
        assert!((before - after).norm() < 1e-9);
    }

    #[test]
    fn rejects_degenerate_viewports() {
        assert!(CoordinateSystem::new(0.0, 100.0, 1.0, Vector2::zeros()).is_none());
        assert!(CoordinateSystem::new(100.0, 100.0, 0.0, Vector2::zeros()).is_none());
        assert!(CoordinateSystem::new(100.0, 100.0, -2.0, Vector2::zeros()).is_none());
        assert!(CoordinateSystem::new(100.0, 100.0, 1.0, vector![f64::NAN, 0.0]).is_none());
    }

    proptest! {
        #[test]
        fn screen_math_round_trip(
            w in 50.0f64..3000.0,
            h in 50.0f64..3000.0,
            zoom in 0.01f64..100.0,
            px in -2000.0f64..2000.0,
            py in -2000.0f64..2000.0,
            x in -50.0f64..50.0,
            y in -50.0f64..50.0,
        ) {
            let cs = CoordinateSystem::new(w, h, zoom, vector![px, py]).expect("valid");
            let p = vector![x, y];
            let back = cs.to_math(cs.to_screen(p));
            prop_assert!((back - p).norm() < 1e-9 * (1.0 + p.norm()));
        }
    }
}
