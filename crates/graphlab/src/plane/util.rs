//! Clamping, grid snapping and fraction labels for slider values.

/// Clamp `v` to the closed range `(lo, hi)`. NaN passes through unchanged.
#[inline]
pub fn clamp_to(v: f64, (lo, hi): (f64, f64)) -> f64 {
    v.clamp(lo, hi)
}

/// Round to `places` decimal places.
#[inline]
pub fn round_to_places(v: f64, places: i32) -> f64 {
    let divisor = 10f64.powi(places);
    (v * divisor).round() / divisor
}

/// Snap to the nearest multiple of `step`. A non-positive step leaves `v` as is.
#[inline]
pub fn snap_to(v: f64, step: f64) -> f64 {
    if !(step > 0.0) {
        return v;
    }
    (v / step).round() * step
}

/// Textbook-style fraction label.
///
/// Integers (within 1e-6) print as integers; anything else is taken in
/// hundredths and reduced, so `0.25 → "1/4"`, `-1.5 → "-3/2"`, `0.33 → "33/100"`.
pub fn fraction_label(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let rounded = v.round();
    if (v - rounded).abs() < 1e-6 {
        return format!("{}", rounded as i64);
    }
    let sign: i64 = if v < 0.0 { -1 } else { 1 };
    let num = (v.abs() * 100.0).round() as i64;
    let den = 100i64;
    let g = gcd(num, den);
    let (num, den) = (sign * (num / g), den / g);
    if den == 1 {
        format!("{num}")
    } else {
        format!("{num}/{den}")
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
