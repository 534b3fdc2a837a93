use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

#[test]
fn clamping_on_construction_and_mutation() {
    let mut par = Parabola::new(9.0, -7.0, 5.5);
    assert_eq!((par.a(), par.p(), par.q()), (5.0, -5.0, 5.0));
    par.set_a(-12.0);
    assert_eq!(par.a(), -5.0);
    par.set_a(0.0);
    assert_eq!(par.a(), 0.0);
    let mut line = Line::new(6.0, -11.0);
    assert_eq!((line.m(), line.n()), (5.0, -10.0));
    line.set_n(9.5);
    assert_eq!(line.n(), 9.5);
    assert_eq!(Parabola::default(), Parabola::new(1.0, 0.0, 0.0));
    assert_eq!(Line::default(), Line::new(1.0, 2.0));
}

#[test]
fn standard_pair_and_simplified_area() {
    let par = Parabola::new(1.0, 0.0, 0.0);
    let line = Line::new(1.0, 2.0);
    let pts = solve_intersections(&par, &line);
    assert_eq!(pts.len(), 2);
    assert!((pts[0].x + 1.0).abs() < 1e-9 && (pts[0].y - 1.0).abs() < 1e-9);
    assert!((pts[1].x - 2.0).abs() < 1e-9 && (pts[1].y - 4.0).abs() < 1e-9);
    assert_eq!((pts[0].id, pts[1].id), (0, 1));
    assert!((simplified_area(&line, &pts) - 3.0).abs() < 1e-9);
    assert!((triangle_area_from(Vector2::zeros(), &pts) - 3.0).abs() < 1e-9);
    assert!(validate_all_intersections(&pts, &par, &line, VALIDATION_TOLERANCE));
}

#[test]
fn horizontal_line_symmetric_roots() {
    let par = Parabola::new(1.0, 0.0, 0.0);
    let line = Line::new(0.0, 5.0);
    assert!(discriminant(&par, &line) > 0.0);
    let pts = solve_intersections(&par, &line);
    assert_eq!(pts.len(), 2);
    let r = 5f64.sqrt();
    assert!((pts[0].x + r).abs() < 1e-12);
    assert!((pts[1].x - r).abs() < 1e-12);
}

#[test]
fn tangent_line_has_single_root_at_vertex_of_quadratic() {
    // x² = 2x + n has D = 4 + 4n, zero at n = -1.
    let par = Parabola::new(1.0, 0.0, 0.0);
    let line = Line::new(2.0, -1.0);
    assert_eq!(discriminant(&par, &line), 0.0);
    assert_eq!(intersection_count(&par, &line), 1);
    let pts = solve_intersections(&par, &line);
    assert_eq!(pts.len(), 1);
    let (a, b, _) = quadratic_coefficients(&par, &line);
    assert_eq!(pts[0].x, -b / (2.0 * a));
    assert!((pts[0].x - 1.0).abs() < 1e-12);
    assert!((pts[0].y - 1.0).abs() < 1e-12);
}

#[test]
fn no_real_roots() {
    let par = Parabola::new(1.0, 0.0, 3.0);
    let line = Line::new(0.0, 1.0);
    assert!(discriminant(&par, &line) < 0.0);
    assert!(solve_intersections(&par, &line).is_empty());
    assert_eq!(intersection_count(&par, &line), 0);
}

#[test]
fn degenerate_parabola_cases() {
    // Coincident horizontals: empty, same as parallel.
    let flat = Parabola::new(0.0, 0.0, 3.0);
    assert!(solve_intersections(&flat, &Line::new(0.0, 3.0)).is_empty());
    assert!(solve_intersections(&flat, &Line::new(0.0, 1.0)).is_empty());
    assert_eq!(intersection_count(&flat, &Line::new(0.0, 3.0)), 0);
    // Sloped line crosses y = 3 once.
    let line = Line::new(1.0, 1.0);
    let pts = solve_intersections(&flat, &line);
    assert_eq!(pts.len(), 1);
    assert!((pts[0].x - 2.0).abs() < 1e-12);
    assert_eq!(pts[0].y, 3.0);
    assert_eq!(intersection_count(&flat, &line), 1);
    // Degenerate discriminant is reported as zero.
    assert_eq!(discriminant(&flat, &line), 0.0);
}

#[test]
fn downward_parabola_is_still_sorted() {
    let par = Parabola::new(-1.0, 0.0, 0.0);
    let line = Line::new(0.0, -4.0);
    let pts = solve_intersections(&par, &line);
    assert_eq!(pts.len(), 2);
    assert!((pts[0].x + 2.0).abs() < 1e-12);
    assert!((pts[1].x - 2.0).abs() < 1e-12);
    assert!(are_intersections_sorted(&pts));
}

#[test]
fn apex_and_origin_vertices_differ() {
    // y = (x-1)² and y = x + 2: roots (3 ± √13)/2, origin area √13, apex area 1.5·√13.
    let par = Parabola::new(1.0, 1.0, 0.0);
    let line = Line::new(1.0, 2.0);
    let pts = solve_intersections(&par, &line);
    assert_eq!(pts.len(), 2);
    let apex = enclosed_area(&par, &line, AreaVertex::Apex);
    let origin = enclosed_area(&par, &line, AreaVertex::Origin);
    assert!((origin - simplified_area(&line, &pts)).abs() < 1e-9);
    assert!((apex - triangle_area(par.vertex(), pts[0].pos(), pts[1].pos())).abs() < 1e-12);
    let r13 = 13f64.sqrt();
    assert!((origin - r13).abs() < 1e-9);
    assert!((apex - 1.5 * r13).abs() < 1e-9);
    assert_eq!(AreaVertex::default(), AreaVertex::Apex);
}

#[test]
fn area_needs_exactly_two_points() {
    let line = Line::new(1.0, 2.0);
    let one = [IntersectionPoint::new(0, 1.0, 3.0)];
    assert_eq!(triangle_area_from(Vector2::zeros(), &one), 0.0);
    assert_eq!(simplified_area(&line, &one), 0.0);
    assert_eq!(simplified_area(&line, &[]), 0.0);
    let three = [
        IntersectionPoint::new(0, 0.0, 2.0),
        IntersectionPoint::new(1, 1.0, 3.0),
        IntersectionPoint::new(2, 2.0, 4.0),
    ];
    assert_eq!(triangle_area_from(Vector2::zeros(), &three), 0.0);
}

#[test]
fn validation_rejects_off_curve_points() {
    let par = Parabola::default();
    let line = Line::default();
    let bogus = IntersectionPoint::new(0, 0.0, 2.0);
    assert!(!validate_intersection(&bogus, &par, &line, VALIDATION_TOLERANCE));
    assert!(validate_all_intersections(&[], &par, &line, VALIDATION_TOLERANCE));
    assert!(areas_equal(3.0, 3.0 + 1e-9, None));
    assert!(!areas_equal(3.0, 3.1, Some(0.05)));
    assert!(triangle_area(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]) > 0.49);
}

proptest! {
    #[test]
    fn solve_matches_count_and_validates(
        a in prop_oneof![-5.0f64..-0.05, 0.05f64..5.0],
        p in -5.0f64..5.0,
        q in -5.0f64..5.0,
        m in -5.0f64..5.0,
        n in -10.0f64..10.0,
    ) {
        let par = Parabola::new(a, p, q);
        let line = Line::new(m, n);
        let pts = solve_intersections(&par, &line);
        prop_assert_eq!(pts.len(), intersection_count(&par, &line));
        prop_assert!(validate_all_intersections(&pts, &par, &line, VALIDATION_TOLERANCE));
        prop_assert!(are_intersections_sorted(&pts));
        if pts.len() == 2 {
            prop_assert!(pts[0].x <= pts[1].x);
        }
    }

    #[test]
    fn count_matches_solve_including_degenerate(
        p in -5.0f64..5.0,
        q in -5.0f64..5.0,
        m in prop_oneof![Just(0.0f64), -5.0f64..5.0],
        n in -10.0f64..10.0,
    ) {
        let par = Parabola::new(0.0, p, q);
        let line = Line::new(m, n);
        prop_assert_eq!(solve_intersections(&par, &line).len(), intersection_count(&par, &line));
    }

    #[test]
    fn origin_area_formulas_agree(
        m in -5.0f64..5.0,
        n in -10.0f64..10.0,
        x1 in -10.0f64..10.0,
        x2 in -10.0f64..10.0,
    ) {
        let line = Line::new(m, n);
        let pts = [
            IntersectionPoint::new(0, x1, line.evaluate(x1)),
            IntersectionPoint::new(1, x2, line.evaluate(x2)),
        ];
        let general = triangle_area_from(Vector2::zeros(), &pts);
        let simple = simplified_area(&line, &pts);
        prop_assert!((general - simple).abs() < 1e-6, "general={} simple={}", general, simple);
    }
}
