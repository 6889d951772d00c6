use crate::api::*;
use nalgebra::vector;
use proptest::prelude::*;
use std::f64::consts::PI;

#[test]
fn degree_radian_round_trip_within_rounding() {
    // Radians carry 4 decimals, so degrees can drift by up to 0.00005 * 180/π.
    let mut d = -720.0;
    while d <= 720.0 {
        let back = radians_to_degrees(degrees_to_radians(d));
        assert!((back - d).abs() <= 0.003, "{d} -> {back}");
        d += 7.5;
    }
}

#[test]
fn cardinal_directions_and_headings_agree() {
    for (deg, dir) in [
        (0.0, vector![1.0, 0.0]),
        (90.0, vector![0.0, 1.0]),
        (180.0, vector![-1.0, 0.0]),
        (270.0, vector![0.0, -1.0]),
    ] {
        assert_eq!(direction_from_degrees(deg), dir);
        assert_eq!(wrap_degrees(vector_to_degrees(dir) - deg), 0.0);
    }
}

#[test]
fn rotating_sprite_about_its_center() {
    let bounds: Rect = PosSizeRect::new(100.4, 50.8, 32.0, 16.0).into();
    assert_eq!(bounds.to_string(), "(100,50)-(132,66)");
    let pivot = origin_from_rect(&bounds);
    assert_eq!(pivot, Vec2::new(16.0, 8.0));

    let target = angle_from_direction(vector![0.0, -1.0]);
    let mut facing = 0.0;
    for _ in 0..100 {
        facing = clerp_angle(facing, target);
    }
    assert!((facing - target).abs() < 1e-6);
}

proptest! {
    #[test]
    fn wrap_radians_in_range_and_idempotent(a in -1.0e9f64..1.0e9) {
        let w = wrap_radians(a);
        prop_assert!((-PI..=PI).contains(&w));
        prop_assert_eq!(wrap_radians(w), w);
    }

    #[test]
    fn wrap_degrees_in_range_and_idempotent(a in -1.0e9f64..1.0e9) {
        let w = wrap_degrees(a);
        prop_assert!((-180.0..=180.0).contains(&w));
        prop_assert_eq!(wrap_degrees(w), w);
    }

    #[test]
    fn wrap_degrees_is_whole_turns_away(k in -50i32..50, a in -179.0f64..179.0) {
        let w = wrap_degrees(a + 360.0 * f64::from(k));
        prop_assert!((w - a).abs() < 1e-6);
    }

    #[test]
    fn clerp_step_never_exceeds_a_fifth_of_half_turn(from in -10.0f64..10.0, to in -10.0f64..10.0) {
        let next = clerp_angle(from, to);
        prop_assert!((next - from).abs() <= PI * SMOOTHNESS + 1e-12);
    }

    #[test]
    fn direction_is_near_unit(a in -100.0f64..100.0) {
        let d = direction_from_radians(a);
        prop_assert!((d.norm() - 1.0).abs() < 2e-3);
    }

    #[test]
    fn overlap_is_symmetric(
        ax in -20i64..20, ay in -20i64..20, aw in 0i64..10, ah in 0i64..10,
        bx in -20i64..20, by in -20i64..20, bw in 0i64..10, bh in 0i64..10
    ) {
        let a = Rect::from_corners(ax, ay, ax + aw, ay + ah);
        let b = Rect::from_corners(bx, by, bx + bw, by + bh);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        if a.overlaps(&b) {
            prop_assert!(!a.is_empty() && !b.is_empty());
        }
    }

    #[test]
    fn origin_is_half_extent(
        x0 in -4.0e9f64..4.0e9, y0 in -4.0e9f64..4.0e9,
        x1 in -4.0e9f64..4.0e9, y1 in -4.0e9f64..4.0e9
    ) {
        let r = Rect::from_corners(x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        prop_assert!(r.dx() >= 0 && r.dy() >= 0);
        prop_assert_eq!(r.size(), Point::new(r.dx(), r.dy()));
        prop_assert_eq!(r.origin(), Vec2::new(r.dx() as f64 / 2.0, r.dy() as f64 / 2.0));
    }

    #[test]
    fn pos_size_origin_never_panics(
        x in -1.0e20f64..1.0e20, y in -1.0e20f64..1.0e20,
        w in 0.0f64..1.0e20, h in 0.0f64..1.0e20
    ) {
        let r = PosSizeRect::new(x, y, w, h).to_rect();
        let pivot = r.origin();
        prop_assert!(pivot.x >= 0.0 && pivot.y >= 0.0);
    }

    #[test]
    fn inclusive_range_in_bounds(min in -1000i64..1000, span in 0i64..1000) {
        let v = random_in_range_inclusive(min, min + span).unwrap();
        prop_assert!(v >= min && v <= min + span);
    }
}
