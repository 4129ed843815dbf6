use super::*;

fn fade() -> Curve {
    Curve::from_pairs(&[0.0, 0.1, 0.9, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap()
}

#[test]
fn clamps_below_first_and_above_last_breakpoint() {
    let c = fade();
    assert_eq!(c.evaluate(-1.0), 0.0);
    assert_eq!(c.evaluate(0.0), 0.0);
    assert_eq!(c.evaluate(1.0), 0.0);
    assert_eq!(c.evaluate(5.0), 0.0);
}

#[test]
fn interior_plateau_and_boundary_scenario() {
    // The 4-point fade curve from the section composer: 0 at the edges, a
    // plateau of 1 across the interior.
    let c = fade();
    assert_eq!(c.evaluate(0.5), 1.0);
    assert_eq!(c.evaluate(0.05), 0.5);
    assert!((c.evaluate(0.95) - 0.5).abs() < 1e-12);
}

#[test]
fn interpolated_value_stays_between_segment_values() {
    let c = Curve::from_pairs(&[0.0, 0.3, 1.0], &[2.0, -1.0, 4.0]).unwrap();
    for i in 0..=100 {
        let x = i as f64 / 100.0;
        let y = c.evaluate(x);
        assert!((-1.0..=4.0).contains(&y), "y={y} at x={x}");
    }
}

#[test]
fn evaluate_is_continuous_at_breakpoints() {
    let c = Curve::from_pairs(&[0.0, 0.4, 1.0], &[0.0, 10.0, 0.0]).unwrap();
    let eps = 1e-9;
    assert!((c.evaluate(0.4 - eps) - 10.0).abs() < 1e-6);
    assert_eq!(c.evaluate(0.4), 10.0);
    assert!((c.evaluate(0.4 + eps) - 10.0).abs() < 1e-6);
}

#[test]
fn duplicate_breakpoints_resolve_without_dividing_by_zero() {
    // The standard scale policy pins values with repeated breakpoints; the
    // zero-width segment must contribute its leading value.
    let c = Curve::from_pairs(
        &[0.0, 0.0, 0.3, 0.5, 0.5, 0.5],
        &[1.0, 1.0, 1.2, 1.2, 1.2, 1.2],
    )
    .unwrap();
    assert_eq!(c.evaluate(0.0), 1.0);
    assert!((c.evaluate(0.15) - 1.1).abs() < 1e-12);
    assert_eq!(c.evaluate(0.5), 1.2);
    assert_eq!(c.evaluate(0.9), 1.2);
}

#[test]
fn first_match_wins_for_stacked_duplicates() {
    let c = Curve::from_pairs(&[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
    // Just below the stack we interpolate toward the first duplicate; at the
    // stack the later duplicate takes over as the leading value of the next
    // segment.
    assert!((c.evaluate(0.25) - 0.5).abs() < 1e-12);
    assert_eq!(c.evaluate(0.5), 2.0);
}

#[test]
fn validation_rejects_short_decreasing_and_non_finite_curves() {
    assert!(Curve::from_pairs(&[0.0], &[1.0]).is_err());
    assert!(Curve::from_pairs(&[0.0, 0.5, 0.4], &[0.0, 1.0, 2.0]).is_err());
    assert!(Curve::from_pairs(&[0.0, f64::NAN], &[0.0, 1.0]).is_err());
    assert!(Curve::from_pairs(&[0.0, 1.0], &[0.0, f64::INFINITY]).is_err());
    assert!(Curve::from_pairs(&[0.0, 1.0], &[0.0]).is_err());
}

#[test]
fn eased_segment_still_hits_both_endpoints() {
    let c = Curve::new([
        CurvePoint {
            at: 0.0,
            value: 0.0,
            ease: Ease::InOutCubic,
        },
        CurvePoint::linear(1.0, 8.0),
    ])
    .unwrap();
    assert_eq!(c.evaluate(0.0), 0.0);
    assert_eq!(c.evaluate(0.5), 4.0);
    assert_eq!(c.evaluate(1.0), 8.0);
    assert!(c.evaluate(0.25) < 2.0);
}

#[test]
fn serde_round_trip_preserves_points() {
    let c = fade();
    let json = serde_json::to_string(&c).unwrap();
    let back: Curve = serde_json::from_str(&json).unwrap();
    back.validate().unwrap();
    assert_eq!(back, c);
}
