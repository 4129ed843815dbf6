use super::*;

const TICK: f64 = 1.0 / 60.0;

#[test]
fn converges_to_a_held_target() {
    let mut spring = SpringFilter::new(SpringConfig::contact_form(), 0.0).unwrap();
    spring.set_target(1.0);

    for _ in 0..600 {
        spring.tick(TICK);
    }

    assert!((spring.value() - 1.0).abs() < 1e-3);
    assert!(spring.is_settled());
    // Settling snaps exactly.
    assert_eq!(spring.value(), 1.0);
}

#[test]
fn contact_form_spring_never_overshoots() {
    // stiffness 100 / damping 30 / mass 1 is overdamped (critical damping
    // would be 20), so the response must stay below the target.
    let mut spring = SpringFilter::new(SpringConfig::contact_form(), 0.0).unwrap();
    spring.set_target(1.0);

    for _ in 0..600 {
        let v = spring.tick(TICK);
        assert!(v <= 1.0 + 1e-9, "overshoot: {v}");
    }
}

#[test]
fn approach_is_monotonic_for_overdamped_config() {
    let mut spring = SpringFilter::new(SpringConfig::contact_form(), 0.0).unwrap();
    spring.set_target(1.0);

    let mut prev = 0.0;
    for _ in 0..200 {
        let v = spring.tick(TICK);
        assert!(v >= prev - 1e-12);
        prev = v;
    }
}

#[test]
fn retargeting_keeps_velocity_continuous() {
    let mut spring = SpringFilter::new(SpringConfig::contact_form(), 0.0).unwrap();
    spring.set_target(1.0);
    for _ in 0..10 {
        spring.tick(TICK);
    }
    let before = spring.value();

    // Retarget mid-flight; the very next tick must not jump discontinuously.
    spring.set_target(0.0);
    let after = spring.tick(TICK);
    assert!((after - before).abs() < 0.1, "jump: {before} -> {after}");
}

#[test]
fn large_dt_is_substepped_and_stays_finite() {
    let mut spring = SpringFilter::new(SpringConfig::contact_form(), 0.0).unwrap();
    spring.set_target(1.0);
    let v = spring.tick(2.0);
    assert!(v.is_finite());
    assert!((v - 1.0).abs() < 1e-3);
}

#[test]
fn config_validation_rejects_bad_parameters() {
    let bad = SpringConfig {
        stiffness: 0.0,
        ..SpringConfig::contact_form()
    };
    assert!(SpringFilter::new(bad, 0.0).is_err());

    let bad = SpringConfig {
        mass: -1.0,
        ..SpringConfig::contact_form()
    };
    assert!(SpringFilter::new(bad, 0.0).is_err());

    let bad = SpringConfig {
        rest_delta: 0.0,
        ..SpringConfig::contact_form()
    };
    assert!(SpringFilter::new(bad, 0.0).is_err());
}
