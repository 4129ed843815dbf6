use super::*;

fn section() -> Section {
    Section {
        index: 0,
        start: 0.0,
        end: 1.0,
    }
}

#[test]
fn compose_evaluates_every_channel_from_one_snapshot() {
    let composer = ItemComposer::new()
        .with(
            Channel::Opacity,
            Curve::from_pairs(&[0.0, 0.1, 0.9, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap(),
        )
        .with(
            Channel::Scale,
            Curve::from_pairs(&[0.0, 1.0], &[1.0, 2.0]).unwrap(),
        )
        .with(
            Channel::TranslateY,
            Curve::from_pairs(&[0.0, 1.0], &[100.0, -100.0]).unwrap(),
        );

    let set = composer.compose(Progress::new(0.5));
    assert_eq!(set.len(), 3);
    assert_eq!(set.opacity(), 1.0);
    assert_eq!(set.scale(), 1.5);
    assert_eq!(set.get(Channel::TranslateY), Some(0.0));
}

#[test]
fn fade_policy_boundary_plateau_boundary() {
    let curve = fade_curve(&section(), 0.1, 0.0, 0.0).unwrap();
    let composer = ItemComposer::new().with(Channel::Opacity, curve);

    assert_eq!(composer.compose(Progress::ZERO).opacity(), 0.0);
    assert_eq!(composer.compose(Progress::new(0.5)).opacity(), 1.0);
    assert_eq!(composer.compose(Progress::ONE).opacity(), 0.0);
}

#[test]
fn fade_lead_in_keeps_the_first_item_visible() {
    let s = Section {
        index: 0,
        start: 0.0,
        end: 0.25,
    };
    let curve = fade_curve(&s, 0.1, 1.0, 0.0).unwrap();
    assert_eq!(curve.evaluate(0.0), 1.0);
    assert_eq!(curve.evaluate(0.25), 0.0);
}

#[test]
fn fade_margin_must_fit_the_section() {
    let s = Section {
        index: 0,
        start: 0.0,
        end: 0.15,
    };
    assert!(fade_curve(&s, 0.1, 0.0, 0.0).is_err());
    assert!(fade_curve(&section(), 0.0, 0.0, 0.0).is_err());
}

#[test]
fn anchored_curve_pins_an_out_of_order_tail() {
    // Offsets whose literal tail re-lists the section end (0.25) after the
    // 1.6 dwell point; the pin keeps breakpoints non-decreasing.
    let s = Section {
        index: 0,
        start: 0.0,
        end: 0.25,
    };
    let curve = anchored_curve(
        &s,
        &[0.0, 0.3, 0.7, 1.2, 1.6, s.span()],
        &[2.0, 2.5, 3.0, 3.5, 4.0, 3.5],
    )
    .unwrap();

    assert_eq!(curve.domain(), (0.0, 1.6));
    assert_eq!(curve.evaluate(0.0), 2.0);
    assert_eq!(curve.evaluate(0.3), 2.5);
    assert_eq!(curve.evaluate(1.2), 3.5);
    assert_eq!(curve.evaluate(1.4), 3.75);
    assert_eq!(curve.evaluate(2.0), 3.5);
}

#[test]
fn composer_without_curves_yields_an_empty_set() {
    let set = ItemComposer::new().compose(Progress::new(0.7));
    assert!(set.is_empty());
    assert_eq!(set.opacity(), 1.0);
}
