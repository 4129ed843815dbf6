use super::*;

#[test]
fn equal_partition_tiles_the_unit_interval() {
    for n in [1usize, 2, 4, 7] {
        let p = Partition::equal(n).unwrap();
        assert_eq!(p.len(), n);

        let total: f64 = p.sections().iter().map(Section::span).sum();
        assert!((total - 1.0).abs() < 1e-12, "n={n} total={total}");

        assert_eq!(p.get(0).unwrap().start, 0.0);
        assert_eq!(p.get(n - 1).unwrap().end, 1.0);
        for w in p.sections().windows(2) {
            assert_eq!(w[0].end, w[1].start, "gap or overlap at {}", w[0].index);
        }
    }
}

#[test]
fn equal_partition_rejects_zero_items() {
    assert!(Partition::equal(0).is_err());
}

#[test]
fn custom_windows_may_overlap_and_extend() {
    // The hero window deliberately extends well past its nominal slot.
    let p = Partition::custom(&[(0.0, 1.6), (0.25, 0.5), (0.5, 0.75)]).unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.get(0).unwrap().end, 1.6);
    assert_eq!(p.get(1).unwrap().start, 0.25);
}

#[test]
fn custom_rejects_inverted_empty_and_non_finite_windows() {
    assert!(Partition::custom(&[]).is_err());
    assert!(Partition::custom(&[(0.5, 0.25)]).is_err());
    assert!(Partition::custom(&[(0.0, 0.0)]).is_err());
    assert!(Partition::custom(&[(0.0, f64::NAN)]).is_err());
}

#[test]
fn local_progress_remaps_and_clamps() {
    let s = Section {
        index: 1,
        start: 0.25,
        end: 0.5,
    };
    assert_eq!(s.local(Progress::new(0.0)), 0.0);
    assert_eq!(s.local(Progress::new(0.25)), 0.0);
    assert_eq!(s.local(Progress::new(0.375)), 0.5);
    assert_eq!(s.local(Progress::new(0.5)), 1.0);
    assert_eq!(s.local(Progress::new(0.9)), 1.0);
}

#[test]
fn degenerate_section_local_steps() {
    let s = Section {
        index: 0,
        start: 0.5,
        end: 0.5,
    };
    assert_eq!(s.local(Progress::new(0.4)), 0.0);
    assert_eq!(s.local(Progress::new(0.5)), 1.0);
}
