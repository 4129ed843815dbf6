use super::*;

fn input(scroll_y: f64) -> ScrollInput {
    ScrollInput {
        scroll_y,
        viewport_height: 800.0,
    }
}

#[test]
fn unattached_region_yields_zero_and_recovers_after_attach() {
    let mut tracker = ProgressTracker::new(TrackWindow::enter_exit());
    assert!(!tracker.is_attached());
    assert_eq!(tracker.progress(input(5000.0)), Progress::ZERO);

    tracker.attach(RegionRect {
        top: 2000.0,
        height: 800.0,
    });
    assert!(tracker.is_attached());
    assert!(tracker.progress(input(5000.0)).value() > 0.0);

    tracker.detach();
    assert_eq!(tracker.progress(input(5000.0)), Progress::ZERO);
}

#[test]
fn enter_exit_midpoint_for_equal_heights_is_half() {
    // Region height equals viewport height: the region midpoint crosses the
    // viewport midpoint exactly when scroll_y == rect.top.
    let mut tracker = ProgressTracker::new(TrackWindow::enter_exit());
    tracker.attach(RegionRect {
        top: 2000.0,
        height: 800.0,
    });

    assert_eq!(tracker.progress(input(1100.0)), Progress::ZERO); // before entry
    assert_eq!(tracker.progress(input(1200.0)), Progress::ZERO); // top meets bottom
    assert_eq!(tracker.progress(input(2000.0)).value(), 0.5);
    assert_eq!(tracker.progress(input(2800.0)), Progress::ONE); // bottom meets top
    assert_eq!(tracker.progress(input(4000.0)), Progress::ONE); // after exit
}

#[test]
fn pinned_window_spans_region_minus_viewport() {
    // A 4x-viewport region tracked while pinned: progress runs over
    // [top, top + 3 * viewport].
    let mut tracker = ProgressTracker::new(TrackWindow::pinned());
    tracker.attach(RegionRect {
        top: 1000.0,
        height: 3200.0,
    });

    assert_eq!(tracker.progress(input(1000.0)), Progress::ZERO);
    assert_eq!(tracker.progress(input(2200.0)).value(), 0.5);
    assert_eq!(tracker.progress(input(3400.0)), Progress::ONE);
}

#[test]
fn degenerate_window_resolves_as_a_step() {
    // Zero-height region with a pinned window on an equal-height viewport
    // would divide by zero; it must step instead.
    let mut tracker = ProgressTracker::new(TrackWindow {
        start: Alignment {
            region: Edge::Start,
            viewport: Edge::Start,
        },
        end: Alignment {
            region: Edge::Start,
            viewport: Edge::Start,
        },
    });
    tracker.attach(RegionRect {
        top: 500.0,
        height: 100.0,
    });

    assert_eq!(tracker.progress(input(499.0)), Progress::ZERO);
    assert_eq!(tracker.progress(input(500.0)), Progress::ONE);
    assert_eq!(tracker.progress(input(501.0)), Progress::ONE);
}

#[test]
fn resize_changes_the_window() {
    let mut tracker = ProgressTracker::new(TrackWindow::enter_exit());
    tracker.attach(RegionRect {
        top: 2000.0,
        height: 800.0,
    });

    let small = ScrollInput {
        scroll_y: 1600.0,
        viewport_height: 400.0,
    };
    // Window is [1600, 2800] at the smaller viewport.
    assert_eq!(tracker.progress(small), Progress::ZERO);
    let mid = ScrollInput {
        scroll_y: 2200.0,
        viewport_height: 400.0,
    };
    assert_eq!(tracker.progress(mid).value(), 0.5);
}
