use crate::foundation::core::{Progress, RegionRect, ScrollInput};

/// One edge of a region or of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Top edge.
    Start,
    /// Bottom edge.
    End,
}

/// One alignment point: tracking reaches this point when the named region
/// edge meets the named viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Alignment {
    /// Region edge.
    pub region: Edge,
    /// Viewport edge.
    pub viewport: Edge,
}

/// The `(start, end)` alignment pair describing when tracking begins and ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackWindow {
    /// Alignment at which progress is 0.
    pub start: Alignment,
    /// Alignment at which progress is 1.
    pub end: Alignment,
}

impl TrackWindow {
    /// Track while the region pins the viewport: progress 0 when the region
    /// top meets the viewport top, 1 when the bottoms meet. Used by regions
    /// taller than the viewport (the zoom section).
    pub fn pinned() -> Self {
        Self {
            start: Alignment {
                region: Edge::Start,
                viewport: Edge::Start,
            },
            end: Alignment {
                region: Edge::End,
                viewport: Edge::End,
            },
        }
    }

    /// Track the full pass through the viewport: progress 0 when the region
    /// top meets the viewport bottom, 1 when the region bottom meets the
    /// viewport top.
    pub fn enter_exit() -> Self {
        Self {
            start: Alignment {
                region: Edge::Start,
                viewport: Edge::End,
            },
            end: Alignment {
                region: Edge::End,
                viewport: Edge::Start,
            },
        }
    }
}

/// Maps scroll snapshots to normalized progress for one tracked region.
///
/// The only failure mode is "region not yet attached", which yields progress
/// 0 without an error and self-corrects once a rect arrives.
#[derive(Clone, Copy, Debug)]
pub struct ProgressTracker {
    window: TrackWindow,
    rect: Option<RegionRect>,
}

impl ProgressTracker {
    /// Create a tracker with no attached region.
    pub fn new(window: TrackWindow) -> Self {
        Self { window, rect: None }
    }

    /// Record the region's current bounding box.
    pub fn attach(&mut self, rect: RegionRect) {
        self.rect = Some(rect);
    }

    /// Forget the region (it unmounted or has no layout yet).
    pub fn detach(&mut self) {
        self.rect = None;
    }

    /// Whether a measurable region is currently attached.
    pub fn is_attached(&self) -> bool {
        self.rect.is_some()
    }

    /// The configured track window.
    pub fn window(&self) -> TrackWindow {
        self.window
    }

    /// Compute progress for the given scroll snapshot.
    pub fn progress(&self, input: ScrollInput) -> Progress {
        let Some(rect) = self.rect else {
            return Progress::ZERO;
        };

        let start = meet_scroll_y(self.window.start, rect, input.viewport_height);
        let end = meet_scroll_y(self.window.end, rect, input.viewport_height);

        let span = end - start;
        if span == 0.0 {
            // Degenerate window: step at the alignment point.
            return if input.scroll_y >= start {
                Progress::ONE
            } else {
                Progress::ZERO
            };
        }
        Progress::new((input.scroll_y - start) / span)
    }
}

/// The scroll offset at which an alignment point is met.
fn meet_scroll_y(alignment: Alignment, rect: RegionRect, viewport_height: f64) -> f64 {
    let region_pos = match alignment.region {
        Edge::Start => rect.top,
        Edge::End => rect.bottom(),
    };
    match alignment.viewport {
        Edge::Start => region_pos,
        Edge::End => region_pos - viewport_height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/tracker.rs"]
mod tests;
