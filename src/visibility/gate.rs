use crate::{
    foundation::core::ScrollInput,
    foundation::error::{ScrollyteError, ScrollyteResult},
};

/// Edge-triggered visibility threshold on raw scroll offset.
///
/// Becomes visible when `scroll_y > threshold * viewport_height` (strict).
/// Transitions fire only on state change so consumers never see redundant
/// updates.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityGate {
    threshold: f64,
    visible: bool,
}

impl VisibilityGate {
    /// Create a hidden gate. `threshold` is a fraction of viewport height in
    /// `(0, 1]`.
    pub fn new(threshold: f64) -> ScrollyteResult<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ScrollyteError::validation(
                "gate threshold must be in (0, 1]",
            ));
        }
        Ok(Self {
            threshold,
            visible: false,
        })
    }

    /// Feed a scroll snapshot. Returns `Some(new_state)` only on transitions.
    pub fn observe(&mut self, input: ScrollInput) -> Option<bool> {
        let should_be_visible = input.scroll_y > self.threshold * input.viewport_height;
        if should_be_visible != self.visible {
            self.visible = should_be_visible;
            Some(should_be_visible)
        } else {
            None
        }
    }

    /// Current state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Configured threshold fraction.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
