pub use kurbo::{Affine, Vec2};

/// Normalized scroll progress in `[0, 1]`.
///
/// Construction clamps, so a `Progress` is always a valid sample even when the
/// underlying scroll math over- or undershoots its window.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the very start of a window.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the very end of a window.
    pub const ONE: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`. Non-finite input clamps to `0`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// The underlying scalar.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// One observed scroll snapshot: window scroll offset plus viewport height,
/// both in pixels. Resize events arrive as a new snapshot with an updated
/// `viewport_height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollInput {
    /// Window scroll offset from the document top.
    pub scroll_y: f64,
    /// Current viewport height.
    pub viewport_height: f64,
}

/// Bounding box of a tracked region in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionRect {
    /// Distance from the document top to the region's top edge.
    pub top: f64,
    /// Region height in pixels.
    pub height: f64,
}

impl RegionRect {
    /// Document position of the region's bottom edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
