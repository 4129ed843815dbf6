use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollyteError, ScrollyteResult},
    foundation::math::lerp,
};

/// One `(breakpoint, value)` pair plus the ease applied toward the next point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurvePoint {
    /// Input breakpoint, usually a progress value.
    pub at: f64,
    /// Output value at this breakpoint.
    pub value: f64,
    /// Easing toward the next point.
    #[serde(default)]
    pub ease: Ease,
}

impl CurvePoint {
    /// A point with linear easing toward its successor.
    pub fn linear(at: f64, value: f64) -> Self {
        Self {
            at,
            value,
            ease: Ease::Linear,
        }
    }
}

/// Static piecewise-linear mapping from an input scalar to an output value.
///
/// Breakpoints are non-decreasing and evaluation clamps to the boundary values
/// outside the covered domain. Curves are immutable once constructed; they are
/// configuration, not runtime state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: SmallVec<[CurvePoint; 8]>,
}

impl Curve {
    /// Build a validated curve from explicit points.
    pub fn new(points: impl IntoIterator<Item = CurvePoint>) -> ScrollyteResult<Self> {
        let curve = Self {
            points: points.into_iter().collect(),
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Build a linear-eased curve from parallel breakpoint/value slices.
    pub fn from_pairs(breakpoints: &[f64], values: &[f64]) -> ScrollyteResult<Self> {
        if breakpoints.len() != values.len() {
            return Err(ScrollyteError::validation(
                "Curve breakpoints and values must have equal length",
            ));
        }
        Self::new(
            breakpoints
                .iter()
                .zip(values)
                .map(|(&at, &value)| CurvePoint::linear(at, value)),
        )
    }

    /// Check curve invariants. Deserialized curves must be re-checked here
    /// before evaluation; [`Curve::new`] already does.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.points.len() < 2 {
            return Err(ScrollyteError::validation(
                "Curve must have at least 2 points",
            ));
        }
        if !self
            .points
            .iter()
            .all(|p| p.at.is_finite() && p.value.is_finite())
        {
            return Err(ScrollyteError::validation("Curve points must be finite"));
        }
        if !self.points.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollyteError::validation(
                "Curve breakpoints must be non-decreasing",
            ));
        }
        Ok(())
    }

    /// The ordered points of this curve.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Covered input domain `(first breakpoint, last breakpoint)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.points[0].at, self.points[self.points.len() - 1].at)
    }

    /// Evaluate the curve at `x`.
    ///
    /// Outside the covered domain the boundary value is returned. Duplicate
    /// breakpoints are defined behavior: a zero-width segment contributes its
    /// leading value rather than dividing by zero.
    pub fn evaluate(&self, x: f64) -> f64 {
        let idx = self.points.partition_point(|p| p.at <= x);

        if idx == 0 {
            return self.points[0].value;
        }
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1].value;
        }

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let denom = b.at - a.at;
        if denom == 0.0 {
            return a.value;
        }

        let t = (x - a.at) / denom;
        lerp(a.value, b.value, a.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
