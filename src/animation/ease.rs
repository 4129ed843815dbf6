/// Per-segment easing applied to the local `t` before interpolation.
///
/// All shipped presets use [`Ease::Linear`]; the other shapes exist for hosts
/// that author their own curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity mapping.
    #[default]
    Linear,
    /// Quadratic accelerate-in.
    InQuad,
    /// Quadratic decelerate-out.
    OutQuad,
    /// Quadratic in then out.
    InOutQuad,
    /// Cubic accelerate-in.
    InCubic,
    /// Cubic decelerate-out.
    OutCubic,
    /// Cubic in then out.
    InOutCubic,
}

impl Ease {
    /// Map `t` in `[0, 1]` through the easing shape. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        fn ease_in(t: f64, p: i32) -> f64 {
            t.powi(p)
        }
        fn ease_out(t: f64, p: i32) -> f64 {
            1.0 - (1.0 - t).powi(p)
        }
        fn ease_in_out(t: f64, p: i32) -> f64 {
            if t < 0.5 {
                ease_in(2.0 * t, p) / 2.0
            } else {
                0.5 + ease_out(2.0 * t - 1.0, p) / 2.0
            }
        }

        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
        }
    }
}
