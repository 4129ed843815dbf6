use crate::foundation::error::{ScrollyteError, ScrollyteResult};

/// Configuration for one velocity-driven row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarqueeConfig {
    /// Offset advance per second at unit direction and sign.
    pub base_velocity: f64,
    /// Row direction, `+1` or `-1`.
    pub direction: f64,
    /// Freeze `dt` accumulation while a pointer is over the row.
    #[serde(default)]
    pub pause_on_hover: bool,
    /// Multiply by the latched scroll-velocity sign so the row pushes back
    /// against scroll direction. Fixed-period rows turn this off.
    #[serde(default = "default_scroll_coupled")]
    pub scroll_coupled: bool,
    /// Loop period in seconds for fixed-period rows (the logo marquee).
    #[serde(default)]
    pub period: Option<f64>,
}

fn default_scroll_coupled() -> bool {
    true
}

impl MarqueeConfig {
    /// Check config invariants.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if !self.base_velocity.is_finite() {
            return Err(ScrollyteError::validation(
                "marquee base_velocity must be finite",
            ));
        }
        if self.direction != 1.0 && self.direction != -1.0 {
            return Err(ScrollyteError::validation(
                "marquee direction must be +1 or -1",
            ));
        }
        if let Some(period) = self.period
            && !(period > 0.0 && period.is_finite())
        {
            return Err(ScrollyteError::validation("marquee period must be > 0"));
        }
        Ok(())
    }
}

/// Continuous offset driver for one horizontally-scrolling row.
///
/// Each tick advances `offset += direction * base_velocity * sign * dt`. The
/// offset is unbounded; wrapping via modulo placement of repeated content is
/// the render boundary's job. The driver has a single running state;
/// `pause_on_hover` only freezes `dt` accumulation and resumes seamlessly.
#[derive(Clone, Copy, Debug)]
pub struct MarqueeDriver {
    config: MarqueeConfig,
    offset: f64,
    scroll_sign: f64,
    hovered: bool,
}

impl MarqueeDriver {
    /// Create a driver at offset 0 with a latched `+1` scroll sign.
    pub fn new(config: MarqueeConfig) -> ScrollyteResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            offset: 0.0,
            scroll_sign: 1.0,
            hovered: false,
        })
    }

    /// Feed the external scroll velocity. Zero keeps the last non-zero sign,
    /// so rows keep drifting at base velocity while the page is at rest.
    pub fn observe_scroll_velocity(&mut self, velocity: f64) {
        if velocity != 0.0 {
            self.scroll_sign = velocity.signum();
        }
    }

    /// Pointer-over / pointer-leave.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Advance by `dt` seconds and return the new offset.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.hovered && self.config.pause_on_hover {
            return self.offset;
        }
        let sign = if self.config.scroll_coupled {
            self.scroll_sign
        } else {
            1.0
        };
        self.offset += self.config.direction * self.config.base_velocity * sign * dt.max(0.0);
        self.offset
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Loop phase in `[0, 1)` for fixed-period rows, `None` otherwise.
    pub fn phase(&self) -> Option<f64> {
        self.config
            .period
            .map(|period| (self.offset / period).rem_euclid(1.0))
    }

    /// The driver's configuration.
    pub fn config(&self) -> MarqueeConfig {
        self.config
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/driver.rs"]
mod tests;
