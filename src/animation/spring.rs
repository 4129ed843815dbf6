use crate::foundation::error::{ScrollyteError, ScrollyteResult};

/// Damped-spring parameters for the progress smoothing stage.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Spring stiffness (restoring force per unit displacement).
    pub stiffness: f64,
    /// Damping coefficient (force per unit velocity).
    pub damping: f64,
    /// Attached mass.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Displacement/velocity threshold below which the filter snaps to its
    /// target and reports settled.
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_delta() -> f64 {
    0.001
}

impl SpringConfig {
    /// The contact-form smoothing spring: stiffness 100, damping 30,
    /// rest delta 0.001.
    pub fn contact_form() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
        }
    }

    /// Check config invariants.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if !(self.stiffness > 0.0 && self.stiffness.is_finite()) {
            return Err(ScrollyteError::validation("spring stiffness must be > 0"));
        }
        if !(self.damping >= 0.0 && self.damping.is_finite()) {
            return Err(ScrollyteError::validation("spring damping must be >= 0"));
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(ScrollyteError::validation("spring mass must be > 0"));
        }
        if !(self.rest_delta > 0.0 && self.rest_delta.is_finite()) {
            return Err(ScrollyteError::validation("spring rest_delta must be > 0"));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::contact_form()
    }
}

/// Low-pass filter that approaches a moving target like a damped spring.
///
/// Updated once per animation tick, not per scroll event, so rapid scroll
/// deltas never produce discontinuous jumps in dependent channels.
/// Retargeting mid-flight keeps the current velocity, so the response stays
/// continuous.
#[derive(Clone, Copy, Debug)]
pub struct SpringFilter {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

// Integration substep in seconds. Semi-implicit Euler is stable for the
// stiffness range we ship, but only at small steps; a 1 ms substep keeps a
// dropped-frame dt (100 ms+) from exploding the integration.
const SUBSTEP_SECS: f64 = 0.001;

impl SpringFilter {
    /// Create a filter at rest at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> ScrollyteResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        })
    }

    /// Retarget without resetting velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current filtered value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the filter has reached its target within `rest_delta`.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_delta
    }

    /// Advance the filter by `dt` seconds and return the new value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let displacement = self.target - self.value;
            let accel = (self.config.stiffness * displacement
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
