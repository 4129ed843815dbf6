/// Derives a scroll velocity (px/s) from successive `(scroll_y, t)` samples.
///
/// The sign latches: while the measured velocity is zero the last non-zero
/// sign is kept (initially `+1`), so velocity-coupled consumers keep their
/// direction when the page comes to rest.
#[derive(Clone, Copy, Debug)]
pub struct ScrollVelocityTracker {
    last: Option<(f64, f64)>, // (scroll_y, t_secs)
    velocity: f64,
    sign: f64,
}

impl Default for ScrollVelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollVelocityTracker {
    /// Create a tracker at rest with a latched `+1` sign.
    pub fn new() -> Self {
        Self {
            last: None,
            velocity: 0.0,
            sign: 1.0,
        }
    }

    /// Feed one sample. Samples with a non-advancing clock are ignored.
    pub fn sample(&mut self, scroll_y: f64, t_secs: f64) {
        if let Some((last_y, last_t)) = self.last {
            if t_secs <= last_t {
                return;
            }
            self.velocity = (scroll_y - last_y) / (t_secs - last_t);
            if self.velocity != 0.0 {
                self.sign = self.velocity.signum();
            }
        }
        self.last = Some((scroll_y, t_secs));
    }

    /// Most recent velocity in px/s.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Latched direction sign, `+1` or `-1`.
    pub fn sign(&self) -> f64 {
        self.sign
    }
}
