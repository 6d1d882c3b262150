#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseInOut,
}

impl Curve {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A value moving from `from` to `to` over `duration` time units starting at
/// `start`. Times are in splash time units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f64,
    to: f64,
    start: f64,
    duration: f64,
    curve: Curve,
}

impl Animation {
    pub fn still(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            curve: Curve::Linear,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn sample(&self, t: f64) -> f64 {
        if t <= self.start {
            return self.from;
        }
        if self.duration <= 0.0 || t >= self.start + self.duration {
            return self.to;
        }
        let progress = self.curve.apply((t - self.start) / self.duration);
        self.from + (self.to - self.from) * progress
    }

    /// Starts moving toward `to` from wherever the value is at `start`, so an
    /// interrupted animation continues without a jump.
    pub fn retarget(&mut self, to: f64, start: f64, duration: f64, curve: Curve) {
        *self = Self {
            from: self.sample(start),
            to,
            start,
            duration,
            curve,
        };
    }
}
