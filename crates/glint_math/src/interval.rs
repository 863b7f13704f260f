use crate::EPSILON;

/// A closed range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Every parameter in front of a ray origin: [EPSILON, +inf).
    pub const FORWARD: Interval = Interval {
        min: EPSILON,
        max: f64::INFINITY,
    };

    /// Forward parameters strictly closer than `distance`, used for
    /// occlusion tests against a light at a known distance.
    pub fn forward_until(distance: f64) -> Interval {
        Interval::new(EPSILON, distance)
    }

    /// The unit interval, used for color clamping.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
