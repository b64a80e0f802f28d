//! Intervals over the ray parameter.
//!
//! An [`Interval`] bounds the accepted `t` values of an intersection query.
//! Hit tests use the strict [`Interval::surrounds`] check, so a root sitting
//! exactly on either bound is rejected.

/// Open range `(min, max)` of accepted ray parameters.
///
/// Both bounds are exclusive for hit tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound (exclusive)
    pub min: f32,
    /// Upper bound (exclusive)
    pub max: f32,
}

impl Interval {
    /// Interval containing every real number.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Exclusive membership test, `min < x < max`.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}
