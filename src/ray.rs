//! Ray representation for intersection queries.
//!
//! A ray is defined as r(t) = origin + t * direction, a half-line in 3D space
//! used to probe the scene.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. A zero-length direction is a degenerate
    /// ray and never intersects anything.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }

    /// True when the direction has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.direction.length_squared() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_scales_unnormalized_direction() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, 2.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(1.5), Vec3A::new(1.0, 2.0, 6.0));
        assert_eq!(r.at(-1.0), Vec3A::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn zero_direction_is_degenerate() {
        assert!(Ray::new(Vec3A::ONE, Vec3A::ZERO).is_degenerate());
        assert!(!Ray::new(Vec3A::ONE, Vec3A::X).is_degenerate());
    }
}
