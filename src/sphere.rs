//! Sphere primitive.
//!
//! Implements ray-sphere intersection with the half-b form of the quadratic
//! formula, solved in double precision.

use std::sync::Arc;

use glam::Vec3A;
use log::warn;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    center: Vec3A,

    /// Radius of the sphere, never negative.
    radius: f32,

    /// Material shared with every record this sphere produces.
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative (or NaN) radius values are clamped to 0.0, giving a point
    /// sphere that is never hit.
    pub fn new(center: Vec3A, radius: f32, material: Arc<Material>) -> Self {
        if radius.is_nan() || radius < 0.0 {
            warn!("sphere at {center} has radius {radius}, clamping to 0");
        }
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Center point in world coordinates.
    pub fn center(&self) -> Vec3A {
        self.center
    }

    /// Radius after clamping.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Shared material handle.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Degenerate sphere: no surface to hit and no normal to compute.
        if self.radius == 0.0 {
            return None;
        }

        // Solve in f64: |oc|² - r² cancels badly in f32 for small, distant spheres.
        let origin = r.origin.as_dvec3();
        let direction = r.direction.as_dvec3();
        let radius = f64::from(self.radius);

        // Vector from ray origin to sphere center
        let oc = self.center.as_dvec3() - origin;

        // Half-b quadratic coefficients
        let a = direction.length_squared();
        if a == 0.0 {
            return None;
        }
        let h = direction.dot(oc);
        let c = oc.length_squared() - radius * radius;

        // Calculate discriminant
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = ((h - sqrtd) / a) as f32;
        if !ray_t.surrounds(root) {
            root = ((h + sqrtd) / a) as f32;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        // Fill the hit record; renormalize since the f32 hit point is only near the surface
        let outward_normal = (r.at(root) - self.center).try_normalize()?;
        Some(HitRecord::new(r, root, outward_normal, &self.material))
    }
}
