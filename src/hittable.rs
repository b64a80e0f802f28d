//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, HitRecord for
//! intersection data, and HittableList for nearest-hit selection over a scene.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and material data
/// needed for shading calculations.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Surface normal at the intersection point (unit vector, against the ray)
    pub normal: Vec3A,
    /// Material of the object at the hit point
    pub material: &'a Material,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record for a hit at `t`, orienting `outward_normal` against the ray.
    ///
    /// `outward_normal` must have unit length.
    pub fn new(r: &Ray, t: f32, outward_normal: Vec3A, material: &'a Material) -> Self {
        let mut rec = Self {
            p: r.at(t),
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    /// Set surface normal and determine front/back face.
    ///
    /// Ensures normal always points against the incident ray.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3A) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so independent rays can be tested from
/// several threads against the same scene.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection strictly inside `ray_t`.
    ///
    /// Returns `None` when nothing is hit in range.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing.
#[derive(Default)]
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let closest_so_far = closest.as_ref().map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}
