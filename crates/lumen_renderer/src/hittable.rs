//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record, orienting the normal against the incoming ray.
    ///
    /// `outward_normal` must be unit length and point out of the surface.
    pub fn new(
        ray: &Ray,
        p: Point3,
        t: f64,
        outward_normal: Vec3,
        material: &'a dyn Material,
    ) -> Self {
        let (front_face, normal) = face_normal(ray, outward_normal);
        Self {
            p,
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// Decide which side of the surface the ray hit.
///
/// Returns `(front_face, normal)` with the normal flipped to oppose the ray.
#[inline]
fn face_normal(ray: &Ray, outward_normal: Vec3) -> (bool, Vec3) {
    // If the ray and normal point in the same direction, we're inside
    let front_face = ray.direction().dot(outward_normal) < 0.0;
    let normal = if front_face {
        outward_normal
    } else {
        -outward_normal
    };
    (front_face, normal)
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection with parameter t inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// A list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
