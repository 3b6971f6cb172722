//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    error::{ConfigError, ConfigResult},
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Point3, Ray};

/// A sphere primitive.
///
/// A negative radius keeps the same surface but turns the normals inward,
/// which models the inner wall of a hollow shell.
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails if the radius is zero or non-finite, or the center is
    /// non-finite.
    pub fn new(center: Point3, radius: f64, material: Arc<dyn Material>) -> ConfigResult<Self> {
        if !center.is_finite() {
            return Err(ConfigError::InvalidCenter(center.to_array()));
        }
        if !radius.is_finite() || radius == 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Half-b form of the quadratic |origin + t*dir - center|^2 = r^2
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (h + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(ray, p, root, outward_normal, self.material.as_ref()))
    }
}
