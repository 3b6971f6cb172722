use crate::{Point3, Vec3};

/// A ray in 3D space with origin and direction.
///
/// The direction is not normalized; `t` values returned by intersection
/// tests are measured in units of its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Point3::ZERO,
            direction: -Vec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Point3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_at_matches_formula() {
        let ray = Ray::new(Point3::new(0.3, -1.7, 2.2), Vec3::new(-0.9, 0.25, 4.5));
        for t in [-3.5, 0.0, 0.001, 1.0, 17.25, 1e6] {
            assert_eq!(ray.at(t), ray.origin + t * ray.direction);
        }
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Point3::ZERO, Vec3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
