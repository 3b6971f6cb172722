//! Camera for ray generation.

use crate::error::{ConfigError, ConfigResult};
use lumen_math::{near_zero, random_in_unit_disk, unit_vector, Interval, Point3, Ray, Vec3};
use rand::RngCore;

/// Accepted vertical field of view in degrees, exclusive at both ends.
const VFOV_RANGE: Interval = Interval::new(0.0, 180.0);

/// Camera placement and lens settings.
///
/// Configure with the `with_*` methods, then call [`CameraSettings::build`]
/// to derive an immutable [`Camera`].
#[derive(Debug, Clone)]
pub struct CameraSettings {
    // Camera positioning
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,

    // Lens settings
    vfov: f64,         // Vertical field of view in degrees
    aspect_ratio: f64, // Viewport width / height
    aperture: f64,     // Lens diameter
    focus_dist: f64,   // Distance from camera to plane of perfect focus
}

impl CameraSettings {
    /// Create camera settings with default values: at the origin looking
    /// down -Z, 90 degree field of view, 16:9, pinhole lens.
    pub fn new() -> Self {
        Self {
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view (degrees) and aspect ratio.
    pub fn with_view(mut self, vfov: f64, aspect_ratio: f64) -> Self {
        self.vfov = vfov;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, aperture: f64, focus_dist: f64) -> Self {
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Derive the camera.
    pub fn build(&self) -> ConfigResult<Camera> {
        self.validate()?;

        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = unit_vector(self.look_from - self.look_at);
        let u = unit_vector(self.vup.cross(w));
        let v = w.cross(u);

        let origin = self.look_from;
        let horizontal = self.focus_dist * viewport_width * u;
        let vertical = self.focus_dist * viewport_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - self.focus_dist * w;

        Ok(Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: self.aperture / 2.0,
        })
    }

    fn validate(&self) -> ConfigResult<()> {
        let invalid = |msg: String| Err(ConfigError::InvalidCamera(msg));

        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite()) {
            return invalid("position vectors must be finite".into());
        }
        if !VFOV_RANGE.surrounds(self.vfov) {
            return invalid(format!("vfov {} must be in (0, 180) degrees", self.vfov));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return invalid(format!("aspect ratio {} must be > 0", self.aspect_ratio));
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return invalid(format!("aperture {} must be >= 0", self.aperture));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return invalid(format!("focus distance {} must be > 0", self.focus_dist));
        }

        let view = self.look_from - self.look_at;
        if near_zero(view) {
            return invalid("look_from and look_at must differ".into());
        }
        if near_zero(self.vup.cross(view)) {
            return invalid("vup must not be parallel to the view direction".into());
        }

        Ok(())
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera for generating rays into the scene.
///
/// Immutable once built, so one instance can be shared by every render
/// thread.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Generate a ray through normalized image coordinates.
    ///
    /// `(s, t) = (0, 0)` is the bottom-left corner of the image and `(1, 1)`
    /// the top-right. With a non-zero aperture the origin is jittered across
    /// the lens while the ray still passes through the same point on the
    /// focus plane.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }

    /// Orthonormal camera basis `(u, v, w)`: right, up, and backward.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}
