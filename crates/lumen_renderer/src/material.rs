//! Material trait for surface scattering.

use crate::{
    error::{ConfigError, ConfigResult},
    hittable::HitRecord,
};
use lumen_math::{
    gen_f64, near_zero, random_in_unit_sphere, random_unit_vector, reflect, refract, unit_vector,
    Color, Ray,
};
use rand::RngCore;

/// Outcome of a scattering event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Per-channel factor applied to light arriving along `scattered`
    pub attenuation: Color,
    /// The continuation ray
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

fn check_albedo(albedo: Color) -> ConfigResult<Color> {
    if albedo.is_finite() && albedo.min_element() >= 0.0 {
        Ok(albedo)
    } else {
        Err(ConfigError::InvalidAlbedo(albedo.to_array()))
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> ConfigResult<Self> {
        Ok(Self {
            albedo: check_albedo(albedo)?,
        })
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror. Values above 1.0 are
    ///   clamped to 1.0; negative or non-finite values are rejected.
    pub fn new(albedo: Color, fuzz: f64) -> ConfigResult<Self> {
        if !fuzz.is_finite() || fuzz < 0.0 {
            return Err(ConfigError::InvalidFuzz(fuzz));
        }
        if fuzz > 1.0 {
            log::warn!("Metal fuzz {fuzz} clamped to 1.0");
        }

        Ok(Self {
            albedo: check_albedo(albedo)?,
            fuzz: fuzz.min(1.0),
        })
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
        let direction = if self.fuzz > 0.0 {
            reflected + self.fuzz * random_in_unit_sphere(rng)
        } else {
            reflected
        };

        // Fuzz can push the ray below the surface; treat that as absorbed
        if direction.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, direction),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ior: f64,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f64) -> ConfigResult<Self> {
        if !ior.is_finite() || ior <= 0.0 {
            return Err(ConfigError::InvalidIor(ior));
        }
        Ok(Self { ior })
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f64, refraction_ratio: f64) -> f64 {
        let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let refraction_ratio = if rec.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = unit_vector(ray_in.direction());
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Check for total internal reflection
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > gen_f64(rng)
        {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, refraction_ratio)
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction),
        })
    }
}
