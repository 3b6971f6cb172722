//! Random sampling.
//!
//! Every sampler takes the generator explicitly so callers control seeding
//! and no state is shared between threads.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform sample in [min, max).
#[inline]
pub fn gen_range_f64(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Vector with each component uniform in [0, 1).
pub fn random_vec(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Vector with each component uniform in [min, max).
pub fn random_vec_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_range_f64(rng, min, max),
        gen_range_f64(rng, min, max),
        gen_range_f64(rng, min, max),
    )
}

/// Uniform point strictly inside the unit ball (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform direction on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        let len_sq = p.length_squared();
        // A sample at the exact centre has no direction
        if len_sq > 0.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// Uniform point inside the unit disk in the XY plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f64(rng, -1.0, 1.0),
            gen_range_f64(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
