//! Lumen math types.
//!
//! Vectors are glam's double precision `DVec3`. `Point3` and `Color` are
//! aliases over the same representation so positions, directions and
//! radiance share one set of operators.

// Re-export glam for convenience
pub use glam::DVec3;

mod error;
mod interval;
mod random;
mod ray;
mod vec;

pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use random::{
    gen_f64, gen_range_f64, random_in_unit_disk, random_in_unit_sphere, random_unit_vector,
    random_vec, random_vec_range,
};
pub use ray::Ray;
pub use vec::{near_zero, reflect, refract, try_unit_vector, unit_vector, NEAR_ZERO_EPSILON};

/// Direction or offset in 3D space.
pub type Vec3 = DVec3;

/// Position in 3D space.
pub type Point3 = DVec3;

/// Linear RGB color, one channel per component.
pub type Color = DVec3;
