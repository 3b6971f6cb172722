//! Lumen Renderer - CPU ray tracing.
//!
//! A Monte Carlo ray tracer for spheres with diffuse, metal and glass
//! materials under a sky gradient.
//!
//! The two entry points that produce values are [`Camera::get_ray`] and
//! [`ray_color`]; the bucket driver and [`ImageBuffer`] turn those into an
//! image.

mod bucket;
mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod renderer;
mod sphere;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraSettings};
pub use error::{ConfigError, ConfigResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{color_to_rgb8, linear_to_gamma, ImageBuffer};
pub use renderer::{
    pixel_seed, ray_color, render, render_pixel, render_pixel_seeded, render_sequential,
    sky_gradient, RenderConfig, SHADOW_ACNE_EPSILON,
};
pub use sphere::Sphere;
pub use world::{build_camera, build_material, build_world};

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
