//! Core ray tracing renderer.
//!
//! Implements Monte Carlo ray tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Per-pixel random streams, so output depends only on the seed

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::error::{ConfigError, ConfigResult};
use crate::output::ImageBuffer;
use crate::{Camera, Hittable};
use lumen_math::{gen_f64, unit_vector, Color, Interval, Ray};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Lower bound of the hit interval for every traced ray. Rays leave
/// surfaces from the hit point, so `t` near zero would re-hit the same
/// surface through rounding error (shadow acne).
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub image_width: u32,
    /// Output image height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for every pixel's random stream
    pub seed: u64,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }

    /// Reject settings that would produce an empty image or divide by zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::InvalidRenderConfig(format!(
                "image size {}x{} must be non-zero",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::InvalidRenderConfig(
                "samples per pixel must be at least 1".into(),
            ));
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::InvalidRenderConfig(
                "bucket size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// This is the core integrator. It traces the ray through the scene,
/// bouncing off surfaces and multiplying in each material's attenuation
/// until the ray escapes to the sky, is absorbed, or runs out of depth.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded max depth, no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        None => Color::ZERO,
    }
}

/// Vertical white-to-blue background gradient.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Seed for the random stream of pixel (x, y).
///
/// Mixes the base seed and pixel coordinates with splitmix64 so that
/// neighbouring pixels get unrelated streams.
pub fn pixel_seed(seed: u64, x: u32, y: u32) -> u64 {
    let coords = ((y as u64) << 32) | x as u64;
    splitmix64(splitmix64(seed) ^ coords)
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Render a single pixel with multi-sampling.
///
/// Pixel row 0 is the top of the image. Rows past the bottom edge are
/// sampled as the bottom row.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let x_span = config.image_width.saturating_sub(1).max(1) as f64;
    let y_span = config.image_height.saturating_sub(1).max(1) as f64;
    let row_from_bottom = config.image_height.saturating_sub(1).saturating_sub(y) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let s = (x as f64 + gen_f64(rng)) / x_span;
        let t = (row_from_bottom + gen_f64(rng)) / y_span;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Render a pixel with its own seeded random stream.
pub fn render_pixel_seeded(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let mut rng = StdRng::seed_from_u64(pixel_seed(config.seed, x, y));
    render_pixel(camera, world, x, y, config, &mut rng)
}

/// Render the entire scene in parallel, one bucket per task.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    let buckets = generate_buckets(config.image_width, config.image_height, config.bucket_size);
    let total = buckets.len();
    let done = AtomicUsize::new(0);

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} buckets on {} threads",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth,
        total,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, world, config);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Bucket {} done ({finished}/{total})", bucket.index);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render the entire scene on the calling thread, row by row.
///
/// Produces exactly the same image as [`render`].
pub fn render_sequential(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    for y in 0..config.image_height {
        log::debug!("Scanlines remaining: {}", config.image_height - y);
        for x in 0..config.image_width {
            image.set(x, y, render_pixel_seeded(camera, world, x, y, config));
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraSettings, HittableList, Lambertian, Material, Metal, Sphere};
    use lumen_math::{Point3, Vec3};
    use std::sync::Arc;

    fn two_sphere_world() -> HittableList {
        let grey: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.5)).unwrap());
        let mut world = HittableList::new();
        world.add(Box::new(
            Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, grey.clone()).unwrap(),
        ));
        world.add(Box::new(
            Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, grey).unwrap(),
        ));
        world
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            image_width: 20,
            image_height: 10,
            samples_per_pixel: 4,
            max_depth: 10,
            seed: 1234,
            bucket_size: 8,
        }
    }

    #[test]
    fn test_sky_gradient() {
        let up = sky_gradient(&Ray::new(Point3::ZERO, Vec3::Y));
        let down = sky_gradient(&Ray::new(Point3::ZERO, -Vec3::Y));
        let level = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(3.0, 0.0, -4.0)));

        assert_eq!(up, Color::new(0.5, 0.7, 1.0));
        assert_eq!(down, Color::ONE);
        assert!((level - Color::new(0.75, 0.85, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_depth_zero_is_black() {
        let world = two_sphere_world();
        let mut rng = StdRng::seed_from_u64(0);
        for direction in [-Vec3::Z, Vec3::Y, -Vec3::Y, Vec3::new(0.3, 0.2, -1.0)] {
            let ray = Ray::new(Point3::ZERO, direction);
            assert_eq!(ray_color(&ray, &world, 0, &mut rng), Color::ZERO);
        }
        let empty = HittableList::new();
        let ray = Ray::new(Point3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&ray, &empty, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_empty_scene_shows_sky() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.2, 0.5, -1.0));
        assert_eq!(ray_color(&ray, &world, 5, &mut rng), sky_gradient(&ray));
    }

    #[test]
    fn test_single_bounce_mirror_reflects_sky() {
        let mut world = HittableList::new();
        let mirror: Arc<dyn Material> = Arc::new(Metal::new(Color::splat(0.5), 0.0).unwrap());
        world.add(Box::new(
            Sphere::new(Point3::new(0.0, 0.0, -2.0), 1.0, mirror).unwrap(),
        ));
        let mut rng = StdRng::seed_from_u64(0);

        // Head-on hit bounces straight back toward +Z: sky at y = 0, halved
        let ray = Ray::new(Point3::ZERO, -Vec3::Z);
        let color = ray_color(&ray, &world, 2, &mut rng);
        assert!((color - 0.5 * Color::new(0.75, 0.85, 1.0)).length() < 1e-12);

        // With only one bounce left the reflected ray contributes nothing
        assert_eq!(ray_color(&ray, &world, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_pixel_seed_distinct() {
        assert_ne!(pixel_seed(0, 0, 0), pixel_seed(0, 1, 0));
        assert_ne!(pixel_seed(0, 1, 0), pixel_seed(0, 0, 1));
        assert_ne!(pixel_seed(0, 3, 7), pixel_seed(1, 3, 7));
        assert_eq!(pixel_seed(42, 3, 7), pixel_seed(42, 3, 7));
    }

    #[test]
    fn test_render_pixel() {
        let world = two_sphere_world();
        let config = small_config();
        let camera = CameraSettings::new()
            .with_view(90.0, config.aspect_ratio())
            .build()
            .unwrap();

        // Pixels in the middle of the image look at the sphere
        let color = render_pixel_seeded(&camera, &world, 10, 5, &config);
        assert!(color.length() > 0.0);
        assert!(color.max_element() <= 1.0);
    }

    #[test]
    fn test_render_pixel_out_of_range_row() {
        let world = two_sphere_world();
        let config = small_config();
        let camera = CameraSettings::new()
            .with_view(90.0, config.aspect_ratio())
            .build()
            .unwrap();
        let bottom = config.image_height - 1;

        let below = render_pixel(
            &camera,
            &world,
            3,
            config.image_height + 3,
            &config,
            &mut StdRng::seed_from_u64(11),
        );
        let mut rng = StdRng::seed_from_u64(11);
        let last = render_pixel(&camera, &world, 3, bottom, &config, &mut rng);
        assert_eq!(below, last);

        let empty = RenderConfig {
            image_height: 0,
            ..config
        };
        let color = render_pixel(&camera, &world, 0, 0, &empty, &mut StdRng::seed_from_u64(11));
        assert!(color.is_finite());
    }

    #[test]
    fn test_render_is_reproducible() {
        let world = two_sphere_world();
        let config = small_config();
        let camera = CameraSettings::new()
            .with_view(90.0, config.aspect_ratio())
            .build()
            .unwrap();

        let first = render(&camera, &world, &config).unwrap();
        let second = render(&camera, &world, &config).unwrap();
        let sequential = render_sequential(&camera, &world, &config).unwrap();

        assert_eq!(first.width, 20);
        assert_eq!(first.height, 10);
        assert_eq!(first.pixels, second.pixels);
        assert_eq!(first.pixels, sequential.pixels);

        let reseeded = render(&camera, &world, &RenderConfig { seed: 99, ..config }).unwrap();
        assert_ne!(first.pixels, reseeded.pixels);
    }

    #[test]
    fn test_top_row_sees_sky() {
        // Nothing is above the camera, so the top row is pure gradient
        // and bluer than the bottom row, which sees the ground
        let world = two_sphere_world();
        let config = small_config();
        let camera = CameraSettings::new()
            .with_view(90.0, config.aspect_ratio())
            .build()
            .unwrap();
        let image = render(&camera, &world, &config).unwrap();

        let top = image.get(0, 0);
        let bottom = image.get(0, config.image_height - 1);
        assert!(top.z >= top.x);
        assert!(top.x < 1.0);
        assert!(bottom.z < top.z);
    }

    #[test]
    fn test_invalid_config() {
        let world = HittableList::new();
        let camera = CameraSettings::new().build().unwrap();
        for config in [
            RenderConfig {
                image_width: 0,
                ..Default::default()
            },
            RenderConfig {
                image_height: 0,
                ..Default::default()
            },
            RenderConfig {
                samples_per_pixel: 0,
                ..Default::default()
            },
            RenderConfig {
                bucket_size: 0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                render(&camera, &world, &config),
                Err(ConfigError::InvalidRenderConfig(_))
            ));
        }
    }
}
