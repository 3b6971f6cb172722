//! Simple ray tracer example.
//!
//! Builds the three-material scene by hand and saves it in PPM format.

use std::sync::Arc;

use lumen_renderer::{
    render, CameraSettings, Color, Dielectric, HittableList, Lambertian, Material, Metal, Point3,
    RenderConfig, Sphere, Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = std::time::Instant::now();
    let world = build_scene()?;
    log::info!("Scene with {} spheres built in {:?}", world.len(), start.elapsed());

    let config = RenderConfig {
        image_width: 400,
        image_height: 225,
        samples_per_pixel: 50,
        max_depth: 10,
        ..Default::default()
    };

    let look_from = Point3::new(-2.0, 2.0, 1.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let camera = CameraSettings::new()
        .with_position(look_from, look_at, Vec3::Y)
        .with_view(30.0, config.aspect_ratio())
        .with_lens(0.1, (look_from - look_at).length())
        .build()?;

    let image = render(&camera, &world, &config)?;
    image.save("output.ppm")?;

    Ok(())
}

fn build_scene() -> Result<HittableList, Box<dyn std::error::Error>> {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))?);
    let center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5))?);
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5)?);
    let gold: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3)?);

    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground)?));
    world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, center)?));

    // Hollow glass: outer surface plus an inward-facing inner surface
    world.add(Box::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, glass.clone())?));
    world.add(Box::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), -0.45, glass)?));

    world.add(Box::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, gold)?));

    Ok(world)
}
