//! Built-in demo scenes.

use lumen_math::{gen_f64, gen_range_f64, random_vec, random_vec_range, Color, Point3, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::scene::{CameraDescription, MaterialDescription, SceneDescription, SphereDescription};

/// The demo scenes shipped with Lumen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinScene {
    /// A small diffuse sphere resting on a large ground sphere
    TwoSpheres,
    /// Diffuse, hollow glass and metal spheres side by side, with defocus blur
    Materials,
    /// A field of small random spheres around three large ones
    RandomSpheres { seed: u64 },
}

impl BuiltinScene {
    /// Build the scene description.
    pub fn build(&self) -> SceneDescription {
        match *self {
            BuiltinScene::TwoSpheres => two_spheres(),
            BuiltinScene::Materials => materials(),
            BuiltinScene::RandomSpheres { seed } => random_spheres(seed),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinScene::TwoSpheres => "two_spheres",
            BuiltinScene::Materials => "materials",
            BuiltinScene::RandomSpheres { .. } => "random_spheres",
        }
    }
}

fn lambertian(albedo: Color) -> MaterialDescription {
    MaterialDescription::Lambertian { albedo }
}

fn two_spheres() -> SceneDescription {
    let mut scene = SceneDescription::new("two_spheres");
    scene.add_material("grey", lambertian(Color::splat(0.5)));
    scene.add_sphere(SphereDescription::new(Point3::new(0.0, -100.5, -1.0), 100.0, "grey"));
    scene.add_sphere(SphereDescription::new(Point3::new(0.0, 0.0, -1.0), 0.5, "grey"));
    scene
}

fn materials() -> SceneDescription {
    let look_from = Point3::new(3.0, 3.0, 2.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let camera = CameraDescription {
        look_from,
        look_at,
        vup: Vec3::Y,
        vfov: 20.0,
        aperture: 2.0,
        focus_dist: (look_from - look_at).length(),
    };

    let mut scene = SceneDescription::new("materials").with_camera(camera);
    scene.add_material("ground", lambertian(Color::new(0.8, 0.8, 0.0)));
    scene.add_material("center", lambertian(Color::new(0.1, 0.2, 0.5)));
    scene.add_material("glass", MaterialDescription::Dielectric { ior: 1.5 });
    scene.add_material(
        "gold",
        MaterialDescription::Metal {
            albedo: Color::new(0.8, 0.6, 0.2),
            fuzz: 0.0,
        },
    );

    scene.add_sphere(SphereDescription::new(Point3::new(0.0, -100.5, -1.0), 100.0, "ground"));
    scene.add_sphere(SphereDescription::new(Point3::new(0.0, 0.0, -1.0), 0.5, "center"));
    scene.add_sphere(SphereDescription::new(Point3::new(-1.0, 0.0, -1.0), 0.5, "glass"));
    // Inner surface of the hollow glass ball
    scene.add_sphere(SphereDescription::new(Point3::new(-1.0, 0.0, -1.0), -0.4, "glass"));
    scene.add_sphere(SphereDescription::new(Point3::new(1.0, 0.0, -1.0), 0.5, "gold"));
    scene
}

fn random_spheres(seed: u64) -> SceneDescription {
    let camera = CameraDescription {
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::ZERO,
        vup: Vec3::Y,
        vfov: 20.0,
        aperture: 0.1,
        focus_dist: 10.0,
    };

    let mut scene = SceneDescription::new("random_spheres").with_camera(camera);
    let mut rng = StdRng::seed_from_u64(seed);

    scene.add_material("ground", lambertian(Color::splat(0.5)));
    scene.add_sphere(SphereDescription::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, "ground"));

    // Every small glass sphere shares one material
    scene.add_material("glass", MaterialDescription::Dielectric { ior: 1.5 });

    let keep_clear = Point3::new(4.0, 0.2, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(&mut rng);
            let center = Point3::new(
                a as f64 + 0.9 * gen_f64(&mut rng),
                0.2,
                b as f64 + 0.9 * gen_f64(&mut rng),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let name = if choose_mat < 0.8 {
                let albedo = random_vec(&mut rng) * random_vec(&mut rng);
                let name = format!("diffuse_{a}_{b}");
                scene.add_material(name.clone(), lambertian(albedo));
                name
            } else if choose_mat < 0.95 {
                let albedo = random_vec_range(&mut rng, 0.5, 1.0);
                let fuzz = gen_range_f64(&mut rng, 0.0, 0.5);
                let name = format!("metal_{a}_{b}");
                scene.add_material(name.clone(), MaterialDescription::Metal { albedo, fuzz });
                name
            } else {
                "glass".to_string()
            };

            scene.add_sphere(SphereDescription::new(center, 0.2, name));
        }
    }

    scene.add_material("brown", lambertian(Color::new(0.4, 0.2, 0.1)));
    scene.add_material(
        "steel",
        MaterialDescription::Metal {
            albedo: Color::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    );
    scene.add_sphere(SphereDescription::new(Point3::new(0.0, 1.0, 0.0), 1.0, "glass"));
    scene.add_sphere(SphereDescription::new(Point3::new(-4.0, 1.0, 0.0), 1.0, "brown"));
    scene.add_sphere(SphereDescription::new(Point3::new(4.0, 1.0, 0.0), 1.0, "steel"));

    scene
}
