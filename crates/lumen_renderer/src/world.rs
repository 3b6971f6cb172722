//! Conversion from scene descriptions to renderable objects.

use std::collections::HashMap;
use std::sync::Arc;

use lumen_core::{CameraDescription, MaterialDescription, SceneDescription};

use crate::error::{ConfigError, ConfigResult};
use crate::{Camera, CameraSettings, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};

/// Build a material from its description.
pub fn build_material(description: &MaterialDescription) -> ConfigResult<Arc<dyn Material>> {
    let material: Arc<dyn Material> = match *description {
        MaterialDescription::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)?),
        MaterialDescription::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)?),
        MaterialDescription::Dielectric { ior } => Arc::new(Dielectric::new(ior)?),
    };
    Ok(material)
}

/// Build the hittable world for a scene.
///
/// Each named material is constructed once and shared by every sphere that
/// references it. Invalid parameters fail here, before any ray is traced.
pub fn build_world(scene: &SceneDescription) -> ConfigResult<HittableList> {
    let mut materials: HashMap<&str, Arc<dyn Material>> =
        HashMap::with_capacity(scene.materials.len());
    for (name, description) in &scene.materials {
        materials.insert(name.as_str(), build_material(description)?);
    }

    let mut world = HittableList::new();
    for sphere in &scene.spheres {
        let material = materials
            .get(sphere.material.as_str())
            .ok_or_else(|| ConfigError::UnknownMaterial(sphere.material.clone()))?;
        world.add(Box::new(Sphere::new(sphere.center, sphere.radius, Arc::clone(material))?));
    }

    log::debug!(
        "Built world '{}': {} spheres sharing {} materials",
        scene.name,
        world.len(),
        materials.len()
    );

    Ok(world)
}

/// Build the camera for a scene at the given aspect ratio.
pub fn build_camera(description: &CameraDescription, aspect_ratio: f64) -> ConfigResult<Camera> {
    CameraSettings::new()
        .with_position(description.look_from, description.look_at, description.vup)
        .with_view(description.vfov, aspect_ratio)
        .with_lens(description.aperture, description.focus_dist)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;
    use lumen_core::{BuiltinScene, SphereDescription};
    use lumen_math::{Color, Interval, Point3, Ray, Vec3};

    #[test]
    fn test_build_builtin_worlds() {
        for builtin in [
            BuiltinScene::TwoSpheres,
            BuiltinScene::Materials,
            BuiltinScene::RandomSpheres { seed: 3 },
        ] {
            let scene = builtin.build();
            let world = build_world(&scene).unwrap();
            assert_eq!(world.len(), scene.sphere_count());
            build_camera(&scene.camera, 16.0 / 9.0).unwrap();
        }
    }

    #[test]
    fn test_two_spheres_world_hits() {
        let world = build_world(&BuiltinScene::TwoSpheres.build()).unwrap();
        let ray = Ray::new(Point3::ZERO, -Vec3::Z);
        let rec = world.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_material_rejected() {
        let mut scene = SceneDescription::new("bad");
        scene.add_material(
            "rough",
            MaterialDescription::Metal {
                albedo: Color::ONE,
                fuzz: -0.5,
            },
        );
        assert!(matches!(build_world(&scene), Err(ConfigError::InvalidFuzz(_))));

        let mut scene = SceneDescription::new("bad");
        scene.add_material("glass", MaterialDescription::Dielectric { ior: 0.0 });
        assert!(matches!(build_world(&scene), Err(ConfigError::InvalidIor(_))));
    }

    #[test]
    fn test_invalid_sphere_rejected() {
        let mut scene = BuiltinScene::TwoSpheres.build();
        scene.add_sphere(SphereDescription::new(Point3::ZERO, 0.0, "grey"));
        assert!(matches!(build_world(&scene), Err(ConfigError::InvalidRadius(_))));

        let mut scene = BuiltinScene::TwoSpheres.build();
        scene.add_sphere(SphereDescription::new(Point3::ZERO, 1.0, "missing"));
        assert!(matches!(build_world(&scene), Err(ConfigError::UnknownMaterial(_))));
    }

    #[test]
    fn test_build_camera_rejects_bad_aspect() {
        let description = CameraDescription::default();
        assert!(matches!(
            build_camera(&description, 0.0),
            Err(ConfigError::InvalidCamera(_))
        ));
    }
}
