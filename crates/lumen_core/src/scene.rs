//! Scene description types for Lumen.
//!
//! This module defines a renderer-agnostic description of a scene: named
//! materials, spheres that reference them by name, and a camera. The
//! renderer turns a description into hittable objects; this crate only
//! checks that the description is structurally sound.

use std::collections::BTreeMap;

use lumen_math::{Color, Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Surface material parameters.
///
/// Serialized with a `type` tag, e.g.
/// `{"type": "metal", "albedo": [0.8, 0.6, 0.2], "fuzz": 0.1}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Ideal diffuse reflector
    Lambertian { albedo: Color },

    /// Mirror reflector, blurred by `fuzz` (0 = perfect mirror)
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f64,
    },

    /// Clear refractive material such as glass or water
    Dielectric { ior: f64 },
}

impl MaterialDescription {
    /// Short lowercase name of the material kind.
    pub fn kind(&self) -> &'static str {
        match self {
            MaterialDescription::Lambertian { .. } => "lambertian",
            MaterialDescription::Metal { .. } => "metal",
            MaterialDescription::Dielectric { .. } => "dielectric",
        }
    }
}

/// A sphere referencing a material by name.
///
/// A negative radius is valid and produces a sphere whose normals point
/// inward, which is how hollow glass is modelled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Point3,
    pub radius: f64,
    pub material: String,
}

impl SphereDescription {
    pub fn new(center: Point3, radius: f64, material: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// Camera placement and lens.
///
/// The aspect ratio is not part of the description; it follows the output
/// image dimensions chosen at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Lens diameter; 0 disables depth of field
    pub aperture: f64,
    /// Distance from the lens to the plane in perfect focus
    pub focus_dist: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

/// A complete scene: camera, materials and spheres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (built-in scene name or file stem)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub camera: CameraDescription,

    /// Materials keyed by name
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the camera.
    pub fn with_camera(mut self, camera: CameraDescription) -> Self {
        self.camera = camera;
        self
    }

    /// Add or replace a named material.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDescription) {
        self.materials.insert(name.into(), material);
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, sphere: SphereDescription) {
        self.spheres.push(sphere);
    }

    /// Get a material by name.
    pub fn get_material(&self, name: &str) -> Option<&MaterialDescription> {
        self.materials.get(name)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
