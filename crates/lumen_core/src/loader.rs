//! Scene file loading.
//!
//! Scenes are stored as JSON documents matching [`SceneDescription`].
//! Loading checks references between spheres and materials; parameter
//! ranges (fuzz, index of refraction, radius) are checked by the renderer
//! when it constructs the actual objects.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {sphere} references unknown material '{material}'")]
    UnknownMaterial { sphere: usize, material: String },

    #[error("Material names must not be empty")]
    EmptyMaterialName,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
///
/// If the document has no name, the file stem is used.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&contents)?;

    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.name = stem.to_string_lossy().into_owned();
        }
    }

    log::info!(
        "Loaded scene '{}' from {}: {} spheres, {} materials",
        scene.name,
        path.display(),
        scene.sphere_count(),
        scene.material_count()
    );

    Ok(scene)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    validate(&scene)?;
    Ok(scene)
}

/// Check that every sphere references a defined material.
pub fn validate(scene: &SceneDescription) -> LoadResult<()> {
    if scene.materials.keys().any(|name| name.is_empty()) {
        return Err(LoadError::EmptyMaterialName);
    }

    for (index, sphere) in scene.spheres.iter().enumerate() {
        if !scene.materials.contains_key(&sphere.material) {
            return Err(LoadError::UnknownMaterial {
                sphere: index,
                material: sphere.material.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::BuiltinScene;
    use crate::scene::MaterialDescription;

    const TWO_SPHERES: &str = r#"{
        "name": "two",
        "camera": {"vfov": 90.0},
        "materials": {
            "ground": {"type": "lambertian", "albedo": [0.8, 0.8, 0.0]},
            "glass": {"type": "dielectric", "ior": 1.5}
        },
        "spheres": [
            {"center": [0, -100.5, -1], "radius": 100, "material": "ground"},
            {"center": [0, 0, -1], "radius": 0.5, "material": "glass"}
        ]
    }"#;

    #[test]
    fn test_load_from_str() {
        let scene = load_scene_from_str(TWO_SPHERES).unwrap();
        assert_eq!(scene.name, "two");
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(
            scene.get_material("glass"),
            Some(&MaterialDescription::Dielectric { ior: 1.5 })
        );
        assert_eq!(scene.spheres[0].radius, 100.0);
    }

    #[test]
    fn test_empty_document_is_empty_scene() {
        let scene = load_scene_from_str("{}").unwrap();
        assert_eq!(scene.sphere_count(), 0);
        assert_eq!(scene.material_count(), 0);
    }

    #[test]
    fn test_unknown_material() {
        let json = r#"{
            "spheres": [{"center": [0, 0, -1], "radius": 0.5, "material": "chrome"}]
        }"#;
        match load_scene_from_str(json) {
            Err(LoadError::UnknownMaterial { sphere, material }) => {
                assert_eq!(sphere, 0);
                assert_eq!(material, "chrome");
            }
            other => panic!("expected UnknownMaterial, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_material_name() {
        let json = r#"{"materials": {"": {"type": "dielectric", "ior": 1.5}}}"#;
        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::EmptyMaterialName)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_scene_from_str("{\"spheres\": [}"),
            Err(LoadError::Json(_))
        ));
        let unknown_kind = r#"{"materials": {"m": {"type": "plasma"}}}"#;
        assert!(matches!(load_scene_from_str(unknown_kind), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene("definitely/not/a/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_file_roundtrip_uses_stem_as_name() {
        let mut scene = BuiltinScene::Materials.build();
        scene.name.clear();

        let path = std::env::temp_dir().join(format!("lumen_loader_{}.json", std::process::id()));
        fs::write(&path, scene.to_json_pretty().unwrap()).unwrap();
        let loaded = load_scene(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        assert_eq!(loaded.name, stem);
        assert_eq!(loaded.spheres, scene.spheres);
        assert_eq!(loaded.materials, scene.materials);
    }
}
