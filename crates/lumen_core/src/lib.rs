//! Lumen Core - scene descriptions for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `MaterialDescription`,
//!   `SphereDescription`, `CameraDescription`
//! - **JSON loading**: `load_scene` with reference validation
//! - **Demo scenes**: `BuiltinScene`
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{load_scene, BuiltinScene};
//!
//! let scene = load_scene("scene.json")?;
//! let demo = BuiltinScene::RandomSpheres { seed: 7 }.build();
//! println!("{} spheres", scene.sphere_count() + demo.sphere_count());
//! ```

pub mod builtin;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use builtin::BuiltinScene;
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{CameraDescription, MaterialDescription, SceneDescription, SphereDescription};
