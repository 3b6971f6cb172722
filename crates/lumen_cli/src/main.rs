use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lumen_core::{load_scene, BuiltinScene, SceneDescription};
use lumen_renderer::{build_camera, build_world, render, render_sequential, RenderConfig};

/// Built-in scene selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum SceneArg {
    /// One diffuse sphere on a ground sphere
    TwoSpheres,
    /// Diffuse, hollow glass and metal spheres with defocus blur
    Materials,
    /// Hundreds of random small spheres around three large ones
    #[default]
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "lumen", version, about = "Monte Carlo sphere ray tracer")]
struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Built-in scene to render
    scene: SceneArg,

    #[arg(long)]
    /// JSON scene description to render instead of a built-in scene
    scene_file: Option<PathBuf>,

    #[arg(long, default_value_t = 400)]
    /// Image width in pixels
    width: u32,

    #[arg(long)]
    /// Image height in pixels (defaults to a 16:9 frame)
    height: Option<u32>,

    #[arg(long = "spp", default_value_t = 100)]
    /// Samples per pixel
    samples_per_pixel: u32,

    #[arg(long, default_value_t = 50)]
    /// Maximum number of bounces per path
    max_depth: u32,

    #[arg(long, default_value_t)]
    /// Seed for every random decision. Given a seed, the output only depends
    /// on the scene and image settings, not on the thread count.
    seed: u64,

    #[arg(long, default_value_t = lumen_renderer::DEFAULT_BUCKET_SIZE)]
    /// Edge length of the tiles rendered in parallel
    bucket_size: u32,

    #[arg(long, default_value_t = 0)]
    /// Worker threads (0 = one per core)
    threads: usize,

    #[arg(long)]
    /// Render on the calling thread only
    sequential: bool,

    #[arg(short, long, default_value = "image.ppm")]
    /// Output image; `.ppm` writes text PPM, other extensions use the image encoder
    output: PathBuf,

    #[arg(long)]
    /// Write the scene description as JSON to this path and exit
    dump_scene: Option<PathBuf>,
}

impl Args {
    fn image_height(&self) -> u32 {
        self.height
            .unwrap_or_else(|| (self.width as u64 * 9 / 16) as u32)
            .max(1)
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            image_height: self.image_height(),
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            seed: self.seed,
            bucket_size: self.bucket_size,
        }
    }

    fn load_scene(&self) -> Result<SceneDescription> {
        if let Some(path) = &self.scene_file {
            return load_scene(path)
                .with_context(|| format!("failed to load scene {}", path.display()));
        }

        let builtin = match self.scene {
            SceneArg::TwoSpheres => BuiltinScene::TwoSpheres,
            SceneArg::Materials => BuiltinScene::Materials,
            SceneArg::Random => BuiltinScene::RandomSpheres { seed: self.seed },
        };
        log::info!("Using built-in scene '{}'", builtin.name());
        Ok(builtin.build())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = args.load_scene()?;

    if let Some(path) = &args.dump_scene {
        let json = scene.to_json_pretty().context("failed to serialize scene")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote scene '{}' to {}", scene.name, path.display());
        return Ok(());
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let config = args.render_config();
    config.validate()?;

    let start = Instant::now();
    let world = build_world(&scene).context("invalid scene")?;
    let camera = build_camera(&scene.camera, config.aspect_ratio()).context("invalid camera")?;
    log::info!(
        "Scene '{}': {} spheres, {} materials (built in {:?})",
        scene.name,
        world.len(),
        scene.material_count(),
        start.elapsed()
    );

    let image = if args.sequential {
        render_sequential(&camera, &world, &config)?
    } else {
        render(&camera, &world, &config)?
    };

    image
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lumen"]).unwrap();
        assert_eq!(args.scene, SceneArg::Random);
        assert_eq!(args.width, 400);
        assert_eq!(args.image_height(), 225);
        assert_eq!(args.output, PathBuf::from("image.ppm"));

        let config = args.render_config();
        assert_eq!(config.samples_per_pixel, 100);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.bucket_size, lumen_renderer::DEFAULT_BUCKET_SIZE);
    }

    #[test]
    fn test_explicit_settings() {
        let args = Args::try_parse_from([
            "lumen",
            "--scene",
            "two-spheres",
            "--width",
            "20",
            "--height",
            "10",
            "--spp",
            "4",
            "--max-depth",
            "10",
            "--seed",
            "7",
            "-o",
            "out.png",
        ])
        .unwrap();

        assert_eq!(args.scene, SceneArg::TwoSpheres);
        let config = args.render_config();
        assert_eq!((config.image_width, config.image_height), (20, 10));
        assert_eq!(config.samples_per_pixel, 4);
        assert_eq!(config.seed, 7);

        let scene = args.load_scene().unwrap();
        assert_eq!(scene.name, "two_spheres");
    }

    #[test]
    fn test_tiny_width_keeps_one_row() {
        let args = Args::try_parse_from(["lumen", "--width", "1"]).unwrap();
        assert_eq!(args.image_height(), 1);
    }

    #[test]
    fn test_missing_scene_file() {
        let args = Args::try_parse_from(["lumen", "--scene-file", "nope/scene.json"]).unwrap();
        let err = args.load_scene().unwrap_err();
        assert!(err.to_string().contains("nope/scene.json"));
    }

    #[test]
    fn test_unknown_scene_rejected() {
        assert!(Args::try_parse_from(["lumen", "--scene", "cornell"]).is_err());
    }
}
