//! Render one of the built-in scenes to a PNG.
//!
//! Usage: `lumen_demo [scene] [output.png] [settings.json]`
//!
//! A settings file, if given, replaces the scene's camera settings.

mod scenes;

use anyhow::{bail, Context, Result};
use lumen_renderer::{render, CameraSettings, Framebuffer};
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_SCENE: &str = "three-spheres";
const DEFAULT_OUTPUT: &str = "output.png";
const SCENE_SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let scene_name = args.next().unwrap_or_else(|| DEFAULT_SCENE.to_string());
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));
    let settings_path = args.next().map(PathBuf::from);

    let start = Instant::now();
    let Some((scene_settings, world)) = scenes::load(&scene_name, SCENE_SEED) else {
        bail!(
            "Unknown scene '{}', expected one of: {}",
            scene_name,
            scenes::SCENE_NAMES.join(", ")
        );
    };
    log::info!("Built scene '{}' with {} objects in {:?}", scene_name, world.len(), start.elapsed());

    let settings = match settings_path {
        Some(path) => load_settings(&path)?,
        None => scene_settings,
    };
    let camera = settings.build().context("Invalid camera settings")?;

    let image = render(&camera, &world);

    save_png(&image, &output)?;
    log::info!("Saved to {}", output.display());

    Ok(())
}

fn load_settings(path: &Path) -> Result<CameraSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    log::info!("Loaded camera settings from {}", path.display());
    Ok(settings)
}

fn save_png(image: &Framebuffer, path: &Path) -> Result<()> {
    let buffer = image::RgbaImage::from_raw(image.width(), image.height(), image.to_rgba8())
        .context("Framebuffer size does not match its pixel data")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
