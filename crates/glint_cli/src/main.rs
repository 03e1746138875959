use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{
    color_to_rgb, render_parallel, spawn_render, Color, PixelBuffer, RenderConfig, Scene,
    SceneDescription,
};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Render a sphere scene with recursive Phong ray tracing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output width in pixels
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Trace one ray per pixel instead of a 3x3 grid
    #[arg(long, default_value_t = false)]
    no_antialias: bool,

    /// Render rows on all cores instead of a single background worker
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// JSON scene description; the built-in room is used when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Where to write the rendered image
    #[arg(long, default_value = "render.png")]
    output: PathBuf,
}

/// How often the host reports progress while the worker renders.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

fn load_scene(path: Option<&Path>, aspect_ratio: f64) -> Result<Scene> {
    let description = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read scene file {}", path.display()))?;
            serde_json::from_str::<SceneDescription>(&text)
                .with_context(|| format!("Failed to parse scene file {}", path.display()))?
        }
        None => SceneDescription::default(),
    };

    let scene = description.build(aspect_ratio).context("Invalid scene")?;
    log::info!("Scene has {} objects", scene.objects().len());
    Ok(scene)
}

/// Render on a background worker while this thread watches progress.
fn render_in_background(scene: Scene, args: &Args, config: RenderConfig) -> Result<PixelBuffer> {
    let total = args.width as usize * args.height as usize;
    let mut handle = spawn_render(Arc::new(scene), args.width, args.height, config)?;

    while !handle.is_done() {
        let ready = handle.wait_for_progress(PROGRESS_INTERVAL);
        log::debug!("{}/{} pixels ready", ready, total);
    }

    Ok(handle.finish()?)
}

/// Convert a frame to an image with a top-left origin.
fn to_image(buffer: &PixelBuffer) -> RgbImage {
    let height = buffer.height;
    RgbImage::from_fn(buffer.width, height, |x, y| {
        let color = buffer.get(x, height - 1 - y).unwrap_or(Color::ZERO);
        Rgb(color_to_rgb(color))
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Width: {}; Height: {}", args.width, args.height);

    let aspect_ratio = args.height as f64 / args.width as f64;
    let scene = load_scene(args.scene.as_deref(), aspect_ratio)?;
    let config = RenderConfig::default().with_antialias(!args.no_antialias);

    let start = Instant::now();
    let buffer = if args.parallel {
        render_parallel(&scene, args.width, args.height, &config)?
    } else {
        render_in_background(scene, &args, config)?
    };
    log::info!("Rendered {} pixels in {:?}", buffer.len(), start.elapsed());

    to_image(&buffer)
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
