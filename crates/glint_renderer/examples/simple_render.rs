//! Simple ray tracer example.
//!
//! Renders the built-in room scene and saves it in PPM format.

use glint_renderer::{color_to_rgb, render, PixelBuffer, RenderConfig, SceneDescription};
use std::fs::File;
use std::io::{BufWriter, Write};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 200;

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let scene = SceneDescription::default()
        .build(HEIGHT as f64 / WIDTH as f64)
        .expect("Built-in scene is valid");
    println!("Scene has {} objects", scene.objects().len());

    let config = RenderConfig::default();
    println!(
        "Rendering {}x{} @ {} spp...",
        WIDTH,
        HEIGHT,
        config.samples_per_pixel()
    );

    let start = std::time::Instant::now();
    let image = render(&scene, WIDTH, HEIGHT, &config).expect("Non-empty frame");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(image: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    // PPM rows run top to bottom, the buffer's run bottom to top
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let color = image.get(x, y).unwrap_or_default();
            let [r, g, b] = color_to_rgb(color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
