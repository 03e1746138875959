//! Frame rendering.
//!
//! Turns a [`Scene`] into a [`PixelBuffer`] in raster order:
//! - One primary ray per pixel, or a 3x3 supersampling grid when
//!   antialiasing is enabled
//! - Colors clamped to [0, 255] once per pixel
//! - Serial, streaming (row callback) and rayon row-parallel variants that
//!   all produce identical buffers

use crate::{Color, Scene};
use glint_math::{clamp_channels, Interval};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use thiserror::Error;

/// Sub-pixel offsets of the supersampling grid, in pixels.
pub const SUPERSAMPLE_OFFSETS: [f64; 3] = [-0.3, 0.0, 0.3];

/// Errors that can occur while rendering a frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Cannot render an empty {width}x{height} frame")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Failed to start render worker: {0}")]
    WorkerSpawn(String),

    #[error("Render worker panicked")]
    WorkerPanicked,
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Average a 3x3 grid of samples per pixel instead of a single sample
    pub antialias: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { antialias: true }
    }
}

impl RenderConfig {
    /// Enable or disable 3x3 supersampling.
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Number of primary rays traced per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        if self.antialias {
            (SUPERSAMPLE_OFFSETS.len() * SUPERSAMPLE_OFFSETS.len()) as u32
        } else {
            1
        }
    }
}

/// Color buffer filled in raster order: rows from y = 0 upwards, each row
/// from x = 0 rightwards.
///
/// y = 0 is the bottom row of the image. Consumers with a top-left origin
/// must flip vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create an empty buffer with room for a `width` x `height` frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: Vec::with_capacity(width as usize * height as usize),
        }
    }

    /// Append a pixel.
    pub fn push(&mut self, color: Color) {
        debug_assert!(!self.is_complete(), "pixel buffer overflow");
        self.pixels.push(color);
    }

    /// Append a finished row.
    pub fn extend_row(&mut self, row: &[Color]) {
        debug_assert_eq!(row.len(), self.width as usize);
        self.pixels.extend_from_slice(row);
    }

    /// Number of pixels written so far.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// True once every pixel of the frame has been written.
    pub fn is_complete(&self) -> bool {
        self.pixels.len() == self.width as usize * self.height as usize
    }

    /// Pixels written so far, in raster order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Get the pixel at (x, y), if it has been written.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Convert a color to 8-bit RGB. Channels are clamped to [0, 255] first.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = clamp_channels(color, Interval::COLOR);
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Render a single pixel and clamp it to [0, 255].
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let camera = scene.camera();
    let (x, y) = (x as f64, y as f64);

    let color = if config.antialias {
        let mut sum = Color::ZERO;
        for dx in SUPERSAMPLE_OFFSETS {
            for dy in SUPERSAMPLE_OFFSETS {
                let ray = camera.get_ray(x + dx, y + dy, width, height);
                sum += scene.shade(&ray, 1);
            }
        }
        sum / config.samples_per_pixel() as f64
    } else {
        let ray = camera.get_ray(x, y, width, height);
        scene.shade(&ray, 1)
    };

    clamp_channels(color, Interval::COLOR)
}

/// Render scanline `y`.
pub fn render_row(
    scene: &Scene,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Vec<Color> {
    (0..width)
        .map(|x| render_pixel(scene, x, y, width, height, config))
        .collect()
}

fn check_frame(width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyFrame { width, height });
    }
    Ok(())
}

fn report_progress(rows_done: u32, height: u32) {
    let percent = rows_done as f64 * 100.0 / height as f64;
    log::debug!("Progress: {:.1}%", percent);

    // Coarser updates at every 10%
    if rows_done * 10 / height != (rows_done - 1) * 10 / height {
        log::info!("Rendered {}/{} rows ({:.0}%)", rows_done, height, percent);
    }
}

/// Render the scene row by row, handing each finished scanline to `on_row`
/// in raster order.
pub fn render_rows<F>(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
    mut on_row: F,
) -> RenderResult<()>
where
    F: FnMut(u32, Vec<Color>),
{
    check_frame(width, height)?;

    for y in 0..height {
        on_row(y, render_row(scene, y, width, height, config));
        report_progress(y + 1, height);
    }

    Ok(())
}

/// Render the entire scene to a pixel buffer.
///
/// Single-threaded; the result depends only on the arguments.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<PixelBuffer> {
    log::info!(
        "Rendering {}x{} @ {} spp",
        width,
        height,
        config.samples_per_pixel()
    );

    let mut image = PixelBuffer::new(width, height);
    render_rows(scene, width, height, config, |_, row| image.extend_row(&row))?;
    Ok(image)
}

/// Render the entire scene with rows distributed over the rayon thread pool.
///
/// Produces the same buffer as [`render`].
pub fn render_parallel(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<PixelBuffer> {
    check_frame(width, height)?;
    log::info!(
        "Rendering {}x{} @ {} spp on {} threads",
        width,
        height,
        config.samples_per_pixel(),
        rayon::current_num_threads()
    );

    let rows_done = AtomicU32::new(0);
    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let row = render_row(scene, y, width, height, config);
            report_progress(rows_done.fetch_add(1, Ordering::Relaxed) + 1, height);
            row
        })
        .collect();

    let mut image = PixelBuffer::new(width, height);
    for row in &rows {
        image.extend_row(row);
    }
    Ok(image)
}
