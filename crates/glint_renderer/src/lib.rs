//! Glint Renderer - recursive Phong ray tracing of sphere scenes.
//!
//! Primary rays come from an axis-aligned pinhole camera, hit the closest
//! sphere, are shaded with ambient, diffuse and specular terms from one
//! point light, and follow mirror reflections up to [`MAX_DEPTH`] levels.
//! Frames are produced in raster order, optionally with 3x3 supersampling.
//!
//! # Example
//!
//! ```ignore
//! use glint_renderer::{render, RenderConfig, SceneDescription};
//!
//! let scene = SceneDescription::default().build(100.0 / 200.0)?;
//! let image = render(&scene, 200, 100, &RenderConfig::default())?;
//! assert!(image.is_complete());
//! ```

mod camera;
mod description;
mod hittable;
mod light;
mod material;
mod renderer;
mod scene;
mod sphere;
mod worker;

pub use camera::Camera;
pub use description::{CameraDescription, LightDescription, SceneDescription, SphereDescription};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use light::PointLight;
pub use material::{Color, Surface};
pub use renderer::{
    color_to_rgb, render, render_parallel, render_pixel, render_row, render_rows, PixelBuffer,
    RenderConfig, RenderError, RenderResult, SUPERSAMPLE_OFFSETS,
};
pub use scene::{Scene, SceneError, SceneResult, MAX_DEPTH, REFLECTION_ATTENUATION};
pub use sphere::Sphere;
pub use worker::{spawn_render, RenderHandle};

/// Re-export the math types used in the public API
pub use glint_math::{DVec3, Interval, Ray};
