//! Actual renderer leveraging the constructs defined in the rayshade library.

use std::{path::Path, time::Instant};

use super::prelude::*;

#[derive(Debug, thiserror::Error)]
/// Rendering error.
pub enum Error {
    #[error("Failed to write image: {0}")]
    /// Output could not be written.
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Per-render settings.
pub struct RenderOptions {
    /// Reflection bounces allowed for each primary ray.
    pub max_depth: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

/// Render engine.
pub struct Engine {
    image: Image<Color>,
    camera: Camera,
    world: World<Built>,
    options: RenderOptions,
}

impl Engine {
    /// Create an engine with a frame buffer sized after `camera`.
    pub fn new(camera: Camera, world: World<Built>, options: RenderOptions) -> Self {
        let (width, height) = camera.size();

        Self {
            image: Image::new(width, height, Color::BLACK),
            camera,
            world,
            options,
        }
    }

    #[allow(missing_docs)]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[allow(missing_docs)]
    pub fn world(&self) -> &World<Built> {
        &self.world
    }

    /// Last rendered frame.
    pub fn image(&self) -> &Image<Color> {
        &self.image
    }

    /// Render a frame to the inner 1-frame buffer.
    pub fn render(&mut self) -> &Image<Color> {
        let (width, height) = self.camera.size();
        let start = Instant::now();

        let mut step = 0;
        for y in 0..height {
            let new_step = ((y as f32 / height as f32) * 100.) as u32 / 10;
            if new_step > step {
                step = new_step;
                log::info!("{}%", step * 10);
            }

            for x in 0..width {
                let ray = self.camera.ray_for_pixel(x, y);
                let color = ray_color(&ray, &self.world, self.options.max_depth);
                self.image.set(x, y, color);
            }
        }

        log::debug!(
            "Rendered {}x{} pixels at depth {} in {:?}",
            width,
            height,
            self.options.max_depth,
            start.elapsed()
        );

        &self.image
    }

    /// Use [render](Self::render) to render a frame and save the result as a file to a given path,
    /// creating any missing directories on the way.
    pub fn render_to_path(&mut self, path: &Path) -> Result<&Image<Color>, Error> {
        self.render();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.image.save_as_ppm(path)?;
        log::info!("Saved render to {}", path.display());

        Ok(&self.image)
    }
}
