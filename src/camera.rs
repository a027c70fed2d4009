//! Camera for ray generation and scene rendering

use glam::Vec3A;
use image::imageops::flip_vertical_in_place;
use image::RgbaImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::environment::EnvironmentMap;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::{Tracer, MAX_DEPTH};
use crate::vector::normalized;

/// Pinhole camera looking down -Z.
///
/// One primary ray per pixel through the pixel center.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Field of view in radians, measured across the image height
    pub fov: f32,
    /// Maximum recursion depth passed to the tracer
    pub max_depth: u32,
    /// Camera position in world space
    pub center: Vec3A,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 1920x1080 image, fov 1.05 rad, recursion depth 4, at the origin.
    pub fn new() -> Self {
        Self {
            image_width: 1920,
            image_height: 1080,
            fov: 1.05,
            max_depth: MAX_DEPTH,
            center: Vec3A::ZERO,
        }
    }

    /// Renders the scene.
    ///
    /// Pixels are independent, so they are traced in parallel with Rayon. The
    /// returned image has row 0 at the top of the view.
    pub fn render(&self, scene: &Scene, environment: &EnvironmentMap) -> RgbaImage {
        let tracer = Tracer::new(scene, environment).with_max_depth(self.max_depth);
        let mut image = RgbaImage::new(self.image_width, self.image_height);

        info!("Generating image using {} CPU cores...", rayon::current_num_threads());
        debug!(
            "Scene: {} spheres, {} lights, floor {}",
            scene.spheres.len(),
            scene.lights.len(),
            if scene.floor.is_some() { "on" } else { "off" }
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            pb.set_style(style);
        }

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            *pixel = tracer.cast_ray(&self.get_ray(i, j), 0);
            pb.inc(1);
        });

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        // Rays were generated with +y up, image rows run top to bottom
        flip_vertical_in_place(&mut image);
        image
    }

    /// Primary ray through the center of pixel (i, j), with j counted from the
    /// bottom of the view.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let direction = Vec3A::new(
            i as f32 + 0.5 - width / 2.0,
            j as f32 + 0.5 - height / 2.0,
            -height / (2.0 * (self.fov / 2.0).tan()),
        );
        Ray::new(self.center, normalized(direction))
    }
}
