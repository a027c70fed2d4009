//! Panoramic background sampled by rays that escape the scene.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3A;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, Rgba, RgbaImage};
use log::debug;

/// Equirectangular environment map.
///
/// Longitude runs along the image width (`atan2(z, x)`), colatitude along the
/// height with +Y at the top row.
#[derive(Debug, Clone)]
pub struct EnvironmentMap {
    image: RgbaImage,
}

impl EnvironmentMap {
    /// Wrap an already decoded image. The image must not be empty.
    pub fn from_image(image: RgbaImage) -> Self {
        debug_assert!(image.width() > 0 && image.height() > 0, "environment map must not be empty");
        Self { image }
    }

    /// Decode an environment map from any format the `image` crate understands.
    ///
    /// Empty images are rejected with a dimension error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let image = image::open(path.as_ref())?.into_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return Err(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )));
        }
        debug!(
            "Loaded environment map {} ({}x{})",
            path.as_ref().display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(image))
    }

    /// A map of a single color.
    pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self::from_image(RgbaImage::from_pixel(width.max(1), height.max(1), color))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Texel seen in direction `dir` (unit vector).
    pub fn sample(&self, dir: Vec3A) -> Rgba<u8> {
        let (width, height) = (self.width() as f32, self.height() as f32);
        let u = (dir.z.atan2(dir.x) / (2.0 * PI) + 0.5) * width;
        let v = dir.y.clamp(-1.0, 1.0).acos() / PI * height;

        // Truncation toward zero; NaN maps to 0
        let x = (u as i64).clamp(0, self.width() as i64 - 1) as u32;
        let y = (v as i64).clamp(0, self.height() as i64 - 1) as u32;
        *self.image.get_pixel(x, y)
    }
}
