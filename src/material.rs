//! Surface materials for Phong-style shading.
//!
//! A material blends four contributions (diffuse, specular, reflection and
//! refraction) using the weights stored in its `albedo`. The weights are not
//! energy conserving and need not sum to one.

use glam::{Vec3A, Vec4};

/// RGB color with channels on the 0-255 scale.
pub type Color = Vec3A;

/// Material properties of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Index of refraction (1.0 = no bending, 1.5 = glass).
    pub refraction_index: f32,
    /// Weights of the diffuse, specular, reflected and refracted terms (x, y, z, w).
    pub albedo: Vec4,
    /// Base color lit by the diffuse term.
    pub diffuse_color: Color,
    /// Phong shininess exponent.
    pub specular_exponent: f32,
}

impl Default for Material {
    /// Purely diffuse black surface.
    fn default() -> Self {
        Self {
            refraction_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a material from its four parameters.
    pub fn new(refraction_index: f32, albedo: Vec4, diffuse_color: Color, specular_exponent: f32) -> Self {
        Self {
            refraction_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Off-white, mostly diffuse with a soft highlight.
    pub fn ivory() -> Self {
        Self::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Color::new(102.0, 102.0, 102.0), 50.0)
    }

    /// Dark red matte surface.
    pub fn red_rubber() -> Self {
        Self::new(1.0, Vec4::new(0.9, 0.1, 0.0, 0.0), Color::new(76.0, 25.0, 25.0), 10.0)
    }

    /// Near-perfect mirror with a very tight highlight.
    pub fn mirror() -> Self {
        Self::new(1.0, Vec4::new(0.0, 10.0, 0.8, 0.0), Color::splat(255.0), 1425.0)
    }

    /// Tinted transparent glass.
    pub fn glass() -> Self {
        Self::new(1.5, Vec4::new(0.0, 0.5, 0.1, 0.8), Color::new(51.0, 178.0, 204.0), 125.0)
    }
}
