//! Shared fixtures for the rendering integration tests

#![allow(dead_code)]

use glam::Vec3A;
use image::{Rgba, RgbaImage};
use tinytrace::environment::EnvironmentMap;
use tinytrace::material::Material;
use tinytrace::scene::{Light, Scene};
use tinytrace::sphere::Sphere;

/// Environment map where every texel is distinct, so a sample identifies
/// the direction it came from.
pub fn gradient_env() -> EnvironmentMap {
    EnvironmentMap::from_image(RgbaImage::from_fn(64, 32, |x, y| {
        Rgba([(x * 4) as u8, (y * 8) as u8, 255 - (x * 2) as u8, 255])
    }))
}

/// One ivory sphere and one light, plus the checkerboard floor.
pub fn ivory_scene() -> Scene {
    Scene::new(
        vec![Sphere::new(Vec3A::new(-3.0, 0.0, -16.0), 2.0, Material::ivory())],
        vec![Light::new(Vec3A::new(-20.0, 20.0, 20.0), 1.5)],
    )
}
