//! Recursive Whitted-style shading.
//!
//! Every surface hit spawns one reflection and one refraction ray and gathers
//! direct Phong lighting from each unoccluded point light. Rays that escape the
//! scene, or exceed the recursion limit, pick up the environment map.

use glam::Vec3A;
use image::Rgba;

use crate::environment::EnvironmentMap;
use crate::hittable::HitRecord;
use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{normalized, reflect, refract};

/// Deepest recursion level that is still shaded; deeper rays see the background.
pub const MAX_DEPTH: u32 = 4;

/// Accumulated direct lighting at a surface point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightIntensity {
    /// Lambertian term summed over visible lights.
    pub diffuse: f32,
    /// Phong highlight term summed over visible lights.
    pub specular: f32,
}

/// Shades rays against a scene and its environment map.
///
/// Holds only shared references, so one tracer can be used from every render
/// thread at once.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    environment: &'a EnvironmentMap,
    max_depth: u32,
}

impl<'a> Tracer<'a> {
    /// Create a tracer recursing up to [`MAX_DEPTH`].
    pub fn new(scene: &'a Scene, environment: &'a EnvironmentMap) -> Self {
        Self {
            scene,
            environment,
            max_depth: MAX_DEPTH,
        }
    }

    /// Override the recursion limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Color seen along `r`, which must have a unit direction.
    ///
    /// `depth` is 0 for primary rays and grows by one per bounce. Each hit
    /// recurses twice (reflection and refraction) whatever the material
    /// weights are, so a primary ray costs at most `2^(max_depth + 2) - 1`
    /// calls.
    pub fn cast_ray(&self, r: &Ray, depth: u32) -> Rgba<u8> {
        if depth > self.max_depth {
            return self.environment.sample(r.direction);
        }
        let Some(rec) = self.scene.intersect(r) else {
            return self.environment.sample(r.direction);
        };

        let material = rec.material;
        let reflect_dir = normalized(reflect(r.direction, rec.normal));
        let refract_dir = normalized(refract(r.direction, rec.normal, material.refraction_index, 1.0));
        let reflect_color = to_color(self.cast_ray(&Ray::offset_from_surface(rec.p, rec.normal, reflect_dir), depth + 1));
        let refract_color = to_color(self.cast_ray(&Ray::offset_from_surface(rec.p, rec.normal, refract_dir), depth + 1));

        let light = self.light_intensities(r, &rec);
        let albedo = material.albedo;
        let color = material.diffuse_color * light.diffuse * albedo.x
            + Color::splat(255.0 * light.specular * albedo.y)
            + reflect_color * albedo.z
            + refract_color * albedo.w;

        to_rgba(color)
    }

    /// Direct diffuse and specular lighting at `rec` as seen along `r`.
    ///
    /// A light is skipped when a shadow ray towards it hits anything closer
    /// than the light itself.
    pub fn light_intensities(&self, r: &Ray, rec: &HitRecord) -> LightIntensity {
        let mut total = LightIntensity::default();

        for light in &self.scene.lights {
            let light_dir = normalized(light.position - rec.p);
            let light_distance = rec.p.distance(light.position);

            let shadow_ray = Ray::offset_from_surface(rec.p, rec.normal, light_dir);
            if let Some(blocker) = self.scene.intersect(&shadow_ray) {
                if blocker.p.distance(shadow_ray.origin) < light_distance {
                    continue;
                }
            }

            total.diffuse += light.intensity * light_dir.dot(rec.normal).max(0.0);
            let highlight = (-reflect(-light_dir, rec.normal)).dot(r.direction).max(0.0);
            total.specular += highlight.powf(rec.material.specular_exponent) * light.intensity;
        }

        total
    }
}

fn to_color(pixel: Rgba<u8>) -> Color {
    Vec3A::new(pixel[0] as f32, pixel[1] as f32, pixel[2] as f32)
}

/// Clamp to 255 and truncate each channel, fully opaque.
fn to_rgba(color: Color) -> Rgba<u8> {
    let c = color.min(Color::splat(255.0));
    Rgba([c.x as u8, c.y as u8, c.z as u8, 255])
}
