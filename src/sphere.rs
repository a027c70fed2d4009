//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection geometrically: the sphere center is
//! projected onto the ray and the chord half-length recovered from the
//! perpendicular distance.

use glam::Vec3A;
use crate::ray::Ray;
use crate::hittable::{Hittable, HitRecord};
use crate::material::Material;
use crate::vector::normalized;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (strictly positive).
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    /// Distance along `r` to the nearest intersection in front of its origin.
    ///
    /// Prefers the near root; when the origin is inside the sphere the far
    /// root is used instead. `r.direction` must be a unit vector.
    pub fn ray_intersect(&self, r: &Ray) -> Option<f32> {
        let l = self.center - r.origin;
        let tca = l.dot(r.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let near = tca - thc;
        let t = if near < 0.0 { tca + thc } else { near };
        if t < 0.0 {
            return None;
        }
        Some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        let t = self.ray_intersect(r)?;
        let p = r.at(t);
        Some(HitRecord {
            t,
            p,
            normal: normalized(p - self.center),
            material: self.material,
        })
    }
}
