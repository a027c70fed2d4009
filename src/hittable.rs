//! Ray-object intersection system.
//!
//! Defines the Hittable trait for scene primitives and HitRecord for
//! storing intersection data.

use glam::Vec3A;
use crate::ray::Ray;
use crate::material::Material;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and the material
/// resolved at the hit point.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Outward surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Material of the object at the hit point
    pub material: Material,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) since pixels are shaded in parallel
/// against the same scene.
pub trait Hittable: Sync + Send {
    /// Nearest intersection of `r` with this object in front of its origin.
    ///
    /// `r.direction` must be a unit vector.
    fn hit(&self, r: &Ray) -> Option<HitRecord>;
}
