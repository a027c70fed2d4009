//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::Vec3A;

/// Distance secondary ray origins are pushed off the surface they start on.
///
/// Without it a reflection, refraction or shadow ray can hit the very surface
/// it was spawned from (shadow acne).
pub const SURFACE_OFFSET: f32 = 1e-3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a point just off a surface
    /// for secondary rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Intersection routines expect a unit vector: `t` is then the distance
    /// travelled along the ray.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Create a secondary ray leaving the surface at `point`.
    ///
    /// The origin is offset by [`SURFACE_OFFSET`] along `normal`, towards the
    /// side of the surface `direction` points into.
    pub fn offset_from_surface(point: Vec3A, normal: Vec3A, direction: Vec3A) -> Self {
        let origin = if direction.dot(normal) < 0.0 {
            point - normal * SURFACE_OFFSET
        } else {
            point + normal * SURFACE_OFFSET
        };
        Self::new(origin, direction)
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
