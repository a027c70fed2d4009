//! Scene description and the scene-wide nearest-hit query.
//!
//! A scene is an ordered list of spheres, a set of point lights and an
//! optional checkerboard floor. Everything is immutable while rendering and
//! shared read-only between worker threads.

use glam::Vec3A;
use crate::ray::Ray;
use crate::hittable::{Hittable, HitRecord};
use crate::interval::Interval;
use crate::material::{Color, Material};
use crate::sphere::Sphere;

/// Hits at or beyond this distance are treated as misses.
pub const FAR_PLANE: f32 = 1000.0;

/// Rays whose |direction.y| is at or below this never hit the floor.
const PLANE_PARALLEL_EPSILON: f32 = 1e-3;

/// Point light source.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Position in world coordinates.
    pub position: Vec3A,
    /// Linear brightness scale (non-negative).
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3A, intensity: f32) -> Self {
        Self { position, intensity }
    }
}

/// Horizontal checkerboard floor, visible only inside a rectangular window.
#[derive(Debug, Clone, Copy)]
pub struct Checkerboard {
    /// Height of the plane (y coordinate).
    pub height: f32,
    /// Visible range along x (exclusive bounds).
    pub x_range: Interval,
    /// Visible range along z (exclusive bounds).
    pub z_range: Interval,
    /// Color of the odd squares.
    pub odd_color: Color,
    /// Color of the even squares.
    pub even_color: Color,
    /// Shading parameters shared by both square colors.
    pub material: Material,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_range: Interval::new(-10.0, 10.0),
            z_range: Interval::new(-30.0, -10.0),
            odd_color: Color::new(76.0, 76.0, 76.0),
            even_color: Color::new(76.0, 51.0, 25.0),
            material: Material::default(),
        }
    }
}

impl Checkerboard {
    /// Color of the square containing `p`.
    ///
    /// Squares are two units wide. Parity is taken from the truncated (not
    /// floored) half-coordinates, with x biased by 1000 so it stays positive
    /// across the visible window.
    pub fn color_at(&self, p: Vec3A) -> Color {
        let parity = ((0.5 * p.x + 1000.0) as i32 + (0.5 * p.z) as i32) % 2;
        if parity > 0 {
            self.odd_color
        } else {
            self.even_color
        }
    }
}

impl Hittable for Checkerboard {
    fn hit(&self, r: &Ray) -> Option<HitRecord> {
        if r.direction.y.abs() <= PLANE_PARALLEL_EPSILON {
            return None;
        }

        let t = -(r.origin.y - self.height) / r.direction.y;
        if t <= 0.0 {
            return None;
        }

        let p = r.at(t);
        if !self.x_range.surrounds(p.x) || !self.z_range.surrounds(p.z) {
            return None;
        }

        Some(HitRecord {
            t,
            p,
            normal: Vec3A::Y,
            material: Material {
                diffuse_color: self.color_at(p),
                ..self.material
            },
        })
    }
}

/// Collection of primitives and lights forming a scene.
///
/// Uses linear search for intersection testing.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Spheres in declaration order; earlier spheres win distance ties.
    pub spheres: Vec<Sphere>,
    /// Point lights.
    pub lights: Vec<Light>,
    /// Optional checkerboard floor.
    pub floor: Option<Checkerboard>,
}

impl Scene {
    /// Create a scene with the standard checkerboard floor.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self {
            spheres,
            lights,
            floor: Some(Checkerboard::default()),
        }
    }

    /// Remove the floor from the scene.
    pub fn without_floor(mut self) -> Self {
        self.floor = None;
        self
    }

    /// The demo scene: four spheres in ivory, glass, red rubber and mirror,
    /// lit by three point lights.
    pub fn demo() -> Self {
        let spheres = vec![
            Sphere::new(Vec3A::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()),
            Sphere::new(Vec3A::new(-1.0, -1.5, -12.0), 2.0, Material::glass()),
            Sphere::new(Vec3A::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()),
            Sphere::new(Vec3A::new(4.0, -2.0, -13.0), 1.0, Material::mirror()),
        ];

        let lights = vec![
            Light::new(Vec3A::new(-20.0, 20.0, 20.0), 1.5),
            Light::new(Vec3A::new(30.0, 50.0, -25.0), 1.8),
            Light::new(Vec3A::new(30.0, 20.0, 30.0), 1.7),
        ];

        Self::new(spheres, lights)
    }

    /// Find the nearest surface hit by `r`, if any.
    ///
    /// A later primitive only replaces the current nearest hit when it is
    /// strictly closer, and the floor is tested after every sphere. Hits at
    /// [`FAR_PLANE`] or beyond are discarded.
    pub fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        let mut nearest: Option<HitRecord> = None;

        let candidates = self
            .spheres
            .iter()
            .map(|sphere| sphere as &dyn Hittable)
            .chain(self.floor.iter().map(|floor| floor as &dyn Hittable));

        for object in candidates {
            if let Some(rec) = object.hit(r) {
                if nearest.map_or(true, |best| rec.t < best.t) {
                    nearest = Some(rec);
                }
            }
        }

        nearest.filter(|rec| rec.t < FAR_PLANE)
    }
}
