//! Vector helpers for the shading pipeline.
//!
//! Dot products, lengths and distances come straight from [`glam::Vec3A`]; this
//! module adds the guarded normalization and the two optics laws (reflection and
//! Snell refraction) the tracer builds secondary rays with.

use glam::Vec3A;
use crate::interval::Interval;

/// Direction returned by [`refract`] on total internal reflection.
///
/// This is not a physical direction. The tracer follows it like any other
/// refraction ray, which reproduces the reference renders bit for bit.
pub const TIR_SENTINEL: Vec3A = Vec3A::X;

/// Cosine range accepted by [`refract`].
const COSINE_RANGE: Interval = Interval { min: -1.0, max: 1.0 };

/// Normalize `v`, leaving it unchanged when it has no usable length.
///
/// Zero-length (or non-finite) vectors have no direction, so instead of
/// producing NaNs they are passed through as is.
pub fn normalized(v: Vec3A) -> Vec3A {
    v.try_normalize().unwrap_or(v)
}

/// Mirror `incident` about the plane with unit normal `normal`.
pub fn reflect(incident: Vec3A, normal: Vec3A) -> Vec3A {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract `incident` through a surface using Snell's law.
///
/// `eta_t` is the refractive index on the far side of the surface and `eta_i`
/// the one the ray travels in (1.0 for air). When the ray hits the surface
/// from inside (`dot(incident, normal) > 0`) the normal is flipped and the two
/// indices swap, so callers always pass the outward normal.
///
/// Returns [`TIR_SENTINEL`] when total internal reflection occurs.
pub fn refract(incident: Vec3A, normal: Vec3A, eta_t: f32, eta_i: f32) -> Vec3A {
    let cosi = -COSINE_RANGE.clamp(incident.dot(normal));
    if cosi < 0.0 {
        // Leaving the medium
        return refract(incident, -normal, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        TIR_SENTINEL
    } else {
        incident * eta + normal * (eta * cosi - k.sqrt())
    }
}
