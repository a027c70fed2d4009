//! TinyTrace ray tracer
//!
//! Renders analytic spheres and a checkerboard floor with Phong lighting,
//! hard shadows, recursive reflection and refraction, and an
//! environment-mapped background. One ray per pixel, traced on the CPU.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod ray;
pub mod interval;
pub mod material;
pub mod hittable;
pub mod sphere;
pub mod scene;
pub mod environment;
pub mod tracer;
pub mod camera;
pub mod output;
