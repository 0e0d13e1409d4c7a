//! Math primitives for the lumen path tracer.
//!
//! Vectors come from glam in double precision; this crate adds the few
//! helpers a ray tracer needs on top of them, plus intervals, rays and
//! the random sampling routines shared by the camera and materials.

// Re-export glam's double precision types for convenience
pub use glam::{dvec3, DVec3};

mod interval;
mod ray;
mod vec3;
pub mod sampling;

pub use interval::Interval;
pub use ray::Ray;
pub use vec3::{Vec3Ext, NEAR_ZERO_EPSILON};

/// A point, direction or color in 3-space.
pub type Vec3 = DVec3;

/// A point in 3-space.
pub type Point3 = Vec3;
