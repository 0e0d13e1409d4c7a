//! lumen renderer - CPU path tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse, metal and
//! glass surfaces. Scenes are built from `Sphere`s collected in a
//! `HittableList`; a `Camera` built from `CameraSettings` renders
//! them in parallel buckets into a `Framebuffer`.
//!
//! ```ignore
//! use lumen_renderer::{CameraSettings, HittableList, Lambertian, Sphere, Color, Vec3, render};
//!
//! let mut world = HittableList::new();
//! world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Lambertian::new(Color::splat(0.5)))));
//!
//! let camera = CameraSettings::default().with_resolution(400, 225).build()?;
//! let image = render(&camera, &world);
//! ```

mod bucket;
mod camera;
mod error;
mod framebuffer;
mod hittable;
mod material;
mod renderer;
mod sphere;

pub use bucket::{generate_buckets, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::{Background, Camera, CameraSettings};
pub use error::{CameraError, RenderError};
pub use framebuffer::{color_to_rgba, linear_to_gamma, Framebuffer};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{reflect, refract, Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{pixel_seed, render, render_into, render_pixel, render_with, trace, T_MIN};
pub use sphere::Sphere;

/// Re-export the math types the public API is built on
pub use lumen_math::{Interval, Point3, Ray, Vec3, Vec3Ext};
