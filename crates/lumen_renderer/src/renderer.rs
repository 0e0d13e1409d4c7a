//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a maximum depth
//! - Anti-aliasing via multi-sampling
//! - Parallel bucket rendering with one deterministic random stream per pixel

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Background, Camera, Color, Framebuffer, HitRecord, Hittable, Ray, RenderError};
use lumen_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

/// Lower bound for hit parameters. Ignoring hits closer than this keeps
/// a scattered ray from re-hitting the surface it just left ("shadow acne").
pub const T_MIN: f64 = 0.001;

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in each surface's
/// attenuation. `depth` is the remaining bounce budget; at zero the path
/// contributes no light.
pub fn trace(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    background: &Background,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    if !world.hit(ray, Interval::new(T_MIN, f64::INFINITY), &mut rec) {
        return background.radiance(ray);
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * trace(&result.scattered, world, depth - 1, background, rng)
        }
        // Absorbed
        None => Color::ZERO,
    }
}

/// Render a single pixel with multi-sampling.
///
/// Returns the average of `samples_per_pixel` traced samples, unclamped.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel() {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += trace(&ray, world, camera.max_depth(), camera.background(), rng);
    }

    pixel_color / camera.samples_per_pixel() as f64
}

/// Derive the seed of a pixel's random stream from the camera seed.
///
/// Uses the splitmix64 finalizer so neighbouring pixels get unrelated
/// streams.
pub fn pixel_seed(seed: u64, x: u32, y: u32) -> u64 {
    let index = ((y as u64) << 32) | x as u64;
    let mut z = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Render the entire scene to a new framebuffer.
///
/// Each pixel draws from its own `StdRng` seeded by [`pixel_seed`], so the
/// result depends only on the camera and the scene, not on scheduling.
pub fn render(camera: &Camera, world: &dyn Hittable) -> Framebuffer {
    let mut image = Framebuffer::new(camera.image_width(), camera.image_height());
    render_buckets(camera, world, &mut image, &seeded_stream(camera.seed()));
    image
}

/// Render into a caller-owned framebuffer of the camera's resolution.
///
/// Every pixel is overwritten. The framebuffer is only written once all
/// buckets have finished, so it never holds a partial frame.
pub fn render_into(
    camera: &Camera,
    world: &dyn Hittable,
    image: &mut Framebuffer,
) -> Result<(), RenderError> {
    check_size(camera, image)?;
    render_buckets(camera, world, image, &seeded_stream(camera.seed()));
    Ok(())
}

/// Render with a caller-supplied random stream per pixel.
///
/// `rng_for_pixel(x, y)` is called once per pixel on a worker thread.
pub fn render_with<R, F>(camera: &Camera, world: &dyn Hittable, rng_for_pixel: F) -> Framebuffer
where
    R: RngCore,
    F: Fn(u32, u32) -> R + Sync,
{
    let mut image = Framebuffer::new(camera.image_width(), camera.image_height());
    render_buckets(camera, world, &mut image, &rng_for_pixel);
    image
}

fn seeded_stream(seed: u64) -> impl Fn(u32, u32) -> StdRng + Sync {
    move |x, y| StdRng::seed_from_u64(pixel_seed(seed, x, y))
}

fn check_size(camera: &Camera, image: &Framebuffer) -> Result<(), RenderError> {
    if image.width() != camera.image_width() || image.height() != camera.image_height() {
        return Err(RenderError::FramebufferSizeMismatch {
            expected_width: camera.image_width(),
            expected_height: camera.image_height(),
            actual_width: image.width(),
            actual_height: image.height(),
        });
    }
    Ok(())
}

fn render_buckets<R, F>(camera: &Camera, world: &dyn Hittable, image: &mut Framebuffer, rng_for_pixel: &F)
where
    R: RngCore,
    F: Fn(u32, u32) -> R + Sync,
{
    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width(), camera.image_height(), DEFAULT_BUCKET_SIZE);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} buckets",
        camera.image_width(),
        camera.image_height(),
        camera.samples_per_pixel(),
        camera.max_depth(),
        buckets.len()
    );

    // Buckets share only immutable state; results are joined before any
    // framebuffer write.
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, world, rng_for_pixel)))
        .collect();

    for result in results {
        let bucket = result.bucket;
        for (i, color) in result.pixels.into_iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            image.set(bucket.x + local_x, bucket.y + local_y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
}
